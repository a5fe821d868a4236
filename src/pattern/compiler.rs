/// Translate an Ant-style glob into an anchored regular expression.
///
/// - `**/` matches zero or more whole directories
/// - `**` elsewhere matches any run of characters, separators included
/// - `*` matches any run of characters except `/`
/// - `?` matches exactly one character except `/`
/// - a trailing `/` means "everything below", as if followed by `**`
///
/// Backslashes are treated as separators so Windows-style patterns behave the
/// same as their forward-slash form.
pub(crate) fn glob_to_regex(glob: &str) -> String {
    let mut glob = glob.replace('\\', "/");
    if glob.ends_with('/') {
        glob.push_str("**");
    }

    let chars: Vec<char> = glob.chars().collect();
    let mut regex = String::with_capacity(glob.len() * 2 + 2);
    let mut literal = String::new();
    regex.push('^');

    let mut i = 0;
    while i < chars.len() {
        let token = match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    i += 3;
                    "(?:.*/)?"
                } else {
                    i += 2;
                    ".*"
                }
            }
            '*' => {
                i += 1;
                "[^/]*"
            }
            '?' => {
                i += 1;
                "[^/]"
            }
            c => {
                literal.push(c);
                i += 1;
                continue;
            }
        };
        flush_literal(&mut regex, &mut literal);
        regex.push_str(token);
    }
    flush_literal(&mut regex, &mut literal);

    regex.push('$');
    regex
}

fn flush_literal(regex: &mut String, literal: &mut String) {
    if !literal.is_empty() {
        regex.push_str(&regex::escape(literal));
        literal.clear();
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
