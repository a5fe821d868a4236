use std::path::{Component, Path, PathBuf};

/// Express `file` relative to `base_dir` with forward-slash separators.
///
/// Relative `file` paths are taken relative to `base_dir`. Both paths are
/// normalized lexically (`.` dropped, `..` folded) before comparison, so the
/// filesystem is never touched.
///
/// Returns `None` when the file does not live under `base_dir`, or when it is
/// `base_dir` itself.
///
/// # Examples
///
/// - `("/project", "/project/src/Foo.java")` -> `Some("src/Foo.java")`
/// - `("/project", "src/../lib/Bar.java")` -> `Some("lib/Bar.java")`
/// - `("/project", "/elsewhere/Foo.java")` -> `None`
#[must_use]
pub fn relative_path(base_dir: &Path, file: &Path) -> Option<String> {
    let base = normalize(base_dir);
    let absolute = if file.is_absolute() {
        normalize(file)
    } else {
        normalize(&base_dir.join(file))
    };

    let relative = absolute.strip_prefix(&base).ok()?;
    let joined = to_slash(relative);
    if joined.is_empty() { None } else { Some(joined) }
}

/// Like [`relative_path`], but retries with the canonical form of `file` when
/// the lexical comparison fails.
///
/// `base_dir` is expected to be canonical already; this covers files reached
/// through a symlinked ancestor (`/var` vs `/private/var`).
#[must_use]
pub fn resolve_relative_path(base_dir: &Path, file: &Path) -> Option<String> {
    relative_path(base_dir, file).or_else(|| {
        let location = if file.is_absolute() {
            file.to_path_buf()
        } else {
            base_dir.join(file)
        };
        dunce::canonicalize(location)
            .ok()
            .and_then(|canonical| relative_path(base_dir, &canonical))
    })
}

/// Lexically normalize a path without resolving symlinks.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Render a path with `/` separators regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '\\' {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}
