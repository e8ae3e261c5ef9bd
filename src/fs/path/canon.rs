use super::PathError;

/// Lexically canonicalizes `value`, returning the result as a new string.
///
/// Components are processed left to right: empty components (from repeated or trailing slashes)
/// and `.` are dropped, `..` drops the last kept component, and everything else is kept. A `..`
/// with nothing left to drop is discarded, so backing up past the root stays at the root.
///
/// The result always starts with a single `/` and never ends with one, except for the root itself.
/// Input without a leading slash is treated as rooted. The empty string is the one exception: it
/// stays empty, which keeps it distinct from `/`.
///
/// Failure is only possible if the output buffer can't be allocated.
pub fn canonicalize_str(value: &str) -> Result<String, PathError> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let mut kept: Vec<&str> = Vec::new();
    kept.try_reserve(value.bytes().filter(|b| *b == b'/').count() + 1)?;

    for component in value.split('/') {
        match component {
            "" | "." => (),
            ".." => {
                kept.pop();
            },
            other => kept.push(other),
        }
    }

    // Never longer than the input plus a leading slash.
    let mut canonical = String::new();
    canonical.try_reserve(value.len() + 1)?;

    if kept.is_empty() {
        canonical.push('/');
    }
    for component in kept {
        canonical.push('/');
        canonical.push_str(component);
    }

    Ok(canonical)
}
