#[derive(Debug, Clone, Copy)]
enum Seq {
    Slash,
    SlashDot,
    SlashDotDot,
    Other,
}

/// Returns true if `value` is already in the form produced by
/// [`canonicalize_str`](super::canonicalize_str): either empty, or a leading `/` followed by
/// slash-separated components that are neither empty, `.` nor `..`, with no trailing `/` unless the
/// whole path is the root.
pub fn is_canonical(value: &str) -> bool {
    let mut bytes = value.bytes();

    match bytes.next() {
        None => return true,
        Some(b'/') => (),
        Some(_) => return false,
    }
    let mut last_seq = Seq::Slash;

    for ch in bytes {
        last_seq = match (ch, last_seq) {
            (b'/', Seq::Other)    => Seq::Slash,
            (b'/', _)             => return false,
            (b'.', Seq::Slash)    => Seq::SlashDot,
            (b'.', Seq::SlashDot) => Seq::SlashDotDot,
            (_, _)                => Seq::Other,
        };
    }

    match last_seq {
        Seq::Slash                       => value.len() == 1,
        Seq::SlashDot | Seq::SlashDotDot => false,
        Seq::Other                       => true,
    }
}
