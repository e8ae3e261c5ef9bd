#![cfg(test)]

use super::*;

fn canonical(value: &str) -> String {
    let mut path = OwnedPath::from(value);
    path.canonicalize().expect("Canonicalizing a short path shouldn't run out of memory.");
    path.into_string()
}

#[test]
fn test_canonicalization() {
    let cases = [
        ("/usr/./local/sbin", "/usr/local/sbin"),
        ("/usr/local/sbin/../..", "/usr"),
        ("/etc/../../../", "/"),
        ("", ""),
        ("/etc/sysconfig/../.././etc/././../usr/local/./bin/../sbin", "/usr/local/sbin"),
        ("/a/b/c/d/e/f/../", "/a/b/c/d/e"),
        ("//usr///local//", "/usr/local"),
        ("/", "/"),
        ("/..", "/"),
        ("usr/local", "/usr/local"),
        ("/.hidden/...", "/.hidden/..."),
    ];

    for (input, expected) in cases {
        assert_eq!(canonical(input), expected, "Unexpected canonical form of {input:?}.");
        assert!(is_canonical(expected), "{expected:?} should be recognized as canonical.");
        assert_eq!(canonical(expected), expected, "Canonicalizing twice should change nothing.");
    }
}

#[test]
fn test_creation() {
    assert_eq!(OwnedPath::from_opt(None), None, "An absent string should produce no path.");

    let path = OwnedPath::from_opt(Some("/some/./path")).expect("A present string should produce a path.");
    assert_eq!(path.as_str(), "/some/./path", "Creation shouldn't canonicalize.");
    assert!(!path.is_canonical());
    assert_eq!(path.len(), 12);

    assert!(OwnedPath::root().is_root());
    assert!(OwnedPath::new(String::new()).is_empty());
    assert!(!OwnedPath::from("/usr").is_root());

    // Dropping a path and then dropping nothing are both fine.
    drop(path);
    drop(OwnedPath::from_opt(None));
}

#[test]
fn test_push_and_pop() {
    let mut path = OwnedPath::from("/var/clockwork/ssl/pending");

    assert!(path.pop());
    assert_eq!(path.as_str(), "/var/clockwork/ssl");
    assert!(path.pop());
    assert_eq!(path.as_str(), "/var/clockwork");
    assert!(path.pop());
    assert_eq!(path.as_str(), "/var");
    assert!(!path.pop(), "Popping the last component should fail.");
    assert_eq!(path.as_str(), "/var", "A failed pop should leave the path unchanged.");
    assert_eq!(path.full(), "/var/clockwork/ssl/pending", "Popping should never discard the buffer.");

    assert!(path.push());
    assert_eq!(path.as_str(), "/var/clockwork");
    assert!(path.push());
    assert_eq!(path.as_str(), "/var/clockwork/ssl");
    assert!(path.push());
    assert_eq!(path.as_str(), "/var/clockwork/ssl/pending");
    assert!(!path.push(), "Pushing a fully visible path should fail.");

    path.pop();
    path.pop();
    path.reset();
    assert_eq!(path.as_str(), "/var/clockwork/ssl/pending");

    let mut root = OwnedPath::root();
    assert!(!root.pop());
    assert!(!root.push());

    let mut empty = OwnedPath::from("");
    assert!(!empty.pop());
    assert!(!empty.push());
}

#[test]
fn test_canonicalize_resets() {
    let mut path = OwnedPath::from("/usr/../etc/ssl/certs");
    path.pop();
    path.pop();
    assert_eq!(path.as_str(), "/usr/../etc");

    path.canonicalize().expect("Canonicalizing a short path shouldn't run out of memory.");
    assert_eq!(path.as_str(), "/etc/ssl/certs", "Canonicalizing should make the whole path visible.");
    assert!(path.is_canonical());
}

#[test]
fn test_components() {
    let mut path = OwnedPath::from("/usr/local/sbin");

    assert_eq!(path.components().collect::<Vec<_>>(), ["usr", "local", "sbin"]);
    assert_eq!(path.components().rev().collect::<Vec<_>>(), ["sbin", "local", "usr"]);
    assert_eq!(path.depth(), 3);

    path.pop();
    assert_eq!(
        path.components().collect::<Vec<_>>(), ["usr", "local"],
        "Components should only cover the visible path."
    );
    assert_eq!(path.depth(), 2);

    let path = OwnedPath::from("/a/b/c");
    let mut components = path.components();
    assert_eq!(components.next(), Some("a"));
    assert_eq!(components.next_back(), Some("c"));
    assert_eq!(components.next(), Some("b"));
    assert_eq!(components.next_back(), None, "Meeting in the middle should exhaust both ends.");
    assert_eq!(components.next(), None);

    assert_eq!(OwnedPath::root().depth(), 0);
    assert_eq!(OwnedPath::from("").depth(), 0);
}

#[test]
fn test_ancestors() {
    let path = OwnedPath::from("/usr/local/sbin");
    assert_eq!(
        path.ancestors().collect::<Vec<_>>(),
        ["/usr", "/usr/local", "/usr/local/sbin"]
    );

    let mut popped = path.clone();
    popped.pop();
    for (ancestor, expected) in path.ancestors().zip(popped.ancestors()) {
        assert_eq!(ancestor, expected, "Popping shouldn't change earlier ancestors.");
    }
    assert_eq!(popped.ancestors().count(), 2);

    assert_eq!(OwnedPath::root().ancestors().collect::<Vec<_>>(), ["/"]);
    assert_eq!(OwnedPath::from("").ancestors().next(), None);
}

#[test]
fn test_validity() {
    for valid in ["", "/", "/usr", "/usr/local", "/...", "/.hidden", "/a..b"] {
        assert!(is_canonical(valid), "{valid:?} should be canonical.");
    }
    for invalid in ["usr", "//", "/usr/", "/usr//local", "/./usr", "/usr/..", "/usr/.", "/../usr"] {
        assert!(!is_canonical(invalid), "{invalid:?} should not be canonical.");
    }
}

#[test]
fn test_display() {
    let mut path = OwnedPath::from("/var/clockwork/ssl");
    path.pop();

    assert_eq!(path.to_string(), "/var/clockwork");
    assert_eq!(path.display().full().to_string(), "/var/clockwork/ssl");
    assert_eq!(path.display().no_lead().to_string(), "var/clockwork");
    assert_eq!(OwnedPath::root().display().no_lead().to_string(), "");
}

#[test]
fn test_errors() {
    let overflow = Vec::<u8>::new()
        .try_reserve(usize::MAX)
        .expect_err("Reserving usize::MAX bytes should fail.");
    let err = PathError::from(overflow);

    assert!(err.is_out_of_memory());
    assert_eq!(err.to_string(), "out of memory while canonicalizing path");
}
