//! Tests over witness decomposition.

crate::prelude!();

use split::{Splits, Witness};

#[test]
fn split_count() {
    let wit = Witness::new("aaaaaaaaaa");
    for p in 1..=10 {
        let count = wit.splits(p).count();
        assert_eq!(count, Splits::total(p));
        assert_eq!(count, p * (p + 1) / 2)
    }
}

#[test]
fn enumeration_order() {
    let wit = Witness::new("abcde");
    let splits: Vec<_> = wit.splits(3).map(|s| (s.x, s.y, s.z)).collect();
    assert_eq!(
        splits,
        vec![
            ("", "a", "bcde"),
            ("", "ab", "cde"),
            ("", "abc", "de"),
            ("a", "b", "cde"),
            ("a", "bc", "de"),
            ("ab", "c", "de"),
        ]
    )
}

#[test]
fn constraints() {
    let wit = Witness::new("aabbab");
    let p = 4;
    for split in wit.splits(p) {
        let x_len = split.x.chars().count();
        let y_len = split.y.chars().count();
        assert!(y_len >= 1);
        assert!(x_len + y_len <= p);
        let glued = format!("{}{}{}", split.x, split.y, split.z);
        assert_eq!(glued, wit.as_str())
    }
}

#[test]
fn pumping() {
    let wit = Witness::new("aabb");
    let split = wit.split(1, 2);
    assert_eq!((split.x, split.y, split.z), ("a", "a", "bb"));
    assert_eq!(split.pumped(0), "abb");
    assert_eq!(split.pumped(1), "aabb");
    assert_eq!(split.pumped(3), "aaaabb")
}

#[test]
fn empty_suffix() {
    let wit = Witness::new("ab");
    let split = wit.split(1, 2);
    assert_eq!((split.x, split.y, split.z), ("a", "b", ""));
    assert_eq!(split.pumped(0), "a");
    assert_eq!(split.pumped(2), "abb")
}

#[test]
fn multi_byte_symbols() {
    let wit = Witness::new("ααββ");
    assert_eq!(wit.len(), 4);
    let split = wit.split(1, 2);
    assert_eq!((split.x, split.y, split.z), ("α", "α", "ββ"));
    assert_eq!(split.pumped(2), "αααββ");
    assert_eq!(wit.splits(2).count(), 3)
}

#[test]
fn display() {
    let wit = Witness::new("aabb");
    let split = wit.split(0, 2);
    assert_eq!(split.to_string(), "x: ``, y: `aa`, z: `bb`")
}
