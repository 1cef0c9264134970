//! Catalogue construction tests.
//!
//! These tests verify how registered combinations are expanded:
//! - Every non-empty sub-shape is filed with its named complement
//! - Identical shapes merge across names and registration order
//! - Complements are bucketed by their size

use rules_card::catalogue::SubShapes;
use rules_card::{CardSet, Catalogue, Count, NamedComplement, ShapeKey};

fn set(pairs: &[(&str, Count)]) -> CardSet {
    CardSet::from_counts(pairs.iter().copied()).expect("valid counts")
}

/// Every sub-shape's bucket holds the name and the exact complement.
#[test]
fn test_every_sub_shape_is_filed() {
    let combo = set(&[("A", 2), ("B", 1), ("C", 3)]);
    let mut catalogue = Catalogue::new();
    catalogue.register_card_set("X", &combo).unwrap();

    let mut shapes = 0;
    for shape in SubShapes::of(&combo).map(Result::unwrap).filter(|s| !s.is_empty()) {
        let prototype = catalogue.get(&ShapeKey::of(&shape)).expect("shape filed");
        let size = combo.total_count() - shape.total_count();
        let expected = NamedComplement::new("X", combo.subtract(&shape).unwrap());
        assert!(prototype.bucket(size).contains(&expected));
        shapes += 1;
    }

    assert_eq!(shapes, 3 * 2 * 4 - 1);
    assert_eq!(catalogue.len(), shapes);
}

/// Registration order does not change which shapes exist or what they hold.
#[test]
fn test_registration_order_independent_contents() {
    let pair = set(&[("A", 2), ("B", 1)]);
    let run = set(&[("B", 1), ("C", 1), ("D", 1)]);

    let mut forward = Catalogue::new();
    forward.register_card_set("Pair", &pair).unwrap();
    forward.register_card_set("Run", &run).unwrap();

    let mut backward = Catalogue::new();
    backward.register_card_set("Run", &run).unwrap();
    backward.register_card_set("Pair", &pair).unwrap();

    assert_eq!(forward.len(), backward.len());
    for prototype in forward.prototypes() {
        let other = backward.get(prototype.key()).expect("same shapes");
        assert_eq!(prototype.pattern(), other.pattern());
        for (size, named) in prototype.complements() {
            let mut mine: Vec<_> = named.iter().map(|n| n.name.clone()).collect();
            let mut theirs: Vec<_> = other.bucket(*size).iter().map(|n| n.name.clone()).collect();
            mine.sort();
            theirs.sort();
            assert_eq!(mine, theirs);
        }
    }
}

/// A shape shared by two combinations accumulates both, per complement size.
#[test]
fn test_shared_shape_buckets() {
    let mut catalogue = Catalogue::new();
    catalogue.register_card_set("Pair", &set(&[("A", 2)])).unwrap();
    catalogue.register_card_set("Triple", &set(&[("A", 3)])).unwrap();

    let single = catalogue.get(&ShapeKey::of(&set(&[("A", 1)]))).unwrap();
    assert_eq!(single.complement_counts().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(single.bucket(1)[0], NamedComplement::new("Pair", set(&[("A", 1)])));
    assert_eq!(single.bucket(2)[0], NamedComplement::new("Triple", set(&[("A", 2)])));

    let full = catalogue.get(&ShapeKey::of(&set(&[("A", 3)]))).unwrap();
    assert_eq!(full.bucket(0)[0].complement, CardSet::new());
}

/// Registering the same name twice files it twice.
#[test]
fn test_duplicate_names_kept() {
    let combo = set(&[("A", 1)]);
    let mut catalogue = Catalogue::new();
    catalogue.register_card_set("Solo", &combo).unwrap();
    catalogue.register_card_set("Solo", &combo).unwrap();

    let prototype = catalogue.get(&ShapeKey::of(&combo)).unwrap();
    assert_eq!(prototype.bucket(0).len(), 2);
    assert_eq!(catalogue.registered_names().len(), 2);
}

/// Named complements serialize for display by embedding applications.
#[test]
fn test_named_complement_serialization() {
    let mut catalogue = Catalogue::new();
    catalogue.register_card_set("Pair", &set(&[("A", 2)])).unwrap();

    let prototype = catalogue.prototypes().next().unwrap();
    let json = serde_json::to_string(prototype.bucket(1)).unwrap();
    let deserialized: Vec<NamedComplement> = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, prototype.bucket(1));
}
