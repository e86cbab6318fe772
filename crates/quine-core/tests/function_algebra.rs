//! End-to-end checks through the public API: parse expressions and compare
//! the functions they denote.

use quine_core::{parse, BinOp, BooleanFunction, UnaryOp};

#[test]
fn test_de_morgan_laws_hold() {
    assert_eq!(parse("!(a & b)").unwrap(), parse("!a | !b").unwrap());
    assert_eq!(parse("!(a | b)").unwrap(), parse("!a & !b").unwrap());
}

#[test]
fn test_xor_matches_its_expansion() {
    assert_eq!(parse("a ^ b").unwrap(), parse("(a | b) & !(a & b)").unwrap());
}

#[test]
fn test_equality_is_structural() {
    // Same rows, same variable order.
    assert_eq!(parse("a & b").unwrap(), parse("(a & b)").unwrap());
    // Commutation reorders the columns, so the tables differ even though
    // the minterm sets agree.
    let ab = parse("a & b").unwrap();
    let ba = parse("b & a").unwrap();
    assert_ne!(ab, ba);
    assert_eq!(ab.minterms(), ba.minterms());
}

#[test]
fn test_absorption_keeps_the_unused_column() {
    let f = parse("a | a & b").unwrap();
    assert_eq!(f.variables(), ["a", "b"]);
    assert_eq!(f.minterms(), [1, 3]);
}

#[test]
fn test_majority_of_three() {
    let f = parse("(a & b) | (b & c) | (a & c)").unwrap();
    assert_eq!(f.variables(), ["a", "b", "c"]);
    assert_eq!(f.minterms(), [3, 5, 6, 7]);
}

#[test]
fn test_excluded_middle_and_contradiction() {
    assert!(parse("a | !a").unwrap().is_tautology());
    assert!(parse("a & !a").unwrap().is_contradiction());
    assert!(!parse("a | b").unwrap().is_tautology());
}

#[test]
fn test_parsed_and_hand_built_functions_agree() {
    let parsed = parse("!a & b").unwrap();
    let hand_built = BooleanFunction::from_variable("a")
        .unwrap()
        .apply_unary(UnaryOp::Not)
        .apply_binary(BinOp::And, &BooleanFunction::from_variable("b").unwrap())
        .unwrap();
    assert_eq!(parsed, hand_built);
}

#[test]
fn test_rendered_table_matches_the_row_encoding() {
    let f = parse("a & b").unwrap();
    assert_eq!(f.to_string(), "a b\n0 0 : 0\n1 0 : 0\n0 1 : 0\n1 1 : 1");
}
