mod common;

use common::{identity_rules, line, uniform_rules};
use tessera_core::line::{distribution, step};
use tessera_core::{AutomatonError, Line, RuleTable};
use tessera_data::{Neighborhood, Symbol};

#[test]
fn test_all_zero_rules_yield_zero_line() {
    let next = step(&line("0120210122"), &RuleTable::default()).unwrap();
    assert_eq!(next, line("0000000000"));
}

#[test]
fn test_identity_rules_keep_line() {
    let current = line("2101201");
    assert_eq!(step(&current, &identity_rules()).unwrap(), current);
}

#[test]
fn test_wraparound_at_both_ends() {
    // Only "2 0 1" maps to 1: index 0 sees (last, first, second).
    let mut rules = RuleTable::new();
    rules.set(Neighborhood::from_label("201").unwrap(), Symbol::One);
    let next = step(&line("01002"), &rules).unwrap();
    assert_eq!(next, line("10000"));

    // "0 2 0" at the last index reads the first cell as its right neighbor.
    let mut rules = RuleTable::new();
    rules.set(Neighborhood::from_label("020").unwrap(), Symbol::Two);
    let next = step(&line("01102"), &rules).unwrap();
    assert_eq!(next, line("00002"));
}

#[test]
fn test_shift_rule_rotates_line() {
    // Output the left neighbor: the line moves one cell to the right.
    let mut rules = RuleTable::new();
    for n in Neighborhood::all() {
        rules.set(n, n.left);
    }
    let next = step(&line("120000"), &rules).unwrap();
    assert_eq!(next, line("012000"));
}

#[test]
fn test_short_lines_rejected() {
    for digits in ["", "1", "12"] {
        let current = Line::from_digits(digits).unwrap();
        let err = step(&current, &uniform_rules(Symbol::One)).unwrap_err();
        assert!(matches!(err, AutomatonError::InvalidInput(_)));
    }
}

#[test]
fn test_distribution_fractions() {
    let dist = distribution(&line("0011122222"));
    assert_eq!(dist.zero, 0.2);
    assert_eq!(dist.one, 0.3);
    assert_eq!(dist.two, 0.5);
    assert_normalized!(dist);

    let empty = distribution(&Line::new(Vec::new()));
    assert_eq!(empty.total(), 0.0);
}

#[test]
fn test_rule_number_round_trip() {
    for number in [0, 1, 2, 3, 728, 12_345_678, 7_625_597_484_986] {
        let rules = RuleTable::from_rule_number(number).unwrap();
        assert_eq!(rules.rule_number(), number);
    }
    assert!(RuleTable::from_rule_number(7_625_597_484_987).is_err());
}

#[test]
fn test_rule_number_most_significant_is_222() {
    let rules = RuleTable::from_rule_number(3u64.pow(26)).unwrap();
    assert_eq!(rules.get(Neighborhood::from_label("222").unwrap()), Symbol::One);
    assert_eq!(rules.get(Neighborhood::from_label("000").unwrap()), Symbol::Zero);

    let rules = RuleTable::from_rule_number(2).unwrap();
    assert_eq!(rules.get(Neighborhood::from_label("000").unwrap()), Symbol::Two);
}

#[test]
fn test_partial_tables_rejected() {
    let err = RuleTable::from_values(&[Symbol::One; 5]).unwrap_err();
    assert_eq!(
        err,
        AutomatonError::IncompleteRuleTable {
            missing: Neighborhood::from_label("012").unwrap()
        }
    );

    let labels = Neighborhood::all()
        .filter(|n| n.label() != "121")
        .map(|n| (n.label(), Symbol::Two))
        .collect::<Vec<_>>();
    let err = RuleTable::from_labels(labels.iter().map(|(l, s)| (l.as_str(), *s))).unwrap_err();
    assert!(matches!(
        err,
        AutomatonError::IncompleteRuleTable { missing } if missing.label() == "121"
    ));
}
