//! Integration tests for the feedback comparator.

mod common;

use common::{niko, player, s1mple, zywoo};
use player_guesser_web::{compare, Attribute, PlayerRecord, Role, Verdict};

#[test]
fn same_player_is_a_win_with_all_exact() {
    for p in [s1mple(), niko(), zywoo()] {
        let fb = compare(&p, &p);
        assert!(fb.is_win);
        assert!(fb.attributes.iter().all(|a| a.verdict == Verdict::Exact));
    }
}

#[test]
fn attributes_come_in_fixed_order() {
    let fb = compare(&niko(), &s1mple());
    let order: Vec<Attribute> = fb.attributes.iter().map(|a| a.attribute).collect();
    assert_eq!(order, Attribute::ORDER.to_vec());
    assert_eq!(fb.guessed_name, "NiKo");
}

#[test]
fn numeric_direction_points_at_the_secret() {
    // ZywOo is 24 with 6 majors, NiKo 27 with 14.
    let fb = compare(&zywoo(), &niko());
    assert_eq!(fb.verdict(Attribute::Age), Some(Verdict::Higher));
    assert_eq!(fb.verdict(Attribute::MajorParticipations), Some(Verdict::Higher));

    let mirrored = compare(&niko(), &zywoo());
    assert_eq!(mirrored.verdict(Attribute::Age), Some(Verdict::Lower));
    assert_eq!(mirrored.verdict(Attribute::MajorParticipations), Some(Verdict::Lower));
    assert!(!fb.is_win && !mirrored.is_win);
}

#[test]
fn equal_numbers_are_exact_even_when_other_fields_differ() {
    // Same age (27), different everything else.
    let fb = compare(&niko(), &s1mple());
    assert_eq!(fb.verdict(Attribute::Age), Some(Verdict::Exact));
    assert!(!fb.is_win);
}

#[test]
fn overlapping_roles_are_partial() {
    let fb = compare(&niko(), &s1mple());
    assert_eq!(fb.verdict(Attribute::Role), Some(Verdict::PartialMatch));

    let fb = compare(&zywoo(), &s1mple());
    assert_eq!(fb.verdict(Attribute::Role), Some(Verdict::Mismatch));
}

#[test]
fn continent_is_its_own_equality_attribute() {
    let fb = compare(&zywoo(), &s1mple());
    assert_eq!(fb.verdict(Attribute::Nationality), Some(Verdict::Mismatch));
    assert_eq!(fb.verdict(Attribute::Continent), Some(Verdict::Exact));
    assert_eq!(fb.verdict(Attribute::Club), Some(Verdict::Mismatch));
}

#[test]
fn unknown_values_only_equal_unknown() {
    let known = s1mple();
    let mut unknown_age = s1mple();
    unknown_age.age = None;
    unknown_age.roles.clear();
    unknown_age.nationality = None;

    let fb = compare(&unknown_age, &known);
    assert_eq!(fb.verdict(Attribute::Age), Some(Verdict::Mismatch));
    assert_eq!(fb.verdict(Attribute::Role), Some(Verdict::Mismatch));
    assert_eq!(fb.verdict(Attribute::Nationality), Some(Verdict::Mismatch));
    assert!(!fb.is_win);

    let fb = compare(&unknown_age, &unknown_age.clone());
    assert!(fb.is_win);
    assert_eq!(
        fb.attributes[0].guessed_value, "Unknown",
        "unknown age should display as a placeholder"
    );
}

#[test]
fn guessed_values_are_reported_for_display() {
    let guess = player("dev1ce", 29, &[Role::Awper], "Denmark", "Europe", "Astralis", 17);
    let fb = compare(&guess, &s1mple());
    let values: Vec<&str> = fb.attributes.iter().map(|a| a.guessed_value.as_str()).collect();
    assert_eq!(values, ["29", "AWPer", "Denmark", "Europe", "Astralis", "17"]);
}

#[test]
fn only_exact_everywhere_wins() {
    let secret = s1mple();
    let twin = PlayerRecord {
        name: "s1mple-alt".to_string(),
        ..secret.clone()
    };
    // Identical attributes under another name still count as a win.
    assert!(compare(&twin, &secret).is_win);
}
