use crate::wellness::environment::{EnvironmentData, EnvironmentRating};

fn uniform(value: u8) -> EnvironmentData {
    EnvironmentData {
        physical: value,
        social: value,
        economic: value,
        built: value,
    }
}

#[test]
fn impact_score_is_the_unweighted_mean() {
    let data = EnvironmentData {
        physical: 10,
        social: 4,
        economic: 6,
        built: 8,
    };
    assert_eq!(data.impact_score(), 7.0);
    assert_eq!(data.rating(), EnvironmentRating::Stable);
}

#[test]
fn uniform_maximum_is_nurturing_and_minimum_needs_support() {
    assert_eq!(uniform(10).impact_score(), 10.0);
    assert_eq!(uniform(10).rating(), EnvironmentRating::Nurturing);

    assert_eq!(uniform(1).impact_score(), 1.0);
    assert_eq!(uniform(1).rating(), EnvironmentRating::CriticalSupport);
}

#[test]
fn rating_bounds_are_inclusive_lower_bounds() {
    assert_eq!(
        EnvironmentRating::from_score(8.0),
        EnvironmentRating::Nurturing
    );
    assert_eq!(
        EnvironmentRating::from_score(7.75),
        EnvironmentRating::Stable
    );
    assert_eq!(EnvironmentRating::from_score(6.0), EnvironmentRating::Stable);
    assert_eq!(
        EnvironmentRating::from_score(5.75),
        EnvironmentRating::Demanding
    );
    assert_eq!(
        EnvironmentRating::from_score(4.0),
        EnvironmentRating::Demanding
    );
    assert_eq!(
        EnvironmentRating::from_score(3.75),
        EnvironmentRating::CriticalSupport
    );
}

#[test]
fn derivation_is_idempotent() {
    let data = uniform(7);
    assert_eq!(data.impact_score(), data.impact_score());
    assert_eq!(data.rating(), data.rating());
}

#[test]
fn critical_support_label_matches_display_copy() {
    assert_eq!(
        EnvironmentRating::CriticalSupport.label(),
        "Critical Support Needed"
    );
}
