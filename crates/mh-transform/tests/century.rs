//! Tests for century normalization.

use mh_model::Row;
use mh_model::columns::{
    ABBREVIATED_CENTURY, BUILDING_DATING, PRIMARY_CAMPAIGN_CENTURY, SECONDARY_CAMPAIGN_CENTURY,
};
use mh_transform::century::{century_of_year, label_from_roman_text, label_from_years};
use mh_transform::{century_label, century_label_or_unknown, roman_to_int, to_roman};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roman_round_trip(n in 1u32..=3999) {
        prop_assert_eq!(roman_to_int(&to_roman(n)), Some(n));
    }

    #[test]
    fn lowercase_decodes_like_uppercase(n in 1u32..=3999) {
        prop_assert_eq!(roman_to_int(&to_roman(n).to_lowercase()), Some(n));
    }
}

#[test]
fn century_from_year_boundaries() {
    assert_eq!(century_of_year(1500), 15);
    assert_eq!(century_of_year(1501), 16);
    assert_eq!(century_of_year(100), 1);
    assert_eq!(century_of_year(101), 2);
}

#[test]
fn bare_small_number_is_a_century() {
    assert_eq!(label_from_years("16").as_deref(), Some("XVIe"));
}

#[test]
fn years_in_one_century_render_single() {
    assert_eq!(label_from_years("1513;1521;1560").as_deref(), Some("XVIe"));
}

#[test]
fn roman_ordinals_render_span() {
    assert_eq!(
        label_from_roman_text("XVIe s. ; XIXe s.").as_deref(),
        Some("XVIe–XIXe")
    );
}

#[test]
fn span_shows_endpoints_only() {
    assert_eq!(
        label_from_years("1150 ; 1420 ; 1780").as_deref(),
        Some("XIIe–XVIIIe")
    );
}

#[test]
fn empty_sources_give_placeholder() {
    let row = Row::new()
        .with(ABBREVIATED_CENTURY, "")
        .with(PRIMARY_CAMPAIGN_CENTURY, "")
        .with(SECONDARY_CAMPAIGN_CENTURY, "")
        .with(BUILDING_DATING, "");
    assert_eq!(century_label(&row), None);
    assert_eq!(century_label_or_unknown(&row), "Datation inconnue");
}

#[test]
fn secondary_campaign_alone_is_enough() {
    let row = Row::new().with(SECONDARY_CAMPAIGN_CENTURY, "XVIIIe s.");
    assert_eq!(century_label(&row).as_deref(), Some("XVIIIe"));
}

#[test]
fn campaign_source_precedes_dating() {
    let row = Row::new()
        .with(PRIMARY_CAMPAIGN_CENTURY, "XIIIe s.")
        .with(BUILDING_DATING, "1890");
    assert_eq!(century_label(&row).as_deref(), Some("XIIIe"));
}
