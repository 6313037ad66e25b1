use super::*;

#[test]
fn known_categories_have_icons() {
    assert_eq!(get_category_icon("vip"), "👑");
    assert_eq!(get_category_icon("booth"), "🛋");
    assert_eq!(get_category_icon("standing"), "🍸");
    assert_eq!(get_category_icon("standard"), "🪑");
}

#[test]
fn aliases_share_an_icon() {
    assert_eq!(get_category_icon("standing"), get_category_icon("high-top"));
    assert_eq!(get_category_icon("outdoor"), get_category_icon("terrace"));
}

#[test]
fn matching_ignores_case_and_whitespace() {
    assert_eq!(get_category_icon("  VIP "), "👑");
    assert_eq!(get_category_icon("Booth"), "🛋");
}

#[test]
fn unknown_and_empty_categories_fall_back() {
    assert_eq!(get_category_icon("karaoke"), "📍");
    assert_eq!(get_category_icon(""), "📍");
}
