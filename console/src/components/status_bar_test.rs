use super::*;

#[test]
fn format_cursor_rounds_coordinates() {
    assert_eq!(format_cursor(Some(Point::new(12.4, -3.6))), "(12, -4)");
}

#[test]
fn format_cursor_without_pointer() {
    assert_eq!(format_cursor(None), "(-, -)");
}

#[test]
fn format_zoom_as_percent() {
    assert_eq!(format_zoom(1.0), "100%");
    assert_eq!(format_zoom(0.25), "25%");
    assert_eq!(format_zoom(1.234), "123%");
}

#[test]
fn format_counts_lists_tables_and_walls() {
    assert_eq!(format_counts(3, 0), "3 tables · 0 walls");
}
