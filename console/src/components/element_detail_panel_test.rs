use super::*;

#[test]
fn status_class_is_distinct_per_status() {
    let classes = [
        status_class(TableStatus::Available),
        status_class(TableStatus::Booked),
        status_class(TableStatus::Reserved),
        status_class(TableStatus::Unavailable),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn status_class_keeps_base_class() {
    assert!(status_class(TableStatus::Booked).starts_with("detail-panel__status "));
}
