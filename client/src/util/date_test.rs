use super::*;

const EXPECTED: &str = "May 1, 2024, 10:00 UTC";

#[test]
fn formats_rfc3339() {
    assert_eq!(format_created_at("2024-05-01T10:00:00Z"), EXPECTED);
    assert_eq!(format_created_at("2024-05-01T12:00:00+02:00"), EXPECTED);
}

#[test]
fn formats_rfc2822_gmt() {
    assert_eq!(format_created_at("Wed, 01 May 2024 10:00:00 GMT"), EXPECTED);
}

#[test]
fn formats_naive_iso_with_and_without_fraction() {
    assert_eq!(format_created_at("2024-05-01T10:00:00.123456"), EXPECTED);
    assert_eq!(format_created_at("2024-05-01 10:00:00"), EXPECTED);
}

#[test]
fn formats_epoch_seconds_and_millis() {
    assert_eq!(format_created_at("1714557600"), EXPECTED);
    assert_eq!(format_created_at("1714557600000"), EXPECTED);
}

#[test]
fn unparseable_value_is_shown_verbatim() {
    assert_eq!(format_created_at(" yesterday "), "yesterday");
    assert_eq!(format_created_at(""), "");
}
