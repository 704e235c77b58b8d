use super::*;

#[test]
fn every_variant_has_non_empty_user_message() {
    let errors = [
        ApiError::Network("offline".to_owned()),
        ApiError::Status(500),
        ApiError::Decode("eof".to_owned()),
        ApiError::EmptyContent,
        ApiError::Unavailable,
    ];
    for err in errors {
        assert!(!err.user_message().trim().is_empty(), "{err:?}");
    }
}

#[test]
fn empty_content_message_is_distinct_from_transport_failure() {
    assert_ne!(
        ApiError::EmptyContent.user_message(),
        ApiError::Network("offline".to_owned()).user_message()
    );
    assert_ne!(ApiError::EmptyContent.user_message(), ApiError::Status(502).user_message());
}

#[test]
fn status_message_includes_code() {
    assert!(ApiError::Status(503).user_message().contains("503"));
    assert_eq!(ApiError::Status(404).to_string(), "request failed: 404");
}
