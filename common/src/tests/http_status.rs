use crate::HttpStatusCode;

/// **VALUE**: Verifies the status buckets used when logging rejected catalog requests.
///
/// **BUG THIS CATCHES**: Off-by-one range bugs (e.g. 500 treated as a client error).
#[test]
fn given_status_codes_when_classified_then_fall_into_expected_buckets() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(500).is_client_error());
}

#[test]
fn given_u16_when_converted_then_displays_as_number() {
    let status = HttpStatusCode::from(404);

    assert_eq!(status, HttpStatusCode(404));
    assert_eq!(status.to_string(), "404");
}
