//! Assertion macros for API error responses

/// Assert an error response's status and `kind`
///
/// Takes the `(StatusCode, Value)` pair returned by the `TestApp` helpers.
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $kind:expr) => {{
        let (status, body) = $response;
        assert_eq!(status, $status, "unexpected status, body: {}", body);
        assert_eq!(body["kind"], $kind, "unexpected kind, body: {}", body);
        assert!(body["error"].is_string(), "error message missing: {}", body);
    }};
}
