use subtle::ConstantTimeEq;

/// Check a request's API key against the configured one.
///
/// No configured key means the endpoint is open. Comparison is constant-time.
pub fn api_key_matches(configured: Option<&str>, provided: Option<&str>) -> bool {
    let Some(expected) = configured else {
        return true;
    };
    let Some(provided) = provided else {
        return false;
    };

    expected.len() == provided.len() && bool::from(expected.as_bytes().ct_eq(provided.as_bytes()))
}
