use super::*;

#[test]
fn default_uses_hosted_backend() {
    assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn blank_value_falls_back_to_default() {
    assert_eq!(ApiConfig::from_raw(Some("   ")).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn trailing_slashes_are_trimmed() {
    assert_eq!(
        ApiConfig::from_raw(Some("http://localhost:5000//")).base_url,
        "http://localhost:5000"
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(ApiConfig::from_raw(Some(" https://api.example.com ")).base_url, "https://api.example.com");
}
