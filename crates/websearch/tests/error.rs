//! Tests for error rendering.

use resolver::{ActiveModel, Family, Unresolved};
use walrus_websearch::{SearchError, format_error, unresolved_message};

#[test]
fn api_error_uses_nested_message() {
    let err = SearchError::api(
        401,
        r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#,
    );
    assert_eq!(
        format_error(Family::Anthropic, &err),
        "Anthropic API error: invalid x-api-key (status 401)"
    );
}

#[test]
fn api_error_falls_back_to_raw_body() {
    let err = SearchError::api(502, "Bad Gateway\n");
    assert_eq!(
        format_error(Family::OpenAI, &err),
        "OpenAI API error: Bad Gateway (status 502)"
    );

    let empty = SearchError::api(500, "");
    assert_eq!(
        format_error(Family::OpenAI, &empty),
        "OpenAI API error: no response body (status 500)"
    );
}

#[test]
fn api_error_with_string_error_field() {
    let err = SearchError::api(429, r#"{"error":"rate limited"}"#);
    assert!(matches!(&err, SearchError::Api { message, .. } if message == "rate limited"));
}

#[test]
fn generic_and_unexpected_errors() {
    let setup = SearchError::Setup("invalid API key".into());
    assert_eq!(
        format_error(Family::OpenAI, &setup),
        "OpenAI web search failed: invalid API key"
    );

    let decode = SearchError::from(serde_json::from_str::<Vec<u8>>("{}").unwrap_err());
    assert!(
        format_error(Family::Anthropic, &decode)
            .starts_with("Anthropic web search failed: malformed response:")
    );

    let raw = SearchError::Unexpected("<html>oops</html>".into());
    assert_eq!(
        format_error(Family::Anthropic, &raw),
        "Anthropic web search returned an unexpected response: <html>oops</html>"
    );
}

#[test]
fn unresolved_messages_are_distinct() {
    let active = ActiveModel::new("gpt-5", "openai");

    let none = unresolved_message(Unresolved::NoCredentials, None);
    let missing = unresolved_message(Unresolved::MissingCredentials(Family::OpenAI), Some(&active));
    let unsupported = unresolved_message(Unresolved::UnsupportedModel, Some(&active));

    assert!(none.contains("no Anthropic or OpenAI provider has an API key"));
    assert!(missing.contains("'gpt-5'"));
    assert!(missing.contains("no OpenAI provider has an API key"));
    assert!(unsupported.contains("does not support the active model 'gpt-5'"));

    for message in [&none, &missing, &unsupported] {
        assert!(message.contains("Example configuration:"));
        assert!(message.contains("[[providers]]"));
    }
}
