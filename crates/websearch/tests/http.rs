//! Tests for executor endpoint construction.

use walrus_websearch::{Endpoint, claude::Claude, openai::OpenAI};

#[test]
fn bearer_sets_authorization_header() {
    let endpoint =
        Endpoint::bearer(reqwest::Client::new(), "sk-1", "http://example.com/v1/responses")
            .expect("bearer endpoint");

    let auth = endpoint.headers().get("authorization").expect("authorization");
    assert_eq!(auth.to_str().unwrap(), "Bearer sk-1");
    assert_eq!(endpoint.headers().get("accept").unwrap(), "application/json");
    assert_eq!(endpoint.url(), "http://example.com/v1/responses");
}

#[test]
fn invalid_key_is_a_setup_error() {
    let result = Endpoint::custom_header(reqwest::Client::new(), "x-api-key", "bad\nkey", "http://x");
    assert!(matches!(result, Err(walrus_websearch::SearchError::Setup(_))));
}

#[test]
fn claude_headers_and_url() {
    let claude = Claude::anthropic(reqwest::Client::new(), "sk-ant").unwrap();
    let headers = claude.endpoint().headers();
    assert_eq!(headers.get("x-api-key").unwrap(), "sk-ant");
    assert_eq!(headers.get("anthropic-version").unwrap(), "2023-06-01");
    assert!(headers.get("authorization").is_none());
    assert_eq!(claude.endpoint().url(), "https://api.anthropic.com/v1/messages");

    let proxied = Claude::custom(reqwest::Client::new(), "k", "http://proxy.local/").unwrap();
    assert_eq!(proxied.endpoint().url(), "http://proxy.local/v1/messages");
}

#[test]
fn openai_url() {
    let openai = OpenAI::api(reqwest::Client::new(), "sk-oai").unwrap();
    assert_eq!(openai.endpoint().url(), "https://api.openai.com/v1/responses");

    let proxied = OpenAI::custom(reqwest::Client::new(), "k", "http://proxy.local").unwrap();
    assert_eq!(proxied.endpoint().url(), "http://proxy.local/v1/responses");
}
