//! Tests for web search configuration loading.

use std::io::Write;
use walrus_websearch::{
    FileDirectory, OutputFormat, ProviderDirectory, WebSearchConfig, config::EXAMPLE_CONFIG,
};

#[test]
fn parse_providers_and_format() {
    let toml = r#"
format = "json"

[[providers]]
id = "anthropic"
api = "anthropic"
key = "sk-ant"

[[providers.models]]
id = "claude-sonnet-4-5"
options = { web_search = "always" }

[[providers]]
id = "proxy"
api = "@ai-sdk/openai"
options = { api_key = "sk-oai", base_url = "https://proxy.example.com/v1" }

[[providers.models]]
id = "gpt-5"
"#;
    let config = WebSearchConfig::from_toml(toml).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.providers.len(), 2);
    assert_eq!(config.providers[0].models[0].id.as_str(), "claude-sonnet-4-5");

    let creds = config.providers[1].credentials().unwrap();
    assert_eq!(creds.api_key, "sk-oai");
    assert_eq!(creds.base_url.as_deref(), Some("https://proxy.example.com"));
}

#[test]
fn env_vars_are_expanded() {
    unsafe { std::env::set_var("WALRUS_WEBSEARCH_TEST_KEY", "sk-from-env") };
    let toml = r#"
[[providers]]
id = "anthropic"
api = "anthropic"
key = "${WALRUS_WEBSEARCH_TEST_KEY}"
"#;
    let config = WebSearchConfig::from_toml(toml).unwrap();
    assert_eq!(config.providers[0].key.as_deref(), Some("sk-from-env"));
}

#[test]
fn unset_env_var_means_no_credentials() {
    let toml = r#"
[[providers]]
id = "anthropic"
api = "anthropic"
key = "${WALRUS_WEBSEARCH_TEST_UNSET}"
"#;
    let config = WebSearchConfig::from_toml(toml).unwrap();
    assert!(config.providers[0].credentials().is_none());
}

#[test]
fn empty_config_defaults() {
    let config = WebSearchConfig::from_toml("").unwrap();
    assert_eq!(config.format, OutputFormat::Markdown);
    assert!(config.providers.is_empty());
}

#[test]
fn invalid_toml_errors() {
    assert!(WebSearchConfig::from_toml("providers = 3").is_err());
    assert!(WebSearchConfig::from_toml("format = \"yaml\"").is_err());
}

#[test]
fn example_config_parses() {
    let config = WebSearchConfig::from_toml(EXAMPLE_CONFIG).unwrap();
    assert_eq!(config.providers.len(), 1);
    assert_eq!(config.providers[0].models.len(), 1);
}

#[test]
fn output_format_from_str() {
    assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[tokio::test]
async fn file_directory_reads_at_query_time() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let directory = FileDirectory::new(file.path());

    write!(
        file,
        r#"
[[providers]]
id = "openai"
api = "openai"
key = "sk-oai"

[[providers.models]]
id = "gpt-5"
"#
    )
    .unwrap();
    file.flush().unwrap();

    let providers = directory.providers().await.unwrap();
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].id.as_str(), "openai");
}

#[tokio::test]
async fn file_directory_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let directory = FileDirectory::new(dir.path().join("missing.toml"));
    let err = directory.providers().await.unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}
