//! Tests for output normalization and rendering.

use walrus_websearch::{Block, Hit, HitList, SearchOutput, Segment};

fn hits(id: &str, hits: &[(&str, &str)]) -> Block {
    Block::Hits {
        tool_use_id: id.into(),
        hits: hits.iter().map(|(t, u)| Hit::new(*t, *u)).collect(),
    }
}

#[test]
fn dedup_across_response_keeps_first_title() {
    let output = SearchOutput::from_blocks(
        "rust",
        vec![
            hits("a", &[("Rust", "https://rust-lang.org"), ("Book", "https://doc.rust-lang.org/book")]),
            Block::Text("Rust is fast.".into()),
            hits("b", &[("Rust Lang", "https://rust-lang.org"), ("Crates", "https://crates.io")]),
        ],
    );

    let urls: Vec<&str> = output.hits().map(|h| h.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://rust-lang.org",
            "https://doc.rust-lang.org/book",
            "https://crates.io"
        ]
    );
    assert_eq!(output.hits().next().unwrap().title, "Rust");
    assert_eq!(output.results.len(), 3);
}

#[test]
fn list_emptied_by_dedup_is_dropped() {
    let output = SearchOutput::from_blocks(
        "rust",
        vec![
            hits("a", &[("Rust", "https://rust-lang.org")]),
            hits("b", &[("Rust", "https://rust-lang.org")]),
        ],
    );
    assert_eq!(
        output.results,
        vec![Segment::Hits(HitList {
            tool_use_id: "a".into(),
            content: vec![Hit::new("Rust", "https://rust-lang.org")],
        })]
    );
}

#[test]
fn error_block_becomes_text() {
    let output = SearchOutput::from_blocks(
        "rust",
        vec![
            Block::Error {
                code: "max_uses_exceeded".into(),
            },
            Block::Text("Partial answer.".into()),
        ],
    );
    assert_eq!(
        output.results,
        vec![
            Segment::Text("Web search error: max_uses_exceeded".into()),
            Segment::Text("Partial answer.".into()),
        ]
    );
}

#[test]
fn blank_text_and_empty_urls_skipped() {
    let output = SearchOutput::from_blocks(
        "rust",
        vec![
            Block::Text("  \n".into()),
            hits("a", &[("No url", ""), ("Rust", "https://rust-lang.org")]),
        ],
    );
    assert_eq!(output.results.len(), 1);
    assert_eq!(output.hits().count(), 1);
}

#[test]
fn json_shape() {
    let output = SearchOutput::from_blocks(
        "rust",
        vec![
            Block::Text("Rust is fast.".into()),
            hits("a", &[("Rust", "https://rust-lang.org")]),
        ],
    );
    let value: serde_json::Value = serde_json::from_str(&output.to_json()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "query": "rust",
            "results": [
                "Rust is fast.",
                { "tool_use_id": "a", "content": [{ "title": "Rust", "url": "https://rust-lang.org" }] }
            ]
        })
    );
}

#[test]
fn markdown_lists_sources() {
    let output = SearchOutput::from_blocks(
        "rust",
        vec![
            hits("a", &[("Rust", "https://rust-lang.org"), ("", "https://crates.io")]),
            Block::Text("Rust is fast.".into()),
        ],
    );
    let markdown = output.to_markdown();
    assert!(markdown.starts_with("Web search results for query: \"rust\""));
    assert!(markdown.contains("Rust is fast."));
    assert!(markdown.contains("## Sources"));
    assert!(markdown.contains("- [Rust](https://rust-lang.org)"));
    assert!(markdown.contains("- [https://crates.io](https://crates.io)"));
}

#[test]
fn markdown_for_empty_output() {
    let markdown = SearchOutput::from_blocks("rust", Vec::new()).to_markdown();
    assert!(markdown.contains("No summary was returned."));
    assert!(markdown.contains("No sources were returned."));
}
