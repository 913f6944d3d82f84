//! Mock upstream shared by the network tests.

#![allow(dead_code)]

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One request seen by the mock.
pub struct Captured {
    pub headers: HeaderMap,
    pub body: Value,
}

/// A running mock upstream.
pub struct Upstream {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Captured>>>,
}

impl Upstream {
    /// Serve `reply` with `status` on `path` from an ephemeral port.
    pub async fn start(path: &'static str, status: StatusCode, reply: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();
        let app = Router::new().route(
            path,
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let seen = seen.clone();
                async move {
                    seen.lock().unwrap().push(Captured { headers, body });
                    (status, [(header::CONTENT_TYPE, "application/json")], reply)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Number of requests served.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Body of the only request served.
    pub fn body(&self) -> Value {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        requests[0].body.clone()
    }

    /// A header of the only request served.
    pub fn header(&self, name: &str) -> Option<String> {
        let requests = self.requests.lock().unwrap();
        requests[0]
            .headers
            .get(name)
            .map(|v| v.to_str().unwrap().to_owned())
    }
}

pub const ANTHROPIC_REPLY: &str = r#"{
  "id": "msg_01",
  "type": "message",
  "role": "assistant",
  "model": "claude-sonnet-4-5",
  "content": [
    { "type": "server_tool_use", "id": "srvtoolu_1", "name": "web_search",
      "input": { "query": "rust" } },
    { "type": "web_search_tool_result", "tool_use_id": "srvtoolu_1", "content": [
      { "type": "web_search_result", "title": "Rust", "url": "https://rust-lang.org",
        "encrypted_content": "abc", "page_age": "2 days ago" },
      { "type": "web_search_result", "title": "The Book", "url": "https://doc.rust-lang.org/book" }
    ] },
    { "type": "text", "text": "Rust is a systems programming language." },
    { "type": "web_search_tool_result", "tool_use_id": "srvtoolu_2", "content": [
      { "type": "web_search_result", "title": "Rust again", "url": "https://rust-lang.org" }
    ] }
  ],
  "stop_reason": "end_turn",
  "usage": { "input_tokens": 12, "output_tokens": 34 }
}"#;

pub const OPENAI_REPLY: &str = r#"{
  "id": "resp_01",
  "object": "response",
  "status": "completed",
  "output": [
    { "type": "web_search_call", "id": "ws_1", "status": "completed",
      "action": { "type": "search", "query": "rust",
                  "sources": [ { "type": "url", "url": "https://rust-lang.org" } ] } },
    { "type": "message", "id": "msg_1", "role": "assistant", "status": "completed",
      "content": [
        { "type": "output_text", "text": "Rust is a systems programming language.",
          "annotations": [
            { "type": "url_citation", "start_index": 0, "end_index": 4,
              "url": "https://rust-lang.org", "title": "Rust" },
            { "type": "url_citation", "start_index": 5, "end_index": 9,
              "url": "https://crates.io", "title": "crates.io" }
          ] }
      ] }
  ]
}"#;
