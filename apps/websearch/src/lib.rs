//! Command line front end for the walrus web search tool.
//!
//! `search` and `resolve` run once against a config file; `serve` speaks
//! line-delimited JSON on stdio so a host process can drive the tool.

pub use cmd::{Cli, Command};

pub mod cmd;
