//! SPM Analyzer MCP Server Binary
//! This binary provides a JSON-RPC server for AI assistants to analyze Swift
//! package manifests using the MCP
//!
//! ## Usage
//! The server communicates via stdio, reading JSON-RPC requests from stdin
//! and writing responses to stdout. Diagnostics go to stderr so the stdout
//! JSON-RPC stream stays clean.
//!
//! ```bash
//! spm-analyzer-mcp
//! ```
//!
//! ## Available Tools
//!
//! - `parse-package` - Parse a Package.swift file and extract its
//!   dependencies, products, and targets

use spm_analyzer::mcp::McpServer;

fn main() {
    let server = McpServer::new();

    if let Err(e) = server.run() {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}
