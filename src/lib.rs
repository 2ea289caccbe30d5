//! spm-analyzer - Swift Package Manifest Analyzer
//! This library provides the core functionality for analyzing Package.swift
//! manifests and exposing the analysis as an MCP tool.

pub mod analysis;
pub mod mcp;
pub mod output;
pub mod parser;

// Re-export main types for convenience
pub use analysis::{PackageAnalysis, PackageDependency};
pub use mcp::tools::ToolResult;
pub use mcp::McpServer;
pub use parser::{parse, PackageParser, ParseError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
