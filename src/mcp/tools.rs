//! The `parse-package` MCP tool: descriptor and execution.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::mcp::Tool;
use crate::parser;

/// Outcome of one tool invocation: a text payload that is either the
/// canonical analysis JSON or a human-readable error message, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: String) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            content: message,
            is_error: true,
        }
    }
}

/// Descriptor for the `parse-package` tool
pub fn parse_package_tool() -> Tool {
    Tool {
        name: "parse-package".to_string(),
        description:
            "Parse a Package.swift file and extract dependencies, products, and targets"
                .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the Package.swift file"
                }
            },
            "required": ["path"]
        }),
    }
}

/// Execute `parse-package` against the tool-call arguments.
///
/// Every failure is reported through the returned `ToolResult`; nothing
/// propagates to the protocol layer as a fault.
pub fn parse_package(arguments: &Value) -> ToolResult {
    let path = arguments
        .get("path")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    if path.is_empty() {
        return ToolResult::error("Error: Missing required parameter 'path'".to_string());
    }

    if !Path::new(path).exists() {
        return ToolResult::error(format!("Error: File does not exist at path: {}", path));
    }

    match analyze_file(path) {
        Ok(json) => ToolResult::success(json),
        Err(e) => ToolResult::error(format!("Error parsing {}: {}", path, e)),
    }
}

/// Read, parse, and serialize one manifest to its canonical JSON form
pub fn analyze_file(path: &str) -> anyhow::Result<String> {
    let content = fs::read_to_string(path)?;
    let analysis = parser::parse(&content)?;
    Ok(analysis.to_canonical_json()?)
}
