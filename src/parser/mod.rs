//! Best-effort structural extraction from a `Package.swift` manifest.
//!
//! This is a pattern matcher, not a Swift parser: it recovers the package
//! name, dependency declarations, products, and targets by scanning the
//! source text for declaration shapes. It builds no syntax tree, evaluates
//! nothing, and does not balance parentheses. A dependency declaration
//! containing a literal `)` inside an argument value is mis-bounded; this is
//! an accepted limitation of the approach, not something the matchers try to
//! paper over.

use regex::Regex;
use thiserror::Error;

use crate::analysis::{PackageAnalysis, PackageDependency};

/// Name used when no usable path segment can be derived from a URL
const UNKNOWN_NAME: &str = "Unknown";

/// Parser construction failure
///
/// The extraction patterns are fixed at build time, so this only fires if a
/// pattern itself is broken. Extraction over input text never fails.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed extraction pattern: {0}")]
    MalformedPattern(#[from] regex::Error),
}

/// Manifest parser with its extraction patterns compiled once
#[derive(Debug, Clone)]
pub struct PackageParser {
    /// Line-scoped `name:` region, value up to end of line
    name_pattern: Regex,
    /// One `.package(url: "…" …)` declaration, bounded by the first `)`
    dependency_pattern: Regex,
    /// `.library(name: "…"` / `.executable(name: "…"`
    product_pattern: Regex,
    /// `.target(name: "…"` / `.testTarget(…` / `.executableTarget(…`
    target_pattern: Regex,
    /// First non-empty double-quoted literal in a fragment (no escapes)
    quoted_pattern: Regex,
}

impl PackageParser {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            name_pattern: Regex::new(r"name:\s*[^\n]+")?,
            dependency_pattern: Regex::new(r#"\.package\s*\(\s*url:\s*"([^"]+)"[^)]*\)"#)?,
            product_pattern: Regex::new(r#"\.(?:library|executable)\s*\(\s*name:\s*"([^"]+)""#)?,
            target_pattern: Regex::new(
                r#"\.(?:target|testTarget|executableTarget)\s*\(\s*name:\s*"([^"]+)""#,
            )?,
            quoted_pattern: Regex::new(r#""([^"]+)""#)?,
        })
    }

    /// Extract structural facts from manifest source text.
    ///
    /// Never fails: constructs the parser cannot recognize simply yield
    /// empty or absent fields.
    pub fn parse(&self, content: &str) -> PackageAnalysis {
        let package_name = self
            .name_pattern
            .find(content)
            .and_then(|m| self.extract_quoted(m.as_str()));

        let dependencies = self
            .dependency_pattern
            .captures_iter(content)
            .map(|caps| {
                let url = caps[1].to_string();
                PackageDependency {
                    name: repo_name(&url),
                    requirement: self.extract_requirement(&caps[0]),
                    url,
                }
            })
            .collect();

        let products = self
            .product_pattern
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect();

        let targets = self
            .target_pattern
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect();

        PackageAnalysis {
            package_name,
            dependencies,
            products,
            targets,
        }
    }

    /// Normalize the version constraint of one dependency declaration.
    ///
    /// Checked in priority order, first marker wins; when the marker is
    /// present but its quoted value is not extractable, the bare marker name
    /// is returned instead.
    fn extract_requirement(&self, declaration: &str) -> String {
        if declaration.contains(".upToNextMajor") {
            match self.value_after(declaration, ".upToNextMajor") {
                Some(version) => format!("^{}", version),
                None => "upToNextMajor".to_string(),
            }
        } else if declaration.contains(".upToNextMinor") {
            match self.value_after(declaration, ".upToNextMinor") {
                Some(version) => format!("~{}", version),
                None => "upToNextMinor".to_string(),
            }
        } else if declaration.contains(".exact") {
            match self.value_after(declaration, ".exact") {
                Some(version) => format!("=={}", version),
                None => "exact".to_string(),
            }
        } else if declaration.contains("from:") {
            match self.value_after(declaration, "from:") {
                Some(version) => format!(">={}", version),
                None => "from".to_string(),
            }
        } else if declaration.contains("branch:") {
            match self.value_after(declaration, "branch:") {
                Some(branch) => format!("branch:{}", branch),
                None => "branch".to_string(),
            }
        } else {
            "unspecified".to_string()
        }
    }

    /// First quoted literal after the first occurrence of `keyword`
    fn value_after(&self, text: &str, keyword: &str) -> Option<String> {
        let start = text.find(keyword)? + keyword.len();
        self.extract_quoted(&text[start..])
    }

    /// Content of the first non-empty pair of double quotes, if any.
    /// Escaped quotes inside the literal are not handled.
    fn extract_quoted(&self, text: &str) -> Option<String> {
        self.quoted_pattern
            .captures(text)
            .map(|caps| caps[1].to_string())
    }
}

/// Parse manifest text with a freshly constructed parser.
///
/// Fails only if pattern compilation fails, which is a build-time defect
/// rather than a property of the input.
pub fn parse(content: &str) -> Result<PackageAnalysis, ParseError> {
    Ok(PackageParser::new()?.parse(content))
}

/// Derive a dependency name from its source URL: last `/`-delimited segment
/// with a trailing `.git` stripped, or a sentinel when the URL yields no
/// usable segment.
fn repo_name(url: &str) -> String {
    match url.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment
            .strip_suffix(".git")
            .unwrap_or(segment)
            .to_string(),
        _ => UNKNOWN_NAME.to_string(),
    }
}
