//! Terminal rendering for CLI results

use colored::Colorize;

use crate::analysis::PackageAnalysis;

/// Output format for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Render an analysis as a human-readable summary
pub fn render_text(analysis: &PackageAnalysis) -> String {
    let mut out = String::new();

    match &analysis.package_name {
        Some(name) => out.push_str(&format!("{} {}\n", "Package:".bold(), name.cyan())),
        None => out.push_str(&format!("{} {}\n", "Package:".bold(), "(unnamed)".dimmed())),
    }

    out.push_str(&format!(
        "\n{} ({})\n",
        "Dependencies".bold(),
        analysis.dependencies.len()
    ));
    for dep in &analysis.dependencies {
        out.push_str(&format!(
            "  {} {} {} ({})\n",
            "•".green(),
            dep.name,
            dep.requirement.yellow(),
            dep.url.dimmed()
        ));
    }

    out.push_str(&format!("\n{} ({})\n", "Products".bold(), analysis.products.len()));
    for product in &analysis.products {
        out.push_str(&format!("  {} {}\n", "•".green(), product));
    }

    out.push_str(&format!("\n{} ({})\n", "Targets".bold(), analysis.targets.len()));
    for target in &analysis.targets {
        out.push_str(&format!("  {} {}\n", "•".green(), target));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PackageDependency;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("anything"), OutputFormat::Text);
    }

    #[test]
    fn test_render_text_lists_everything() {
        let analysis = PackageAnalysis {
            package_name: Some("Demo".to_string()),
            dependencies: vec![PackageDependency {
                name: "swift-log".to_string(),
                url: "https://github.com/apple/swift-log.git".to_string(),
                requirement: ">=1.0.0".to_string(),
            }],
            products: vec!["Demo".to_string()],
            targets: vec!["Demo".to_string(), "DemoTests".to_string()],
        };

        let text = render_text(&analysis);
        assert!(text.contains("Demo"));
        assert!(text.contains("swift-log"));
        assert!(text.contains(">=1.0.0"));
        assert!(text.contains("DemoTests"));
    }
}
