//! Catalogs command - lists the built-in catalogs

use super::bootstrap;
use crate::infrastructure::catalog::{CatalogSummary, Catalogs};

/// Run the catalogs command
pub fn run() -> anyhow::Result<()> {
    let config = bootstrap();
    let catalogs = Catalogs::build(config.registry.duplicate_policy)?;

    for line in render(&catalogs.summaries()) {
        println!("{line}");
    }

    Ok(())
}

fn render(summaries: &[CatalogSummary]) -> Vec<String> {
    let mut lines = Vec::new();

    for summary in summaries {
        lines.push(format!("{}:", summary.catalog));
        for entry in &summary.entries {
            if entry.discriminator.to_string() == entry.variant {
                lines.push(format!("  {}", entry.discriminator));
            } else {
                lines.push(format!("  {} -> {}", entry.discriminator, entry.variant));
            }
        }
    }

    lines
}
