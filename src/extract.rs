use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::SourcePage;
use crate::parser;
use crate::records::RawProduct;

/// Scan the configured pages in order and merge their embedded product
/// literals into one list. The first page that defines a name (normalized:
/// trimmed, lowercased) wins; later duplicates are dropped.
///
/// An unreadable page aborts the run. A page without a products block just
/// contributes nothing.
pub fn extract_catalog(pages_dir: &Path, pages: &[SourcePage]) -> Result<Vec<RawProduct>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<RawProduct> = Vec::new();

    for page in pages {
        let path = pages_dir.join(page.file);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read source page {}", path.display()))?;

        let Some(block) = parser::product_block(&content) else {
            warn!("no products array found in {}", page.file);
            continue;
        };

        for fields in parser::parse_fields(block) {
            let key = fields.name.to_lowercase();
            if !seen.insert(key) {
                debug!(
                    "duplicate product '{}' in {}, keeping earlier entry",
                    fields.name, page.file
                );
                continue;
            }
            merged.push(RawProduct {
                name: fields.name,
                image: fields.image,
                category: page.category.to_string(),
                stock: Some(fields.stock),
                base_price: Some(fields.base_price),
                ingredients: fields.ingredients,
                benefits: fields.benefits,
            });
        }
    }

    Ok(merged)
}

pub fn write_json(products: &[RawProduct], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(products)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

// ── Tests ──
