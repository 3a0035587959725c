use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::build;

pub struct CatalogStats {
    pub total: usize,
    pub priced: usize,
    pub unpriced: usize,
    pub by_category: BTreeMap<String, usize>,
    pub out_of_stock: usize,
}

/// Summarize the merged JSON the way the builder will see it: categories
/// are counted post-resolution, so the report matches what ends up on the
/// site.
pub fn collect(path: &Path) -> Result<CatalogStats> {
    let raw = build::load_raw(path)?;
    let catalog = build::build_catalog(&raw);

    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut out_of_stock = 0;
    for product in &catalog {
        *by_category.entry(product.category.clone()).or_insert(0) += 1;
        if product.stock != "in" {
            out_of_stock += 1;
        }
    }

    Ok(CatalogStats {
        total: raw.len(),
        priced: catalog.len(),
        unpriced: raw.len() - catalog.len(),
        by_category,
        out_of_stock,
    })
}

pub fn print(stats: &CatalogStats) {
    println!("Total:        {}", stats.total);
    println!("Priced:       {}", stats.priced);
    println!("Unpriced:     {}", stats.unpriced);
    println!("Out of stock: {}", stats.out_of_stock);
    println!("\n--- Categories ---");
    for (category, count) in &stats.by_category {
        println!("  {:<12} {:>4}", category, count);
    }
}

// ── Tests ──
