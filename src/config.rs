use std::path::{Path, PathBuf};

/// A catalog page and the category label every product scraped from it gets.
pub struct SourcePage {
    pub file: &'static str,
    pub category: &'static str,
}

/// Pages to scan, in order. Order matters: when the same product name shows
/// up on two pages, the earlier page wins.
pub const SOURCE_PAGES: &[SourcePage] = &[
    SourcePage { file: "Pickels.html", category: "Pickles" },
    SourcePage { file: "Sweets.html", category: "Sweets" },
    SourcePage { file: "Spices.html", category: "Spices" },
    SourcePage { file: "Snacks.html", category: "Snacks" },
    SourcePage { file: "Snacks3.html", category: "Snacks" },
    SourcePage { file: "shopus3.html", category: UNRESOLVED_CATEGORY },
];

/// Placeholder category meaning "infer from the product name at build time".
pub const UNRESOLVED_CATEGORY: &str = "Mixed";

/// Category used when keyword inference finds nothing.
pub const FALLBACK_CATEGORY: &str = "Snacks";

/// Stock token assumed when a record carries none.
pub const DEFAULT_STOCK: &str = "in";

/// Keyword table for category inference, tested against the lowercased
/// product name. Row order matters: the first row with a hit wins.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Pickles",
        &["pickle", "gongura", "mirchi", "mango", "garlic", "chicken", "mutton", "prawns"],
    ),
    (
        "Spices",
        &["podi", "masala", "powder", "kaaram", "paste", "podulu"],
    ),
    (
        "Sweets",
        &["ladoo", "laddu", "chikki", "sweet", "gavvalu", "ariselu", "honey", "chalimidi", "kajji"],
    ),
];

pub fn pages_dir(root: &Path) -> PathBuf {
    root.join("public_html")
}

pub fn merged_json_path(root: &Path) -> PathBuf {
    root.join("scripts").join("products.json")
}

pub fn site_script_path(root: &Path) -> PathBuf {
    root.join("public_html").join("js").join("products.js")
}
