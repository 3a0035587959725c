use std::sync::LazyLock;

use regex::Regex;

static BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const products\s*=\s*\[([\s\S]*?)\];").unwrap());

// One product object literal: six fields, fixed order, single-quoted strings
// and a bare decimal for basePrice. name/image/stock must be non-empty,
// ingredients/benefits may be empty. Anything else is not a match.
static OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \{\s*name:\s*'([^']+)'\s*,
        \s*image:\s*'([^']+)'\s*,
        \s*stock:\s*'([^']+)'\s*,
        \s*basePrice:\s*([0-9.]+)\s*,
        \s*ingredients:\s*'([^']*)'\s*,
        \s*benefits:\s*'([^']*)'\s*\}",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub image: String,
    pub stock: String,
    pub base_price: f64,
    pub ingredients: String,
    pub benefits: String,
}

/// Locate the inline `const products = [ ... ];` literal in a page.
/// Returns the text between the brackets, or None if the page has no such
/// block.
pub fn product_block(html: &str) -> Option<&str> {
    BLOCK_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Match every well-formed six-field object in a products block. Objects
/// that deviate from the expected shape (wrong field order, double quotes,
/// a basePrice that is not a number) simply don't match and are skipped.
pub fn parse_fields(block: &str) -> Vec<ProductFields> {
    OBJECT_RE
        .captures_iter(block)
        .filter_map(|caps| {
            let base_price = caps[4].parse::<f64>().ok()?;
            Some(ProductFields {
                name: caps[1].trim().to_string(),
                image: caps[2].trim().to_string(),
                stock: caps[3].trim().to_string(),
                base_price,
                ingredients: caps[5].trim().to_string(),
                benefits: caps[6].trim().to_string(),
            })
        })
        .collect()
}

// ── Tests ──
