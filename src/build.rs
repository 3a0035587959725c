use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Number;
use tracing::debug;

use crate::config::{CATEGORY_KEYWORDS, DEFAULT_STOCK, FALLBACK_CATEGORY, UNRESOLVED_CATEGORY};
use crate::records::{FinalProduct, RawProduct, Weights};

/// Read the merged JSON back. A record without a `name` fails
/// deserialization here, which is deliberate: by this stage the data is
/// supposed to be trustworthy.
pub fn load_raw(path: &Path) -> Result<Vec<RawProduct>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let products = serde_json::from_str(&json)
        .with_context(|| format!("malformed product list in {}", path.display()))?;
    Ok(products)
}

/// Normalize the merged raw list into the final ordered catalog. Records
/// with no usable base price are dropped before ids are assigned, so ids
/// stay dense over the surviving records.
pub fn build_catalog(raw: &[RawProduct]) -> Vec<FinalProduct> {
    let mut records: Vec<FinalProduct> = Vec::new();

    for item in raw {
        let base_price = item.base_price.unwrap_or(0.0);
        if base_price <= 0.0 {
            debug!("skipping '{}': no base price", item.name);
            continue;
        }

        let description = if !item.benefits.is_empty() {
            item.benefits.as_str()
        } else if !item.ingredients.is_empty() {
            item.ingredients.as_str()
        } else {
            ""
        };

        records.push(FinalProduct {
            id: records.len() as u32 + 1,
            name: item.name.trim().to_string(),
            category: resolve_category(item),
            image: normalize_image(&item.image),
            description: description.trim().to_string(),
            ingredients: item.ingredients.trim().to_string(),
            stock: item.stock.clone().unwrap_or_else(|| DEFAULT_STOCK.to_string()),
            weights: Weights {
                quarter_kg: tier_price(base_price / 4.0),
                half_kg: tier_price(base_price / 2.0),
                one_kg: tier_price(base_price),
            },
        });
    }

    records
}

/// Explicit category wins unless it is the "resolve later" placeholder;
/// then the first keyword-table row matching the lowercased name; then the
/// fallback.
fn resolve_category(item: &RawProduct) -> String {
    let current = item.category.trim();
    if !current.is_empty() && current != UNRESOLVED_CATEGORY {
        return current.to_string();
    }

    let name = item.name.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| name.contains(kw)) {
            return (*category).to_string();
        }
    }
    FALLBACK_CATEGORY.to_string()
}

/// Round to 2 decimals; whole values become JSON integers, the rest keep
/// their decimals.
fn tier_price(amount: f64) -> Number {
    let val = (amount * 100.0).round() / 100.0;
    if val.fract() == 0.0 {
        Number::from(val as i64)
    } else {
        Number::from_f64(val).unwrap_or_else(|| Number::from(0))
    }
}

/// Strip one leading `./`, and only a leading one.
fn normalize_image(path: &str) -> String {
    path.strip_prefix("./").unwrap_or(path).to_string()
}

/// Render the browser-loadable script: a `const products = [...]` binding
/// plus a CommonJS export guard so tests can require() the same file.
pub fn render_script(records: &[FinalProduct]) -> Result<String> {
    let array = serde_json::to_string_pretty(records)?;
    Ok(format!(
        "const products = {array};\n\nif (typeof module !== 'undefined' && module.exports) {{\n  module.exports = products;\n}}\n"
    ))
}

pub fn write_script(records: &[FinalProduct], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let contents = render_script(records)?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, category: &str, base_price: Option<f64>) -> RawProduct {
        RawProduct {
            name: name.to_string(),
            image: "images/item.jpg".to_string(),
            category: category.to_string(),
            stock: Some("in".to_string()),
            base_price,
            ingredients: "Some ingredients".to_string(),
            benefits: "Some benefits".to_string(),
        }
    }

    fn tiers(base: f64) -> (String, String, String) {
        let w = Weights {
            quarter_kg: tier_price(base / 4.0),
            half_kg: tier_price(base / 2.0),
            one_kg: tier_price(base),
        };
        (
            w.quarter_kg.to_string(),
            w.half_kg.to_string(),
            w.one_kg.to_string(),
        )
    }

    #[test]
    fn whole_prices_serialize_as_integers() {
        assert_eq!(tiers(100.0), ("25".into(), "50".into(), "100".into()));
        assert_eq!(tiers(40.0), ("10".into(), "20".into(), "40".into()));
    }

    #[test]
    fn fractional_prices_keep_two_decimals() {
        assert_eq!(tiers(99.0), ("24.75".into(), "49.5".into(), "99".into()));
        assert_eq!(tiers(15.5), ("3.88".into(), "7.75".into(), "15.5".into()));
    }

    #[test]
    fn explicit_category_used_verbatim() {
        let catalog = build_catalog(&[raw("Ginger Pickle", "Pickles", Some(600.0))]);
        assert_eq!(catalog[0].category, "Pickles");
    }

    #[test]
    fn sentinel_category_never_used_verbatim() {
        let catalog = build_catalog(&[raw("Gongura Special", "Mixed", Some(300.0))]);
        assert_eq!(catalog[0].category, "Pickles");
    }

    #[test]
    fn empty_category_falls_through_to_keywords() {
        let catalog = build_catalog(&[raw("Karam Podi", "", Some(250.0))]);
        assert_eq!(catalog[0].category, "Spices");
    }

    #[test]
    fn keyword_table_order_breaks_ties() {
        // "podi" (Spices) and "honey" (Sweets) both match; Spices comes
        // first in the table.
        let catalog = build_catalog(&[raw("Honey Podi", "Mixed", Some(200.0))]);
        assert_eq!(catalog[0].category, "Spices");
    }

    #[test]
    fn unmatched_name_defaults_to_snacks() {
        let catalog = build_catalog(&[raw("Chekkalu", "Mixed", Some(220.0))]);
        assert_eq!(catalog[0].category, "Snacks");
    }

    #[test]
    fn unpriced_records_dropped_and_ids_stay_dense() {
        let catalog = build_catalog(&[
            raw("A", "Pickles", Some(100.0)),
            raw("B", "Pickles", None),
            raw("C", "Pickles", Some(0.0)),
            raw("D", "Pickles", Some(200.0)),
        ]);
        let ids: Vec<(u32, &str)> =
            catalog.iter().map(|p| (p.id, p.name.as_str())).collect();
        assert_eq!(ids, vec![(1, "A"), (2, "D")]);
    }

    #[test]
    fn id_assignment_is_deterministic() {
        let input = vec![
            raw("A", "Pickles", Some(100.0)),
            raw("B", "Pickles", None),
            raw("C", "Pickles", Some(200.0)),
        ];
        let first: Vec<u32> = build_catalog(&input).iter().map(|p| p.id).collect();
        let second: Vec<u32> = build_catalog(&input).iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2]);
    }

    #[test]
    fn image_leading_dot_slash_stripped_once() {
        assert_eq!(normalize_image("./cat.jpg"), "cat.jpg");
        assert_eq!(normalize_image("img/cat.jpg"), "img/cat.jpg");
        assert_eq!(normalize_image("././cat.jpg"), "./cat.jpg");
        assert_eq!(normalize_image("img/./cat.jpg"), "img/./cat.jpg");
    }

    #[test]
    fn description_prefers_benefits_then_ingredients() {
        let mut item = raw("A", "Pickles", Some(100.0));
        item.benefits = "  Good for you  ".to_string();
        assert_eq!(build_catalog(&[item.clone()])[0].description, "Good for you");

        item.benefits.clear();
        item.ingredients = "Ginger, oil".to_string();
        assert_eq!(build_catalog(&[item.clone()])[0].description, "Ginger, oil");

        item.ingredients.clear();
        assert_eq!(build_catalog(&[item])[0].description, "");
    }

    #[test]
    fn stock_defaults_when_absent() {
        let mut item = raw("A", "Pickles", Some(100.0));
        item.stock = None;
        assert_eq!(build_catalog(&[item])[0].stock, "in");

        let mut out = raw("B", "Pickles", Some(100.0));
        out.stock = Some("out".to_string());
        assert_eq!(build_catalog(&[out])[0].stock, "out");
    }

    #[test]
    fn missing_name_is_fatal_on_load() {
        let json = r#"[{ "image": "a.jpg", "basePrice": 100 }]"#;
        assert!(serde_json::from_str::<Vec<RawProduct>>(json).is_err());
    }

    #[test]
    fn null_base_price_tolerated_on_load() {
        let json = r#"[{ "name": "A", "basePrice": null }]"#;
        let parsed: Vec<RawProduct> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].base_price, None);
        assert!(build_catalog(&parsed).is_empty());
    }

    #[test]
    fn script_shape() {
        let catalog = build_catalog(&[raw("A", "Pickles", Some(100.0))]);
        let script = render_script(&catalog).unwrap();
        assert!(script.starts_with("const products = [\n  {\n    \"id\": 1,"));
        assert!(script.ends_with(
            ";\n\nif (typeof module !== 'undefined' && module.exports) {\n  module.exports = products;\n}\n"
        ));
    }

    #[test]
    fn script_preserves_non_ascii() {
        let mut item = raw("Kājji Kāyalu", "Sweets", Some(150.0));
        item.benefits = "పండుగ స్పెషల్".to_string();
        let script = render_script(&build_catalog(&[item])).unwrap();
        assert!(script.contains("Kājji Kāyalu"));
        assert!(script.contains("పండుగ స్పెషల్"));
        assert!(!script.contains("\\u"));
    }

    #[test]
    fn weights_serialize_with_tier_labels() {
        let catalog = build_catalog(&[raw("A", "Pickles", Some(99.0))]);
        let json = serde_json::to_value(&catalog[0]).unwrap();
        assert_eq!(json["weights"]["250g"], serde_json::json!(24.75));
        assert_eq!(json["weights"]["500g"], serde_json::json!(49.5));
        assert_eq!(json["weights"]["1kg"], serde_json::json!(99));
    }
}
