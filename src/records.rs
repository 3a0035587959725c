use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A product as scraped from a catalog page. Also the schema of the merged
/// JSON the builder reads back, so everything except `name` tolerates being
/// absent there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProduct {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: Option<String>,
    #[serde(rename = "basePrice", default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub benefits: String,
}

/// A normalized catalog entry as the site front-end consumes it.
/// Field order here is the serialized field order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalProduct {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub ingredients: String,
    pub stock: String,
    pub weights: Weights,
}

/// Per-package-size prices derived from one base price. Values are
/// `serde_json::Number` so a whole-rupee price serializes as an integer
/// and anything else keeps its two decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    #[serde(rename = "250g")]
    pub quarter_kg: Number,
    #[serde(rename = "500g")]
    pub half_kg: Number,
    #[serde(rename = "1kg")]
    pub one_kg: Number,
}
