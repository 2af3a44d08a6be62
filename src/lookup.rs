//! Barcode lookup against the OpenFoodFacts product API.

use log::{debug, warn};
use serde::Deserialize;

use crate::error::Result;
use crate::models::NewFood;

pub const OPEN_FOOD_FACTS_URL: &str = "https://world.openfoodfacts.org/api/v2";

/// Name used when the product record carries none.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown product";

/// Anything that can turn a barcode into a food record.
pub trait BarcodeLookup {
    /// Returns `None` when the product is unknown or the lookup failed.
    fn lookup(&self, barcode: &str) -> Option<NewFood>;
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    product: Option<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    product_name: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Debug, Default, Deserialize)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal_100g: Option<f64>,
    proteins_100g: Option<f64>,
    fat_100g: Option<f64>,
    carbohydrates_100g: Option<f64>,
}

/// Decode an API response body into a food record.
pub fn parse_product(barcode: &str, body: &str) -> Result<Option<NewFood>> {
    let response: ProductResponse = serde_json::from_str(body)?;
    if response.status != 1 {
        return Ok(None);
    }

    let Some(product) = response.product else {
        return Ok(None);
    };

    let name = product
        .product_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string());

    Ok(Some(NewFood {
        name,
        barcode: Some(barcode.to_string()),
        calories: product.nutriments.energy_kcal_100g,
        proteins: product.nutriments.proteins_100g,
        fats: product.nutriments.fat_100g,
        carbs: product.nutriments.carbohydrates_100g,
    }))
}

/// Blocking OpenFoodFacts client.
pub struct OpenFoodFactsClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl OpenFoodFactsClient {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_FOOD_FACTS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn product_url(&self, barcode: &str) -> String {
        format!("{}/product/{}", self.base_url.trim_end_matches('/'), barcode)
    }

    fn fetch(&self, barcode: &str) -> Result<Option<NewFood>> {
        let url = self.product_url(barcode);
        debug!("GET {}", url);
        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        parse_product(barcode, &body)
    }
}

impl Default for OpenFoodFactsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BarcodeLookup for OpenFoodFactsClient {
    fn lookup(&self, barcode: &str) -> Option<NewFood> {
        match self.fetch(barcode) {
            Ok(found) => found,
            Err(e) => {
                warn!("Barcode lookup for {} failed: {}", barcode, e);
                None
            }
        }
    }
}
