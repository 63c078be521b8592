use std::sync::LazyLock;

use regex::Regex;

use crate::domain::requests::SubmitOrderRequest;

/// Tarpaulin dimensions, e.g. "3ft x 5ft" or "2.5 FT X 4 FT".
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*ft\s*x\s*(\d+(?:\.\d+)?)\s*ft").expect("valid size pattern")
});

const AREA_RATE: f64 = 50.0; // ₱50 per sq ft
const DELIVERY_FEE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub base_price: f64,
    pub additional_charges: f64,
    pub total: f64,
}

fn base_price_for(category: &str) -> f64 {
    match category {
        "Shirts" => 500.0,
        "Tarpaulin" => 800.0,
        "Print & Xerox" => 50.0,
        "Stickers" => 200.0,
        "Others" => 300.0,
        _ => 0.0,
    }
}

/// Pure function of the payload: base price from the category table, plus a
/// per-square-foot charge for tarpaulins with a parseable size, plus a flat
/// delivery fee. A size that does not match the pattern contributes nothing;
/// the validator owns rejecting it, not this calculation.
pub fn calculate_pricing(req: &SubmitOrderRequest) -> Pricing {
    let category = req.service_category.as_deref().unwrap_or("");
    let base_price = base_price_for(category);
    let mut additional_charges = 0.0;

    if category == "Tarpaulin" {
        if let Some(size) = req.size.as_deref() {
            if let Some(caps) = SIZE_PATTERN.captures(size) {
                let width: f64 = caps[1].parse().unwrap_or(0.0);
                let height: f64 = caps[2].parse().unwrap_or(0.0);
                additional_charges = (width * height * AREA_RATE).round();
            }
        }
    }

    if req.delivery_preference.as_deref() == Some("delivery") {
        additional_charges += DELIVERY_FEE;
    }

    Pricing {
        base_price,
        additional_charges,
        total: base_price + additional_charges,
    }
}
