use serde::{Deserialize, Serialize};

/// How the aggregator prices a shipping method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingPolicy {
    Flat,
    Percent,
    ByWeight,
    ByValue,
}

/// Percentage surcharge or discount on top of the aggregator price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PercentPolicy {
    pub amount: f64,
    pub increase: bool,
}

/// One fixed-price band, keyed by weight or basket value depending on policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceTier {
    pub from: f64,
    pub amount: f64,
}

/// A single carrier service offered under a shipping method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingService {
    pub id: i64,
    pub base_price: f64,
}

/// Aggregator-owned shipping method definition. Read-only on this side;
/// the sync service projects it onto a local carrier record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: i64,
    pub title: String,
    pub tax_class: Option<u32>,
    pub pricing_policy: PricingPolicy,
    pub percent_policy: Option<PercentPolicy>,
    pub weight_tiers: Vec<PriceTier>,
    pub value_tiers: Vec<PriceTier>,
    pub services: Vec<ShippingService>,
    pub is_drop_off: bool,
    pub logo_url: Option<String>,
}

impl ShippingMethod {
    pub fn new(id: i64, title: String, pricing_policy: PricingPolicy) -> Self {
        Self {
            id,
            title,
            tax_class: None,
            pricing_policy,
            percent_policy: None,
            weight_tiers: Vec::new(),
            value_tiers: Vec::new(),
            services: Vec::new(),
            is_drop_off: false,
            logo_url: None,
        }
    }

    /// Minimal base price across the method's services
    pub fn cheapest_service_price(&self) -> Option<f64> {
        self.services.iter().map(|s| s.base_price).reduce(f64::min)
    }
}
