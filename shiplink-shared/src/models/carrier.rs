use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the storefront evaluates a carrier's cost matrix
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationMode {
    Price,
    Weight,
}

/// Dispatch kind of a carrier record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingKind {
    Standard,
    Alternate,
    Surcharge,
}

/// When the storefront adds the shipping surcharge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurchargeMode {
    AlwaysCharge,
    ExcludeFreeShipping,
}

/// One priced band of a carrier's cost matrix. `factor` is carried for
/// storefront compatibility and is always 0 (factor pricing unsupported).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CostTier {
    pub from: f64,
    pub amount: f64,
    pub factor: f64,
}

impl CostTier {
    pub fn new(from: f64, amount: f64) -> Self {
        Self { from, amount, factor: 0.0 }
    }
}

/// Host-side country reference record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id: u32,
    pub name: String,
    pub iso: String,
}

/// Host-side payment method reference record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: u32,
    pub name: String,
}

/// Local storefront record for a purchasable shipping option. Created and
/// mutated only by the sync service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carrier {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub comment: String,
    pub position: i32,
    pub active: bool,
    pub shipping_kind: ShippingKind,
    pub surcharge_mode: SurchargeMode,
    pub calculation: CalculationMode,
    pub tax_calculation: u32,
    pub countries: Vec<Country>,
    pub payment_methods: Vec<PaymentMethod>,
    pub cost_tiers: Vec<CostTier>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Carrier {
    /// New active standard carrier offered for every country and payment
    /// method the host knows about.
    pub fn new(name: String, countries: Vec<Country>, payment_methods: Vec<PaymentMethod>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description: String::new(),
            comment: String::new(),
            position: 0,
            active: true,
            shipping_kind: ShippingKind::Standard,
            surcharge_mode: SurchargeMode::AlwaysCharge,
            calculation: CalculationMode::Price,
            tax_calculation: 0,
            countries,
            payment_methods,
            cost_tiers: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the whole cost matrix. Old tiers never survive an update.
    pub fn set_cost(&mut self, calculation: CalculationMode, tiers: Vec<CostTier>) {
        self.calculation = calculation;
        self.cost_tiers = tiers;
        self.updated_at = Utc::now();
    }
}

/// Persistent link between one aggregator shipping method and one local
/// carrier. `shipping_method_id` is unique; a mapping is created on add and
/// deleted on delete, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodMapping {
    pub shipping_method_id: i64,
    pub carrier_id: Uuid,
    pub is_drop_off: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_carrier_defaults() {
        let carrier = Carrier::new("DHL Express".to_string(), Vec::new(), Vec::new());

        assert!(carrier.active);
        assert_eq!(carrier.position, 0);
        assert_eq!(carrier.shipping_kind, ShippingKind::Standard);
        assert_eq!(carrier.surcharge_mode, SurchargeMode::AlwaysCharge);
        assert!(carrier.cost_tiers.is_empty());
    }

    #[test]
    fn test_set_cost_replaces_tiers() {
        let mut carrier = Carrier::new("GLS".to_string(), Vec::new(), Vec::new());
        carrier.set_cost(CalculationMode::Price, vec![CostTier::new(0.0, 4.5)]);
        carrier.set_cost(CalculationMode::Weight, vec![CostTier::new(0.0, 2.0), CostTier::new(5.0, 3.5)]);

        assert_eq!(carrier.calculation, CalculationMode::Weight);
        assert_eq!(carrier.cost_tiers.len(), 2);
        assert_eq!(carrier.cost_tiers[1].amount, 3.5);
        assert_eq!(carrier.cost_tiers[1].factor, 0.0);
    }
}
