use shiplink_core::SyncError;
use shiplink_shared::{CalculationMode, CostTier, PricingPolicy, ShippingMethod};

/// Cost matrix derived from a shipping method's pricing policy
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedCost {
    pub calculation: CalculationMode,
    pub tiers: Vec<CostTier>,
}

/// Project a shipping method's pricing policy onto a storefront cost matrix.
///
/// Flat and Percent yield a single band starting at zero, priced from the
/// cheapest service; ByWeight and ByValue carry the configured bands over
/// verbatim, order preserved. A Flat/Percent method with no services has no
/// price source and is rejected.
pub fn derive_cost(method: &ShippingMethod) -> Result<DerivedCost, SyncError> {
    match method.pricing_policy {
        PricingPolicy::Flat | PricingPolicy::Percent => {
            let base = method
                .cheapest_service_price()
                .ok_or(SyncError::NoPriceSource(method.id))?;

            let amount = match (method.pricing_policy, method.percent_policy) {
                (PricingPolicy::Percent, Some(policy)) => {
                    let part = base * (policy.amount / 100.0);
                    if policy.increase {
                        base + part
                    } else {
                        base - part
                    }
                }
                _ => base,
            };

            Ok(DerivedCost {
                calculation: CalculationMode::Price,
                tiers: vec![CostTier::new(0.0, amount)],
            })
        }
        PricingPolicy::ByWeight => Ok(DerivedCost {
            calculation: CalculationMode::Weight,
            tiers: method
                .weight_tiers
                .iter()
                .map(|tier| CostTier::new(tier.from, tier.amount))
                .collect(),
        }),
        PricingPolicy::ByValue => Ok(DerivedCost {
            calculation: CalculationMode::Price,
            tiers: method
                .value_tiers
                .iter()
                .map(|tier| CostTier::new(tier.from, tier.amount))
                .collect(),
        }),
    }
}
