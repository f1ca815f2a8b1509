pub mod models;

pub use models::carrier::{
    CalculationMode, Carrier, CostTier, Country, MethodMapping, PaymentMethod, ShippingKind,
    SurchargeMode,
};
pub use models::events::ShippingMethodEvent;
pub use models::method::{
    PercentPolicy, PriceTier, PricingPolicy, ShippingMethod, ShippingService,
};
