pub mod money;
pub use money::{Cost, CostTrait};

pub mod pricing;
pub use pricing::{read_pricing, Pricing};

pub mod model;
pub use model::{CostModel, Error, Strategy, Tier};
