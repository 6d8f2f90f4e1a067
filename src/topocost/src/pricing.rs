use serde::{Deserialize, Serialize};

use crate::money::{Cost, CostTrait};

/// Per-unit hardware prices and the switch fan-out. Loaded once and passed
/// to the cost model at construction, never mutated afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pricing {
    /// Per-host silicon chip
    pub silicon: Cost,
    /// Per-host port expander
    pub port_expander: Cost,
    /// Commodity (top-of-rack grade) switch
    pub commodity_switch: Cost,
    /// High-end (aggregation/core grade) switch
    pub high_end_switch: Cost,
    /// One transceiver; every fiber link needs one at each end
    pub transceiver: Cost,
    /// Short-reach (50 m) fiber
    pub fiber_50m: Cost,
    /// Long-reach (100 m) fiber
    pub fiber_100m: Cost,
    /// Maximum number of downstream links one switch aggregates
    pub fanout: usize,
}

impl Default for Pricing {
    fn default() -> Self {
        Pricing {
            silicon: 20.dollars(),
            port_expander: 50.dollars(),
            commodity_switch: 7000.dollars(),
            high_end_switch: 14000.dollars(),
            transceiver: 200.dollars(),
            fiber_50m: 50.dollars(),
            fiber_100m: 100.dollars(),
            fanout: 48,
        }
    }
}

pub fn read_pricing<P: AsRef<std::path::Path>>(path: P) -> Pricing {
    use std::io::Read;
    let mut file = std::fs::File::open(path).expect("fail to open file");
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    toml::from_str(&content).expect("parse failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pricing_toml() {
        let content = r#"
            silicon = 25
            port_expander = 60
            commodity_switch = 8000
            high_end_switch = 16000
            transceiver = 250
            fiber_50m = 55
            fiber_100m = 110
            fanout = 24
        "#;
        let p: Pricing = toml::from_str(content).unwrap();
        assert_eq!(p.commodity_switch, 8000.dollars());
        assert_eq!(p.fiber_50m, 55.dollars());
        assert_eq!(p.fanout, 24);
    }

    #[test]
    fn default_roundtrip() {
        let p = Pricing::default();
        let s = toml::to_string(&p).unwrap();
        let q: Pricing = toml::from_str(&s).unwrap();
        assert_eq!(q.silicon, p.silicon);
        assert_eq!(q.fanout, p.fanout);
    }
}
