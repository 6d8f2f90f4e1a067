use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Cost;
use crate::pricing::Pricing;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("node count must be a positive integer, got: {0}")]
    InvalidNodeCount(usize),
}

/// Node-count regime relative to the switch fan-out F: one switch suffices,
/// a two-tier tree fits, or a three-tier tree is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Small,
    Medium,
    Large,
}

impl Tier {
    #[inline]
    pub fn classify(n: usize, fanout: usize) -> Tier {
        if n <= fanout {
            Tier::Small
        } else if n <= fanout * fanout {
            Tier::Medium
        } else {
            Tier::Large
        }
    }
}

/// The closed set of interconnection strategies the model can price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args")]
pub enum Strategy {
    /// No switches at all, each host carries its own silicon + port expander
    Switchless,
    /// Tree sized by dividing by the fan-out, fewest aggregation switches
    HierarchyLow,
    /// Tree sized from fractional powers of n for a more balanced layer split
    HierarchyBalanced,
    /// Balanced tree with replicated aggregation and core layers
    HierarchyBalancedReplicated {
        /// Replication factor of the aggregation layer
        agg_replication: usize,
        /// Additional replication factor of the core layer (total r1 * r2)
        core_replication: usize,
    },
    /// k-ary fat tree, N = k^3 / 4
    FatTree,
}

impl Strategy {
    /// All strategies with their default parameters, in the order the cost
    /// curves are usually reported.
    pub fn all() -> Vec<Strategy> {
        vec![
            Strategy::Switchless,
            Strategy::HierarchyLow,
            Strategy::HierarchyBalanced,
            Strategy::HierarchyBalancedReplicated {
                agg_replication: 4,
                core_replication: 4,
            },
            Strategy::FatTree,
        ]
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Switchless => write!(f, "switchless"),
            Strategy::HierarchyLow => write!(f, "hier_low"),
            Strategy::HierarchyBalanced => write!(f, "hier_balanced"),
            Strategy::HierarchyBalancedReplicated {
                agg_replication,
                core_replication,
            } => write!(f, "hier_replicated_{}_{}", agg_replication, core_replication),
            Strategy::FatTree => write!(f, "fattree"),
        }
    }
}

#[inline]
fn div_ceil(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

#[inline]
fn pow_ceil(n: usize, exp: f64) -> usize {
    (n as f64).powf(exp).ceil() as usize
}

/// Estimates the capital cost of building a network connecting `n` end
/// hosts. Pure arithmetic over the bound pricing, no state.
#[derive(Debug, Clone)]
pub struct CostModel {
    pricing: Pricing,
}

impl CostModel {
    pub fn new(pricing: Pricing) -> Self {
        CostModel { pricing }
    }

    #[inline]
    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// Dispatch to the strategy's cost function, rejecting `n == 0`. The
    /// individual cost functions leave `n == 0` unspecified.
    pub fn estimate(&self, strategy: Strategy, n: usize) -> Result<Cost, Error> {
        if n == 0 {
            return Err(Error::InvalidNodeCount(n));
        }
        log::debug!(
            "estimating {} for n: {}, tier: {:?}",
            strategy,
            n,
            Tier::classify(n, self.pricing.fanout)
        );
        let cost = match strategy {
            Strategy::Switchless => self.switchless(n),
            Strategy::HierarchyLow => self.hierarchy_low(n),
            Strategy::HierarchyBalanced => self.hierarchy_balanced(n),
            Strategy::HierarchyBalancedReplicated {
                agg_replication,
                core_replication,
            } => self.hierarchy_balanced_replicated(n, agg_replication, core_replication),
            Strategy::FatTree => self.fat_tree(n),
        };
        Ok(cost)
    }

    /// Hosts wired directly to each other, one silicon + port expander unit
    /// per host. The only strategy with no switch in the bill of materials.
    pub fn switchless(&self, n: usize) -> Cost {
        let p = &self.pricing;
        (p.silicon + p.port_expander) * n
    }

    /// Tree with the fewest switches per layer: each layer packs the one
    /// below at full fan-out.
    pub fn hierarchy_low(&self, n: usize) -> Cost {
        let p = &self.pricing;
        match Tier::classify(n, p.fanout) {
            Tier::Small => p.commodity_switch,
            Tier::Medium => {
                let ntor = div_ceil(n, p.fanout);
                let nagg = 1;
                let nlink = ntor;
                let ntransceiver = nlink * 2;
                p.commodity_switch * ntor
                    + p.high_end_switch * nagg
                    + p.fiber_50m * nlink
                    + p.transceiver * ntransceiver
            }
            Tier::Large => {
                let ntor = div_ceil(n, p.fanout);
                let nagg = div_ceil(ntor, p.fanout);
                let ncore = 1;
                let nlink50 = ntor * nagg;
                let nlink100 = ncore * nagg;
                let ntransceiver = (nlink100 + nlink50) * 2;
                p.commodity_switch * ntor
                    + p.high_end_switch * nagg
                    + p.high_end_switch * ncore
                    + p.fiber_50m * nlink50
                    + p.fiber_100m * nlink100
                    + p.transceiver * ntransceiver
            }
        }
    }

    /// Tree sized from n^0.5 (two tiers) or n^2/3 and n^1/3 (three tiers),
    /// trading strict fan-out compliance for balanced layer sizes. Every
    /// fractional count is ceiled, partial switches cannot be purchased.
    pub fn hierarchy_balanced(&self, n: usize) -> Cost {
        let p = &self.pricing;
        match Tier::classify(n, p.fanout) {
            Tier::Small => p.commodity_switch,
            Tier::Medium => {
                let ntor = pow_ceil(n, 0.5);
                let nagg = 1;
                let nlink = ntor;
                let ntransceiver = nlink * 2;
                p.commodity_switch * ntor
                    + p.high_end_switch * nagg
                    + p.fiber_50m * nlink
                    + p.transceiver * ntransceiver
            }
            Tier::Large => {
                let ntor = pow_ceil(n, 0.66666);
                let nagg = pow_ceil(n, 0.33333);
                let ncore = 1;
                let nlink50 = ntor * nagg;
                let nlink100 = ncore * nagg;
                let ntransceiver = (nlink100 + nlink50) * 2;
                p.commodity_switch * ntor
                    + p.high_end_switch * nagg
                    + p.high_end_switch * ncore
                    + p.fiber_50m * nlink50
                    + p.fiber_100m * nlink100
                    + p.transceiver * ntransceiver
            }
        }
    }

    /// Balanced tree with the aggregation layer replicated `r1` times and
    /// the core layer `r1 * r2` times for redundancy. Link and transceiver
    /// counts scale with the replicated layers. With `r1 == r2 == 1` this
    /// degenerates to `hierarchy_balanced`.
    pub fn hierarchy_balanced_replicated(&self, n: usize, r1: usize, r2: usize) -> Cost {
        let p = &self.pricing;
        match Tier::classify(n, p.fanout) {
            Tier::Small => p.commodity_switch,
            Tier::Medium => {
                let ntor = pow_ceil(n, 0.5);
                let nagg = r1;
                let nlink = ntor;
                let ntransceiver = nlink * 2;
                p.commodity_switch * ntor
                    + p.high_end_switch * nagg
                    + p.fiber_50m * nlink
                    + p.transceiver * ntransceiver
            }
            Tier::Large => {
                let ntor = pow_ceil(n, 0.66666);
                let nagg = pow_ceil(n, 0.33333) * r1;
                let ncore = r1 * r2;
                let nlink50 = ntor * nagg;
                let nlink100 = ncore * nagg;
                let ntransceiver = (nlink100 + nlink50) * 2;
                p.commodity_switch * ntor
                    + p.high_end_switch * nagg
                    + p.high_end_switch * ncore
                    + p.fiber_50m * nlink50
                    + p.fiber_100m * nlink100
                    + p.transceiver * ntransceiver
            }
        }
    }

    /// k-ary fat tree. N = k^3 / 4, so k = (4N)^(1/3); the exponent
    /// deliberately undershoots 1/3 so that exact cubes do not round up to
    /// the next radix. All switches are commodity grade, and every pod
    /// switch links to every top-tier switch over long-reach fiber.
    pub fn fat_tree(&self, n: usize) -> Cost {
        let p = &self.pricing;
        if n <= p.fanout {
            return p.commodity_switch;
        }
        let k = pow_ceil(n * 4, 0.33333333333);
        let npodswitch = k * k;
        let ntopswitch = div_ceil(k * k, 4);
        let nlink100 = npodswitch * ntopswitch;
        let ntransceiver = nlink100 * 2;
        p.commodity_switch * (npodswitch + ntopswitch)
            + p.fiber_100m * nlink100
            + p.transceiver * ntransceiver
    }
}
