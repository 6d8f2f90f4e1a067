use topocost::{CostModel, CostTrait, Error, Pricing, Strategy};

fn model() -> CostModel {
    CostModel::new(Pricing::default())
}

fn switch_based() -> Vec<Strategy> {
    Strategy::all()
        .into_iter()
        .filter(|s| !matches!(s, Strategy::Switchless))
        .collect()
}

#[test]
fn switchless_stays_linear() {
    logging::init_log();

    let m = model();
    assert_eq!(m.estimate(Strategy::Switchless, 1).unwrap(), 70.dollars());
    assert_eq!(m.estimate(Strategy::Switchless, 10).unwrap(), 700.dollars());
    assert_eq!(
        m.estimate(Strategy::Switchless, 48).unwrap(),
        3360.dollars()
    );
}

#[test]
fn one_switch_below_fanout() {
    let m = model();
    let commodity = m.pricing().commodity_switch;
    for strategy in switch_based() {
        assert_eq!(m.estimate(strategy, 1).unwrap(), commodity);
        assert_eq!(m.estimate(strategy, 48).unwrap(), commodity);
    }
}

#[test]
fn never_cheaper_than_one_switch() {
    let m = model();
    let commodity = m.pricing().commodity_switch;
    for strategy in switch_based() {
        for &n in &[1, 48, 49, 100, 500, 2304, 2305, 5000, 10_000] {
            assert!(
                m.estimate(strategy, n).unwrap() >= commodity,
                "{} at n = {} cheaper than one switch",
                strategy,
                n
            );
        }
    }
}

#[test]
fn monotonic_in_node_count() {
    let m = model();
    // covers both tier boundaries (48 -> 49, 2304 -> 2305)
    for strategy in Strategy::all() {
        let mut prev = m.estimate(strategy, 1).unwrap();
        for n in 2..=2600 {
            let cost = m.estimate(strategy, n).unwrap();
            assert!(
                cost >= prev,
                "{} decreased from n = {} to n = {}",
                strategy,
                n - 1,
                n
            );
            prev = cost;
        }
    }
}

#[test]
fn fat_tree_radix_432() {
    // (432 * 4)^(1/3) = 12, so 144 pod switches and 36 top switches
    let m = model();
    let npodswitch = 144u64;
    let ntopswitch = 36u64;
    let nlink = npodswitch * ntopswitch;
    let expected = (npodswitch + ntopswitch) * 7000 + nlink * 100 + nlink * 2 * 200;
    assert_eq!(m.estimate(Strategy::FatTree, 432).unwrap().val(), expected);
}

#[test]
fn replication_one_matches_balanced() {
    let m = model();
    let replicated = Strategy::HierarchyBalancedReplicated {
        agg_replication: 1,
        core_replication: 1,
    };
    for &n in &[1, 50, 100, 2304, 2305, 10_000] {
        assert_eq!(
            m.estimate(replicated, n).unwrap(),
            m.estimate(Strategy::HierarchyBalanced, n).unwrap(),
            "mismatch at n = {}",
            n
        );
    }
}

#[test]
fn replication_scales_the_upper_layers() {
    // n = 50 is medium tier: 8 tors, r1 aggregation switches
    let m = model();
    let base = m.hierarchy_balanced_replicated(50, 1, 1);
    let replicated = m.hierarchy_balanced_replicated(50, 4, 4);
    assert_eq!(replicated - base, (m.pricing().high_end_switch * 3u64));
}

#[test]
fn zero_nodes_rejected() {
    let m = model();
    for strategy in Strategy::all() {
        assert_eq!(
            m.estimate(strategy, 0),
            Err(Error::InvalidNodeCount(0)),
            "{} accepted n = 0",
            strategy
        );
    }
}
