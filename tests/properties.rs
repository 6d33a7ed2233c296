mod common;

use common::{assert_valid_flow, build, cut_capacity, residual_capacities};
use network_flow_lab::generators;
use network_flow_lab::maximum_flow::stats::FlowStats;
use network_flow_lab::maximum_flow::Algorithm;
use proptest::prelude::*;

fn network_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (2usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n, 0i64..20), 0..48)))
}

proptest! {
    #[test]
    fn prop_algorithms_agree_and_flows_are_valid((n, edges) in network_strategy(), sink_offset in 1usize..12) {
        let source = 0;
        let sink = sink_offset % n;
        prop_assume!(sink != source);

        let base = build(n, &edges);
        let mut values = Vec::new();
        for algorithm in Algorithm::ALL {
            let mut network = base.clone();
            let value = algorithm.run(&mut network, source, sink, &mut FlowStats::default()).unwrap();
            assert_valid_flow(&network, source, sink, value);
            prop_assert_eq!(cut_capacity(&network, &network.minimum_cut(source)), value);
            prop_assert!(!network.minimum_cut(source).contains(&sink));
            values.push(value);
        }
        prop_assert_eq!(values[0], values[1]);
    }

    #[test]
    fn prop_rerun_is_a_no_op((n, edges) in network_strategy()) {
        let sink = n - 1;
        for algorithm in Algorithm::ALL {
            let mut network = build(n, &edges);
            algorithm.run(&mut network, 0, sink, &mut FlowStats::default()).unwrap();
            let after = residual_capacities(&network);

            let mut stats = FlowStats::default();
            prop_assert_eq!(algorithm.run(&mut network, 0, sink, &mut stats).unwrap(), 0);
            prop_assert_eq!(residual_capacities(&network), after);
            prop_assert_eq!(stats.augmentations, 0);
        }
    }

    #[test]
    fn prop_matching_algorithms_agree(k in 1usize..5, degree in 0usize..4, seed in 1u64..1000) {
        let instance = generators::bipartite_matching(k, degree.min(1 << k), seed).unwrap();

        let mut ek = instance.network.clone();
        let mut dinic = instance.network.clone();
        let a = Algorithm::EdmondsKarp.run(&mut ek, instance.source, instance.sink, &mut FlowStats::default()).unwrap();
        let b = Algorithm::Dinic.run(&mut dinic, instance.source, instance.sink, &mut FlowStats::default()).unwrap();

        prop_assert_eq!(a, b);
        prop_assert!(a <= 1 << k);
        if degree == 0 {
            prop_assert_eq!(a, 0);
        }
    }
}
