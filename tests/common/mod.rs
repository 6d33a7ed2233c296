#![allow(dead_code)]

use network_flow_lab::maximum_flow::network::FlowNetwork;

pub fn build(num_nodes: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork<i64> {
    let mut network = FlowNetwork::new(num_nodes);
    for &(u, v, cap) in edges {
        network.add_edge(u, v, cap).unwrap();
    }
    network
}

pub fn residual_capacities(network: &FlowNetwork<i64>) -> Vec<Vec<i64>> {
    (0..network.num_nodes()).map(|u| network.neighbors(u).iter().map(|e| e.cap).collect()).collect()
}

// net flow leaving every vertex, computed from the forward edges only
pub fn net_outflow(network: &FlowNetwork<i64>) -> Vec<i64> {
    let mut balance = vec![0; network.num_nodes()];
    for (u, _, e) in network.forward_edges() {
        balance[u] += e.flow();
        balance[e.to] -= e.flow();
    }
    balance
}

pub fn cut_capacity(network: &FlowNetwork<i64>, cut: &[usize]) -> i64 {
    let mut in_cut = vec![false; network.num_nodes()];
    for &u in cut {
        in_cut[u] = true;
    }
    network.forward_edges().filter(|(u, _, e)| in_cut[*u] && !in_cut[e.to]).map(|(_, _, e)| e.orig).sum()
}

/// Checks capacity bounds, pairing, conservation and the flow value after a run.
pub fn assert_valid_flow(network: &FlowNetwork<i64>, source: usize, sink: usize, value: i64) {
    assert!(network.is_consistent());
    for (u, _, e) in network.forward_edges() {
        assert!(0 <= e.cap && e.cap <= e.orig, "edge {u}->{} has cap {} of {}", e.to, e.cap, e.orig);
    }

    let balance = net_outflow(network);
    for (v, &b) in balance.iter().enumerate() {
        if v != source && v != sink {
            assert_eq!(b, 0, "flow is not conserved at {v}");
        }
    }
    assert_eq!(balance[source], value);
    assert_eq!(balance[sink], -value);
}
