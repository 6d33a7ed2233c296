use crate::error::FlowError;
use crate::maximum_flow::network::FlowNetwork;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

pub const MAX_DIMENSION: usize = 30;

#[derive(Clone, Debug)]
pub struct GeneratedInstance {
    pub network: FlowNetwork<i64>,
    pub source: usize,
    pub sink: usize,
    // (u, index in adj[u]) of every generated arc
    pub forward_edges: Vec<(usize, usize)>,
    // set for bipartite matching instances
    pub layout: Option<BipartiteLayout>,
}

impl GeneratedInstance {
    // (from, to, flow) of every generated arc
    pub fn edge_flows(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.forward_edges.iter().map(|&(u, i)| {
            let e = &self.network.neighbors(u)[i];
            (u, e.to, e.flow())
        })
    }
}

// seed 0 draws from entropy
pub fn rng_from_seed(seed: u64) -> StdRng {
    if seed == 0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(seed)
    }
}

fn check_dimension(k: usize) -> Result<(), FlowError> {
    if !(1..=MAX_DIMENSION).contains(&k) {
        return Err(FlowError::InvalidParameter(format!("dimension {k} not in 1..={MAX_DIMENSION}")));
    }
    Ok(())
}

// arcs flip one zero bit to one, capacity uniform in [1, 2^l]
// l = max(H(u), Z(u), H(v), Z(v)) over the k low bits
pub fn hypercube(k: usize, seed: u64) -> Result<GeneratedInstance, FlowError> {
    check_dimension(k)?;
    let mut rng = rng_from_seed(seed);

    let n = 1usize << k;
    let ones = |x: usize| x.count_ones() as usize;
    let mut network: FlowNetwork<i64> = FlowNetwork::new(n);
    let mut forward_edges = Vec::with_capacity(n * k / 2);

    for u in 0..n {
        for bit in 0..k {
            if u & (1 << bit) != 0 {
                continue;
            }
            let v = u | (1 << bit);
            let l = ones(u).max(k - ones(u)).max(ones(v)).max(k - ones(v));
            let capacity = rng.gen_range(1..=(1i64 << l));
            forward_edges.push((u, network.add_edge(u, v, capacity)?));
        }
    }

    debug!("hypercube k={k}: {n} vertices, {} arcs", forward_edges.len());
    Ok(GeneratedInstance { network, source: 0, sink: n - 1, forward_edges, layout: None })
}

// 0 = source, 1..=m left, m+1..=2m right, 2m+1 = sink
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BipartiteLayout {
    pub side: usize,
}

impl BipartiteLayout {
    pub fn new(k: usize) -> Self {
        Self { side: 1 << k }
    }

    #[inline]
    pub fn source(&self) -> usize {
        0
    }

    #[inline]
    pub fn left(&self, i: usize) -> usize {
        1 + i
    }

    #[inline]
    pub fn right(&self, j: usize) -> usize {
        1 + self.side + j
    }

    #[inline]
    pub fn sink(&self) -> usize {
        1 + 2 * self.side
    }

    pub fn num_nodes(&self) -> usize {
        self.sink() + 1
    }

    pub fn is_left(&self, u: usize) -> bool {
        (1..=self.side).contains(&u)
    }
}

// adjacency[i]: right labels of left vertex i
pub fn matching_network(k: usize, adjacency: &[Vec<usize>]) -> Result<GeneratedInstance, FlowError> {
    check_dimension(k)?;
    let layout = BipartiteLayout::new(k);
    if adjacency.len() != layout.side {
        return Err(FlowError::InvalidParameter(format!(
            "expected neighbour lists for {} left vertices, got {}",
            layout.side,
            adjacency.len()
        )));
    }

    let mut network: FlowNetwork<i64> = FlowNetwork::new(layout.num_nodes());
    let mut forward_edges = Vec::new();

    for i in 0..layout.side {
        network.add_edge(layout.source(), layout.left(i), 1)?;
    }
    for (i, neighbours) in adjacency.iter().enumerate() {
        for &j in neighbours {
            if j >= layout.side {
                return Err(FlowError::VertexOutOfRange { vertex: j, num_nodes: layout.side });
            }
            let u = layout.left(i);
            forward_edges.push((u, network.add_edge(u, layout.right(j), 1)?));
        }
    }
    for j in 0..layout.side {
        network.add_edge(layout.right(j), layout.sink(), 1)?;
    }

    Ok(GeneratedInstance { network, source: layout.source(), sink: layout.sink(), forward_edges, layout: Some(layout) })
}

pub fn bipartite_matching(k: usize, degree: usize, seed: u64) -> Result<GeneratedInstance, FlowError> {
    check_dimension(k)?;
    let layout = BipartiteLayout::new(k);
    if degree > layout.side {
        return Err(FlowError::InvalidParameter(format!("degree {degree} exceeds side size {}", layout.side)));
    }

    let mut rng = rng_from_seed(seed);
    let adjacency: Vec<Vec<usize>> = (0..layout.side).map(|_| sample(&mut rng, layout.side, degree).into_vec()).collect();

    debug!("bipartite matching k={k} degree={degree}: {} arcs between the sides", layout.side * degree);
    matching_network(k, &adjacency)
}

// (left, right) labels of the matched pairs; empty for non-matching instances
pub fn matching_pairs(instance: &GeneratedInstance) -> Vec<(usize, usize)> {
    let Some(layout) = instance.layout else {
        return Vec::new();
    };
    instance
        .edge_flows()
        .filter(|&(u, _, flow)| layout.is_left(u) && flow == 1)
        .map(|(u, v, _)| (u - layout.left(0), v - layout.right(0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hypercube_shape() {
        let instance = hypercube(3, 7).unwrap();
        assert_eq!(instance.network.num_nodes(), 8);
        assert_eq!(instance.network.num_edges(), 12);
        assert_eq!((instance.source, instance.sink), (0, 7));

        for (u, v, _) in instance.edge_flows() {
            assert_eq!((u ^ v).count_ones(), 1);
            assert!(u < v);
        }
        for &(u, i) in instance.forward_edges.iter() {
            let cap = instance.network.neighbors(u)[i].orig;
            assert!((1..=8).contains(&cap));
        }
    }

    #[test]
    fn hypercube_is_deterministic_for_a_seed() {
        let a = hypercube(5, 42).unwrap();
        let b = hypercube(5, 42).unwrap();
        let caps = |g: &GeneratedInstance| g.forward_edges.iter().map(|&(u, i)| g.network.neighbors(u)[i].orig).collect::<Vec<_>>();
        assert_eq!(caps(&a), caps(&b));
    }

    #[test]
    fn dimension_out_of_range() {
        assert!(hypercube(0, 1).unwrap_err().is_invalid_argument());
        assert!(hypercube(MAX_DIMENSION + 1, 1).is_err());
        assert!(bipartite_matching(0, 0, 1).is_err());
    }

    #[test]
    fn bipartite_degree_is_respected() {
        let instance = bipartite_matching(3, 3, 11).unwrap();
        let layout = BipartiteLayout::new(3);
        assert_eq!(instance.network.num_nodes(), 18);
        assert_eq!(instance.forward_edges.len(), 8 * 3);
        assert_eq!(instance.network.num_edges(), 8 + 8 * 3 + 8);

        for i in 0..layout.side {
            let mut targets: Vec<usize> = instance
                .network
                .neighbors(layout.left(i))
                .iter()
                .filter(|e| e.is_forward())
                .map(|e| e.to)
                .collect();
            targets.sort_unstable();
            targets.dedup();
            assert_eq!(targets.len(), 3);
        }
    }

    #[test]
    fn bipartite_degree_too_large() {
        assert!(bipartite_matching(2, 5, 1).is_err());
    }

    #[test]
    fn matching_network_rejects_bad_labels() {
        assert!(matching_network(1, &[vec![0], vec![2]]).is_err());
        assert!(matching_network(1, &[vec![0]]).is_err());
    }
}
