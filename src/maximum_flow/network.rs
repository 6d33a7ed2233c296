use crate::error::FlowError;
use num_traits::NumAssign;
use std::collections::VecDeque;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Edge<Flow> {
    pub to: usize,
    // index of the paired edge in the adjacency list of `to`
    pub rev: usize,
    pub cap: Flow,
    pub orig: Flow,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.cap
    }

    #[inline]
    pub fn flow(&self) -> Flow {
        self.orig - self.cap
    }

    #[inline]
    pub fn is_forward(&self) -> bool {
        self.orig > Flow::zero()
    }
}

#[derive(Default, Clone, Debug)]
pub struct FlowNetwork<Flow> {
    num_edges: usize,
    adj: Vec<Vec<Edge<Flow>>>,
}

impl<Flow> FlowNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_edges: 0, adj: (0..num_nodes).map(|_| Vec::new()).collect() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    // return the index of the forward edge in the adjacency list of `from`
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<usize, FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity < Flow::zero() {
            return Err(FlowError::NegativeCapacity { from, to });
        }

        let forward_index = self.adj[from].len();
        let reverse_index = if from == to { forward_index + 1 } else { self.adj[to].len() };

        self.adj[from].push(Edge { to, rev: reverse_index, cap: capacity, orig: capacity });
        self.adj[to].push(Edge { to: from, rev: forward_index, cap: Flow::zero(), orig: Flow::zero() });

        self.num_edges += 1;
        Ok(forward_index)
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> &[Edge<Flow>] {
        &self.adj[u]
    }

    #[inline]
    pub fn neighbors_mut(&mut self, u: usize) -> &mut [Edge<Flow>] {
        &mut self.adj[u]
    }

    pub fn edge(&self, u: usize, i: usize) -> Option<&Edge<Flow>> {
        self.adj.get(u)?.get(i)
    }

    pub fn flow(&self, u: usize, i: usize) -> Option<Flow> {
        self.edge(u, i).map(Edge::flow)
    }

    // (u, index in adj[u], edge) for every edge with positive original capacity
    pub fn forward_edges(&self) -> impl Iterator<Item = (usize, usize, &Edge<Flow>)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, edges)| edges.iter().enumerate().filter(|(_, e)| e.is_forward()).map(move |(i, e)| (u, i, e)))
    }

    #[inline]
    pub fn push_flow(&mut self, u: usize, i: usize, delta: Flow) {
        let Edge { to, rev, .. } = self.adj[u][i];
        debug_assert_eq!(self.adj[to][rev].to, u, "reverse edge of {u}->{to} does not point back");
        debug_assert!(delta <= self.adj[u][i].cap, "pushing more than the residual capacity of {u}->{to}");

        self.adj[u][i].cap -= delta;
        self.adj[to][rev].cap += delta;
    }

    pub fn check_terminals(&self, source: usize, sink: usize) -> Result<(), FlowError> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        if source == sink {
            return Err(FlowError::SourceIsSink(source));
        }

        for (u, edges) in self.adj.iter().enumerate() {
            if let Some(e) = edges.iter().find(|e| e.cap < Flow::zero()) {
                return Err(FlowError::NegativeCapacity { from: u, to: e.to });
            }
        }
        Ok(())
    }

    // vertices reachable from source through edges with positive residual capacity
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        if source >= self.num_nodes() {
            return Vec::new();
        }

        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes()];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for e in self.adj[u].iter() {
                if !visited[e.to] && e.cap > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }

        cut.sort_unstable();
        cut
    }

    pub fn is_consistent(&self) -> bool {
        self.adj.iter().enumerate().all(|(u, edges)| {
            edges.iter().enumerate().all(|(i, e)| {
                let Some(partner) = self.edge(e.to, e.rev) else {
                    return false;
                };
                partner.to == u
                    && partner.rev == i
                    && e.cap >= Flow::zero()
                    && e.cap + partner.cap == e.orig + partner.orig
            })
        })
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        if vertex >= self.num_nodes() {
            return Err(FlowError::VertexOutOfRange { vertex, num_nodes: self.num_nodes() });
        }
        Ok(())
    }
}
