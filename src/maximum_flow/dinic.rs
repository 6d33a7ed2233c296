use crate::error::FlowError;
use crate::maximum_flow::network::FlowNetwork;
use crate::maximum_flow::stats::FlowStats;
use crate::maximum_flow::MaximumFlow;
use log::{debug, trace};
use num_traits::NumAssign;
use std::collections::VecDeque;

const UNREACHED: usize = usize::MAX;

// O(V^2 E)
#[derive(Default)]
pub struct Dinic {
    level: Vec<usize>,
    current_edge: Vec<usize>,
    // (vertex, edge index) from the source to the vertex being explored
    path: Vec<(usize, usize)>,
    que: VecDeque<usize>,
}

impl Dinic {
    // O(n + m)
    // bfs distance from source over edges with positive residual capacity
    fn update_levels<Flow>(&mut self, network: &FlowNetwork<Flow>, source: usize, sink: usize) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.level.fill(UNREACHED);
        self.level[source] = 0;
        self.que.clear();
        self.que.push_back(source);

        while let Some(u) = self.que.pop_front() {
            for e in network.neighbors(u).iter() {
                if e.residual_capacity() > Flow::zero() && self.level[e.to] == UNREACHED {
                    self.level[e.to] = self.level[u] + 1;
                    self.que.push_back(e.to);
                }
            }
        }

        self.level[sink] != UNREACHED
    }

    // first edge at or after the cursor of `u` that goes one level up with residual capacity left
    fn admissible_edge<Flow>(&mut self, network: &FlowNetwork<Flow>, u: usize) -> Option<usize>
    where
        Flow: NumAssign + Ord + Copy,
    {
        let edges = network.neighbors(u);
        while let Some(e) = edges.get(self.current_edge[u]) {
            if e.residual_capacity() > Flow::zero() && self.level[e.to] == self.level[u] + 1 {
                return Some(self.current_edge[u]);
            }
            self.current_edge[u] += 1;
        }
        None
    }

    fn blocking_flow<Flow>(&mut self, network: &mut FlowNetwork<Flow>, source: usize, sink: usize, stats: &mut FlowStats) -> Flow
    where
        Flow: NumAssign + Ord + Copy,
    {
        let mut flow = Flow::zero();
        self.path.clear();
        let mut u = source;
        stats.dfs_calls += 1;

        loop {
            if u == sink {
                // calculate delta
                let (v, i) = self.path[0];
                let delta = self.path.iter().fold(network.neighbors(v)[i].residual_capacity(), |delta, &(v, i)| {
                    delta.min(network.neighbors(v)[i].residual_capacity())
                });

                // update flow
                for &(v, i) in self.path.iter() {
                    network.push_flow(v, i, delta);
                }
                flow += delta;
                stats.augmentations += 1;

                // resume from the tail of the first saturated edge
                let saturated = self.path.iter().position(|&(v, i)| network.neighbors(v)[i].residual_capacity() == Flow::zero()).unwrap_or(0);
                u = self.path[saturated].0;
                self.path.truncate(saturated);
                continue;
            }

            match self.admissible_edge(network, u) {
                Some(i) => {
                    self.path.push((u, i));
                    u = network.neighbors(u)[i].to;
                    stats.dfs_calls += 1;
                }
                None => {
                    // dead end for the rest of the phase
                    self.level[u] = UNREACHED;
                    match self.path.pop() {
                        Some((v, _)) => {
                            self.current_edge[v] += 1;
                            u = v;
                        }
                        None => break,
                    }
                }
            }
        }

        flow
    }
}

impl<Flow> MaximumFlow<Flow> for Dinic
where
    Flow: NumAssign + Ord + Copy,
{
    fn name(&self) -> &'static str {
        "dinic"
    }

    fn run(&mut self, network: &mut FlowNetwork<Flow>, source: usize, sink: usize, stats: &mut FlowStats) -> Result<Flow, FlowError> {
        network.check_terminals(source, sink)?;
        stats.reset();
        self.level.clear();
        self.level.resize(network.num_nodes(), UNREACHED);
        self.current_edge.clear();
        self.current_edge.resize(network.num_nodes(), 0);

        let mut flow = Flow::zero();
        loop {
            stats.bfs_runs += 1;

            // no s-t path
            if !self.update_levels(network, source, sink) {
                break;
            }

            trace!("dinic phase {}: sink at level {}", stats.bfs_runs, self.level[sink]);
            self.current_edge.fill(0);
            flow += self.blocking_flow(network, source, sink, stats);
        }

        debug!(
            "dinic finished after {} phases, {} augmentations and {} dfs calls",
            stats.bfs_runs - 1,
            stats.augmentations,
            stats.dfs_calls
        );
        Ok(flow)
    }
}
