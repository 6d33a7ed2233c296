use crate::error::FlowError;
use crate::maximum_flow::network::FlowNetwork;
use crate::maximum_flow::stats::FlowStats;
use crate::maximum_flow::MaximumFlow;
use log::debug;
use num_traits::NumAssign;
use std::collections::VecDeque;

const UNVISITED: (usize, usize) = (usize::MAX, usize::MAX);

// O(VE^2)
#[derive(Default)]
pub struct EdmondsKarp {
    // (parent vertex, edge index in the parent's adjacency list)
    prev: Vec<(usize, usize)>,
    que: VecDeque<usize>,
}

impl EdmondsKarp {
    // true if the sink was reached; the path is then stored in `prev`
    fn bfs<Flow>(&mut self, network: &FlowNetwork<Flow>, source: usize, sink: usize) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.prev.fill(UNVISITED);
        self.prev[source] = (source, usize::MAX);
        self.que.clear();
        self.que.push_back(source);

        while let Some(u) = self.que.pop_front() {
            if u == sink {
                return true;
            }

            for (edge_id, edge) in network.neighbors(u).iter().enumerate() {
                if self.prev[edge.to] != UNVISITED || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.prev[edge.to] = (u, edge_id);
                self.que.push_back(edge.to);
            }
        }
        false
    }
}

impl<Flow> MaximumFlow<Flow> for EdmondsKarp
where
    Flow: NumAssign + Ord + Copy,
{
    fn name(&self) -> &'static str {
        "edmonds-karp"
    }

    fn run(&mut self, network: &mut FlowNetwork<Flow>, source: usize, sink: usize, stats: &mut FlowStats) -> Result<Flow, FlowError> {
        network.check_terminals(source, sink)?;
        stats.reset();
        self.prev.clear();
        self.prev.resize(network.num_nodes(), UNVISITED);

        let mut flow = Flow::zero();
        loop {
            stats.bfs_runs += 1;
            if !self.bfs(network, source, sink) {
                break;
            }

            // calculate delta
            let (u, edge_id) = self.prev[sink];
            let mut delta = network.neighbors(u)[edge_id].residual_capacity();
            let mut v = sink;
            while v != source {
                let (u, edge_id) = self.prev[v];
                delta = delta.min(network.neighbors(u)[edge_id].residual_capacity());
                v = u;
            }

            // update flow
            let mut v = sink;
            while v != source {
                let (u, edge_id) = self.prev[v];
                network.push_flow(u, edge_id, delta);
                v = u;
            }

            flow += delta;
            stats.augmentations += 1;
        }

        debug!("edmonds-karp finished after {} augmentations and {} bfs runs", stats.augmentations, stats.bfs_runs);
        Ok(flow)
    }
}
