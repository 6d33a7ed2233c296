pub mod dinic;
pub mod edmonds_karp;
pub mod network;
pub mod stats;

use crate::error::FlowError;
use crate::maximum_flow::dinic::Dinic;
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::network::FlowNetwork;
use crate::maximum_flow::stats::FlowStats;
use num_traits::NumAssign;
use std::fmt;
use std::str::FromStr;

/// A maximum flow strategy.
///
/// `run` validates its arguments before touching the network, then pushes a maximum flow from
/// `source` to `sink` by lowering residual capacities in place and returns the flow value.
/// Running again on the resulting network yields zero.
pub trait MaximumFlow<Flow> {
    fn name(&self) -> &'static str;

    fn run(&mut self, network: &mut FlowNetwork<Flow>, source: usize, sink: usize, stats: &mut FlowStats) -> Result<Flow, FlowError>;
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum Algorithm {
    #[default]
    EdmondsKarp,
    Dinic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::EdmondsKarp, Algorithm::Dinic];

    pub fn run<Flow>(self, network: &mut FlowNetwork<Flow>, source: usize, sink: usize, stats: &mut FlowStats) -> Result<Flow, FlowError>
    where
        Flow: NumAssign + Ord + Copy,
    {
        match self {
            Algorithm::EdmondsKarp => EdmondsKarp::default().run(network, source, sink, stats),
            Algorithm::Dinic => Dinic::default().run(network, source, sink, stats),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::EdmondsKarp => f.write_str("edmonds-karp"),
            Algorithm::Dinic => f.write_str("dinic"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ek" | "edmonds-karp" | "edmonds_karp" => Ok(Algorithm::EdmondsKarp),
            "dinic" => Ok(Algorithm::Dinic),
            other => Err(FlowError::InvalidParameter(format!("unknown algorithm `{other}`"))),
        }
    }
}
