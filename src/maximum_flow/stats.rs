// one augmentation per source-sink path in both strategies
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub struct FlowStats {
    pub augmentations: u64,
    pub bfs_runs: u64,
    // Dinic: vertices entered by the blocking flow search
    pub dfs_calls: u64,
}

impl FlowStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
