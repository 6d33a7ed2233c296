// Edmonds-Karp vs Dinic on generated instances, reported as CSV

use crate::error::FlowError;
use crate::generators::{self, GeneratedInstance, MAX_DIMENSION};
use crate::maximum_flow::stats::FlowStats;
use crate::maximum_flow::Algorithm;
use log::info;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::time::Instant;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum Task {
    #[default]
    Hypercube,
    Matching,
}

impl Task {
    fn id(self) -> u8 {
        match self {
            Task::Hypercube => 1,
            Task::Matching => 2,
        }
    }

    pub fn csv_header(self) -> &'static str {
        match self {
            Task::Hypercube => "task,k,rep,seed,flow,ek_us,ek_aug,dinic_us,dinic_bfs,dinic_dfs,dinic_aug",
            Task::Matching => "task,k,i,rep,seed,matching,ek_us,dinic_us,dinic_bfs,dinic_dfs",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Task {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "hypercube" => Ok(Task::Hypercube),
            "2" | "matching" => Ok(Task::Matching),
            other => Err(FlowError::InvalidParameter(format!("unknown task `{other}`"))),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct BenchConfig {
    pub task: Task,
    pub k_min: usize,
    pub k_max: usize,
    pub reps: usize,
    // matching task only; `None` iterates degrees 1..=k
    pub degree_range: Option<(usize, usize)>,
    // 0 seeds every instance from entropy
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self { task: Task::Hypercube, k_min: 1, k_max: 16, reps: 1, degree_range: None, seed: 0 }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.k_min < 1 || self.k_min > self.k_max || self.k_max > MAX_DIMENSION {
            return Err(FlowError::InvalidParameter(format!("invalid k range {}..={}", self.k_min, self.k_max)));
        }
        if self.reps < 1 {
            return Err(FlowError::InvalidParameter("reps must be at least 1".to_string()));
        }
        if let Some((lo, hi)) = self.degree_range {
            if lo > hi {
                return Err(FlowError::InvalidParameter(format!("invalid degree range {lo}..={hi}")));
            }
        }
        Ok(())
    }

    fn degrees(&self, k: usize) -> (usize, usize) {
        self.degree_range.unwrap_or((1, k))
    }

    fn instance_seed(&self, k: usize, degree: usize, rep: usize) -> u64 {
        if self.seed == 0 {
            return 0;
        }
        // wraps on overflow
        self.seed
            .wrapping_add((k as u64).wrapping_mul(1_000_003))
            .wrapping_add((degree as u64).wrapping_mul(10_007))
            .wrapping_add(rep as u64)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub flow: i64,
    pub micros: u128,
    pub stats: FlowStats,
}

// runs on a copy so the instance stays untouched for the next algorithm
pub fn measure(algorithm: Algorithm, instance: &GeneratedInstance) -> Result<Measurement, FlowError> {
    let mut network = instance.network.clone();
    let mut stats = FlowStats::default();
    let start = Instant::now();
    let flow = algorithm.run(&mut network, instance.source, instance.sink, &mut stats)?;
    Ok(Measurement { flow, micros: start.elapsed().as_micros(), stats })
}

fn compare(instance: &GeneratedInstance, label: impl FnOnce() -> String) -> Result<(Measurement, Measurement), FlowError> {
    let ek = measure(Algorithm::EdmondsKarp, instance)?;
    let dinic = measure(Algorithm::Dinic, instance)?;
    if ek.flow != dinic.flow {
        return Err(FlowError::Mismatch { instance: label(), edmonds_karp: ek.flow, dinic: dinic.flow });
    }
    Ok((ek, dinic))
}

pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<(), FlowError> {
    config.validate()?;
    writeln!(out, "{}", config.task.csv_header())?;

    for k in config.k_min..=config.k_max {
        match config.task {
            Task::Hypercube => {
                for rep in 0..config.reps {
                    let seed = config.instance_seed(k, 0, rep);
                    let instance = generators::hypercube(k, seed)?;
                    let (ek, dinic) = compare(&instance, || format!("hypercube k={k} rep={rep}"))?;

                    writeln!(
                        out,
                        "{},{k},{rep},{seed},{},{},{},{},{},{},{}",
                        config.task,
                        ek.flow,
                        ek.micros,
                        ek.stats.augmentations,
                        dinic.micros,
                        dinic.stats.bfs_runs,
                        dinic.stats.dfs_calls,
                        dinic.stats.augmentations
                    )?;
                }
            }
            Task::Matching => {
                let (lo, hi) = config.degrees(k);
                for degree in lo..=hi {
                    for rep in 0..config.reps {
                        let seed = config.instance_seed(k, degree, rep);
                        let instance = generators::bipartite_matching(k, degree, seed)?;
                        let (ek, dinic) = compare(&instance, || format!("matching k={k} i={degree} rep={rep}"))?;

                        writeln!(
                            out,
                            "{},{k},{degree},{rep},{seed},{},{},{},{},{}",
                            config.task, ek.flow, ek.micros, dinic.micros, dinic.stats.bfs_runs, dinic.stats.dfs_calls
                        )?;
                    }
                }
            }
        }
        info!("k={k} done");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_bad_ranges() {
        assert!(BenchConfig::default().validate().is_ok());
        assert!(BenchConfig { k_min: 0, ..Default::default() }.validate().is_err());
        assert!(BenchConfig { k_min: 4, k_max: 3, ..Default::default() }.validate().is_err());
        assert!(BenchConfig { reps: 0, ..Default::default() }.validate().is_err());
        assert!(BenchConfig { degree_range: Some((3, 2)), ..Default::default() }.validate().is_err());
    }

    #[test]
    fn seeds_differ_per_run() {
        let config = BenchConfig { seed: 5, ..Default::default() };
        assert_ne!(config.instance_seed(2, 1, 0), config.instance_seed(2, 1, 1));
        assert_ne!(config.instance_seed(2, 1, 0), config.instance_seed(3, 1, 0));
        assert_eq!(BenchConfig::default().instance_seed(2, 1, 0), 0);
    }

    #[test]
    fn large_seed_wraps() {
        let config = BenchConfig { seed: u64::MAX, ..Default::default() };
        assert_eq!(config.instance_seed(1, 0, 0), 1_000_002);
        assert_eq!(config.instance_seed(1, 2, 1), 1_000_002 + 2 * 10_007 + 1);

        let config = BenchConfig { k_min: 1, k_max: 2, seed: u64::MAX, ..Default::default() };
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);

        let config = BenchConfig { task: Task::Matching, k_min: 1, k_max: 1, seed: u64::MAX - 3, ..Default::default() };
        run(&config, &mut Vec::new()).unwrap();
    }

    #[test]
    fn task_parses() {
        assert_eq!("1".parse::<Task>().unwrap(), Task::Hypercube);
        assert_eq!("matching".parse::<Task>().unwrap(), Task::Matching);
        assert!("3".parse::<Task>().is_err());
    }
}
