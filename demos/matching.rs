use network_flow_lab::generators;
use network_flow_lab::maximum_flow::stats::FlowStats;
use network_flow_lab::maximum_flow::Algorithm;
use network_flow_lab::FlowError;
use std::time::Instant;

fn value<T: std::str::FromStr>(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<T, FlowError> {
    args.next()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| FlowError::InvalidParameter(format!("missing or invalid value after {flag}")))
}

// usage: matching --size k --degree i [--seed s] [--algo ek|dinic] [--print-matching]
fn main() -> Result<(), FlowError> {
    env_logger::init();

    let mut size = None;
    let mut degree = None;
    let mut seed = 0;
    let mut algorithm = Algorithm::EdmondsKarp;
    let mut print_matching = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => size = Some(value::<usize>(&mut args, &arg)?),
            "--degree" => degree = Some(value::<usize>(&mut args, &arg)?),
            "--seed" => seed = value(&mut args, &arg)?,
            "--algo" => algorithm = value(&mut args, &arg)?,
            "--print-matching" | "--printMatching" => print_matching = true,
            other => return Err(FlowError::InvalidParameter(format!("unknown argument {other}"))),
        }
    }
    let size = size.ok_or_else(|| FlowError::InvalidParameter("--size k is required".to_string()))?;
    let degree = degree.ok_or_else(|| FlowError::InvalidParameter("--degree i is required".to_string()))?;

    let start = Instant::now();
    let mut instance = generators::bipartite_matching(size, degree, seed)?;
    let mut stats = FlowStats::default();
    let matching = algorithm.run(&mut instance.network, instance.source, instance.sink, &mut stats)?;

    if print_matching {
        for (u, v) in generators::matching_pairs(&instance) {
            println!("{u} {v}");
        }
    }
    println!("{matching}");

    log::info!("{algorithm}: {} ms, {:?}", start.elapsed().as_millis(), stats);
    Ok(())
}
