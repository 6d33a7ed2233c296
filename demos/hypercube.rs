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

// usage: hypercube --size k [--seed s] [--algo ek|dinic] [--print-flow]
fn main() -> Result<(), FlowError> {
    env_logger::init();

    let mut size = None;
    let mut seed = 0;
    let mut algorithm = Algorithm::EdmondsKarp;
    let mut print_flow = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => size = Some(value::<usize>(&mut args, &arg)?),
            "--seed" => seed = value(&mut args, &arg)?,
            "--algo" => algorithm = value(&mut args, &arg)?,
            "--print-flow" | "--printFlow" => print_flow = true,
            other => return Err(FlowError::InvalidParameter(format!("unknown argument {other}"))),
        }
    }
    let size = size.ok_or_else(|| FlowError::InvalidParameter("--size k is required".to_string()))?;

    let start = Instant::now();
    let mut instance = generators::hypercube(size, seed)?;
    let mut stats = FlowStats::default();
    let flow = algorithm.run(&mut instance.network, instance.source, instance.sink, &mut stats)?;

    if print_flow {
        for (u, v, f) in instance.edge_flows() {
            println!("{u} {v} {f}");
        }
    }
    println!("{flow}");

    log::info!("{algorithm}: {} ms, {:?}", start.elapsed().as_millis(), stats);
    Ok(())
}
