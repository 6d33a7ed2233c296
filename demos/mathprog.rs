use network_flow_lab::export::export_mathprog;
use network_flow_lab::generators;
use network_flow_lab::FlowError;

fn value<T: std::str::FromStr>(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<T, FlowError> {
    args.next()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| FlowError::InvalidParameter(format!("missing or invalid value after {flag}")))
}

// usage: mathprog --size k [--degree i] [--seed s] --out model.mod
// with --degree the bipartite matching instance is exported, otherwise the hypercube
fn main() -> Result<(), FlowError> {
    env_logger::init();

    let mut size = None;
    let mut degree = None;
    let mut seed = 0;
    let mut out = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => size = Some(value::<usize>(&mut args, &arg)?),
            "--degree" => degree = Some(value::<usize>(&mut args, &arg)?),
            "--seed" => seed = value(&mut args, &arg)?,
            "--out" => out = Some(value::<String>(&mut args, &arg)?),
            other => return Err(FlowError::InvalidParameter(format!("unknown argument {other}"))),
        }
    }
    let size = size.ok_or_else(|| FlowError::InvalidParameter("--size k is required".to_string()))?;
    let out = out.ok_or_else(|| FlowError::InvalidParameter("--out path is required".to_string()))?;

    let instance = match degree {
        Some(degree) => generators::bipartite_matching(size, degree, seed)?,
        None => generators::hypercube(size, seed)?,
    };
    export_mathprog(&instance.network, instance.source, instance.sink, &out)
}
