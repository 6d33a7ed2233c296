use network_flow_lab::bench::{self, BenchConfig};
use network_flow_lab::FlowError;
use std::io::{self, BufWriter};

fn value<T: std::str::FromStr>(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<T, FlowError> {
    args.next()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| FlowError::InvalidParameter(format!("missing or invalid value after {flag}")))
}

// usage: benchmark [--task 1|2] [--kmin a] [--kmax b] [--reps r] [--imin i] [--imax j] [--seed s]
fn main() -> Result<(), FlowError> {
    env_logger::init();

    let mut config = BenchConfig::default();
    let (mut imin, mut imax) = (None, None);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--task" => config.task = value(&mut args, &arg)?,
            "--kmin" => config.k_min = value(&mut args, &arg)?,
            "--kmax" => config.k_max = value(&mut args, &arg)?,
            "--reps" => config.reps = value(&mut args, &arg)?,
            "--imin" => imin = Some(value::<usize>(&mut args, &arg)?),
            "--imax" => imax = Some(value::<usize>(&mut args, &arg)?),
            "--seed" => config.seed = value(&mut args, &arg)?,
            other => return Err(FlowError::InvalidParameter(format!("unknown argument {other}"))),
        }
    }
    if imin.is_some() || imax.is_some() {
        config.degree_range = Some((imin.unwrap_or(1), imax.unwrap_or(1)));
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    bench::run(&config, &mut out)
}
