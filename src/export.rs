// GNU MathProg model of a maximum flow instance, solvable with `glpsol --math`

use crate::error::FlowError;
use crate::maximum_flow::network::FlowNetwork;
use log::debug;
use num_traits::NumAssign;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const MODEL: &str = "\
set V;
set A within {V,V};
param cap{A} >= 0;
param S integer;
param T integer;

var x{(i,j) in A} >= 0;

s.t. CapConstr{(i,j) in A}: x[i,j] <= cap[i,j];

s.t. FlowCons{v in V: v <> S and v <> T}:
  sum{(v,j) in A} x[v,j] - sum{(i,v) in A} x[i,v] = 0;

maximize Obj:
  sum{(S,j) in A} x[S,j] - sum{(i,S) in A} x[i,S];

solve;
printf \"maxflow %g\\n\", Obj;
";

// only arcs with positive original capacity are listed
pub fn write_mathprog<Flow, W>(network: &FlowNetwork<Flow>, source: usize, sink: usize, out: &mut W) -> Result<(), FlowError>
where
    Flow: NumAssign + Ord + Copy + Display,
    W: Write,
{
    network.check_terminals(source, sink)?;

    // parallel arcs are merged
    let mut arcs: Vec<(usize, usize, Flow)> = network.forward_edges().map(|(u, _, e)| (u, e.to, e.orig)).collect();
    arcs.sort_unstable_by_key(|&(u, v, _)| (u, v));
    arcs.dedup_by(|next, kept| {
        if (next.0, next.1) == (kept.0, kept.1) {
            kept.2 += next.2;
            true
        } else {
            false
        }
    });

    out.write_all(MODEL.as_bytes())?;
    writeln!(out)?;
    writeln!(out, "data;")?;
    writeln!(out)?;

    write!(out, "set V :=")?;
    for v in 0..network.num_nodes() {
        write!(out, " {v}")?;
    }
    writeln!(out, ";")?;
    writeln!(out)?;

    writeln!(out, "param S := {source};")?;
    writeln!(out, "param T := {sink};")?;
    writeln!(out)?;

    writeln!(out, "set A :=")?;
    for &(u, v, _) in arcs.iter() {
        writeln!(out, "  ({u},{v})")?;
    }
    writeln!(out, ";")?;
    writeln!(out)?;

    writeln!(out, "param cap :=")?;
    for &(u, v, cap) in arcs.iter() {
        writeln!(out, "  {u} {v} {cap}")?;
    }
    writeln!(out, ";")?;
    writeln!(out)?;

    writeln!(out, "end;")?;
    Ok(())
}

pub fn export_mathprog<Flow, P>(network: &FlowNetwork<Flow>, source: usize, sink: usize, path: P) -> Result<(), FlowError>
where
    Flow: NumAssign + Ord + Copy + Display,
    P: AsRef<Path>,
{
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    write_mathprog(network, source, sink, &mut out)?;
    out.flush()?;
    debug!("wrote mathprog model with {} vertices to {}", network.num_nodes(), path.as_ref().display());
    Ok(())
}
