/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use time::OffsetDateTime;

use rustop::opts;

use rs_flow::edgelist;
use rs_flow::maxflow::{self, Algorithm, Solution};
use rs_flow::CapacityGraph;

use std::error::Error;

fn run(
    alg: Algorithm,
    g: &CapacityGraph<String, i64>,
    src: &str,
    snk: &str,
    niter: usize,
) -> Result<Solution<i64>, Box<dyn Error>> {
    let src = src.to_string();
    let snk = snk.to_string();

    let tstart = OffsetDateTime::now_utc();
    let mut sol = maxflow::solve(alg, g, &src, &snk)?;
    for _ in 1..niter {
        sol = maxflow::solve(alg, g, &src, &snk)?;
    }
    let tend = OffsetDateTime::now_utc();

    println!("{}", alg);
    println!("  Time: {}", (tend - tstart).as_seconds_f64() / niter.max(1) as f64);
    println!("  Flow: {}", sol.value);
    if let Some(cnt) = sol.augmentations {
        println!("  Augmenting paths: {}", cnt);
    }
    Ok(sol)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve a max-flow problem given as edge list.";
        opt algorithm:String=String::from("all"), desc:"Algorithm: ff, scaling, pr or all.";
        opt source:String=String::from(edgelist::DEFAULT_SOURCE), desc:"Name of the source node.";
        opt sink:String=String::from(edgelist::DEFAULT_SINK), desc:"Name of the sink node.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        param file:String, desc:"Instance file name";
    }
    .parse_or_exit();

    let algorithms = if args.algorithm == "all" {
        Algorithm::all().to_vec()
    } else {
        vec![args.algorithm.parse::<Algorithm>()?]
    };

    let tstart = OffsetDateTime::now_utc();
    let g: CapacityGraph<String, i64> = edgelist::read(zopen::read(&args.file)?)?;
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of nodes: {}", g.num_nodes());
    println!("  number of edges: {}", g.num_edges());

    let mut values = vec![];
    for alg in algorithms {
        values.push(run(alg, &g, &args.source, &args.sink, args.num)?.value);
    }

    if values.windows(2).any(|w| w[0] != w[1]) {
        return Err(format!("algorithms disagree on the flow value: {:?}", values).into());
    }

    Ok(())
}
