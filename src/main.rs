// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This is the command line front end of the solver. It reads the data
//! tables of the selected objective from the working directory, runs the
//! selected solver variant under a one hour deadline, and reports the
//! optimal value, the wall clock time and the number of considered nodes on
//! a single line. A search that hits the deadline reports a value of -1.

use std::process::exit;
use std::time::{Duration, Instant};

use clap::Parser;

use subknap::objectives::io;
use subknap::*;

/// The wall clock budget granted to the search.
const TIME_LIMIT: Duration = Duration::from_secs(3600);

/// This structure uses `clap-derive` annotations and define the arguments
/// that can be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The knapsack capacity
    capacity: usize,
    /// The objective function to maximize
    /// (0 = coverage, 1 = facility location, 2 = influence)
    objective: usize,
    /// The solver variant
    /// (0 = DCOSUB, 1 = ACR, 2 = LE, 3 = EP, 4 = LECR, 5 = EPCR, 6 = LEEP,
    /// 7 = LEEPCR, 8 = LEg)
    solver: usize,
}

/// Loads the given data tables, then maximizes the instance with the given
/// variant. Returns the completion, the time spent searching and the number
/// of considered nodes.
fn run<O: Objective>(
    variant: Variant,
    capacity: usize,
    data: Result<(Vec<usize>, O), io::Error>,
) -> (Completion, Duration, usize) {
    let (weights, objective) = data.unwrap_or_else(|e| {
        eprintln!("cannot load the data tables: {e}");
        exit(1);
    });
    let instance = Instance::new(weights, objective);
    let cutoff = Deadline::after(TIME_LIMIT);

    let start = Instant::now();
    let (completion, explored) = solve(variant, &instance, capacity, &cutoff);
    (completion, start.elapsed(), explored)
}

fn main() {
    // argument errors must exit with status 1, not clap's default of 2
    let args = Args::try_parse().unwrap_or_else(|e| {
        if matches!(e.kind(), clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion) {
            e.exit();
        }
        eprintln!("{e}");
        exit(1);
    });
    let Some(variant) = Variant::from_selector(args.solver) else {
        eprintln!("unknown solver type: {}", args.solver);
        exit(1);
    };

    let (completion, runtime, explored) = match args.objective {
        0 => run(variant, args.capacity, io::read_coverage()),
        1 => run(variant, args.capacity, io::read_facility_location()),
        2 => run(variant, args.capacity, io::read_influence()),
        _ => {
            eprintln!("unknown objective function: {}", args.objective);
            exit(1);
        }
    };

    println!(
        "optimal solution value: {} running time: {} considered nodes: {}",
        completion.best_value.unwrap_or(-1.0),
        runtime.as_secs_f64(),
        explored
    );
}
