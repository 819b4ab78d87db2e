// This file is part of Altroute.
// Copyright © 2025 The Altroute developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Binary to compute alternative routes from a `.gr` graph file.

use std::path::PathBuf;
use std::process::ExitCode;

use altroute::tools::{initialize_logging, run_query, QueryParameters};
use anyhow::Result;
use clap::Parser;

/// Compute alternative routes with bounded pairwise overlap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// The .gr graph description file
    #[arg(short = 'f', long)]
    graph_file: PathBuf,
    /// The source node index
    #[arg(short = 'S', long)]
    source: usize,
    /// The destination node index
    #[arg(short = 'D', long)]
    destination: usize,
    /// The number k of alternative paths
    #[arg(short = 'k', long)]
    k_paths: usize,
    /// The similarity threshold
    #[arg(short = 's', long)]
    similarity_threshold: f64,
    /// Write the computed routes to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Argument and input errors are reported on standard output, with exit
    // code 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = run(args) {
        println!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<()> {
    initialize_logging()?;
    run_query(&QueryParameters {
        graph_file: args.graph_file,
        source: args.source,
        destination: args.destination,
        k: args.k_paths,
        theta: args.similarity_threshold,
        output: args.output,
    })
}
