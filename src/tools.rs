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

//! Structs and functions for the command-line tool.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use log::{info, LevelFilter};
use petgraph::graph::{node_index, DiGraph};
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::engine::onepass_plus;
use crate::graph::read_graph_from_file;
use crate::path::Path;

/// Parameters of one alternative-route query.
#[derive(Clone, Debug)]
pub struct QueryParameters {
    /// Path to the `.gr` graph description file.
    pub graph_file: PathBuf,
    /// Index of the source vertex.
    pub source: usize,
    /// Index of the destination vertex.
    pub destination: usize,
    /// Number of alternative routes to compute.
    pub k: usize,
    /// Similarity threshold, within `[0, 1]`.
    pub theta: f64,
    /// Optional path of a JSON file where the routes are written.
    pub output: Option<PathBuf>,
}

/// One computed route, in exportable form.
#[derive(Clone, Debug, Serialize)]
pub struct RouteRecord {
    /// Commit index of the route (0 is the shortest path).
    pub index: usize,
    /// Vertex sequence from source to destination.
    pub nodes: Vec<usize>,
    /// Cumulative weight of the route.
    pub length: f64,
}

/// Initializes logging to the terminal.
pub fn initialize_logging() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logging")
}

/// Reads the graph, runs the query and reports the routes on standard output.
pub fn run_query(parameters: &QueryParameters) -> Result<()> {
    ensure!(
        parameters.graph_file.is_file(),
        "{:?} is not a regular file",
        parameters.graph_file
    );
    info!("Reading graph from {:?}", parameters.graph_file);
    let graph: DiGraph<(), f64> = read_graph_from_file(&parameters.graph_file)?;
    info!(
        "Computing up to {} alternative routes from {} to {}",
        parameters.k, parameters.source, parameters.destination
    );
    let routes = onepass_plus(
        &graph,
        node_index(parameters.source),
        node_index(parameters.destination),
        parameters.k,
        parameters.theta,
    )?;
    let records = to_records(&graph, parameters.source, &routes);
    if records.is_empty() {
        println!(
            "No route from {} to {}",
            parameters.source, parameters.destination
        );
    }
    for record in &records {
        println!(
            "Route {}: length {}, vertices {:?}",
            record.index, record.length, record.nodes
        );
    }
    if let Some(output) = &parameters.output {
        let file = File::create(output)
            .with_context(|| format!("Failed to create output file {output:?}"))?;
        serde_json::to_writer_pretty(file, &records).context("Failed to write routes")?;
        info!("Routes written to {output:?}");
    }
    Ok(())
}

fn to_records(graph: &DiGraph<(), f64>, source: usize, routes: &[Path<f64>]) -> Vec<RouteRecord> {
    routes
        .iter()
        .enumerate()
        .map(|(index, route)| RouteRecord {
            index,
            nodes: if route.is_trivial() {
                vec![source]
            } else {
                route
                    .nodes(graph)
                    .into_iter()
                    .map(|node| node.index())
                    .collect()
            },
            length: route.length(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::read_graph_from_str;

    #[test]
    fn records_test() {
        let graph: DiGraph<(), f64> =
            read_graph_from_str("d\n3 2\n0 1 1.5 0\n1 2 2.5 0\n").unwrap();
        let routes = onepass_plus(&graph, node_index(0), node_index(2), 2, 1.0).unwrap();
        let records = to_records(&graph, 0, &routes);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].nodes, vec![0, 1, 2]);
        assert_eq!(records[0].length, 4.0);
    }

    #[test]
    fn trivial_record_test() {
        let graph: DiGraph<(), f64> = read_graph_from_str("d\n2 1\n0 1 1 0\n").unwrap();
        let routes = onepass_plus(&graph, node_index(1), node_index(1), 1, 0.5).unwrap();
        let records = to_records(&graph, 1, &routes);
        assert_eq!(records[0].nodes, vec![1]);
        assert_eq!(records[0].length, 0.0);
    }
}
