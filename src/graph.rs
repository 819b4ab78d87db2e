//! Reading and writing graphs in the `.gr` text format.
//!
//! A `.gr` description is newline-delimited ASCII: a `d` (directed) or `u`
//! (undirected) header, a `|V| |E|` line, then one `src dst weight` line per
//! edge (trailing tokens on an edge line are ignored). An undirected edge is
//! expanded into two directed arcs with the same weight.

use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use petgraph::graph::{node_index, DiGraph};
use petgraph::visit::EdgeRef;

use crate::weight::Weight;

/// Reads a graph in `.gr` format from a file.
pub fn read_graph_from_file<W>(path: &Path) -> Result<DiGraph<(), W>>
where
    W: Weight + FromStr,
{
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read graph file {path:?}"))?;
    read_graph_from_str(&contents).with_context(|| format!("Invalid graph file {path:?}"))
}

/// Reads a graph in `.gr` format from an in-memory string.
pub fn read_graph_from_str<W>(contents: &str) -> Result<DiGraph<(), W>>
where
    W: Weight + FromStr,
{
    let mut lines = contents.lines().map(str::trim).filter(|l| !l.is_empty());
    let undirected = match lines.next() {
        Some("d") => false,
        Some("u") => true,
        Some(other) => bail!("invalid direction header `{other}` (expected `d` or `u`)"),
        None => bail!("empty graph description"),
    };
    let sizes = lines
        .next()
        .ok_or_else(|| anyhow!("missing `|V| |E|` line"))?;
    let mut tokens = sizes.split_whitespace();
    let nb_nodes = parse_count(tokens.next(), "vertex count")?;
    let nb_edges = parse_count(tokens.next(), "edge count")?;
    let mut graph = DiGraph::with_capacity(
        nb_nodes,
        if undirected { 2 * nb_edges } else { nb_edges },
    );
    for _ in 0..nb_nodes {
        graph.add_node(());
    }
    for i in 0..nb_edges {
        let line = lines
            .next()
            .ok_or_else(|| anyhow!("expected {nb_edges} edge lines, found only {i}"))?;
        let mut tokens = line.split_whitespace();
        let src = parse_endpoint(tokens.next(), nb_nodes, i)?;
        let dst = parse_endpoint(tokens.next(), nb_nodes, i)?;
        let weight = parse_weight::<W>(tokens.next(), i)?;
        graph.add_edge(node_index(src), node_index(dst), weight);
        if undirected {
            graph.add_edge(node_index(dst), node_index(src), weight);
        }
    }
    if lines.next().is_some() {
        bail!("trailing content after {nb_edges} edge lines");
    }
    Ok(graph)
}

/// Writes a graph back to the `.gr` grammar, always in directed (`d`) form.
///
/// Parsing the output yields a graph with the same vertex count and the same
/// multiset of weighted arcs as the input.
pub fn write_graph_to_string<W>(graph: &DiGraph<(), W>) -> String
where
    W: Weight + Display,
{
    let mut out = String::new();
    writeln!(out, "d").unwrap();
    writeln!(out, "{} {}", graph.node_count(), graph.edge_count()).unwrap();
    for edge in graph.edge_references() {
        writeln!(
            out,
            "{} {} {} 0",
            edge.source().index(),
            edge.target().index(),
            edge.weight()
        )
        .unwrap();
    }
    out
}

fn parse_count(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| anyhow!("missing {what}"))?;
    token
        .parse()
        .map_err(|_| anyhow!("invalid {what} `{token}`"))
}

fn parse_endpoint(token: Option<&str>, nb_nodes: usize, line: usize) -> Result<usize> {
    let token = token.ok_or_else(|| anyhow!("missing endpoint on edge line {}", line + 1))?;
    let endpoint: usize = token
        .parse()
        .map_err(|_| anyhow!("invalid endpoint `{token}` on edge line {}", line + 1))?;
    if endpoint >= nb_nodes {
        bail!(
            "endpoint {endpoint} on edge line {} is out of range (graph has {nb_nodes} vertices)",
            line + 1
        );
    }
    Ok(endpoint)
}

fn parse_weight<W>(token: Option<&str>, line: usize) -> Result<W>
where
    W: Weight + FromStr,
{
    let token = token.ok_or_else(|| anyhow!("missing weight on edge line {}", line + 1))?;
    let weight: W = token
        .parse()
        .map_err(|_| anyhow!("invalid weight `{token}` on edge line {}", line + 1))?;
    match weight.partial_cmp(&W::zero()) {
        // NaN compares as unordered and is rejected too.
        Some(Ordering::Less) | None => {
            bail!("negative weight `{token}` on edge line {}", line + 1)
        }
        _ => Ok(weight),
    }
}
