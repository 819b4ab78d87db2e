//! Alternative-route computation in weighted directed graphs.
//!
//! Given a graph, a source, a target, a path count `k` and a similarity
//! threshold `theta`, [onepass_plus] returns up to `k` simple source-to-target
//! paths such that the weighted overlap between any two returned paths is at
//! most `theta` times the length of the earlier one.
#![warn(
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    macro_use_extern_crate,
    missing_debug_implementations,
    missing_docs,
    non_ascii_idents,
    noop_method_call,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]
#![warn(clippy::all)]

mod engine;
mod graph;
mod label;
mod oracle;
mod overlap;
mod path;
mod queue;
mod skyline;
pub mod tools;
mod weight;

pub use engine::onepass_plus;
pub use graph::{read_graph_from_file, read_graph_from_str, write_graph_to_string};
pub use path::Path;
pub use weight::Weight;

// Dependencies only used in the bin.
use clap as _;
