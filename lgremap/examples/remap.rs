//! Remaps a batch of s-line graphs and their query files onto dense
//! vertex ids.
//!
//! For each graph and each `s` in `[smin, smax]`, reads
//! `<raw_dir>/<graph>_S<s>.<raw-ext>` and `<query_dir>/<graph>_queries.<query-ext>`
//! and writes `<out_dir>/<graph>/<s>/{graph,queries}.txt` plus
//! `<out_dir>/<graph>-<s>-vmap.txt`. Instances that fail are reported and
//! skipped.

use std::path::PathBuf;
use std::time::Instant;

use serde_json::json;
use structopt::StructOpt;

use lgremap::{instance, Layout};

#[derive(Debug, StructOpt)]
#[structopt(name = "remap", about = "Remap s-line graphs and queries to dense ids.")]
struct Opt {
    /// Directory with the raw s-line graph edge lists.
    raw_dir: PathBuf,

    /// Directory with the per-graph query files.
    query_dir: PathBuf,

    /// Directory to write remapped graphs, queries and vertex maps into.
    out_dir: PathBuf,

    /// Graph names to process.
    #[structopt(long, default_value = "threads-stack-overflow-2")]
    graph: Vec<String>,

    /// Smallest s value, inclusive.
    #[structopt(long, default_value = "1")]
    smin: u32,

    /// Largest s value, inclusive.
    #[structopt(long, default_value = "10")]
    smax: u32,

    /// Extension of the raw edge list files.
    #[structopt(long, default_value = "lg")]
    raw_ext: String,

    /// Extension of the query files.
    #[structopt(long, default_value = "txt")]
    query_ext: String,
}

fn main() {
    let opt = Opt::from_args();
    let layout = Layout {
        raw_ext: opt.raw_ext,
        query_ext: opt.query_ext,
        ..Layout::new(opt.raw_dir, opt.query_dir, opt.out_dir)
    };

    let start = Instant::now();
    let outcomes = instance::run(&layout, &opt.graph, opt.smin..=opt.smax);
    let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
    println!(
        "{}",
        json!({
            "instances": outcomes.len(),
            "failed": failed,
            "total_duration": format!("{:.0?}", Instant::now().duration_since(start)),
        })
    );
}
