//! Per-(graph, s) driver: where the files live and how one instance is
//! processed end to end.
//!
//! Every instance is independent. Its vertex map is rebuilt from the raw
//! edge list, used to project the graph's query file, dumped, and dropped.

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Instant;

use serde_json::{json, Value};

use crate::error::Result;
use crate::{project_file, remap_file, SummaryStats};

/// One graph at one `s` level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub graph: String,
    pub s: u32,
}

impl Instance {
    pub fn new(graph: impl Into<String>, s: u32) -> Self {
        Self {
            graph: graph.into(),
            s,
        }
    }
}

/// Directory roots and file naming for raw inputs and remapped outputs.
#[derive(Debug, Clone)]
pub struct Layout {
    pub raw_dir: PathBuf,
    pub query_dir: PathBuf,
    pub out_dir: PathBuf,
    pub raw_ext: String,
    pub query_ext: String,
}

impl Layout {
    pub fn new(
        raw_dir: impl Into<PathBuf>,
        query_dir: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            raw_dir: raw_dir.into(),
            query_dir: query_dir.into(),
            out_dir: out_dir.into(),
            raw_ext: "lg".to_string(),
            query_ext: "txt".to_string(),
        }
    }

    /// `<raw>/<graph>_S<s>.<raw_ext>`
    pub fn raw_path(&self, instance: &Instance) -> PathBuf {
        self.raw_dir.join(format!(
            "{}_S{}.{}",
            instance.graph, instance.s, self.raw_ext
        ))
    }

    /// `<query>/<graph>_queries.<query_ext>`, shared by every `s`.
    pub fn query_path(&self, graph: &str) -> PathBuf {
        self.query_dir
            .join(format!("{}_queries.{}", graph, self.query_ext))
    }

    /// `<out>/<graph>/<s>/`
    pub fn instance_dir(&self, instance: &Instance) -> PathBuf {
        self.out_dir
            .join(&instance.graph)
            .join(instance.s.to_string())
    }

    pub fn graph_path(&self, instance: &Instance) -> PathBuf {
        self.instance_dir(instance).join("graph.txt")
    }

    pub fn queries_path(&self, instance: &Instance) -> PathBuf {
        self.instance_dir(instance).join("queries.txt")
    }

    /// `<out>/<graph>-<s>-vmap.txt`
    pub fn vmap_path(&self, instance: &Instance) -> PathBuf {
        self.out_dir
            .join(format!("{}-{}-vmap.txt", instance.graph, instance.s))
    }
}

/// Counts describing one processed instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceReport {
    pub nvertices: usize,
    pub nedges: usize,
    pub self_loops: usize,
    pub queries_read: usize,
    pub queries_kept: usize,
    pub queries_dropped: usize,
}

impl InstanceReport {
    pub fn to_json(&self, instance: &Instance) -> Value {
        json!({
            "graph": instance.graph,
            "s": instance.s,
            "nvertices": self.nvertices,
            "nedges": self.nedges,
            "self_loops": self.self_loops,
            "queries_read": self.queries_read,
            "queries_kept": self.queries_kept,
            "queries_dropped": self.queries_dropped,
        })
    }
}

/// Remaps one instance's edge list, projects its graph's queries, and
/// writes `graph.txt`, `queries.txt` and the vertex map dump.
///
/// Output directories are created as needed. A failure part way through
/// leaves whatever was already written.
pub fn process(layout: &Layout, instance: &Instance) -> Result<InstanceReport> {
    let raw_path = layout.raw_path(instance);
    let remap_start = Instant::now();
    let remapped = remap_file(&raw_path)?;
    let degrees = SummaryStats::from(remapped.degrees().into_iter().map(|d| d as f64));
    println!(
        "{}",
        json!({
            "graph": instance.graph,
            "s": instance.s,
            "remapped": raw_path,
            "nvertices": remapped.nvertices(),
            "nedges": remapped.nedges(),
            "self_loops": remapped.self_loops(),
            "degrees": degrees.map(|stats| stats.to_map()),
            "remap_duration": format!("{:.0?}", Instant::now().duration_since(remap_start)),
        })
    );

    let graph_path = layout.graph_path(instance);
    remapped.write_edges(&graph_path)?;
    println!("{}", json!({ "written": graph_path }));

    let query_path = layout.query_path(&instance.graph);
    let project_start = Instant::now();
    let projected = project_file(&query_path, &remapped.vmap)?;
    println!(
        "{}",
        json!({
            "graph": instance.graph,
            "s": instance.s,
            "projected": query_path,
            "queries_read": projected.read,
            "queries_kept": projected.kept(),
            "queries_dropped": projected.dropped,
            "project_duration": format!("{:.0?}", Instant::now().duration_since(project_start)),
        })
    );

    let queries_path = layout.queries_path(instance);
    projected.write(&queries_path)?;
    println!("{}", json!({ "written": queries_path }));

    let vmap_path = layout.vmap_path(instance);
    remapped.vmap.write(&vmap_path)?;
    println!("{}", json!({ "written": vmap_path }));

    Ok(InstanceReport {
        nvertices: remapped.nvertices(),
        nedges: remapped.nedges(),
        self_loops: remapped.self_loops(),
        queries_read: projected.read,
        queries_kept: projected.kept(),
        queries_dropped: projected.dropped,
    })
}

/// Processes every graph at every `s` in `s_range`, graphs outermost.
///
/// A failed instance is logged and skipped; the rest still run.
pub fn run(
    layout: &Layout,
    graphs: &[String],
    s_range: RangeInclusive<u32>,
) -> Vec<(Instance, Result<InstanceReport>)> {
    let mut outcomes = Vec::new();
    for graph in graphs {
        for s in s_range.clone() {
            let instance = Instance::new(graph.as_str(), s);
            let outcome = process(layout, &instance);
            match &outcome {
                Ok(report) => println!("{}", report.to_json(&instance)),
                Err(e) => println!(
                    "{}",
                    json!({
                        "graph": instance.graph,
                        "s": instance.s,
                        "error": e.to_string(),
                    })
                ),
            }
            outcomes.push((instance, outcome));
        }
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn default_naming() {
        let layout = Layout::new("raw", "q", "out");
        let instance = Instance::new("threads", 3);
        assert_eq!(layout.raw_path(&instance), Path::new("raw/threads_S3.lg"));
        assert_eq!(
            layout.query_path("threads"),
            Path::new("q/threads_queries.txt")
        );
        assert_eq!(
            layout.graph_path(&instance),
            Path::new("out/threads/3/graph.txt")
        );
        assert_eq!(
            layout.queries_path(&instance),
            Path::new("out/threads/3/queries.txt")
        );
        assert_eq!(
            layout.vmap_path(&instance),
            Path::new("out/threads-3-vmap.txt")
        );
    }

    #[test]
    fn custom_extensions() {
        let mut layout = Layout::new("raw", "q", "out");
        layout.raw_ext = "edges".to_string();
        layout.query_ext = "tsv".to_string();
        assert_eq!(
            layout.raw_path(&Instance::new("g", 10)),
            Path::new("raw/g_S10.edges")
        );
        assert_eq!(layout.query_path("g"), Path::new("q/g_queries.tsv"));
    }
}
