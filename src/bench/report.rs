use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;
use tracing::info;

use crate::{
    bench::{AlgorithmResult, TraversalRecord},
    error::BenchError,
};

/// Marker written in place of a path length when no path was found.
pub const NOT_FOUND: &str = "not found";

const ALGORITHMS: [&str; 3] = ["dfs", "dls", "bfs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
}

fn results(record: &TraversalRecord) -> [&AlgorithmResult; 3] {
    [&record.dfs, &record.dls, &record.bfs]
}

fn path_length_cell(result: &AlgorithmResult) -> String {
    result
        .path_length
        .map_or_else(|| NOT_FOUND.to_string(), |length| length.to_string())
}

/// Writes one header row plus one row per record.
///
/// Columns: `generator, vertex_count, edges_per_vertex, edge_count, start,
/// goal, dls_limit`, then `<alg>_duration_ns, <alg>_path_length,
/// <alg>_expanded` for dfs, dls and bfs.
pub fn write_csv<W: Write>(mut sink: W, records: &[TraversalRecord]) -> Result<(), BenchError> {
    let mut header = vec![
        "generator".to_string(),
        "vertex_count".to_string(),
        "edges_per_vertex".to_string(),
        "edge_count".to_string(),
        "start".to_string(),
        "goal".to_string(),
        "dls_limit".to_string(),
    ];
    for name in ALGORITHMS {
        header.push(format!("{name}_duration_ns"));
        header.push(format!("{name}_path_length"));
        header.push(format!("{name}_expanded"));
    }
    writeln!(sink, "{}", header.join(","))?;

    for record in records {
        let mut row = vec![
            record.generator.to_string(),
            record.vertex_count.to_string(),
            record.edges_per_vertex.to_string(),
            record.edge_count.to_string(),
            record.start.to_string(),
            record.goal.to_string(),
            record.dls_limit.to_string(),
        ];
        for result in results(record) {
            row.push(result.duration_ns.to_string());
            row.push(path_length_cell(result));
            row.push(result.expanded.to_string());
        }
        writeln!(sink, "{}", row.join(","))?;
    }
    sink.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut sink: W, records: &[TraversalRecord]) -> Result<(), BenchError> {
    serde_json::to_writer_pretty(&mut sink, records)?;
    writeln!(sink)?;
    sink.flush()?;
    Ok(())
}

/// Human-readable summary, one line per record.
pub fn write_table<W: Write>(mut sink: W, records: &[TraversalRecord]) -> Result<(), BenchError> {
    write!(
        sink,
        "{:<8} {:>8} {:>6} {:>8} {:>8}",
        "graph", "vertices", "degree", "start", "goal"
    )?;
    for name in ALGORITHMS {
        write!(sink, " {:>14} {:>10}", format!("{name} time (ns)"), format!("{name} len"))?;
    }
    writeln!(sink)?;

    for record in records {
        write!(
            sink,
            "{:<8} {:>8} {:>6} {:>8} {:>8}",
            record.generator.to_string(),
            record.vertex_count,
            record.edges_per_vertex,
            record.start,
            record.goal
        )?;
        for result in results(record) {
            write!(sink, " {:>14} {:>10}", result.duration_ns, path_length_cell(result))?;
        }
        writeln!(sink)?;
    }
    sink.flush()?;
    Ok(())
}

/// Writes `records` to `path` in the requested format.
pub fn write_report(
    path: &Path,
    format: ReportFormat,
    records: &[TraversalRecord],
) -> Result<(), BenchError> {
    let sink = BufWriter::new(File::create(path)?);
    match format {
        ReportFormat::Csv => write_csv(sink, records)?,
        ReportFormat::Json => write_json(sink, records)?,
    }
    info!(path = %path.display(), records = records.len(), ?format, "report written");
    Ok(())
}
