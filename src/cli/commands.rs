//! CLI command implementations.
//!
//! Each command reads whitespace-separated integers from `input` and writes
//! plain text, or JSON when `json` is set, to `out`.

use std::io::{Read, Write};

use crate::graph::{bfs_forest, Adjacency, AdjacencyList, AdjacencyMatrix, BfsForest};
use crate::hashing::{run_session, ChainedHashTable, IntTable, LinearProbingTable};
use crate::input::TokenReader;
use crate::matrix::{demo_matrix, multiply, slice, LoopOrder, Matrix, SliceDirection};
use crate::sorting::run_sort_driver;
use crate::types::{AlgoResult, DEFAULT_SLICE_SIZE};

/// Collision strategy for the `hash` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStrategy {
    Chaining,
    LinearProbing,
}

impl HashStrategy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chaining" | "separate" => Some(HashStrategy::Chaining),
            "linear" | "probing" => Some(HashStrategy::LinearProbing),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HashStrategy::Chaining => "chaining",
            HashStrategy::LinearProbing => "linear",
        }
    }
}

fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> AlgoResult<()> {
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    )?;
    Ok(())
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_forest<W: Write>(
    out: &mut W,
    node_count: usize,
    forest: &BfsForest,
    json: bool,
) -> AlgoResult<()> {
    if json {
        let info = serde_json::json!({
            "nodes": node_count,
            "order": forest.order,
            "components": forest.components,
            "component_count": forest.component_count(),
        });
        write_json(out, &info)?;
    } else {
        writeln!(out, "BFS order: {}", join(&forest.order))?;
        writeln!(out, "Components: {}", forest.component_count())?;
    }
    Ok(())
}

/// BFS forest over an adjacency-list graph.
pub fn cmd_bfs_list<R: Read, W: Write>(input: R, out: &mut W, json: bool) -> AlgoResult<()> {
    let mut reader = TokenReader::from_reader(input)?;
    let graph = AdjacencyList::parse(&mut reader)?;
    let forest = bfs_forest(&graph)?;
    write_forest(out, graph.node_count(), &forest, json)
}

/// BFS forest over an adjacency-matrix graph.
pub fn cmd_bfs_matrix<R: Read, W: Write>(input: R, out: &mut W, json: bool) -> AlgoResult<()> {
    let mut reader = TokenReader::from_reader(input)?;
    let graph = AdjacencyMatrix::parse(&mut reader)?;
    let forest = bfs_forest(&graph)?;
    write_forest(out, graph.node_count(), &forest, json)
}

/// Convert an adjacency matrix into the adjacency-list input format.
pub fn cmd_convert<R: Read, W: Write>(input: R, out: &mut W, json: bool) -> AlgoResult<()> {
    let mut reader = TokenReader::from_reader(input)?;
    let list = AdjacencyMatrix::parse(&mut reader)?.to_adjacency_list();
    if json {
        let lists: Vec<&[usize]> = (0..list.node_count()).map(|n| list.neighbors(n)).collect();
        write_json(out, &serde_json::json!({ "nodes": list.node_count(), "adjacency": lists }))?;
    } else {
        write!(out, "{}", list.to_text())?;
    }
    Ok(())
}

/// Insert values, then report presence of each query.
pub fn cmd_hash<R: Read, W: Write>(
    input: R,
    out: &mut W,
    strategy: HashStrategy,
    json: bool,
) -> AlgoResult<()> {
    let mut reader = TokenReader::from_reader(input)?;
    let mut table: Box<dyn IntTable> = match strategy {
        HashStrategy::Chaining => Box::new(ChainedHashTable::new()),
        HashStrategy::LinearProbing => Box::new(LinearProbingTable::new()),
    };
    let results = run_session(table.as_mut(), &mut reader)?;

    if json {
        let info = serde_json::json!({
            "strategy": strategy.name(),
            "entries": table.len(),
            "load_factor": table.load_factor(),
            "queries": results,
        });
        write_json(out, &info)?;
    } else {
        for r in &results {
            writeln!(out, "Is value {} present: {}", r.value, r.present)?;
        }
    }
    Ok(())
}

/// Multiply two `N x N` matrices.
pub fn cmd_multiply<R: Read, W: Write>(
    input: R,
    out: &mut W,
    order: LoopOrder,
    json: bool,
) -> AlgoResult<()> {
    let mut reader = TokenReader::from_reader(input)?;
    let n = reader.square_size("matrix size", 2)?;
    let a = Matrix::read_square(&mut reader, n)?;
    let b = Matrix::read_square(&mut reader, n)?;
    let c = multiply(&a, &b, order)?;

    if json {
        write_json(
            out,
            &serde_json::json!({ "order": order.name(), "rows": c.to_rows() }),
        )?;
    } else {
        write!(out, "{}", c.to_text())?;
    }
    Ok(())
}

/// Print every slice of the demo matrix along `direction`.
///
/// Input is an optional size; empty input uses the default.
pub fn cmd_slice<R: Read, W: Write>(
    input: R,
    out: &mut W,
    direction: SliceDirection,
    json: bool,
) -> AlgoResult<()> {
    let mut reader = TokenReader::from_reader(input)?;
    let size = if reader.is_exhausted() {
        DEFAULT_SLICE_SIZE
    } else {
        reader.size("matrix size")?
    };
    let matrix = demo_matrix(size)?;
    let slices = (0..size)
        .map(|i| slice(&matrix, i, direction))
        .collect::<AlgoResult<Vec<_>>>()?;

    if json {
        write_json(out, &serde_json::json!({ "size": size, "slices": slices }))?;
    } else {
        for s in &slices {
            writeln!(out, "{}", join(s))?;
        }
    }
    Ok(())
}

/// Sort `[n, .., 1]` ascending.
pub fn cmd_sort<R: Read, W: Write>(input: R, out: &mut W, json: bool) -> AlgoResult<()> {
    let mut reader = TokenReader::from_reader(input)?;
    let n: u32 = reader.value("element count")?;
    let sorted = run_sort_driver(n);

    if json {
        write_json(out, &serde_json::json!({ "sorted": sorted }))?;
    } else {
        writeln!(out, "After sorting the list is:")?;
        writeln!(out, "{}", join(&sorted))?;
    }
    Ok(())
}
