//! Insert-then-query driver over the `N values / S queries` input format.

use serde::Serialize;

use crate::input::TokenReader;
use crate::types::AlgoResult;

use super::IntTable;

/// Presence answer for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub value: i32,
    pub present: bool,
}

/// Read `N` values into `table`, then answer `S` queries.
pub fn run_session<T: IntTable + ?Sized>(
    table: &mut T,
    reader: &mut TokenReader,
) -> AlgoResult<Vec<QueryResult>> {
    let n = reader.record_count("insert count", 1)?;
    for i in 0..n {
        let value: i32 = reader.value(&format!("value #{}", i + 1))?;
        table.insert(value)?;
    }
    log::debug!(
        "Inserted {} values, load factor {:.3}",
        table.len(),
        table.load_factor()
    );

    let s = reader.record_count("query count", 1)?;
    let mut results = Vec::with_capacity(s);
    for i in 0..s {
        let value: i32 = reader.value(&format!("query #{}", i + 1))?;
        results.push(QueryResult {
            value,
            present: table.search(value),
        });
    }
    Ok(results)
}
