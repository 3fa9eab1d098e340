//! Batch query execution
//!
//! Runs independent queries against one server on the rayon pool. Output
//! order always follows input order.

use crate::server::SearchServer;
use lexis_core::{Document, Result};
use rayon::prelude::*;

/// Rank every query, one result list per query
///
/// # Errors
///
/// Returns `InvalidArgument` if any query is malformed; no partial results
/// are returned.
pub fn process_queries<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<Vec<Document>> = queries
        .par_iter()
        .map(|query| server.find_top_documents(query.as_ref()))
        .collect::<Result<_>>()?;

    tracing::debug!(
        target: "lexis::search",
        queries = queries.len(),
        "Batch processed"
    );
    Ok(results)
}

/// Rank every query and concatenate the results in query order
pub fn process_queries_joined<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(server, queries)?
        .into_iter()
        .flatten()
        .collect())
}
