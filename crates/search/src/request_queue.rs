//! Sliding window of recent requests
//!
//! Tracks, for the last `window` successful requests, whether each one came
//! back empty.

use crate::server::SearchServer;
use lexis_core::{
    Document, DocumentPredicate, DocumentStatus, Error, Result, SearchConfig,
    DEFAULT_REQUEST_WINDOW,
};
use std::collections::VecDeque;

/// Request recorder wrapping a search server
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    /// true = request returned no documents; newest at the back
    requests: VecDeque<bool>,
    window: usize,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    /// Queue with the default window of `DEFAULT_REQUEST_WINDOW` requests
    pub fn new(server: &'a SearchServer) -> Self {
        RequestQueue {
            server,
            requests: VecDeque::with_capacity(DEFAULT_REQUEST_WINDOW),
            window: DEFAULT_REQUEST_WINDOW,
            no_result_count: 0,
        }
    }

    /// Queue with a custom window
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `window` is zero.
    pub fn with_window(server: &'a SearchServer, window: usize) -> Result<Self> {
        if window == 0 {
            return Err(Error::invalid_argument("Request window must be positive"));
        }
        Ok(RequestQueue {
            server,
            requests: VecDeque::with_capacity(window),
            window,
            no_result_count: 0,
        })
    }

    /// Queue using `request_window` from a configuration
    pub fn with_config(server: &'a SearchServer, config: &SearchConfig) -> Result<Self> {
        Self::with_window(server, config.request_window)
    }

    /// Run a query over active documents and record it
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_by(raw_query, DocumentStatus::Active)
    }

    /// Run a query over documents with the given status and record it
    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.add_find_request_by(raw_query, status)
    }

    /// Run a query with a predicate and record it
    ///
    /// A failed query is returned as-is and not recorded.
    pub fn add_find_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let result = self.server.find_top_documents_by(raw_query, predicate)?;
        self.record(result.is_empty());
        Ok(result)
    }

    fn record(&mut self, empty: bool) {
        if self.requests.len() == self.window {
            if let Some(true) = self.requests.pop_front() {
                self.no_result_count -= 1;
            }
        }
        self.requests.push_back(empty);
        if empty {
            self.no_result_count += 1;
        }
    }

    /// Number of empty results among the requests in the window
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    /// Number of requests currently in the window
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Check if no request has been recorded
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Window capacity
    pub fn window(&self) -> usize {
        self.window
    }
}
