use std::fmt::Display;

use serde::Serialize;

/// The `{ data, loading, error }` triple every view exposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }
}

impl<T> QueryState<T> {
    /// Apply a finished fetch. Success replaces data and clears the error;
    /// failure keeps the previous data and stores the message verbatim.
    pub fn settle<E: Display>(&mut self, result: Result<T, E>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(error) => {
                tracing::debug!(%error, "fetch failed");
                self.error = Some(error.to_string());
            }
        }
        self.loading = false;
    }

    /// Move back to loading before a fetch starts.
    pub const fn begin(&mut self) {
        self.loading = true;
    }
}
