//! Best-effort mirroring of local mutations to the mock JSON server.
//!
//! The UI applies every mutation optimistically before the request is
//! sent; a failed call is reported to the configured sink and nothing
//! is rolled back. Creates additionally return their outcome so the
//! forms can show a failure. Bulk deletes go out one request per id so
//! each can fail independently.

use std::sync::Arc;

use gloo_net::http::{Request, Response};
use serde::Serialize;

/// Where write failures are reported. Injectable so tests can assert
/// on failure reporting instead of scraping the console.
pub trait FailureSink: Send + Sync {
    fn report(&self, operation: &str, error: &str);
}

/// Default sink: routes failures through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl FailureSink for LogSink {
    fn report(&self, operation: &str, error: &str) {
        log::error!("remote sync: {} failed: {}", operation, error);
    }
}

/// Stateless adapter for one collection endpoint (`{base}/users`,
/// `{base}/documents`).
#[derive(Clone)]
pub struct RemoteSync {
    endpoint: String,
    sink: Arc<dyn FailureSink>,
}

impl RemoteSync {
    pub fn new(base: &str, collection: &str, sink: Arc<dyn FailureSink>) -> Self {
        Self {
            endpoint: format!("{}/{}", base.trim_end_matches('/'), collection),
            sink,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// POST to the collection; the server assigns the id. Unlike the
    /// other writes, the outcome is returned so create forms can
    /// surface a failure. It is still reported to the sink.
    pub async fn create<T: Serialize>(&self, record: &T) -> Result<(), String> {
        let result = match Request::post(&self.endpoint).json(record) {
            Ok(req) => Self::outcome(req.send().await),
            Err(e) => Err(e.to_string()),
        };
        if let Err(e) = &result {
            self.sink.report("create", e);
        }
        result
    }

    /// PUT full replacement of one record.
    pub async fn update<T: Serialize>(&self, id: &str, record: &T) {
        match Request::put(&self.item_url(id)).json(record) {
            Ok(req) => self.dispatch("update", req.send().await),
            Err(e) => self.sink.report("update", &e.to_string()),
        }
    }

    /// PATCH a single field.
    pub async fn patch_field(&self, id: &str, field: &str, value: serde_json::Value) {
        let mut body = serde_json::Map::new();
        body.insert(field.to_string(), value);
        match Request::patch(&self.item_url(id)).json(&body) {
            Ok(req) => self.dispatch("patch", req.send().await),
            Err(e) => self.sink.report("patch", &e.to_string()),
        }
    }

    pub async fn delete(&self, id: &str) {
        let result = Request::delete(&self.item_url(id)).send().await;
        self.dispatch("delete", result);
    }

    /// One DELETE per id; partial success is possible and only the
    /// failures are reported.
    pub async fn delete_many(&self, ids: &[String]) {
        for id in ids {
            self.delete(id).await;
        }
    }

    fn outcome(result: Result<Response, gloo_net::Error>) -> Result<(), String> {
        match result {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(format!("server returned {}", response.status())),
            Err(e) => Err(e.to_string()),
        }
    }

    fn dispatch(&self, operation: &str, result: Result<Response, gloo_net::Error>) {
        if let Err(e) = Self::outcome(result) {
            self.sink.report(operation, &e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        reports: Mutex<Vec<(String, String)>>,
    }

    impl FailureSink for RecordingSink {
        fn report(&self, operation: &str, error: &str) {
            self.reports
                .lock()
                .unwrap()
                .push((operation.to_string(), error.to_string()));
        }
    }

    #[test]
    fn endpoint_joins_base_and_collection() {
        let sync = RemoteSync::new("http://localhost:5000", "documents", Arc::new(LogSink));
        assert_eq!(sync.endpoint(), "http://localhost:5000/documents");
        assert_eq!(sync.item_url("12"), "http://localhost:5000/documents/12");
    }

    #[test]
    fn trailing_slash_on_the_base_is_tolerated() {
        let sync = RemoteSync::new("http://localhost:5000/", "users", Arc::new(LogSink));
        assert_eq!(sync.item_url("a1"), "http://localhost:5000/users/a1");
    }

    #[test]
    fn sink_receives_operation_and_error() {
        let sink = Arc::new(RecordingSink::default());
        let sync = RemoteSync::new("http://localhost:5000", "users", sink.clone());
        sync.sink.report("delete", "server returned 500");
        drop(sync);

        let reports = sink.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, "delete");
    }
}
