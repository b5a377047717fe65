//! Test utilities and helper functions for the providerscrape test suite

use mockito::{Mock, Server};
use providerscrape::detail_fetcher::{
    CloseFuture, DetailFetcher, FetchErrorKind, FetchFailure, FetchFuture,
};
use providerscrape::provider_extractor::{FlatOutputRecord, ProviderDetail};
use providerscrape::scrape_engine::{PipelineReport, ProgressReporter};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Endpoint template pointing at a mock server
#[allow(dead_code)]
pub fn mock_template(server: &Server) -> String {
    format!("{}/providers/{{site_code}}/{{provider_type}}/undefined", server.url())
}

/// Creates a mock endpoint that returns a JSON detail document
#[allow(dead_code)]
pub async fn create_detail_mock(
    server: &mut Server,
    site_code: &str,
    provider_type: &str,
    body: &Value,
) -> Mock {
    server
        .mock("GET", format!("/providers/{site_code}/{provider_type}/undefined").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(
    server: &mut Server,
    site_code: &str,
    provider_type: &str,
    status: usize,
) -> Mock {
    server
        .mock("GET", format!("/providers/{site_code}/{provider_type}/undefined").as_str())
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// A detail document with every field the extractor reads
#[allow(dead_code)]
pub fn detail_json(name: &str) -> Value {
    json!({
        "siteData": {
            "name": name,
            "service": "Workforce Australia Services",
            "specialisation": "",
            "addressLine1": "12 Main St",
            "addressLine2": ""
        },
        "contactData": {"phone": "02 9000 0000", "email": "info@example.org"},
        "socialLinksData": {"website": "https://example.org"}
    })
}

/// A summary entry as it appears in the input file
#[allow(dead_code)]
pub fn summary_json(site_code: &str, provider_type: &str, suburb: &str) -> Value {
    json!({
        "result": {
            "siteCode": site_code,
            "providerType": provider_type,
            "suburb": suburb,
            "state": "NSW",
            "postcode": "2000",
            "latitude": -33.8688,
            "longitude": 151.2093
        }
    })
}

/// Writes `{"results": entries}` to `path`
#[allow(dead_code)]
pub fn write_input(path: &Path, entries: Vec<Value>) {
    let doc = json!({ "results": entries });
    std::fs::write(path, serde_json::to_vec_pretty(&doc).unwrap()).unwrap();
}

/// Reads the output table back as records
#[allow(dead_code)]
pub fn read_output(path: &Path) -> Vec<FlatOutputRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(Result::unwrap).collect()
}

/// In-memory fetcher with scripted answers per site code
///
/// Site codes without an answer fail with status 404. Calls and closes are
/// recorded so tests can assert on them after the fetcher has been moved.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct ScriptedFetcher {
    answers: HashMap<String, Value>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub closes: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, site_code: &str, detail: Value) -> Self {
        self.answers.insert(site_code.to_string(), detail);
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl DetailFetcher for ScriptedFetcher {
    fn fetch<'a>(&'a self, site_code: &'a str, provider_type: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap()
                .push((site_code.to_string(), provider_type.to_string()));
            match self.answers.get(site_code) {
                Some(detail) => Ok(ProviderDetail::new(detail.clone())),
                None => Err(FetchFailure::new(
                    site_code,
                    provider_type,
                    FetchErrorKind::Status(404),
                )),
            }
        })
    }

    fn close(&mut self) -> CloseFuture<'_> {
        Box::pin(async move {
            self.closes.fetch_add(1, Ordering::SeqCst);
        })
    }
}

/// Progress reporter that keeps every event for inspection
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingProgress {
    pub written: Mutex<Vec<(usize, String)>>,
    pub milestones: Mutex<Vec<usize>>,
    pub completed: Mutex<Option<PipelineReport>>,
}

impl ProgressReporter for RecordingProgress {
    fn report_started(&self, _entries: usize) {}

    fn report_record_written(&self, count: usize, record: &FlatOutputRecord) {
        self.written.lock().unwrap().push((count, record.name.clone()));
    }

    fn report_milestone(&self, count: usize) {
        self.milestones.lock().unwrap().push(count);
    }

    fn report_completed(&self, report: &PipelineReport, _output: &Path) {
        *self.completed.lock().unwrap() = Some(*report);
    }
}
