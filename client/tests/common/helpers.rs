//! Test helpers for building sessions around mocked services

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tokio::sync::watch;

use deadpandr::core::{Configuration, DownloadedFile, SessionStatus};
use deadpandr::{ClientResult, ComedyApi, FileSink, MockComedyApi, MockFileSink, Session};
use shared::{ApiFailure, ExportRequest, GenerateRequest};

/// Common operations for session tests
pub struct TestHelpers;

impl TestHelpers {
    /// Mock API whose single generate call returns `jokes`
    pub fn api_returning(jokes: Vec<String>) -> MockComedyApi {
        let mut api = MockComedyApi::new();
        api.expect_generate()
            .times(1)
            .returning(move |_| Ok(jokes.clone()));
        api
    }

    /// Mock API whose single generate call fails with `failure`
    pub fn api_failing(failure: ApiFailure) -> MockComedyApi {
        let mut api = MockComedyApi::new();
        api.expect_generate()
            .times(1)
            .returning(move |_| Err(failure.clone()));
        api
    }

    /// Sink that must never be asked to save anything
    pub fn unused_sink() -> MockFileSink {
        let mut sink = MockFileSink::new();
        sink.expect_deliver().never();
        sink
    }

    /// Sink that pretends to save into `/downloads`
    pub fn accepting_sink() -> MockFileSink {
        let mut sink = MockFileSink::new();
        sink.expect_deliver()
            .times(1)
            .returning(|file| Ok(PathBuf::from("/downloads").join(&file.filename)));
        sink
    }

    pub fn session<A: ComedyApi, F: FileSink>(config: Configuration, api: A, sink: F) -> Session<A, F> {
        Session::with_configuration(config, api, sink)
    }
}

/// API stand-in that records the session status seen while a request is in flight
#[derive(Clone, Default)]
pub struct ObservingApi {
    receiver: Arc<Mutex<Option<watch::Receiver<SessionStatus>>>>,
    seen: Arc<Mutex<Vec<SessionStatus>>>,
    jokes: Vec<String>,
}

impl ObservingApi {
    pub fn new(jokes: Vec<String>) -> Self {
        Self {
            jokes,
            ..Self::default()
        }
    }

    pub fn attach(&self, receiver: watch::Receiver<SessionStatus>) {
        *self.receiver.lock().unwrap() = Some(receiver);
    }

    pub fn seen(&self) -> Vec<SessionStatus> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self) {
        if let Some(receiver) = self.receiver.lock().unwrap().as_ref() {
            self.seen.lock().unwrap().push(receiver.borrow().clone());
        }
    }
}

#[async_trait]
impl ComedyApi for ObservingApi {
    async fn generate(&self, _request: &GenerateRequest) -> Result<Vec<String>, ApiFailure> {
        self.record();
        Ok(self.jokes.clone())
    }

    async fn export(&self, _request: &ExportRequest) -> Result<Vec<u8>, ApiFailure> {
        self.record();
        Ok(b"exported".to_vec())
    }
}

/// Sink that never succeeds
pub struct BrokenSink;

#[async_trait]
impl FileSink for BrokenSink {
    async fn deliver(&self, file: &DownloadedFile) -> ClientResult<PathBuf> {
        Err(deadpandr::ClientError::FileSave {
            path: PathBuf::from(&file.filename),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}
