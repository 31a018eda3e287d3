use std::sync::mpsc::{self, Receiver};
use std::thread;

use serde::Deserialize;
use thiserror::Error;

use super::model::{Catalog, Record};

/// Default catalog endpoint; override with `SATSCOPE_ENDPOINT`.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5003/api/spacecraft";

/// Why the one-shot catalog load failed. All variants leave the store
/// empty; none is fatal to the application.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to catalog endpoint failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to parse catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The endpoint serves either a bare record array or an envelope object
/// with a `data` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Envelope { data: Vec<Record> },
    Bare(Vec<Record>),
}

/// Parse a catalog payload body. Records lacking an id get their 1-based
/// position during normalization.
pub fn parse_catalog(body: &str) -> Result<Catalog, FetchError> {
    let payload: Payload = serde_json::from_str(body)?;
    let records = match payload {
        Payload::Envelope { data } => data,
        Payload::Bare(records) => records,
    };
    Ok(Catalog::from_records(records))
}

/// Blocking GET + parse of the catalog. Runs on the fetch thread, never on
/// the UI thread.
pub fn fetch_catalog(endpoint: &str) -> Result<Catalog, FetchError> {
    let response = reqwest::blocking::get(endpoint)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.text()?;
    parse_catalog(&body)
}

/// Fire the one-shot background load. The receiver yields exactly one
/// result; the app polls it each frame until it arrives. No retry, no
/// cancellation.
pub fn spawn_fetch(endpoint: String) -> Receiver<Result<Catalog, FetchError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = fetch_catalog(&endpoint);
        // The app may have shut down before the fetch resolved.
        let _ = tx.send(result);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_array() {
        let body = r#"[
            {"id": 3, "attributes": {"name": "A"}},
            {"attributes": {"name": "B"}}
        ]"#;
        let catalog = parse_catalog(body).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records[0].id(), 3);
        // The id-less record takes its 1-based position.
        assert_eq!(catalog.records[1].id(), 2);
    }

    #[test]
    fn parses_a_data_envelope() {
        let body = r#"{"data": [{"attributes": {"name": "A", "mass": 12.5}}]}"#;
        let catalog = parse_catalog(body).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records[0].id(), 1);
        assert_eq!(catalog.records[0].attributes.mass, Some(12.5));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = parse_catalog("not json").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
