//! JSON output formatting
//!
//! Every JSON document the CLI prints has the same shape:
//! `{"data": ..., "meta": {"generated_at": ..., "version": ...}}`.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Envelope around the printed payload
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub generated_at: DateTime<Utc>,
    /// `petfriends` version that produced the output
    pub version: &'static str,
}

impl<'a, T: ?Sized> JsonOutput<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            data,
            meta: Metadata {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Pretty-print data inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
