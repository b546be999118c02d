pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use requests::{FullTime, JobQuery, SearchParams};
pub use responses::FeedResponse;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The three job listing endpoints the homepage reads from.
///
/// Displays as the endpoint's path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FetchKind {
    #[display("nearby")]
    Nearby,
    #[display("search")]
    Search,
    #[display("recommend")]
    Recommend,
}

impl FetchKind {
    pub const ALL: [FetchKind; 3] =
        [FetchKind::Nearby, FetchKind::Search, FetchKind::Recommend];
}

/// A job listing as returned by the backend.
///
/// The record is kept as-is; the accessors only read the handful of
/// fields the listing cards display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Job(pub Map<String, Value>);

impl Job {
    /// A string field of the record, if present and a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// A stable key for list rendering: the `id` field in any JSON form,
    /// falling back to the listing url.
    pub fn key(&self) -> Option<String> {
        match self.0.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => self.url().map(str::to_string),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn company(&self) -> Option<&str> {
        self.text("company")
    }

    pub fn location(&self) -> Option<&str> {
        self.text("location")
    }

    /// Employment type, e.g. "Full Time".
    pub fn job_type(&self) -> Option<&str> {
        self.text("type")
    }

    pub fn url(&self) -> Option<&str> {
        self.text("url")
    }

    pub fn company_logo(&self) -> Option<&str> {
        self.text("company_logo")
    }

    pub fn created_at(&self) -> Option<&str> {
        self.text("created_at")
    }
}

/// Device coordinates, persisted between page loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
