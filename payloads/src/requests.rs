use crate::{Coordinates, FetchKind};
use serde::{Deserialize, Serialize};

/// Whether a search is limited to full time positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullTime {
    #[default]
    Unset,
    Yes,
    No,
}

impl FullTime {
    /// Value sent as the `full_time` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            FullTime::Unset => "",
            FullTime::Yes => "true",
            FullTime::No => "false",
        }
    }

    pub fn from_query_value(s: &str) -> Self {
        match s {
            "true" => FullTime::Yes,
            "false" => FullTime::No,
            _ => FullTime::Unset,
        }
    }
}

/// Keyword search parameters, captured when the search is issued.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchParams {
    pub description: String,
    pub location: String,
    pub full_time: FullTime,
}

impl SearchParams {
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("description", self.description.as_str()),
            ("location", self.location.as_str()),
            ("full_time", self.full_time.as_query_value()),
        ]
    }
}

/// A fully prepared job listing request.
#[derive(Debug, Clone, PartialEq)]
pub enum JobQuery {
    Nearby(Coordinates),
    Search(SearchParams),
    Recommend,
}

impl JobQuery {
    pub fn kind(&self) -> FetchKind {
        match self {
            JobQuery::Nearby(_) => FetchKind::Nearby,
            JobQuery::Search(_) => FetchKind::Search,
            JobQuery::Recommend => FetchKind::Recommend,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
    pub user_id: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_time_query_values() {
        assert_eq!(FullTime::Yes.as_query_value(), "true");
        assert_eq!(FullTime::No.as_query_value(), "false");
        assert_eq!(FullTime::Unset.as_query_value(), "");
        assert_eq!(FullTime::from_query_value("true"), FullTime::Yes);
        assert_eq!(FullTime::from_query_value("false"), FullTime::No);
        assert_eq!(FullTime::from_query_value("any"), FullTime::Unset);
    }

    #[test]
    fn query_kind_matches_variant() {
        let coords = Coordinates {
            latitude: 1.0,
            longitude: 2.0,
        };
        assert_eq!(JobQuery::Nearby(coords).kind(), FetchKind::Nearby);
        assert_eq!(
            JobQuery::Search(SearchParams::default()).kind(),
            FetchKind::Search
        );
        assert_eq!(JobQuery::Recommend.kind(), FetchKind::Recommend);
    }
}
