use crate::Job;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// Body of a job listing endpoint.
///
/// The backend answers with either a sequence of jobs or an object
/// carrying a `message` field, which it uses for responses that do not
/// apply (e.g. recommendations for a visitor with no history).
#[derive(Debug, Clone, PartialEq)]
pub enum FeedResponse {
    Jobs(Vec<Job>),
    Notice { message: Value },
}

impl FeedResponse {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(_) => Ok(FeedResponse::Jobs(serde_json::from_value(
                value,
            )?)),
            Value::Object(mut fields) => match fields.remove("message") {
                Some(message) => Ok(FeedResponse::Notice { message }),
                None => Err(serde_json::Error::custom(
                    "expected a job list or an object with a message field",
                )),
            },
            other => Err(serde_json::Error::custom(format!(
                "expected a job list, found {other}"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for FeedResponse {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        FeedResponse::from_value(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_job_list() {
        let body = r#"[{"id":"a1","title":"Engineer","salary":{"min":1}}]"#;
        let FeedResponse::Jobs(jobs) = serde_json::from_str(body).unwrap()
        else {
            panic!("expected jobs");
        };
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title(), Some("Engineer"));
        assert_eq!(jobs[0].key().as_deref(), Some("a1"));
        // Unknown fields pass through untouched
        assert!(jobs[0].0.contains_key("salary"));
    }

    #[test]
    fn parses_empty_list() {
        let response: FeedResponse = serde_json::from_str("[]").unwrap();
        assert_eq!(response, FeedResponse::Jobs(vec![]));
    }

    #[test]
    fn object_with_message_is_a_notice() {
        let body = r#"{"message":"no history","jobs":[{"id":1}]}"#;
        let response: FeedResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response,
            FeedResponse::Notice {
                message: Value::String("no history".into())
            }
        );
    }

    #[test]
    fn null_message_is_still_a_notice() {
        let response: FeedResponse =
            serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert!(matches!(response, FeedResponse::Notice { .. }));
    }

    #[test]
    fn object_without_message_is_malformed() {
        assert!(serde_json::from_str::<FeedResponse>(r#"{"id":1}"#).is_err());
        assert!(serde_json::from_str::<FeedResponse>("42").is_err());
        assert!(serde_json::from_str::<FeedResponse>("not json").is_err());
    }

    #[test]
    fn numeric_id_is_used_as_key() {
        let response: FeedResponse =
            serde_json::from_str(r#"[{"id":7,"url":"https://x"}]"#).unwrap();
        let FeedResponse::Jobs(jobs) = response else {
            panic!("expected jobs");
        };
        assert_eq!(jobs[0].key().as_deref(), Some("7"));
    }
}
