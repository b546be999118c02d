use crate::{FeedResponse, JobQuery, requests};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the job search backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    /// Build the GET request for a job listing endpoint.
    pub fn jobs_request(
        &self,
        query: &JobQuery,
    ) -> Result<reqwest::Request, reqwest::Error> {
        let url = self.format_url(&query.kind().to_string());
        let request = match query {
            JobQuery::Nearby(position) => {
                self.inner_client.get(url).query(&[
                    ("lat", position.latitude),
                    ("lon", position.longitude),
                ])
            }
            JobQuery::Search(params) => {
                self.inner_client.get(url).query(&params.query_pairs())
            }
            JobQuery::Recommend => {
                self.inner_client.get(format!("{url}?recommend"))
            }
        };

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.build()
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch one of the job listing endpoints.
    ///
    /// The body is read as text first so it can be logged before parsing.
    pub async fn jobs(
        &self,
        query: &JobQuery,
    ) -> Result<FeedResponse, ClientError> {
        let request = self.jobs_request(query)?;
        tracing::debug!(url = %request.url(), "fetching {} jobs", query.kind());

        let response = self.inner_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::trace!(%status, %body, "{} response", query.kind());

        if !status.is_success() {
            return Err(ClientError::APIError(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post("login", details).await?;
        ok_empty(response).await
    }

    pub async fn signup(
        &self,
        details: &requests::Signup,
    ) -> Result<(), ClientError> {
        let response = self.post("signup", details).await?;
        ok_empty(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from the server.")]
    Malformed(#[from] serde_json::Error),
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinates, FullTime, SearchParams};

    fn client() -> APIClient {
        APIClient {
            address: "http://localhost:8080/jupiter/".to_string(),
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn search_request_carries_all_three_parameters() {
        let params = SearchParams {
            description: "engineer".to_string(),
            location: "NYC".to_string(),
            full_time: FullTime::Yes,
        };
        let request = client().jobs_request(&JobQuery::Search(params)).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().path(), "/jupiter/search");
        assert_eq!(
            request.url().query(),
            Some("description=engineer&location=NYC&full_time=true")
        );
    }

    #[test]
    fn search_request_encodes_values() {
        let params = SearchParams {
            description: "rust & go".to_string(),
            location: "".to_string(),
            full_time: FullTime::Unset,
        };
        let request = client().jobs_request(&JobQuery::Search(params)).unwrap();
        assert_eq!(
            request.url().query(),
            Some("description=rust+%26+go&location=&full_time=")
        );
    }

    #[test]
    fn nearby_request_uses_coordinates() {
        let position = Coordinates {
            latitude: 37.5,
            longitude: -122.25,
        };
        let request = client()
            .jobs_request(&JobQuery::Nearby(position))
            .unwrap();
        assert_eq!(request.url().path(), "/jupiter/nearby");
        assert_eq!(request.url().query(), Some("lat=37.5&lon=-122.25"));
    }

    #[test]
    fn recommend_request_has_literal_query() {
        let request = client().jobs_request(&JobQuery::Recommend).unwrap();
        assert_eq!(request.url().path(), "/jupiter/recommend");
        assert_eq!(request.url().query(), Some("recommend"));
    }

    #[test]
    fn client_errors_have_user_facing_messages() {
        let error = ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
        );
        assert_eq!(error.to_string(), "boom");

        let parse = serde_json::from_str::<FeedResponse>("{").unwrap_err();
        assert_eq!(
            ClientError::from(parse).to_string(),
            "Unexpected response from the server."
        );
    }
}
