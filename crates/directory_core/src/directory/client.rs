use crate::directory::errors::FetchError;
use crate::directory::types::User;
use log::info;
use reqwest::{ClientBuilder, header};

/// Endpoint queried when no other URL has been configured.
pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";

pub struct UserDirectoryClient {
    /// A HTTP client used to execute the GET request against the user directory
    http_client: reqwest::Client,
    /// Full URL of the endpoint returning the JSON array of users
    url: String,
}

impl UserDirectoryClient {
    /// Create a new HTTP request client for the given endpoint. No timeout and no retry policy is
    /// configured, a request either resolves or fails once.
    /// # Errors
    /// Fails in case the reqwest `ClientBuilder` cannot build a client
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called once per program run"
    )]
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let client = ClientBuilder::new()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers(headers)
            .build();

        client
            .map(|http_client| Self {
                http_client,
                url: url.to_owned(),
            })
            .map_err(|err| FetchError::ClientBuild(err.to_string()))
    }

    /// The endpoint this client talks to
    #[must_use]
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues a single GET request and decodes the body as a list of users, in the order the
    /// endpoint returned them.
    /// # Errors
    /// Returns an error if the request fails, if the endpoint answers with a non-success status or
    /// if the body cannot be decoded
    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        info!("Fetching users from {}", self.url);
        let response = self.http_client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let users: Vec<User> = response.json().await.map_err(FetchError::Decode)?;
        info!("Received {} users", users.len());

        Ok(users)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "Tests are predefined and guaranteed to be Some/Ok"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_users_keeps_endpoint_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 2,
                    "name": "Ervin Howell",
                    "address": { "street": "Victor Plains", "suite": "Suite 879", "city": "Wisokyburgh", "zipcode": "90566-7771" }
                },
                {
                    "id": 1,
                    "name": "Leanne Graham",
                    "address": { "street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough", "zipcode": "92998-3874" }
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = UserDirectoryClient::new(&format!("{}/users", server.uri())).unwrap();
        let users = client.fetch_users().await.unwrap();

        let ids: Vec<i64> = users.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = UserDirectoryClient::new(&server.uri()).unwrap();
        let result = client.fetch_users().await;

        assert!(matches!(
            result,
            Err(FetchError::Status(status)) if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"users\": []}"))
            .mount(&server)
            .await;

        let client = UserDirectoryClient::new(&server.uri()).unwrap();
        let result = client.fetch_users().await;

        assert!(matches!(result, Err(FetchError::Decode(err)) if err.is_decode()));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) on localhost is not served by anything in the test environment
        let client = UserDirectoryClient::new("http://127.0.0.1:9/users").unwrap();
        let result = client.fetch_users().await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
