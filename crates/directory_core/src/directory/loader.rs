use crate::directory::client::UserDirectoryClient;
use crate::directory::errors::FetchError;
use crate::directory::types::User;
use crate::names::sorting::sort_users;
use log::{error, info};

/// Fetches the user list once and brings it into its canonical order (by last name, then suffix).
/// # Errors
/// Returns an error if fetching or decoding the user list fails
#[allow(clippy::missing_inline_in_public_items, reason = "Called once at startup")]
pub async fn load(client: &UserDirectoryClient) -> Result<Vec<User>, FetchError> {
    let users = client.fetch_users().await?;
    Ok(sort_users(&users))
}

/// Startup variant of [`load`]: a failed fetch is logged and results in an empty list, the caller
/// never sees the error.
#[allow(clippy::missing_inline_in_public_items, reason = "Called once at startup")]
pub async fn load_or_empty(client: &UserDirectoryClient) -> Vec<User> {
    match load(client).await {
        Ok(users) => {
            info!("Loaded {} users from {}", users.len(), client.url());
            users
        }
        Err(err) => {
            error!("Error fetching users: {err}");
            Vec::new()
        }
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
    use serde_json::{Value, json};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_json(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "address": { "street": "Main St", "suite": "Apt. 1", "city": "Springfield", "zipcode": "12345" }
        })
    }

    async fn serve(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn load_sorts_by_last_name_then_suffix() {
        let server = serve(
            ResponseTemplate::new(200)
                .set_body_json(json!([user_json(2, "John Doe Sr."), user_json(1, "Jane Doe")])),
        )
        .await;

        let client = UserDirectoryClient::new(&server.uri()).unwrap();
        let users = load(&client).await.unwrap();

        let names: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "John Doe Sr."]);
    }

    #[tokio::test]
    async fn load_reports_server_error() {
        let server = serve(ResponseTemplate::new(500)).await;

        let client = UserDirectoryClient::new(&server.uri()).unwrap();
        let result = load(&client).await;

        assert!(matches!(result, Err(FetchError::Status(_))));
    }

    #[tokio::test]
    async fn load_or_empty_swallows_server_error() {
        let server = serve(ResponseTemplate::new(500)).await;

        let client = UserDirectoryClient::new(&server.uri()).unwrap();
        let users = load_or_empty(&client).await;

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn load_or_empty_returns_sorted_users() {
        let server = serve(ResponseTemplate::new(200).set_body_json(json!([
            user_json(1, "Leanne Graham"),
            user_json(2, "Ervin Howell"),
            user_json(3, "Clementine Bauch"),
        ])))
        .await;

        let client = UserDirectoryClient::new(&server.uri()).unwrap();
        let users = load_or_empty(&client).await;

        let ids: Vec<i64> = users.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
