//! Defines the endpoint for creating a user.

use axum::{Json, extract::State};

use crate::{AppState, Error, json::AppJson, user::User};

use super::UserData;

/// A route handler for creating a new user, responds with the created user.
///
/// The user is given a freshly generated UUID and no transactions.
pub async fn create_user_endpoint(
    State(state): State<AppState>,
    AppJson(data): AppJson<UserData>,
) -> Result<Json<User>, Error> {
    let mut store = state.lock_store()?;
    let user = store.create(data);

    tracing::debug!("Created user {}", user.id);

    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        ErrorBody, endpoints,
        test_utils::{format_endpoint, must_create_test_server, user_data},
        user::{User, UserDetails},
    };

    #[tokio::test]
    async fn creates_user_with_empty_transactions() {
        let server = must_create_test_server();
        let data = user_data("Ana");

        let response = server.post(endpoints::USERS).json(&data).await;

        response.assert_status_ok();
        let user = response.json::<User>();
        assert_eq!(user.name, data.name);
        assert_eq!(user.cpf, data.cpf);
        assert_eq!(user.email, data.email);
        assert_eq!(user.age, data.age);
        assert!(user.transactions.is_empty());
    }

    #[tokio::test]
    async fn keeps_fractional_and_negative_ages() {
        let server = must_create_test_server();

        for age in [30.5, -1.0] {
            let response = server
                .post(endpoints::USERS)
                .json(&json!({
                    "name": "Ana",
                    "cpf": "123.456.789-00",
                    "email": "ana@example.com",
                    "age": age
                }))
                .await;

            response.assert_status_ok();
            let user = response.json::<User>();
            assert_eq!(user.age, age);
            let details = server
                .get(&format_endpoint(endpoints::USER, user.id))
                .await
                .json::<UserDetails>();
            assert_eq!(details.age, age);
        }
    }

    #[tokio::test]
    async fn generates_distinct_ids() {
        let server = must_create_test_server();

        let first = server.post(endpoints::USERS).json(&user_data("Ana")).await;
        let second = server.post(endpoints::USERS).json(&user_data("Ana")).await;

        assert_ne!(first.json::<User>().id, second.json::<User>().id);
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let server = must_create_test_server();

        let response = server
            .post(endpoints::USERS)
            .json(&json!({"name": "Ana", "cpf": "123"}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            response
                .json::<ErrorBody>()
                .error
                .starts_with("invalid request body")
        );
        server.get(endpoints::USERS).await.assert_status_not_found();
    }
}
