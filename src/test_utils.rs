#![allow(missing_docs)]

use axum_test::TestServer;

use crate::{
    AppState, build_router, endpoints,
    transaction::{TransactionData, TransactionId, TransactionType},
    user::{User, UserData, UserId},
};

const USER_ID_PARAM: &str = "{user_id}";
const TRANSACTION_ID_PARAM: &str = "{transaction_id}";

/// Replace the `{user_id}` parameter in `endpoint_path` with `user_id`.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub(crate) fn format_endpoint(endpoint_path: &str, user_id: UserId) -> String {
    endpoint_path.replace(USER_ID_PARAM, &user_id.to_string())
}

/// Replace the `{user_id}` and `{transaction_id}` parameters in `endpoint_path`.
pub(crate) fn format_transaction_endpoint(
    endpoint_path: &str,
    user_id: UserId,
    transaction_id: TransactionId,
) -> String {
    format_endpoint(endpoint_path, user_id)
        .replace(TRANSACTION_ID_PARAM, &transaction_id.to_string())
}

#[track_caller]
pub(crate) fn must_create_test_server() -> TestServer {
    TestServer::try_new(build_router(AppState::default())).expect("Could not create test server.")
}

pub(crate) fn user_data(name: &str) -> UserData {
    UserData {
        name: name.to_owned(),
        cpf: "123.456.789-00".to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        age: 30.0,
    }
}

pub(crate) fn transaction_data(value: f64, transaction_type: TransactionType) -> TransactionData {
    TransactionData {
        title: "test".to_owned(),
        value,
        transaction_type,
    }
}

pub(crate) async fn must_create_user(server: &TestServer, name: &str) -> User {
    let response = server.post(endpoints::USERS).json(&user_data(name)).await;
    response.assert_status_ok();

    response.json::<User>()
}

/// Returns the updated user.
pub(crate) async fn must_create_transaction(
    server: &TestServer,
    user_id: UserId,
    data: &TransactionData,
) -> User {
    let response = server
        .post(&format_endpoint(endpoints::NEW_TRANSACTION, user_id))
        .json(data)
        .await;
    response.assert_status_ok();

    response.json::<User>()
}

mod tests {
    use uuid::Uuid;

    use crate::{endpoints, transaction::TransactionId, user::UserId};

    use super::{format_endpoint, format_transaction_endpoint};

    #[test]
    fn formats_user_endpoint() {
        let uuid = Uuid::new_v4();

        let path = format_endpoint(endpoints::USER, UserId::from_uuid(uuid));

        assert_eq!(path, format!("/users/{uuid}"));
    }

    #[test]
    fn formats_transaction_endpoint() {
        let uuid = Uuid::new_v4();

        let path = format_transaction_endpoint(
            endpoints::TRANSACTION,
            UserId::from_uuid(uuid),
            TransactionId::new(12),
        );

        assert_eq!(path, format!("/user/{uuid}/transactions/12"));
    }

    #[test]
    fn leaves_paths_without_parameters_unchanged() {
        assert_eq!(
            format_endpoint(endpoints::USERS, UserId::new_v4()),
            endpoints::USERS
        );
    }
}
