//! Defines the endpoint for listing a user's transactions with their balance.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, Error, user::UserId};

use super::TransactionList;

/// A route handler for getting a user's transactions and the balance over them.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<TransactionList>, Error> {
    let store = state.lock_store()?;
    let transactions = store.transactions_with_balance(user_id)?;

    Ok(Json(transactions))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        balance::Balance,
        endpoints,
        test_utils::{
            format_endpoint, must_create_test_server, must_create_transaction, must_create_user,
            transaction_data,
        },
        transaction::{TransactionList, TransactionType},
        user::UserId,
    };

    #[tokio::test]
    async fn empty_user_has_zero_balance() {
        let server = must_create_test_server();
        let user = must_create_user(&server, "Ana").await;

        let response = server
            .get(&format_endpoint(endpoints::USER_TRANSACTIONS, user.id))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "transactions": [],
            "balance": {"income": 0.0, "outcome": 0.0, "total": 0.0}
        }));
    }

    // Outcomes are accumulated as a negative number and then subtracted, so
    // they add to the total. Clients depend on these exact numbers.
    #[tokio::test]
    async fn balance_adds_outcomes_to_total() {
        let server = must_create_test_server();
        let user = must_create_user(&server, "Ana").await;
        must_create_transaction(
            &server,
            user.id,
            &transaction_data(100.0, TransactionType::Income),
        )
        .await;
        let user = must_create_transaction(
            &server,
            user.id,
            &transaction_data(30.0, TransactionType::Outcome),
        )
        .await;

        let response = server
            .get(&format_endpoint(endpoints::USER_TRANSACTIONS, user.id))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<TransactionList>(),
            TransactionList {
                transactions: user.transactions,
                balance: Balance {
                    income: 100.0,
                    outcome: -30.0,
                    total: 130.0,
                },
            }
        );
    }

    #[tokio::test]
    async fn unknown_types_are_listed_but_not_counted() {
        let server = must_create_test_server();
        let user = must_create_user(&server, "Ana").await;
        let user = must_create_transaction(
            &server,
            user.id,
            &transaction_data(5.0, TransactionType::Other("transfer".to_owned())),
        )
        .await;

        let list = server
            .get(&format_endpoint(endpoints::USER_TRANSACTIONS, user.id))
            .await
            .json::<TransactionList>();

        assert_eq!(list.transactions, user.transactions);
        assert_eq!(list.balance, Balance::default());
    }

    #[tokio::test]
    async fn missing_user_responds_with_404() {
        let server = must_create_test_server();

        let response = server
            .get(&format_endpoint(endpoints::USER_TRANSACTIONS, UserId::new_v4()))
            .await;

        response.assert_status_not_found();
    }
}
