//! Defines the user model, its ID type and the JSON projections served to clients.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Error,
    transaction::{Transaction, TransactionId},
};

/// A newtype wrapper for UUID user IDs.
///
/// Serialized as a hyphenated UUID string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random (version 4) user ID.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// A user of the application and the transactions they own.
///
/// The caller should ensure that `id` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user's ID.
    pub id: UserId,
    /// The user's full name.
    pub name: String,
    /// The user's CPF (Brazilian taxpayer registry number).
    pub cpf: String,
    /// The user's email address.
    pub email: String,
    /// The user's age in years.
    pub age: f64,
    /// The user's transactions in insertion order.
    pub transactions: Vec<Transaction>,
}

impl User {
    /// Create a user with no transactions.
    pub fn new(id: UserId, data: UserData) -> Self {
        Self {
            id,
            name: data.name,
            cpf: data.cpf,
            email: data.email,
            age: data.age,
            transactions: Vec::new(),
        }
    }

    /// Overwrite every profile field with `data`, keeping the ID and transactions.
    pub fn replace_profile(&mut self, data: UserData) {
        self.name = data.name;
        self.cpf = data.cpf;
        self.email = data.email;
        self.age = data.age;
    }

    /// Index of the transaction with `transaction_id` in [User::transactions].
    ///
    /// # Errors
    /// Returns [Error::TransactionNotFound] if the user does not own such a transaction.
    pub fn transaction_position(&self, transaction_id: TransactionId) -> Result<usize, Error> {
        self.transactions
            .iter()
            .position(|transaction| transaction.id == transaction_id)
            .ok_or(Error::TransactionNotFound)
    }
}

/// The request body for creating or replacing a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// The user's full name.
    pub name: String,
    /// The user's CPF.
    pub cpf: String,
    /// The user's email address.
    pub email: String,
    /// The user's age in years.
    pub age: f64,
}

/// The profile of a single user, without transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    /// The user's ID.
    pub id: UserId,
    /// The user's full name.
    pub name: String,
    /// The user's CPF.
    pub cpf: String,
    /// The user's email address.
    pub email: String,
    /// The user's age in years.
    pub age: f64,
}

impl From<&User> for UserDetails {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            cpf: user.cpf.clone(),
            email: user.email.clone(),
            age: user.age,
        }
    }
}

/// One entry of the user list. Omits the email address and transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// The user's ID.
    pub id: UserId,
    /// The user's full name.
    pub name: String,
    /// The user's CPF.
    pub cpf: String,
    /// The user's age in years.
    pub age: f64,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            cpf: user.cpf.clone(),
            age: user.age,
        }
    }
}
