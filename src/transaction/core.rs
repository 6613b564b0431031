//! Defines the core data models for transactions.

use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, UserStore, balance::Balance, user::UserId};

/// A newtype wrapper for integer transaction IDs.
///
/// Transaction IDs come from a single counter shared by every user, start at
/// one and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Create a new transaction ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Cast the transaction ID to a 64 bit unsigned integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Whether a transaction brought money in or sent money out.
///
/// Any other type string is kept verbatim in [TransactionType::Other] and
/// serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    Outcome,
    /// An unrecognised type, ignored when computing balances.
    Other(String),
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "income" => TransactionType::Income,
            "outcome" => TransactionType::Outcome,
            _ => TransactionType::Other(value),
        }
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Income => "income".to_owned(),
            TransactionType::Outcome => "outcome".to_owned(),
            TransactionType::Other(other) => other,
        }
    }
}

/// An income or outcome recorded against a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short text describing what the transaction was for.
    pub title: String,
    /// The amount of money moved in this transaction.
    pub value: f64,
    /// Whether the transaction is an income or an outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Create a transaction with the given `id` from client supplied `data`.
    pub fn new(id: TransactionId, data: TransactionData) -> Self {
        Self {
            id,
            title: data.title,
            value: data.value,
            transaction_type: data.transaction_type,
        }
    }
}

/// The request body for creating or replacing a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    /// A short text describing what the transaction was for.
    pub title: String,
    /// The amount of money moved in this transaction.
    pub value: f64,
    /// Whether the transaction is an income or an outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// A user's transactions together with the balance computed over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    /// The user's transactions in insertion order.
    pub transactions: Vec<Transaction>,
    /// The balance over `transactions`.
    pub balance: Balance,
}

/// Resolve the raw `transaction_id` path segment of a request for `user_id`'s transaction.
///
/// The user is looked up first so that a missing user is reported before an
/// unusable segment. Only the leading digits of the segment are read, after
/// optional whitespace and a `+` sign, so `"1abc"` and `"1.9"` both name
/// transaction 1.
///
/// # Errors
/// Returns [Error::UserNotFound] if no user has the ID, or
/// [Error::TransactionNotFound] if the segment does not start with a transaction ID.
pub fn resolve_transaction_id(
    store: &UserStore,
    user_id: UserId,
    segment: &str,
) -> Result<TransactionId, Error> {
    store.find_by_id(user_id)?;

    leading_transaction_id(segment).ok_or(Error::TransactionNotFound)
}

fn leading_transaction_id(segment: &str) -> Option<TransactionId> {
    let trimmed = segment.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse().ok()
}
