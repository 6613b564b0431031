//! Computes the income, outcome and total over a user's transactions.

use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionType};

/// A summary of a user's transactions.
///
/// `outcome` is accumulated as a negative number and `total` is
/// `income - outcome`, so outcomes are effectively added to the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// The sum of all income values.
    pub income: f64,
    /// The negated sum of all outcome values.
    pub outcome: f64,
    /// `income - outcome`.
    pub total: f64,
}

/// Reduce `transactions` into a [Balance].
///
/// Transactions with a type other than income or outcome are ignored.
pub fn compute_balance(transactions: &[Transaction]) -> Balance {
    let (income, outcome) = transactions.iter().fold(
        (0.0, 0.0),
        |(income, outcome), transaction| match transaction.transaction_type {
            TransactionType::Income => (income + transaction.value, outcome),
            TransactionType::Outcome => (income, outcome - transaction.value),
            TransactionType::Other(_) => (income, outcome),
        },
    );

    Balance {
        income,
        outcome,
        total: income - outcome,
    }
}
