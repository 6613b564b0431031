//! The in-memory store that owns every user and their transactions.

use crate::{
    Error,
    balance::compute_balance,
    transaction::{Transaction, TransactionData, TransactionId, TransactionList},
    user::{User, UserData, UserId},
};

/// Handles the creation, retrieval, replacement and removal of users and
/// their transactions.
///
/// Users are kept in insertion order and looked up by linear scan, so the
/// first user with a given ID wins if IDs ever collide. The store also owns
/// the counter that hands out transaction IDs to all users.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_transaction_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store. The first transaction gets the ID 1.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_transaction_id: 1,
        }
    }

    /// The number of users in the store.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Create a user with a freshly generated ID and append it to the store.
    pub fn create(&mut self, data: UserData) -> User {
        self.create_with_id(UserId::new_v4(), data)
    }

    /// Create a user with the given `id` and append it to the store.
    ///
    /// No uniqueness check is made against the users already in the store.
    pub fn create_with_id(&mut self, id: UserId, data: UserData) -> User {
        let user = User::new(id, data);
        self.users.push(user.clone());

        user
    }

    /// Get the first user with `id`.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if no user has the ID.
    pub fn find_by_id(&self, id: UserId) -> Result<&User, Error> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(Error::UserNotFound)
    }

    /// Replace every profile field of the user with `id`, keeping its ID and transactions.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if no user has the ID.
    pub fn replace(&mut self, id: UserId, data: UserData) -> Result<User, Error> {
        let user = self.find_by_id_mut(id)?;
        user.replace_profile(data);

        Ok(user.clone())
    }

    /// Remove the user with `id` and its transactions, keeping the order of the other users.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if no user has the ID.
    pub fn delete(&mut self, id: UserId) -> Result<(), Error> {
        let index = self.position(id)?;
        self.users.remove(index);

        Ok(())
    }

    /// Get all users in insertion order.
    ///
    /// # Errors
    /// Returns [Error::EmptyUserList] if the store holds no users.
    pub fn list(&self) -> Result<&[User], Error> {
        if self.users.is_empty() {
            return Err(Error::EmptyUserList);
        }

        Ok(&self.users)
    }

    /// Add a transaction to the end of a user's transactions and return the updated user.
    ///
    /// The transaction ID is only consumed when the user exists.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if no user has the ID.
    pub fn append_transaction(
        &mut self,
        user_id: UserId,
        data: TransactionData,
    ) -> Result<User, Error> {
        let index = self.position(user_id)?;
        let transaction = Transaction::new(self.next_transaction_id(), data);

        let user = &mut self.users[index];
        user.transactions.push(transaction);

        Ok(user.clone())
    }

    /// Get the transaction with `transaction_id` owned by the user with `user_id`.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if no user has the ID, or
    /// [Error::TransactionNotFound] if the user does not own the transaction.
    pub fn find_transaction(
        &self,
        user_id: UserId,
        transaction_id: TransactionId,
    ) -> Result<&Transaction, Error> {
        let user = self.find_by_id(user_id)?;
        let index = user.transaction_position(transaction_id)?;

        Ok(&user.transactions[index])
    }

    /// Replace the title, value and type of a user's transaction, keeping its ID.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if no user has the ID, or
    /// [Error::TransactionNotFound] if the user does not own the transaction.
    pub fn replace_transaction(
        &mut self,
        user_id: UserId,
        transaction_id: TransactionId,
        data: TransactionData,
    ) -> Result<Transaction, Error> {
        let user = self.find_by_id_mut(user_id)?;
        let index = user.transaction_position(transaction_id)?;

        let transaction = Transaction::new(transaction_id, data);
        user.transactions[index] = transaction.clone();

        Ok(transaction)
    }

    /// Remove a user's transaction, keeping the order of the other transactions.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if no user has the ID, or
    /// [Error::TransactionNotFound] if the user does not own the transaction.
    pub fn delete_transaction(
        &mut self,
        user_id: UserId,
        transaction_id: TransactionId,
    ) -> Result<(), Error> {
        let user = self.find_by_id_mut(user_id)?;
        let index = user.transaction_position(transaction_id)?;
        user.transactions.remove(index);

        Ok(())
    }

    /// Get a user's transactions along with the balance over them.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if no user has the ID.
    pub fn transactions_with_balance(&self, user_id: UserId) -> Result<TransactionList, Error> {
        let user = self.find_by_id(user_id)?;

        Ok(TransactionList {
            transactions: user.transactions.clone(),
            balance: compute_balance(&user.transactions),
        })
    }

    fn position(&self, id: UserId) -> Result<usize, Error> {
        self.users
            .iter()
            .position(|user| user.id == id)
            .ok_or(Error::UserNotFound)
    }

    fn find_by_id_mut(&mut self, id: UserId) -> Result<&mut User, Error> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(Error::UserNotFound)
    }

    fn next_transaction_id(&mut self) -> TransactionId {
        let id = TransactionId::new(self.next_transaction_id);
        self.next_transaction_id += 1;

        id
    }
}
