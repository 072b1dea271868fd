//! Implements a SQLite backed expense store.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense},
    ledger::ExpenseStore,
};

/// Stores expenses in a SQLite database.
///
/// Each write is a single SQL statement, so a write either fully applies or
/// fails without changing the table.
#[derive(Debug)]
pub struct SQLiteExpenseStore {
    connection: Connection,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// This function will create the expense table if it does not already exist.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_expense_table(&connection)?;

        Ok(Self { connection })
    }

    /// Map a database row to an Expense.
    fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
        let id = row.get(0)?;
        let item_name = row.get(1)?;
        let item_price = row.get(2)?;
        let date_of_purchase = row.get(3)?;
        let category = row.get(4)?;

        Ok(Expense {
            id,
            item_name,
            item_price,
            date_of_purchase,
            category,
        })
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    /// Create a new expense in the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn insert(&mut self, expense: NewExpense) -> Result<Expense, Error> {
        let expense = self
            .connection
            .prepare(
                "INSERT INTO expense (item_name, item_price, date_of_purchase, category)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, item_name, item_price, date_of_purchase, category",
            )?
            .query_row(
                (
                    expense.item_name,
                    expense.item_price,
                    expense.date_of_purchase,
                    expense.category,
                ),
                Self::map_row,
            )?;

        Ok(expense)
    }

    /// Retrieve an expense in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self
            .connection
            .prepare(
                "SELECT id, item_name, item_price, date_of_purchase, category
                 FROM expense WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(expense)
    }

    /// Retrieve every expense in the database, ordered by ID.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        self.connection
            .prepare(
                "SELECT id, item_name, item_price, date_of_purchase, category
                 FROM expense ORDER BY id ASC",
            )?
            .query_map([], Self::map_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::from))
            .collect()
    }

    /// Overwrite the fields of the expense `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn replace(&mut self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error> {
        let expense = self
            .connection
            .prepare(
                "UPDATE expense
                 SET item_name = ?1, item_price = ?2, date_of_purchase = ?3, category = ?4
                 WHERE id = ?5
                 RETURNING id, item_name, item_price, date_of_purchase, category",
            )?
            .query_row(
                (
                    expense.item_name,
                    expense.item_price,
                    expense.date_of_purchase,
                    expense.category,
                    id,
                ),
                Self::map_row,
            )?;

        Ok(expense)
    }

    /// Delete the expense `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn remove(&mut self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self
            .connection
            .prepare(
                "DELETE FROM expense WHERE id = :id
                 RETURNING id, item_name, item_price, date_of_purchase, category",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(expense)
    }
}

/// Create the expense table in the database.
///
/// `AUTOINCREMENT` stops SQLite from reusing the IDs of deleted rows.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                item_name TEXT NOT NULL,
                item_price REAL NOT NULL CHECK (item_price >= 0),
                date_of_purchase TEXT NOT NULL,
                category TEXT NOT NULL
                )",
        (),
    )?;

    // Add index used by the monthly summary.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date_of_purchase);",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        expense::{ExpenseCandidate, NewExpense, validate_expense},
        ledger::{ExpenseStore, SQLiteExpenseStore, create_expense_table},
    };

    fn get_test_store() -> SQLiteExpenseStore {
        let conn = Connection::open_in_memory().unwrap();
        SQLiteExpenseStore::new(conn).unwrap()
    }

    fn new_expense(price: f64, category: &str) -> NewExpense {
        validate_expense(&ExpenseCandidate::new("Item", price, "2024-05-17", category)).unwrap()
    }

    #[test]
    fn create_table_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        create_expense_table(&conn).unwrap();
        create_expense_table(&conn).unwrap();
    }

    #[test]
    fn insert_and_get_round_trip_dates() {
        let mut store = get_test_store();

        let inserted = store.insert(new_expense(12.3, "Food")).unwrap();
        let got = store.get(inserted.id).unwrap();

        assert_eq!(got, inserted);
        assert_eq!(got.date_of_purchase, date!(2024 - 05 - 17));
    }

    #[test]
    fn get_missing_fails() {
        let store = get_test_store();

        assert_eq!(store.get(1), Err(Error::NotFound));
    }

    #[test]
    fn replace_and_remove_missing_fail() {
        let mut store = get_test_store();

        assert_eq!(
            store.replace(3, new_expense(1.0, "Food")),
            Err(Error::NotFound)
        );
        assert_eq!(store.remove(3), Err(Error::NotFound));
    }

    #[test]
    fn data_survives_reopening_the_store() {
        let mut store = get_test_store();
        let inserted = store.insert(new_expense(9.0, "Bills")).unwrap();

        let reopened = SQLiteExpenseStore::new(store.connection).unwrap();

        assert_eq!(reopened.get_all().unwrap(), vec![inserted]);
    }
}
