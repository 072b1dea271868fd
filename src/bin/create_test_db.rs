use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_ledger::{
    Ledger, SQLiteExpenseStore, aggregation::total_spent, expense::ExpenseCandidate,
};

/// A utility for creating a test database for the REST API server of expense_ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;
    let mut ledger = Ledger::new(SQLiteExpenseStore::new(connection)?);

    println!("Creating test expenses...");

    for candidate in sample_expenses() {
        ledger.create(&candidate)?;
    }

    let expenses = ledger.read_all()?;
    println!(
        "Created {} expenses totalling {:.2}",
        expenses.len(),
        total_spent(&expenses)
    );

    println!("Success!");

    Ok(())
}

fn sample_expenses() -> Vec<ExpenseCandidate> {
    vec![
        ExpenseCandidate::new("Rent", 450.0, "2025-01-01", "Bills"),
        ExpenseCandidate::new("Groceries", 86.4, "2025-01-04", "Food"),
        ExpenseCandidate::new("Bus pass", 50.0, "2025-01-06", "Transport"),
        ExpenseCandidate::new("Power bill", 132.17, "2025-01-15", "Bills"),
        ExpenseCandidate::new("Running shoes", 149.99, "2025-01-21", "Shopping"),
        ExpenseCandidate::new("Rent", 450.0, "2025-02-01", "Bills"),
        ExpenseCandidate::new("Coffee", 5.5, "2025-02-03", "Food"),
        ExpenseCandidate::new("Groceries", 92.1, "2025-02-08", "Food"),
        ExpenseCandidate::new("Taxi", 27.3, "2025-02-14", "Transport"),
        ExpenseCandidate::new("Dinner out", 64.0, "2025-02-14", "Food"),
        ExpenseCandidate::new("Haircut", 35.0, "2025-02-20", "Other"),
        ExpenseCandidate::new("Rent", 450.0, "2025-03-01", "Bills"),
        ExpenseCandidate::new("Phone plan", 39.0, "2025-03-02", "Bills"),
        ExpenseCandidate::new("Groceries", 78.65, "2025-03-07", "Food"),
        ExpenseCandidate::new("Books", 42.0, "2025-03-12", "Hobbies"),
    ]
}
