//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables. Each entity has a Model struct
//! for data and an Entity struct for operations.

pub mod expense;
pub mod salary;

// Re-export specific types to avoid conflicts
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use salary::{Column as SalaryColumn, Entity as Salary, Model as SalaryModel};
