pub mod budget;
pub mod category;
pub mod expense;
pub mod fuel;

pub use budget::{BudgetSnapshot, BudgetState, BudgetUpdate};
pub use category::Category;
pub use expense::Expense;
pub use fuel::FuelEntry;
