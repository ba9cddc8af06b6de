// Repository modules
pub mod budget_repository;
pub mod expense_repository;
pub mod gamification_repository;
pub mod user_repository;

// Re-export repository types
pub use budget_repository::BudgetRepository;
pub use expense_repository::ExpenseRepository;
pub use gamification_repository::GamificationRepository;
pub use user_repository::UserRepository;
