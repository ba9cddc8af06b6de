//! # Domain Module
//!
//! Contains the business logic of the expense tracker.
//!
//! Services here own the ledgers and the gamification aggregate. They talk
//! to storage only through the repositories and know nothing about how a
//! host renders their results.
//!
//! ## Module Organization
//!
//! - **expense_service**: expense ledger CRUD, records the day's activity
//! - **budget_service**: budget ledger CRUD with `spent` joined on read
//! - **gamification_service**: streak, badges and the emergency fund
//! - **analytics** / **analytics_service**: spending aggregations
//! - **session_service**: local sign-in and sign-up
//! - **streak** / **badges**: pure rules used by the gamification service
//! - **commands** / **validation**: service inputs and their checks
//!
//! ## Core Concepts
//!
//! - **Ledger**: ordered list of one record type, rewritten on every change
//! - **Activity event**: logging an expense; the only thing that moves the streak
//! - **Coverage ratio**: emergency fund amount / monthly expenses, in months

pub mod analytics;
pub mod analytics_service;
pub mod badges;
pub mod budget_service;
pub mod commands;
pub mod expense_service;
pub mod gamification_service;
pub mod session_service;
pub mod streak;
pub mod validation;

pub use analytics_service::AnalyticsService;
pub use budget_service::BudgetService;
pub use expense_service::ExpenseService;
pub use gamification_service::GamificationService;
pub use session_service::{AuthError, SessionService};
pub use streak::StreakUpdate;
pub use validation::ValidationError;
