//! Order engine module
//!
//! - **validation**: pure constraint evaluator over a catalog snapshot
//! - **money**: decimal total computation
//! - **manager**: transactional create/delete with inventory reservation
//!
//! # Data Flow (create)
//!
//! ```text
//! create_order → begin tx → dish/size lookup → catalog snapshot
//!       → evaluate (existence, stock, cap, dependencies, conflicts)
//!       → insert order + associations → reserve each ingredient → commit
//! ```

pub mod manager;
pub mod money;
pub mod validation;

// Re-exports
pub use manager::{OrderError, OrderManager, OrderResult};
pub use validation::evaluate;

// Re-export shared types for convenience
pub use shared::order::{DeleteOutcome, OrderReceipt, Violation};
