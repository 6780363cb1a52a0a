//! Core logic of Sotien: the VND shorthand amount codec plus the pure
//! finance calculations (savings interest, budget status) behind the UI.
//!
//! Everything in this crate is synchronous and stateless; the HTTP and
//! rendering layers live elsewhere and only exchange the types defined
//! here.

pub use amount::Amount;
pub use budget::{BudgetLevel, BudgetStatus};
pub use error::EngineError;
pub use field::{AmountField, FieldMode};
pub use savings::{AssetKind, InterestEstimate, SavingsAccount};
pub use shorthand::{format_amount, parse_amount, resolve_amount};

mod amount;
mod budget;
mod error;
mod field;
mod savings;
mod shorthand;
