pub mod board;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod planner;
pub mod validate;

#[cfg(test)]
mod tests;

pub use board::{BoardService, CardPatch};
pub use error::{DomainError, Result};
pub use identity::{CredentialProof, IdentityResolver};
pub use ledger::AttendanceLedger;
pub use planner::TaskPlanner;
