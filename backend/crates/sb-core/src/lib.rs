pub mod day;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use day::DayBoundary;
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::board::Board;
pub use models::card::Card;
pub use models::check_in::CheckIn;
pub use models::column::Column;
pub use models::task::Task;
pub use models::user::User;
