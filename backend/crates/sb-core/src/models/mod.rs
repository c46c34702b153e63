pub mod board;
pub mod card;
pub mod check_in;
pub mod column;
pub mod task;
pub mod user;
