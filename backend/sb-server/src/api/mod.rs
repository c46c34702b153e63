pub mod auth;
pub mod board;
pub mod cards;
pub mod check_ins;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod tasks;
