pub mod board_store;
pub mod ledger_store;
pub mod task_store;
pub mod user_store;
