#[allow(clippy::module_inception)]
pub mod board;
pub mod board_dto;
pub mod column_dto;
