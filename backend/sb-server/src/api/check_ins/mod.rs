pub mod check_in_dto;
#[allow(clippy::module_inception)]
pub mod check_ins;
