pub mod create_task_request;
pub mod task_dto;
#[allow(clippy::module_inception)]
pub mod tasks;
