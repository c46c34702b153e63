pub mod card_dto;
#[allow(clippy::module_inception)]
pub mod cards;
pub mod create_card_request;
pub mod move_card_request;
pub mod update_card_request;
