pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        anonymous_request::AnonymousRequest,
        auth::{anonymous_login, login, logout, me},
        login_request::LoginRequest,
        session_response::SessionResponse,
        user_dto::UserDto,
    },
    board::{board::get_board, board_dto::BoardDto, column_dto::ColumnDto},
    cards::{
        card_dto::CardDto,
        cards::{create_card, delete_card, get_card, move_card, update_card},
        create_card_request::CreateCardRequest,
        move_card_request::MoveCardRequest,
        update_card_request::UpdateCardRequest,
    },
    check_ins::{
        check_in_dto::CheckInDto,
        check_ins::{create_check_in, list_check_ins},
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    tasks::{
        create_task_request::CreateTaskRequest,
        task_dto::TaskDto,
        tasks::{create_task, delete_task, list_tasks},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
