pub mod alert;
pub mod empty_state;
pub mod game_card;
pub mod game_detail_modal;
pub mod loading;
pub mod modal;
pub mod navbar;
