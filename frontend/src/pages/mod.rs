pub mod home;
pub mod login;
pub mod post_game;
pub mod preferences;
pub mod profile;
pub mod register;
