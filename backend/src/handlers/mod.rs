use actix_web::web;

pub mod auth;
pub mod games;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // /game_data/{id} is fetched directly by the game detail modal and
    // returns the record without the /api envelope.
    cfg.route("/game_data/{game_id}", web::get().to(games::game_data))
        .service(
            web::scope("/api")
                .configure(auth::configure)
                .configure(games::configure)
                .configure(users::configure),
        );
}
