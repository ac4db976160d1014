use actix_web::web;

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .route("/", web::get().to(polls::index))
            .route("/{id}/", web::get().to(polls::detail))
            .route("/{id}/results/", web::get().to(polls::results))
            .route("/{id}/vote/", web::post().to(polls::vote)),
    );
}
