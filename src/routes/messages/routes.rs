use actix_web::web;

use crate::routes::{
    create_message, delete_message, generate_message, get_message, list_messages, update_message,
};

pub fn message_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_messages))
            .route(web::post().to(create_message)),
    )
    // registered before `/{id}` so "generate" is never read as an identifier
    .service(web::resource("/generate").route(web::post().to(generate_message)))
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_message))
            .route(web::put().to(update_message))
            .route(web::delete().to(delete_message)),
    );
}
