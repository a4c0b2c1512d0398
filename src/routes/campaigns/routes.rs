use actix_web::web;

use crate::routes::{
    create_campaign, delete_campaign, get_campaign, list_campaigns, update_campaign,
};

pub fn campaign_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_campaigns))
            .route(web::post().to(create_campaign)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_campaign))
            .route(web::put().to(update_campaign))
            .route(web::delete().to(delete_campaign)),
    );
}
