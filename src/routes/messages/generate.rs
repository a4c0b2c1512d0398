use actix_web::{HttpResponse, web};

use crate::domain::{GeneratedMessage, ProfilePayload, generate_outreach_message};
use crate::routes::MessageError;

#[tracing::instrument(skip_all)]
pub async fn generate_message(
    payload: web::Json<ProfilePayload>,
) -> Result<HttpResponse, MessageError> {
    let message =
        generate_outreach_message(payload.into_inner()).map_err(MessageError::ValidationError)?;

    Ok(HttpResponse::Ok().json(GeneratedMessage { message }))
}
