use std::fmt::{self, Debug, Formatter};

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::Deserialize;
use tracing::Span;
use uuid::Uuid;

use crate::{
    domain::{MessageChanges, MessagePayload, NewMessage, ValidationErrors},
    repository::Repository,
    utils,
};

#[derive(thiserror::Error)]
pub enum MessageError {
    #[error("{0}")]
    ValidationError(ValidationErrors),

    #[error("message not found")]
    NotFound,

    #[error("campaign not found")]
    CampaignNotFound,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for MessageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for MessageError {
    fn status_code(&self) -> StatusCode {
        match self {
            MessageError::ValidationError(_) => StatusCode::BAD_REQUEST,
            MessageError::NotFound => StatusCode::NOT_FOUND,
            MessageError::CampaignNotFound => StatusCode::UNPROCESSABLE_ENTITY,
            MessageError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            MessageError::ValidationError(errors) => utils::build_validation_error_response(errors),
            MessageError::NotFound | MessageError::CampaignNotFound => {
                utils::build_error_response(self.status_code(), self.to_string())
            }
            MessageError::UnexpectedError(_) => utils::build_error_response(
                self.status_code(),
                "internal server error".to_string(),
            ),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct MessagePathParams {
    pub id: Uuid,
}

#[tracing::instrument(skip(repository))]
pub async fn list_messages(
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, MessageError> {
    let messages = repository.list_messages().await?;

    Ok(HttpResponse::Ok().json(messages))
}

#[tracing::instrument(skip(repository), fields(message_id=%path.id))]
pub async fn get_message(
    path: web::Path<MessagePathParams>,
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, MessageError> {
    let message = repository
        .get_message(path.id)
        .await?
        .ok_or(MessageError::NotFound)?;

    Ok(HttpResponse::Ok().json(message))
}

#[tracing::instrument(
    skip(repository),
    fields(campaign_id=tracing::field::Empty, message_id=tracing::field::Empty)
)]
pub async fn create_message(
    payload: web::Json<MessagePayload>,
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, MessageError> {
    let message: NewMessage = payload
        .into_inner()
        .try_into()
        .map_err(MessageError::ValidationError)?;
    Span::current().record("campaign_id", tracing::field::display(&message.campaign_id));

    if !repository.campaign_exists(message.campaign_id).await? {
        return Err(MessageError::CampaignNotFound);
    }

    let stored = repository.insert_message(&message).await?;
    Span::current().record("message_id", tracing::field::display(&stored.id));

    Ok(HttpResponse::Created().json(stored))
}

// campaignId is only checked for shape here; it may point at a deleted campaign.
#[tracing::instrument(skip(repository), fields(message_id=%path.id))]
pub async fn update_message(
    path: web::Path<MessagePathParams>,
    payload: web::Json<MessagePayload>,
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, MessageError> {
    let message_id = path.id;

    if !repository.message_exists(message_id).await? {
        return Err(MessageError::NotFound);
    }

    let changes: MessageChanges = payload
        .into_inner()
        .try_into()
        .map_err(MessageError::ValidationError)?;

    let updated = repository
        .update_message(message_id, &changes)
        .await?
        .ok_or(MessageError::NotFound)?;

    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(skip(repository), fields(message_id=%path.id))]
pub async fn delete_message(
    path: web::Path<MessagePathParams>,
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, MessageError> {
    if !repository.delete_message(path.id).await? {
        return Err(MessageError::NotFound);
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Message deleted successfully" })))
}
