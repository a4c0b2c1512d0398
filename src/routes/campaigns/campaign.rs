use std::fmt::{self, Debug, Formatter};

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::Deserialize;
use tracing::Span;
use uuid::Uuid;

use crate::{
    domain::{CampaignChanges, CampaignPayload, NewCampaign, ValidationErrors},
    repository::Repository,
    utils,
};

#[derive(thiserror::Error)]
pub enum CampaignError {
    #[error("{0}")]
    ValidationError(ValidationErrors),

    #[error("campaign not found")]
    NotFound,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for CampaignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for CampaignError {
    fn status_code(&self) -> StatusCode {
        match self {
            CampaignError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CampaignError::NotFound => StatusCode::NOT_FOUND,
            CampaignError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            CampaignError::ValidationError(errors) => {
                utils::build_validation_error_response(errors)
            }
            CampaignError::NotFound => {
                utils::build_error_response(self.status_code(), self.to_string())
            }
            // the cause chain is logged by TracingLogger, never sent to the client
            CampaignError::UnexpectedError(_) => utils::build_error_response(
                self.status_code(),
                "internal server error".to_string(),
            ),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CampaignPathParams {
    pub id: Uuid,
}

#[tracing::instrument(skip(repository))]
pub async fn list_campaigns(
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, CampaignError> {
    let campaigns = repository.list_campaigns().await?;

    Ok(HttpResponse::Ok().json(campaigns))
}

#[tracing::instrument(skip(repository), fields(campaign_id=%path.id))]
pub async fn get_campaign(
    path: web::Path<CampaignPathParams>,
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, CampaignError> {
    let campaign = repository
        .get_campaign(path.id)
        .await?
        .ok_or(CampaignError::NotFound)?;

    Ok(HttpResponse::Ok().json(campaign))
}

#[tracing::instrument(skip(repository), fields(campaign_id=tracing::field::Empty))]
pub async fn create_campaign(
    payload: web::Json<CampaignPayload>,
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, CampaignError> {
    let campaign: NewCampaign = payload
        .into_inner()
        .try_into()
        .map_err(CampaignError::ValidationError)?;

    let stored = repository.insert_campaign(&campaign).await?;
    Span::current().record("campaign_id", tracing::field::display(&stored.id));

    Ok(HttpResponse::Created().json(stored))
}

#[tracing::instrument(skip(repository), fields(campaign_id=%path.id))]
pub async fn update_campaign(
    path: web::Path<CampaignPathParams>,
    payload: web::Json<CampaignPayload>,
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, CampaignError> {
    let campaign_id = path.id;

    // An unknown id is a 404 even when the payload is also invalid.
    if !repository.campaign_exists(campaign_id).await? {
        return Err(CampaignError::NotFound);
    }

    let changes: CampaignChanges = payload
        .into_inner()
        .try_into()
        .map_err(CampaignError::ValidationError)?;

    let updated = repository
        .update_campaign(campaign_id, &changes)
        .await?
        .ok_or(CampaignError::NotFound)?;

    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(skip(repository), fields(campaign_id=%path.id))]
pub async fn delete_campaign(
    path: web::Path<CampaignPathParams>,
    repository: web::Data<dyn Repository>,
) -> Result<HttpResponse, CampaignError> {
    if !repository.delete_campaign(path.id).await? {
        return Err(CampaignError::NotFound);
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Campaign deleted successfully" })))
}
