use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiSuccess;
use super::KittenResponseData;
use crate::domain::kitten::models::KittenId;
use crate::domain::kitten::ports::KittenServicePort;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::kitten::errors::KittenError;

pub async fn get_kitten(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(kitten_id): Path<String>,
) -> Result<ApiSuccess<KittenResponseData>, ApiError> {
    let kitten_id = KittenId::from_string(&kitten_id).map_err(KittenError::from)?;

    state
        .kitten_service
        .get_kitten(requester.user_id, kitten_id)
        .await
        .map_err(ApiError::from)
        .map(|ref kitten| ApiSuccess::new(StatusCode::OK, kitten.into()))
}
