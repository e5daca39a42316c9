use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::kitten::models::KittenId;
use crate::domain::kitten::ports::KittenServicePort;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::kitten::errors::KittenError;

/// Deletes one of the caller's kittens.
///
/// A kitten that is missing and one owned by someone else both answer 401,
/// so the endpoint does not reveal which ids exist.
pub async fn delete_kitten(
    State(state): State<AppState>,
    requester: AuthenticatedUser,
    Path(kitten_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let kitten_id = KittenId::from_string(&kitten_id).map_err(KittenError::from)?;

    state
        .kitten_service
        .delete_kitten(requester.user_id, kitten_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
