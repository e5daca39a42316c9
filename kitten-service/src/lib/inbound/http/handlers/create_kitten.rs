use axum::extract::State;
use serde::Deserialize;

use super::ApiSuccess;
use super::KittenResponseData;
use crate::domain::kitten::models::CreateKittenCommand;
use crate::domain::kitten::models::KittenAge;
use crate::domain::kitten::models::KittenColor;
use crate::domain::kitten::models::KittenName;
use crate::domain::kitten::ports::KittenServicePort;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::extract::Payload;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::kitten::errors::KittenError;

pub async fn create_kitten(
    State(state): State<AppState>,
    owner: AuthenticatedUser,
    Payload(body): Payload<CreateKittenRequest>,
) -> Result<ApiSuccess<KittenResponseData>, ApiError> {
    state
        .kitten_service
        .create_kitten(owner.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref kitten| ApiSuccess::created(format!("/kittens/{}", kitten.id), kitten.into()))
}

/// HTTP request body for creating a kitten (raw JSON or form)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateKittenRequest {
    name: String,
    age: i32,
    color: String,
}

impl CreateKittenRequest {
    fn try_into_command(self) -> Result<CreateKittenCommand, KittenError> {
        let name = KittenName::new(self.name)?;
        let age = KittenAge::new(self.age)?;
        let color = KittenColor::new(self.color)?;
        Ok(CreateKittenCommand::new(name, age, color))
    }
}
