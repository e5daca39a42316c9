use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::kitten::models::Kitten;

pub mod create_kitten;
pub mod delete_kitten;
pub mod get_kitten;
pub mod login;
pub mod register;
pub mod welcome;

/// Successful JSON response with an optional `Location` header.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSuccess<T: Serialize + PartialEq> {
    status: StatusCode,
    location: Option<String>,
    data: T,
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            location: None,
            data,
        }
    }

    /// 201 response pointing at the newly created resource.
    pub fn created(location: String, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            location: Some(location),
            data,
        }
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        match self.location {
            Some(location) => (
                self.status,
                [(header::LOCATION, location)],
                Json(self.data),
            )
                .into_response(),
            None => (self.status, Json(self.data)).into_response(),
        }
    }
}

// Field order is the wire order: register answers `{message, token}`,
// login `{token, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub message: String,
}

/// Public view of a kitten: the owner and id stay private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KittenResponseData {
    pub name: String,
    pub age: i32,
    pub color: String,
}

impl From<&Kitten> for KittenResponseData {
    fn from(kitten: &Kitten) -> Self {
        Self {
            name: kitten.name.as_str().to_string(),
            age: kitten.age.value(),
            color: kitten.color.as_str().to_string(),
        }
    }
}
