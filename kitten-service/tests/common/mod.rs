#![allow(dead_code)]

use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use kitten_service::domain::kitten::service::KittenService;
use kitten_service::domain::user::service::UserService;
use kitten_service::inbound::http::router::create_router;
use kitten_service::outbound::repositories::InMemoryKittenRepository;
use kitten_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_expiration(Some(24)).await
    }

    pub async fn spawn_with_expiration(jwt_expiration_hours: Option<i64>) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(JWT_SECRET));
        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::clone(&authenticator),
        ));
        let kitten_service = Arc::new(KittenService::new(Arc::new(
            InMemoryKittenRepository::new(),
        )));

        let router = create_router(
            user_service,
            kitten_service,
            authenticator,
            jwt_expiration_hours,
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create reqwest client"),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register a user and return the issued token
    pub async fn register(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/register")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }

    /// Create a kitten and return the path from the Location header
    pub async fn create_kitten(&self, token: &str, name: &str, age: i32, color: &str) -> String {
        let response = self
            .post_authenticated("/kittens", token)
            .json(&json!({ "name": name, "age": age, "color": color }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        response.headers()[reqwest::header::LOCATION]
            .to_str()
            .expect("Invalid Location header")
            .to_string()
    }
}
