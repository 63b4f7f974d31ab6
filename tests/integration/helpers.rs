//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use stayhub_auth::password::PasswordHasher;
use stayhub_core::config::AppConfig;
use stayhub_database::DatabasePool;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application against a clean database.
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config")
            .expect("Failed to load test config");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.into_pool();

        stayhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = stayhub_api::build_state(config, db_pool.clone())
            .expect("Failed to build application state");
        let router = stayhub_api::router::build_router(state);

        Self { router, db_pool }
    }

    /// Clean all test data, children before parents.
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "jobs",
            "sessions",
            "bookings",
            "hotel_ratings",
            "likes",
            "favorites",
            "reviews",
            "owner_requests",
            "rooms",
            "hotels",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create an activated test user directly and return their ID.
    pub async fn create_test_user(
        &self,
        email: &str,
        password: &str,
        is_owner: bool,
        is_staff: bool,
    ) -> Uuid {
        let hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, is_owner, is_staff, is_active) \
             VALUES ($1, $2, $3, $4, $5, TRUE)",
        )
        .bind(id)
        .bind(email)
        .bind(&hash)
        .bind(is_owner)
        .bind(is_staff)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Login and return the JWT access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/account/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create a hotel through the API and return its ID.
    pub async fn create_hotel(&self, token: &str, name: &str, stars: i16) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/hotels",
                Some(serde_json::json!({
                    "name": name,
                    "address": format!("{name} street 1"),
                    "description": "A test hotel",
                    "stars": stars,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Hotel creation failed: {:?}",
            response.body
        );
        parse_id(&response.body["data"])
    }

    /// Create a room through the API and return its ID.
    pub async fn create_room(&self, token: &str, hotel_id: Uuid, room_number: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/rooms",
                Some(serde_json::json!({
                    "hotel_id": hotel_id,
                    "room_number": room_number,
                    "room_type": "standard",
                    "capacity": 2,
                    "price_per_night": "100.00",
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Room creation failed: {:?}",
            response.body
        );
        parse_id(&response.body["data"])
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Parse an `id` field out of a response object.
pub fn parse_id(value: &Value) -> Uuid {
    value["id"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("No id in response")
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
