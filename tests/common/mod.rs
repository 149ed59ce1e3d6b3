#![allow(dead_code)]

use std::env;

use asset_tracker::{
    config::{get_config, init_config},
    models::user::User,
    routes,
    utils::{crypto::hash_password, token::issue_access_token},
    AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use std::str::FromStr;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test_secret_key";

pub struct TestApp {
    pub app: Router,
    pub pool: PgPool,
    pub state: AppState,
    schema: String,
    database_url: String,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> JsonValue {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// Builds the application against a fresh PostgreSQL schema.
/// Requires `DATABASE_URL`.
pub async fn setup() -> TestApp {
    dotenvy::dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", TEST_JWT_SECRET);
    // Another test in this binary may have initialized it already.
    let _ = init_config();

    let schema = format!("test_{}", Uuid::new_v4().simple());
    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("connect to test database");
    admin
        .execute(format!("CREATE SCHEMA {schema}").as_str())
        .await
        .expect("create test schema");
    admin.close().await;

    let search_path = schema.clone();
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .after_connect(move |conn, _meta| {
            let search_path = search_path.clone();
            Box::pin(async move {
                conn.execute(format!("SET search_path TO {search_path}").as_str())
                    .await?;
                Ok(())
            })
        })
        .connect(&database_url)
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let state = AppState::new(pool.clone());
    let app = routes::router().with_state(state.clone());

    TestApp {
        app,
        pool,
        state,
        schema,
        database_url,
    }
}

impl TestApp {
    pub async fn teardown(self) {
        self.pool.close().await;
        if let Ok(admin) = PgPoolOptions::new()
            .max_connections(1)
            .connect(&self.database_url)
            .await
        {
            let _ = admin
                .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
                .await;
            admin.close().await;
        }
    }

    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: JsonValue) -> TestResponse {
        self.json_request("POST", uri, token, body).await
    }

    pub async fn json_request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: JsonValue,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn create_department(&self, name: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>("INSERT INTO departments (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("seed department")
    }

    pub async fn create_user(
        &self,
        username: &str,
        is_manager: bool,
        is_superuser: bool,
        department_id: Option<Uuid>,
    ) -> User {
        let password_hash = hash_password("password123").expect("hash");
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, department_id, is_manager, is_superuser)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, department_id, is_manager, is_superuser, is_active, date_joined
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(department_id)
        .bind(is_manager)
        .bind(is_superuser)
        .fetch_one(&self.pool)
        .await
        .expect("seed user")
    }

    pub async fn create_asset(
        &self,
        name: &str,
        asset_type: &str,
        cost: &str,
        assigned_to: Option<Uuid>,
    ) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO assets (name, asset_type, cost, assigned_to)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(asset_type)
        .bind(dec(cost))
        .bind(assigned_to)
        .fetch_one(&self.pool)
        .await
        .expect("seed asset")
    }

    pub async fn create_log(&self, asset_id: Uuid, description: &str, cost: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO maintenance_logs (asset_id, description, cost)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(asset_id)
        .bind(description)
        .bind(dec(cost))
        .fetch_one(&self.pool)
        .await
        .expect("seed maintenance log")
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("count rows")
    }
}

pub fn token_for(user: &User) -> String {
    issue_access_token(user.id, user.role(), &get_config().jwt_secret, 1)
        .expect("sign token")
        .token
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("decimal literal")
}
