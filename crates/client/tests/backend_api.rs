//! Black-box tests for the API client against an in-process stub backend.
//!
//! The stub speaks the exact wire shapes the real backend uses, including
//! the differing page-size keys between `/sales/fetch` and
//! `/expenses/fetch`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::json;

use brewpos_client::{
    ApiClient, ApiError, ClientConfig, DateRange, NewExpense, NewIngredient, PageQuery,
};
use brewpos_core::IngredientId;

#[derive(Default)]
struct Recorded {
    sales_queries: Mutex<Vec<HashMap<String, String>>>,
}

struct TestServer {
    base_url: String,
    state: Arc<Recorded>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        brewpos_observability::init();

        let state = Arc::new(Recorded::default());
        let app = Router::new()
            .route("/login", post(login))
            .route("/session/fetch", get(session_fetch))
            .route("/ingredient/fetch", get(ingredient_fetch))
            .route("/ingredient/add", post(ingredient_add))
            .route("/ingredient/update/:id", put(ingredient_update))
            .route("/ingredient/disable/:id", patch(ingredient_disable))
            .route("/sales/fetch", get(sales_fetch))
            .route("/expenses/fetch", get(expenses_fetch))
            .route("/expenses/add", post(expenses_add))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig::new(&self.base_url)).expect("client")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn admin_user() -> serde_json::Value {
    json!({"id": 1, "fname": "Alma", "lname": "Dizon", "role": "admin"})
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status": "error", "message": message})),
    )
        .into_response()
}

async fn login(Json(body): Json<serde_json::Value>) -> Response {
    if body["username"] == "admin" && body["password"] == "admin123" {
        Json(json!({"token": "tok-live", "user": admin_user()})).into_response()
    } else {
        unauthorized("Invalid username or password.")
    }
}

async fn session_fetch(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some("tok-live") => Json(json!({"user": admin_user()})).into_response(),
        _ => unauthorized("Session expired."),
    }
}

async fn ingredient_fetch(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some("tok-live") => Json(json!([
            {"id": 1, "name": "Arabica beans", "stock": 12, "category": "ingredients"},
            {"id": 2, "name": "Whole milk", "stock": 3, "category": "ingredients"},
        ]))
        .into_response(),
        Some("tok-shape") => Json(json!({"nope": true})).into_response(),
        _ => unauthorized("Session expired."),
    }
}

async fn ingredient_add(Json(_body): Json<serde_json::Value>) -> Response {
    Json(json!({"status": "success", "message": "Ingredient added successfully."}))
        .into_response()
}

async fn ingredient_update(Path(id): Path<i64>, Json(_body): Json<serde_json::Value>) -> Response {
    if id == 404 {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "error", "message": "Ingredient not found."})),
        )
            .into_response()
    } else {
        Json(json!({"status": "success", "message": "Ingredient updated successfully."}))
            .into_response()
    }
}

async fn ingredient_disable(Path(_id): Path<i64>) -> Response {
    Json(json!({"status": "success", "message": "Ingredient disabled."})).into_response()
}

async fn sales_fetch(
    State(state): State<Arc<Recorded>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state
        .sales_queries
        .lock()
        .expect("lock")
        .push(query.clone());

    if query.get("page").map(String::as_str) == Some("999") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "message": "boom"})),
        )
            .into_response();
    }

    Json(json!({
        "sales": {
            "data": [
                {"id": 11, "order_type": "dine-in", "total_amount": "250.00",
                 "created_at": "2025-05-02 10:15:00"},
                {"id": 12, "order_type": "take-out", "total_amount": "95.00",
                 "created_at": "2025-05-02 10:40:00"},
            ],
            "last_page": 4,
            "total": 40
        }
    }))
    .into_response()
}

async fn expenses_fetch(Query(query): Query<HashMap<String, String>>) -> Response {
    // The real endpoint keys its page size as `pageSize`; reject the
    // sales-style spelling so a regression cannot pass silently.
    if query.contains_key("per_page") || !query.contains_key("pageSize") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "error", "message": "missing pageSize"})),
        )
            .into_response();
    }

    Json(json!({
        "data": [
            {"id": 7, "description": "Gas refill", "total_amount": "500.00",
             "created_at": "2025-05-01 09:00:00"},
        ],
        "last_page": 2,
        "total": 12
    }))
    .into_response()
}

async fn expenses_add(Json(_body): Json<serde_json::Value>) -> Response {
    Json(json!({"status": "success", "message": "Expense recorded."})).into_response()
}

fn may_range() -> DateRange {
    DateRange {
        start: NaiveDate::from_ymd_opt(2025, 5, 1).expect("date"),
        end: NaiveDate::from_ymd_opt(2025, 5, 31).expect("date"),
    }
}

#[tokio::test]
async fn login_success_returns_token_and_identity() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let response = client.login("admin", "admin123").await.expect("login");
    assert_eq!(response.token, "tok-live");

    let identity = response.user.into_identity().expect("identity");
    assert_eq!(identity.role, brewpos_auth::Role::Admin);
    assert_eq!(identity.display_name(), "Alma Dizon");
}

#[tokio::test]
async fn login_failure_carries_the_backend_message() {
    let server = TestServer::spawn().await;
    let err = server
        .client()
        .login("admin", "wrong")
        .await
        .expect_err("must fail");
    assert_eq!(
        err,
        ApiError::Auth {
            message: "Invalid username or password.".to_string()
        }
    );
}

#[tokio::test]
async fn restore_validates_the_stored_token() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let session = client.restore("tok-live").await.expect("restore");
    assert_eq!(session.user.fname, "Alma");

    let err = client.restore("tok-stale").await.expect_err("expired");
    assert!(err.is_auth());
}

#[tokio::test]
async fn ingredient_requests_require_the_installed_credential() {
    let server = TestServer::spawn().await;
    let client = server.client();

    let err = client.fetch_ingredients().await.expect_err("no credential");
    assert!(err.is_auth());

    client.set_credential(Some("tok-live"));
    let rows = client.fetch_ingredients().await.expect("fetch");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Arabica beans");
}

#[tokio::test]
async fn ingredient_mutations_return_the_status_envelope() {
    let server = TestServer::spawn().await;
    let client = server.client();
    client.set_credential(Some("tok-live"));

    let added = client
        .add_ingredient(&NewIngredient {
            name: "Cocoa powder".into(),
            stock: 20,
            category: "ingredients".into(),
        })
        .await
        .expect("add");
    assert_eq!(added.status, "success");

    let missing = client
        .update_ingredient(
            IngredientId::new(404),
            &brewpos_client::IngredientUpdate {
                name: "Cocoa powder".into(),
                stock: 5,
            },
        )
        .await
        .expect_err("missing row");
    assert_eq!(
        missing,
        ApiError::Validation {
            status: 404,
            message: "Ingredient not found.".to_string()
        }
    );

    let disabled = client
        .disable_ingredient(IngredientId::new(2))
        .await
        .expect("disable");
    assert_eq!(disabled.status, "success");
}

#[tokio::test]
async fn sales_query_sends_the_date_pair_only_when_complete() {
    let server = TestServer::spawn().await;
    let client = server.client();
    client.set_credential(Some("tok-live"));

    let page = client
        .fetch_sales(&PageQuery::default())
        .await
        .expect("fetch");
    assert_eq!(page.last_page, 4);
    assert_eq!(page.total, 40);

    client
        .fetch_sales(&PageQuery {
            page: 2,
            page_size: 25,
            range: Some(may_range()),
        })
        .await
        .expect("fetch with range");

    let recorded = server.state.sales_queries.lock().expect("lock");
    let bare = &recorded[0];
    assert_eq!(bare.get("page").map(String::as_str), Some("1"));
    assert_eq!(bare.get("per_page").map(String::as_str), Some("10"));
    assert!(!bare.contains_key("start_date"));
    assert!(!bare.contains_key("end_date"));

    let ranged = &recorded[1];
    assert_eq!(ranged.get("page").map(String::as_str), Some("2"));
    assert_eq!(ranged.get("per_page").map(String::as_str), Some("25"));
    assert_eq!(ranged.get("start_date").map(String::as_str), Some("2025-05-01"));
    assert_eq!(ranged.get("end_date").map(String::as_str), Some("2025-05-31"));
}

#[tokio::test]
async fn expenses_query_uses_its_own_page_size_key() {
    let server = TestServer::spawn().await;
    let client = server.client();
    client.set_credential(Some("tok-live"));

    // The stub 400s on the sales-style key, so success here proves the
    // endpoint-specific spelling went out.
    let page = client
        .fetch_expenses(&PageQuery {
            page: 1,
            page_size: 10,
            range: Some(may_range()),
        })
        .await
        .expect("fetch");
    assert_eq!(page.data[0].description, "Gas refill");
    assert_eq!(page.data[0].amount(), 500.0);
}

#[tokio::test]
async fn add_expense_posts_the_form() {
    let server = TestServer::spawn().await;
    let client = server.client();
    client.set_credential(Some("tok-live"));

    let message = client
        .add_expense(&NewExpense {
            description: "Napkins".into(),
            total_amount: 150.0,
        })
        .await
        .expect("add expense");
    assert_eq!(message.message, "Expense recorded.");
}

#[tokio::test]
async fn server_errors_map_to_the_server_variant() {
    let server = TestServer::spawn().await;
    let client = server.client();
    client.set_credential(Some("tok-live"));

    let err = client
        .fetch_sales(&PageQuery {
            page: 999,
            page_size: 10,
            range: None,
        })
        .await
        .expect_err("5xx");
    assert_eq!(err, ApiError::Server { status: 500 });
}

#[tokio::test]
async fn unexpected_shapes_map_to_decode() {
    let server = TestServer::spawn().await;
    let client = server.client();
    client.set_credential(Some("tok-shape"));

    let err = client.fetch_ingredients().await.expect_err("wrong shape");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_maps_to_network() {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9")).expect("client");
    let err = client.login("admin", "admin123").await.expect_err("down");
    assert!(matches!(err, ApiError::Network(_)));
}
