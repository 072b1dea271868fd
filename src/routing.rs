//! Application router configuration.

use axum::{
    Json, Router,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    category::get_categories_endpoint,
    endpoints,
    error::ErrorBody,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_expense_endpoint, get_expenses_endpoint,
    },
    summary::{get_monthly_summary_endpoint, get_summary_endpoint},
};

/// Return a router with all the app's routes.
///
/// Browsers on any origin may call the API.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::EXPENSES,
            get(get_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint)
                .put(edit_expense_endpoint)
                .delete(delete_expense_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .route(endpoints::MONTHLY_SUMMARY, get(get_monthly_summary_endpoint))
        .route(endpoints::CATEGORIES, get(get_categories_endpoint))
        .fallback(get_404_not_found)
        .layer(cors)
        .with_state(state)
}

/// Check that the API is up.
async fn get_health() -> Json<serde_json::Value> {
    Json(json!({ "message": "API is working" }))
}

async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "the requested route does not exist".to_owned(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, StatusCode, header};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        AppState, Ledger, build_router, endpoints,
        endpoints::format_endpoint,
        expense::Expense,
    };

    fn get_test_server() -> TestServer {
        let state = AppState::new(Ledger::in_memory(), "Etc/UTC");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn health_check_responds() {
        let server = get_test_server();

        let response = server.get(endpoints::HEALTH).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "API is working" })
        );
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let server = get_test_server();

        let response = server.get("/nope").await;

        response.assert_status_not_found();
        assert!(response.json::<Value>()["message"].is_string());
    }

    #[tokio::test]
    async fn lists_known_categories() {
        let server = get_test_server();

        let response = server.get(endpoints::CATEGORIES).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body[0], json!({ "name": "Food", "color": "#f97316" }));
        assert_eq!(body.as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let server = get_test_server();

        let response = server
            .get(endpoints::HEALTH)
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .await;

        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            HeaderValue::from_static("*")
        );
    }

    #[tokio::test]
    async fn expense_lifecycle() {
        let server = get_test_server();

        let created: Expense = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "itemname": "Lunch",
                "itemprice": 12.5,
                "dateofpurchase": "2024-03-15",
                "category": "Food",
            }))
            .await
            .json();
        let endpoint = format_endpoint(endpoints::EXPENSE, created.id);

        server
            .put(&endpoint)
            .json(&json!({
                "itemname": "Lunch",
                "itemprice": 20,
                "dateofpurchase": "2024-03-15",
                "category": "Food",
            }))
            .await
            .assert_status_ok();
        let summary: Value = server.get(endpoints::SUMMARY).await.json();
        assert_eq!(summary["category_totals"]["Food"], 20.0);

        server.delete(&endpoint).await.assert_status_ok();
        server.get(&endpoint).await.assert_status_not_found();
        let expenses: Vec<Expense> = server.get(endpoints::EXPENSES).await.json();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .content_type("application/json")
            .text("{not json")
            .await;

        assert!(response.status_code().is_client_error());
        assert_ne!(response.status_code(), StatusCode::CREATED);
        assert!(response.json::<Value>()["message"].is_string());
    }

    #[tokio::test]
    async fn wrong_typed_body_field_is_json_error() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "itemname": ["Lunch"],
                "itemprice": 12.5,
                "dateofpurchase": "2024-03-15",
                "category": "Food",
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.json::<Value>()["message"].is_string());
    }

    #[tokio::test]
    async fn non_numeric_expense_id_is_json_bad_request() {
        let server = get_test_server();

        for response in [
            server.get("/expenses/abc").await,
            server.delete("/expenses/abc").await,
        ] {
            response.assert_status(StatusCode::BAD_REQUEST);
            assert!(response.json::<Value>()["message"].is_string());
        }
    }

    #[tokio::test]
    async fn out_of_range_month_query_is_json_bad_request() {
        let server = get_test_server();

        let response = server
            .get(endpoints::MONTHLY_SUMMARY)
            .add_query_param("month", 300)
            .add_query_param("year", 2024)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["message"].is_string());
    }
}
