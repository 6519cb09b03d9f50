pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::seating::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/healthcheck", get(health::health_handler))
        // Seating API
        .route("/configure", post(handlers::handle_configure))
        .route("/available-seats", get(handlers::handle_available_seats))
        .route("/reserve-seats", post(handlers::handle_reserve_seats))
        .route("/cancel-seats", post(handlers::handle_cancel_seats))
        .route("/seats", get(handlers::handle_list_seats))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::seating::CinemaConfig;

    fn app() -> Router {
        build_router(AppState::new(CinemaConfig::default()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = app();
        for uri in ["/health", "/healthcheck"] {
            let response = send(&app, "GET", uri, None).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(json_body(response).await["status"], "ok");
        }
    }

    #[tokio::test]
    async fn test_default_seats_matrix() {
        let app = app();
        let response = send(&app, "GET", "/seats", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!(vec![vec![0; 5]; 5]));
    }

    #[tokio::test]
    async fn test_reserve_list_cancel_flow() {
        let app = app();
        let batch = json!({"seats": [{"row": 0, "col": 0}, {"row": 4, "col": 4}]});

        let response = send(&app, "POST", "/reserve-seats", Some(batch.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Seats booked");

        let seats = json_body(send(&app, "GET", "/seats", None).await).await;
        assert_eq!(seats[0][0], 1);
        assert_eq!(seats[4][4], 1);
        assert_eq!(seats[2][2], 0);

        let response = send(&app, "POST", "/reserve-seats", Some(batch.clone())).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(response).await["error"]["code"], "ALREADY_RESERVED");

        let response = send(&app, "POST", "/cancel-seats", Some(batch.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Seats cancelled");

        let response = send(&app, "POST", "/cancel-seats", Some(batch)).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_RESERVED");
    }

    #[tokio::test]
    async fn test_reserve_out_of_bounds() {
        let app = app();
        let response = send(
            &app,
            "POST",
            "/reserve-seats",
            Some(json!({"seats": [{"row": 10, "col": 10}]})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "OUT_OF_BOUNDS");
    }

    #[tokio::test]
    async fn test_available_seats_after_corner_booking() {
        let app = app();
        send(
            &app,
            "POST",
            "/reserve-seats",
            Some(json!({"seats": [{"row": 0, "col": 0}]})),
        )
        .await;

        let response = send(&app, "GET", "/available-seats?group_size=1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let groups = json_body(response).await;
        let groups = groups.as_array().unwrap();

        assert!(groups.contains(&json!([{"row": 4, "col": 4}])));
        assert!(!groups.contains(&json!([{"row": 0, "col": 1}])));
        assert!(!groups.contains(&json!([{"row": 0, "col": 0}])));
    }

    #[tokio::test]
    async fn test_available_seats_requires_group_size() {
        let app = app();

        let response = send(&app, "GET", "/available-seats", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "MALFORMED_REQUEST");

        let response = send(&app, "GET", "/available-seats?group_size=0", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_configure_resets_grid() {
        let app = app();
        send(
            &app,
            "POST",
            "/reserve-seats",
            Some(json!({"seats": [{"row": 1, "col": 1}]})),
        )
        .await;

        let response = send(
            &app,
            "POST",
            "/configure",
            Some(json!({"rows": 3, "cols": 3, "min_distance": 1})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Configured");

        let seats = json_body(send(&app, "GET", "/seats", None).await).await;
        assert_eq!(seats, json!(vec![vec![0; 3]; 3]));
    }

    #[tokio::test]
    async fn test_configure_validation() {
        let app = app();
        let response = send(
            &app,
            "POST",
            "/configure",
            Some(json!({"rows": 0, "cols": 3, "min_distance": 1})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");

        // grid untouched by the rejected request
        let seats = json_body(send(&app, "GET", "/seats", None).await).await;
        assert_eq!(seats, json!(vec![vec![0; 5]; 5]));
    }

    #[tokio::test]
    async fn test_configure_oversized_layout_rejected() {
        let app = app();
        let response = send(
            &app,
            "POST",
            "/configure",
            Some(json!({"rows": i64::MAX, "cols": 2, "min_distance": 1})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "INVALID_CONFIGURATION"
        );

        // service still answers and the old layout is intact
        let seats = json_body(send(&app, "GET", "/seats", None).await).await;
        assert_eq!(seats, json!(vec![vec![0; 5]; 5]));
    }

    #[tokio::test]
    async fn test_available_seats_huge_group_size() {
        let app = app();
        let uri = format!("/available-seats?group_size={}", i64::MAX);
        let response = send(&app, "GET", &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_seat_batch_validation() {
        let app = app();

        let response = send(&app, "POST", "/reserve-seats", Some(json!({"seats": []}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");

        let response = send(
            &app,
            "POST",
            "/cancel-seats",
            Some(json!({"seats": [{"row": -1, "col": 0}]})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");

        let response = send(&app, "POST", "/reserve-seats", Some(json!({"rows": 1}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "MALFORMED_REQUEST");
    }
}
