//! Integration tests driving the assembled router in-process.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt;

use solar_sizing_api::config::Config;
use solar_sizing_api::routes::sizing_routes::sizing_routes;
use solar_sizing_api::services::sizing_calculator::SizingParams;

fn post_calculate(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn calculate_returns_sizing_for_typical_household() {
    let app = sizing_routes(Config::default());

    let resp = app
        .oneshot(post_calculate(r#"{"monthly_kwh": 300}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["system_size_kw"], 2.5);
    assert_eq!(json["panel_count"], 5);
    assert_eq!(json["monthly_savings_cop"], 277_800.0);
    assert_eq!(json["installation_cost_cop"], 10_500_000.0);
    assert_eq!(json["payback_years"], 3.15);
    assert_eq!(json["area_m2"], 10.5);
}

#[tokio::test]
async fn calculate_rejects_non_positive_consumption() {
    for body in [r#"{"monthly_kwh": 0}"#, r#"{"monthly_kwh": -50}"#] {
        let app = sizing_routes(Config::default());
        let resp = app.oneshot(post_calculate(body)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(resp).await;
        assert!(
            json["error"].as_str().unwrap().contains("greater than zero"),
            "unexpected error body: {json}"
        );
    }
}

#[tokio::test]
async fn calculate_rejects_malformed_bodies() {
    // missing field, wrong type, not JSON at all
    for body in [r#"{}"#, r#"{"monthly_kwh": "a lot"}"#, "not json"] {
        let app = sizing_routes(Config::default());
        let resp = app.oneshot(post_calculate(body)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(resp).await;
        assert!(json["error"].is_string(), "unexpected error body: {json}");
    }
}

#[tokio::test]
async fn calculate_reports_misconfiguration_as_server_error() {
    let config = Config {
        sizing: SizingParams {
            performance_ratio: 0.0,
            ..SizingParams::default()
        },
        ..Config::default()
    };
    let app = sizing_routes(config);

    let resp = app
        .oneshot(post_calculate(r#"{"monthly_kwh": 300}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn root_returns_service_info() {
    let app = sizing_routes(Config::default());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["message"], "Solar System Sizing API");
    assert_eq!(json["docs"], "/scalar");
}
