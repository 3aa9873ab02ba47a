use actix_web::{test, web, HttpResponse};
use backend::state::app_state::AppState;
use backend::test_support::create_test_app_builder;
use backend::AppError;

async fn failing_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        "INVALID_EXAMPLE",
        "Example failure".to_string(),
    ))
}

#[actix_web::test]
async fn errors_render_as_problem_details() {
    backend_test_support::test_logging::init();

    // Minimal app with the trace middleware and a route that always fails
    let app = create_test_app_builder(AppState::default())
        .with_routes(|cfg| {
            cfg.route("/_test/error", web::get().to(failing_handler));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    // Extract headers before reading body to avoid borrowing issues
    let headers = resp.headers().clone();
    let request_id = headers
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .expect("ascii header value")
        .to_owned();
    assert!(!request_id.is_empty());

    let content_type = headers
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .expect("ascii header value");
    assert_eq!(content_type, "application/problem+json");

    let body = test::read_body(resp).await;
    let problem_details: serde_json::Value =
        serde_json::from_slice(&body).expect("problem+json body");

    // All six RFC 7807 fields are present
    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(problem_details.get(key).is_some(), "missing key {key}");
    }

    assert_eq!(problem_details["code"], "INVALID_EXAMPLE");
    assert_eq!(problem_details["detail"], "Example failure");
    assert_eq!(problem_details["status"], 400);
    assert_eq!(problem_details["title"], "INVALID EXAMPLE");

    // The trace id in the body is the one echoed in the header
    let trace_id_in_body = problem_details["trace_id"].as_str().expect("trace_id");
    assert_eq!(trace_id_in_body, request_id);
}
