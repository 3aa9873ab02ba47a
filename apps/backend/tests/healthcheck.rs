use actix_web::test;
use backend::state::app_state::AppState;
use backend::test_support::create_test_app;

#[actix_web::test]
async fn test_health_endpoint() {
    backend_test_support::test_logging::init();

    let app = create_test_app(AppState::default()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(body, "ok");
}
