use actix_web::{test, web, App};
use backend::routes;
use backend::state::app_state::AppState;
use backend::{RequestTrace, StructuredLogger, TraceSpan};

#[actix_web::test]
async fn full_middleware_chain_serves_the_greeting() {
    backend_test_support::test_logging::init();

    // Same registration order as main.rs (minus CORS, which reads env)
    let app = test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(AppState::default()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers().get("x-request-id").is_some());

    let body = test::read_body(resp).await;
    assert_eq!(body, "Hello World!");
}

#[actix_web::test]
async fn full_middleware_chain_tags_missed_routes() {
    backend_test_support::test_logging::init();

    let app = test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(AppState::default()))
            .configure(routes::configure),
    )
    .await;

    // 404 goes down the warn path of the logger and still gets a trace id
    let req = test::TestRequest::get().uri("/missing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
    assert!(resp.headers().get("x-request-id").is_some());
}
