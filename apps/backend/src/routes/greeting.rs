use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// `GET /` — plain-text greeting from the configured service.
///
/// The happy path cannot fail, but the handler keeps the
/// `Result<_, AppError>` signature every handler in this app uses.
pub async fn root(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let greeting = app_state.greeting.hello().to_owned();
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(greeting))
}
