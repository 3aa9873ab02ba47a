//! Request completion logging.
//!
//! Emits exactly one event per request carrying the method, path, status,
//! elapsed time, and the trace id that `RequestTrace` stored in the request
//! extensions. Severity follows the status class: 5xx logs at error, 4xx at
//! warn, everything else at info.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

pub struct StructuredLogger;

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

fn emit_completion(method: &str, path: &str, status: StatusCode, elapsed_us: u64, trace_id: &str) {
    let status = status.as_u16();
    match status {
        500.. => error!(method, path, status, elapsed_us, trace_id, "request completed"),
        400..=499 => warn!(method, path, status, elapsed_us, trace_id, "request completed"),
        _ => info!(method, path, status, elapsed_us, trace_id, "request completed"),
    }
}

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();

        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // Errors have not been rendered yet at this layer; pull the
            // status they will render with.
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            let elapsed_us = started.elapsed().as_micros() as u64;
            emit_completion(&method, &path, status, elapsed_us, &trace_id);

            result
        })
    }
}
