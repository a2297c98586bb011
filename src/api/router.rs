use std::time::Duration;

use axum::{
    http::header::{HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN},
    http::{HeaderName, Method, Request, Response},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    normalize_path::NormalizePath,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::api::{
    admins, answers, authentication, classrooms, handlers, leaderboard, questions, quiz_ids,
    quizzes, user_responses, users,
};
use crate::core::{config::Settings, metrics, state::AppState};
use crate::db::types::Subject;

/// The routed app behind trailing-slash normalisation. Normalising has to
/// happen before routing, so it wraps the `Router` instead of being a layer.
pub(crate) type App = NormalizePath<Router>;

/// The complete handler set. Mounted once by the server entry point.
pub(crate) fn router(state: AppState) -> App {
    let cors = build_cors_layer(state.settings());

    let request_id_header = HeaderName::from_static("x-request-id");
    let request_id_header_for_span = request_id_header.clone();
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(move |request: &Request<_>| {
            let request_id = request
                .headers()
                .get(&request_id_header_for_span)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_response(|response: &Response<axum::body::Body>, latency: Duration, _span: &Span| {
            metrics::record_http_response(response.status(), latency);
        });

    let mut router: Router<AppState> = Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz).head(handlers::healthz))
        .route("/cred", post(authentication::check_credentials))
        .nest("/admins", admins::router())
        .nest("/authentication", authentication::router())
        .nest("/classrooms", classrooms::router())
        .nest("/quizid", quiz_ids::router())
        .nest("/quizzes", quizzes::router())
        .nest("/answers", answers::router())
        .nest("/users", users::router())
        .nest("/user_responses", user_responses::router())
        .nest("/leaderboard", leaderboard::router())
        .nest("/algebra_questions", questions::router(Subject::Algebra))
        .nest("/chemistry_questions", questions::router(Subject::Chemistry));

    if state.settings().telemetry().prometheus_enabled {
        router = router.route("/metrics", get(handlers::metrics));
    }

    // Outermost last: the id is set before the trace span reads it.
    let router = router
        .fallback(handlers::not_found)
        .layer(middleware::map_response(handlers::method_not_allowed))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(trace_layer)
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins = settings
        .cors()
        .origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();

    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT, ORIGIN, HeaderName::from_static("x-request-id")])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(origins))
    }
}
