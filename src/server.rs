//! HTTP surface: localized pages, sitemap, and the JSON navigation and
//! booking endpoints.

use crate::booking::{
    localize_errors, BillingCycle, BookingDetails, BookingFlow, FlowEntry, FlowSettings,
    PlanCatalog, SubmitOutcome,
};
use crate::config::Config;
use crate::error::AppError;
use crate::i18n::{Language, MetricsReport};
use crate::pages::{self, PageContext};
use crate::routing::{ParsedPath, Resolver, RouteKey};
use crate::security::api_key_matches;
use crate::util::{encode_path, percent_decode};
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<Resolver>,
    pub flow_settings: FlowSettings,
}

impl AppState {
    pub fn new(config: Config, resolver: Resolver) -> Self {
        let flow_settings = FlowSettings::from_config(&config);
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            flow_settings,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap))
        .route("/api/routes/resolve", get(resolve_route))
        .route("/api/routes/parse", get(parse_path))
        .route("/api/routes/switch", get(switch_language))
        .route("/api/routes/variants", get(language_variants))
        .route("/api/plans", get(plans))
        .route("/api/booking/validate", post(validate_details))
        .route("/api/booking/start", post(start_booking))
        .route("/api/metrics", get(metrics))
        .fallback(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn language_param(code: Option<&str>) -> Result<Language, AppError> {
    match code {
        None => Ok(Language::default_language()),
        Some(code) => Language::from_code(code).map_err(|e| AppError::BadRequest(e.to_string())),
    }
}

fn route_key_param(key: &str) -> Result<RouteKey, AppError> {
    key.parse::<RouteKey>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

// ==================== Pages ====================

/// Send visitors of the bare root to their language's home page.
async fn root(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    let language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Language::from_accept_language)
        .unwrap_or_else(Language::default_language);

    Redirect::temporary(&encode_path(
        &state.resolver.resolve_route(RouteKey::Home, language),
    ))
}

async fn page(State(state): State<AppState>, uri: Uri) -> Response {
    // Localized segments may be non-ASCII; browsers request them escaped.
    let pathname = percent_decode(uri.path());
    let ctx = PageContext {
        site_url: &state.config.site_url,
        year: Utc::now().year(),
    };

    match state.resolver.parse_path(&pathname) {
        Some(ParsedPath {
            language,
            route_key: Some(key),
        }) => Html(pages::render_page(&state.resolver, &ctx, language, key)).into_response(),
        Some(ParsedPath {
            language,
            route_key: None,
        }) => (
            StatusCode::NOT_FOUND,
            Html(pages::render_not_found(&state.resolver, &ctx, language, &pathname)),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        pages::render_sitemap(&state.resolver, &state.config.site_url),
    )
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "time": Utc::now().to_rfc3339(),
    }))
}

// ==================== Navigation API ====================

#[derive(Debug, Deserialize)]
struct ResolveQuery {
    key: String,
    lang: String,
}

async fn resolve_route(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<Value>, AppError> {
    let key = route_key_param(&query.key)?;
    let language = language_param(Some(&query.lang))?;

    Ok(Json(json!({
        "path": state.resolver.resolve_path(key, language),
        "route": state.resolver.resolve_route(key, language),
    })))
}

#[derive(Debug, Deserialize)]
struct PathQuery {
    path: String,
}

async fn parse_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<ParsedPath>, AppError> {
    state
        .resolver
        .parse_path(&query.path)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("'{}' is not a localized path", query.path)))
}

#[derive(Debug, Deserialize)]
struct SwitchQuery {
    path: String,
    lang: String,
}

async fn switch_language(
    State(state): State<AppState>,
    Query(query): Query<SwitchQuery>,
) -> Result<Json<Value>, AppError> {
    let target = language_param(Some(&query.lang))?;
    let path = state.resolver.switch_language(&query.path, target);
    info!("Language switch {} -> {}", query.path, path);

    Ok(Json(json!({ "path": path })))
}

#[derive(Debug, Deserialize)]
struct VariantsQuery {
    key: String,
}

async fn language_variants(
    State(state): State<AppState>,
    Query(query): Query<VariantsQuery>,
) -> Result<Json<Value>, AppError> {
    let key = route_key_param(&query.key)?;
    Ok(Json(json!({
        "variants": state.resolver.all_language_variants(key),
    })))
}

// ==================== Booking API ====================

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

async fn plans(Query(query): Query<LangQuery>) -> Result<Json<Value>, AppError> {
    let language = language_param(query.lang.as_deref())?;
    let catalog = PlanCatalog::builtin(language);

    Ok(Json(json!({
        "language": language,
        "billing_cycles": BillingCycle::ALL,
        "plans": catalog.plans(),
    })))
}

#[derive(Debug, Deserialize)]
struct ValidateRequest {
    language: Option<String>,
    #[serde(default)]
    details: BookingDetails,
}

async fn validate_details(Json(request): Json<ValidateRequest>) -> Result<Json<Value>, AppError> {
    let language = language_param(request.language.as_deref())?;
    let errors = request.details.validate();

    Ok(Json(json!({
        "valid": errors.is_empty(),
        "errors": localize_errors(&errors, language.strings()),
    })))
}

/// Booking hand-off from the pricing page.
#[derive(Debug, Deserialize)]
struct StartRequest {
    language: Option<String>,
    plan_id: Option<String>,
    billing_cycle: Option<BillingCycle>,
    #[serde(default)]
    details: BookingDetails,
}

async fn start_booking(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Result<Response, AppError> {
    let language = language_param(request.language.as_deref())?;

    let selection = match (request.plan_id.as_deref(), request.billing_cycle) {
        (Some(plan_id), Some(cycle)) => PlanCatalog::builtin(language).select(plan_id, cycle),
        _ => None,
    };

    let mut flow = match BookingFlow::enter(selection, language, state.flow_settings.clone()) {
        FlowEntry::Started(flow) => flow,
        FlowEntry::Redirect(key) => {
            let redirect = state.resolver.resolve_route(key, language);
            return Ok(Json(json!({ "redirect": redirect })).into_response());
        }
    };

    flow.fill(request.details);

    match flow.submit().await {
        SubmitOutcome::Accepted => Ok(Json(json!({
            "state": flow.step(),
            "widget_url": flow.widget_url(),
            "widget": {
                "origin": state.flow_settings.widget.origin,
                "ready_event": state.flow_settings.widget.ready_event,
                "ready_timeout_ms": state.flow_settings.ready_timeout.as_millis() as u64,
            },
            "price": flow.selection().price(),
            "back": state.resolver.resolve_route(RouteKey::Pricing, language),
        }))
        .into_response()),
        SubmitOutcome::Rejected(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "state": flow.step(),
                "errors": localize_errors(&errors, language.strings()),
            })),
        )
            .into_response()),
        SubmitOutcome::Ignored => Err(AppError::Internal(anyhow::anyhow!(
            "new booking flow did not start in the details step"
        ))),
    }
}

// ==================== Metrics ====================

async fn metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MetricsReport>, AppError> {
    let provided = headers.get("x-api-key").and_then(|value| value.to_str().ok());
    if !api_key_matches(state.config.api_key.as_deref(), provided) {
        return Err(AppError::Unauthorized);
    }

    Ok(Json(state.resolver.metrics().report()))
}
