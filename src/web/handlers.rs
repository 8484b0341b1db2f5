use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{ProjectionSummary, Projector};
use crate::error::ProjectionError;
use crate::io::ExportFormat;
use crate::models::{ParameterInputs, YearRecord};

use super::state::AppState;

// ---------------------------------------------------------------------------
// Error wrapper
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

#[derive(Debug)]
pub struct WebError(ProjectionError);

impl From<ProjectionError> for WebError {
    fn from(e: ProjectionError) -> Self {
        WebError(e)
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_type) = match &self.0 {
            ProjectionError::ValidationError(_)
            | ProjectionError::ParseError(_)
            | ProjectionError::Json(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, "Bad Request")
            }
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ),
        };
        HttpResponse::build(status).json(ErrorBody {
            error: error_type.to_string(),
            details: self.0.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectionResponse {
    pub inputs: ParameterInputs,
    pub summary: Option<ProjectionSummary>,
    pub records: Vec<YearRecord>,
}

/// Overlay the fields present in `body` on top of `defaults`.
fn merge_inputs(
    defaults: &ParameterInputs,
    body: serde_json::Value,
) -> Result<ParameterInputs, ProjectionError> {
    let serde_json::Value::Object(overrides) = body else {
        return Err(ProjectionError::ParseError(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let mut merged = serde_json::to_value(defaults)?;
    if let serde_json::Value::Object(fields) = &mut merged {
        for (key, value) in overrides {
            fields.insert(key, value);
        }
    }
    Ok(serde_json::from_value(merged)?)
}

fn run_projection(
    state: &AppState,
    body: serde_json::Value,
) -> Result<(ParameterInputs, Projector), ProjectionError> {
    let inputs = merge_inputs(state.defaults(), body)?;
    let projector = Projector::from_inputs(&inputs).map_err(|e| {
        warn!(error = %e, "rejected projection request");
        e
    })?;
    Ok((inputs, projector))
}

/// JSON extractor settings that report unreadable bodies as an `ErrorBody`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    WebError(ProjectionError::ParseError(format!("Invalid JSON body: {err}"))).into()
}

/// Sanitize a filename for use in Content-Disposition headers.
/// Removes characters that could enable header injection or path traversal.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_' || *c == '.' || *c == ' ')
        .collect::<String>()
        .replace("..", "")
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn defaults(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.defaults())
}

pub async fn projection(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, WebError> {
    let (inputs, projector) = run_projection(&state, body.into_inner())?;
    let decimals = state.decimals();
    debug!(years = inputs.years, "serving projection");

    let summary = projector.summary();
    let records = projector
        .into_records()
        .iter()
        .map(|r| r.rounded(decimals))
        .collect();

    Ok(HttpResponse::Ok().json(ProjectionResponse {
        inputs,
        summary,
        records,
    }))
}

#[derive(Deserialize)]
pub struct ExportQuery {
    format: Option<String>,
}

pub async fn export(
    state: web::Data<AppState>,
    query: web::Query<ExportQuery>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, WebError> {
    let format: ExportFormat = query.format.as_deref().unwrap_or("csv").parse()?;
    let (_, projector) = run_projection(&state, body.into_inner())?;

    let data = format.to_bytes(projector.records(), state.decimals())?;
    let safe_name = sanitize_filename(&state.file_name(format.extension()));

    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{safe_name}\""),
        ))
        .body(data))
}

// ---------------------------------------------------------------------------
// Static page
// ---------------------------------------------------------------------------

pub async fn index_html() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

pub async fn app_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(include_str!("../../static/app.js"))
}

pub async fn style_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(include_str!("../../static/style.css"))
}
