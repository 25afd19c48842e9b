use super::page::FORM_PAGE;
use super::state::AppState;
use axum::{
    Form,
    extract::{FromRequest, Multipart, Request, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use relay_application::{HandleQueryError, HandleQueryInput};
use relay_domain::escape_html;
use serde::Deserialize;
use tracing::{info, warn};

pub(crate) const INVALID_INPUT: &str = "Invalid input";
pub(crate) const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Form fields posted by the page. Missing fields read as empty and fail
/// validation downstream.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QueryForm {
    pub model: String,
    pub query: String,
}

impl QueryForm {
    /// Decode a url-encoded or multipart body, chosen by `Content-Type`.
    async fn from_body(request: Request) -> Result<Self, String> {
        let is_multipart = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = Form::<QueryForm>::from_request(request, &())
                .await
                .map_err(|e| e.body_text())?;
            return Ok(form);
        }

        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| e.body_text())?;
        let (mut model, mut query) = (None, None);
        while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
            let slot = match field.name() {
                Some("model") => &mut model,
                Some("query") => &mut query,
                _ => continue,
            };
            // First occurrence wins.
            if slot.is_none() {
                *slot = Some(field.text().await.map_err(|e| e.body_text())?);
            }
        }

        Ok(Self {
            model: model.unwrap_or_default(),
            query: query.unwrap_or_default(),
        })
    }
}

pub async fn show_form() -> Html<&'static str> {
    Html(FORM_PAGE)
}

pub async fn submit(State(state): State<AppState>, request: Request) -> Response {
    let form = match QueryForm::from_body(request).await {
        Ok(form) => form,
        Err(reason) => {
            info!("Rejected form body: {}", reason);
            return (StatusCode::BAD_REQUEST, INVALID_INPUT).into_response();
        }
    };

    match state
        .use_case
        .execute(HandleQueryInput::new(form.model, form.query))
        .await
    {
        Ok(answer) => answer.text.into_response(),
        Err(e) if e.is_invalid_input() => {
            info!("Invalid input: {}", e);
            (StatusCode::BAD_REQUEST, INVALID_INPUT).into_response()
        }
        Err(e) => error_response(&e),
    }
}

fn error_response(error: &HandleQueryError) -> Response {
    warn!("Query failed: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error: {}", escape_html(&error.to_string())),
    )
        .into_response()
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}
