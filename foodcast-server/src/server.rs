//! HTTP routes

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use foodcast::UserInput;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::form::parse_submission;
use crate::render::{page, Outcome};
use crate::{Prediction, Store};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
    #[error(transparent)]
    Transform(#[from] foodcast_preprocessing::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Body(rejection) => rejection.body_text(),
            ApiError::Transform(err) => err.to_string(),
        };
        warn!(%message, "rejected prediction request");

        let body = Json(json!({
            "error": true,
            "message": message,
        }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PredictResponse {
    pub prediction: &'static str,
    pub code: usize,
    pub probability: f64,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        PredictResponse {
            prediction: prediction.label(),
            code: prediction.class,
            probability: prediction.probability,
        }
    }
}

pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/api/predict", post(predict))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Runs one form submission through validation, transform and classifier
///
/// Every failure ends up as an inline error, the page is rendered either way.
pub fn evaluate_submission(store: &Store, fields: &HashMap<String, String>) -> Outcome {
    let input = match parse_submission(fields) {
        Ok(input) => input,
        Err(err) => {
            debug!(%err, "form rejected");
            return Outcome::Error(err.to_string());
        }
    };

    match store.predict(&input) {
        Ok(prediction) => {
            info!(
                label = prediction.label(),
                probability = prediction.probability,
                "form prediction"
            );
            Outcome::Prediction(prediction)
        }
        Err(err) => {
            debug!(%err, "transform failed");
            Outcome::Error(err.to_string())
        }
    }
}

async fn index() -> Html<String> {
    Html(page(&HashMap::new(), &Outcome::Empty))
}

async fn submit(
    State(store): State<Arc<Store>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Html<String> {
    let outcome = evaluate_submission(&store, &fields);
    Html(page(&fields, &outcome))
}

async fn predict(
    State(store): State<Arc<Store>>,
    input: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(input) = input?;
    let prediction = store.predict(&input)?;
    info!(
        label = prediction.label(),
        probability = prediction.probability,
        "api prediction"
    );

    Ok(Json(prediction.into()))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
