use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

/// Json extractor that also runs the payload's `validator` rules, rejecting
/// with 400 and per-field messages instead of handing bad data to a service.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(payload) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let body = json!({
                        "status": "fail",
                        "message": rejection.body_text(),
                    });
                    (rejection.status(), axum::Json(body))
                })?;

        payload.validate().map_err(|errors| {
            let body = json!({
                "status": "fail",
                "message": "Validation failed",
                "details": field_errors(&errors),
            });
            (StatusCode::BAD_REQUEST, axum::Json(body))
        })?;

        Ok(Self(payload))
    }
}

fn field_errors(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"))
            })
            .collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    json!(error_map)
}
