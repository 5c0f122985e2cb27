//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON body extractor that runs `Validate` after deserialization.
///
/// Malformed bodies and failed field validation both come back as 400s
/// through `ApiError`, so handlers only ever see well-formed requests.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

fn bad_body(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::BytesRejection(e) => ApiError::invalid_query(e.to_string()),
        _ => ApiError::invalid_query("Invalid JSON body"),
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(bad_body)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
