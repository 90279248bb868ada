//! Request Body Extractor
//!
//! HTML forms post `application/x-www-form-urlencoded`, API clients post
//! JSON. [`Payload`] picks the decoder from `Content-Type`.

use axum::Json;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header;
use serde::de::DeserializeOwned;

use crate::error::TrackerError;

/// Body decoded from JSON or a urlencoded form
///
/// A request without `Content-Type` decodes to `T::default()`, so every
/// field reads as absent and the use case reports what is missing.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = TrackerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase());

        match content_type {
            None => Ok(Payload(T::default())),
            Some(ct) if is_json(&ct) => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| TrackerError::MalformedBody(rejection.body_text()))?;
                Ok(Payload(value))
            }
            Some(_) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| TrackerError::MalformedBody(rejection.body_text()))?;
                Ok(Payload(value))
            }
        }
    }
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
