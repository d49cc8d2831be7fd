//! Lenient JSON body extractor
//!
//! Bodies that are not a JSON object (syntax errors, empty bodies, arrays)
//! deserialize to `T::default()`, so a handler sees an empty payload and
//! reports the missing fields itself. A well-formed object whose field has
//! the wrong type is rejected with a 400 naming that field.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

/// 找出单独反序列化时失败的字段
fn invalid_field<T: DeserializeOwned>(object: &Map<String, Value>) -> Option<String> {
    object.iter().find_map(|(key, value)| {
        let single = Value::Object(Map::from_iter([(key.clone(), value.clone())]));
        serde_json::from_value::<T>(single).is_err().then(|| key.clone())
    })
}

impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Failed to read request body: {}", e)))?;

        let object = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(object)) => object,
            Ok(_) => {
                tracing::debug!("Non-object JSON body treated as empty");
                return Ok(Self(T::default()));
            }
            Err(e) => {
                if !bytes.is_empty() {
                    tracing::debug!(error = %e, "Malformed JSON body treated as empty");
                }
                return Ok(Self(T::default()));
            }
        };

        match serde_json::from_value(Value::Object(object.clone())) {
            Ok(value) => Ok(Self(value)),
            Err(e) => Err(match invalid_field::<T>(&object) {
                Some(field) => AppError::validation(format!("Invalid value for '{}'", field))
                    .with_detail("field", field),
                None => AppError::validation(format!("Invalid request body: {}", e)),
            }),
        }
    }
}
