use crate::errors::ServiceError;
use axum::extract::Multipart;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ServiceError> {
    input.validate()?;
    Ok(())
}

/// Offset/limit parameters for the plain listing endpoints.
#[derive(Debug, Deserialize, Serialize, IntoParams)]
pub struct SkipLimitParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

impl Default for SkipLimitParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// Pulls the uploaded file out of a multipart request: returns its filename and
/// raw bytes. The first part named `file` (or carrying a filename) wins.
pub async fn read_file_upload(multipart: &mut Multipart) -> Result<(String, Bytes), ServiceError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::InvalidInput(format!("malformed multipart request: {}", e)))?
    {
        if field.name() == Some("file") || field.file_name().is_some() {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(|e| {
                ServiceError::InvalidInput(format!("failed to read uploaded file: {}", e))
            })?;
            return Ok((filename, data));
        }
    }

    Err(ServiceError::InvalidInput(
        "multipart request is missing a 'file' part".to_string(),
    ))
}
