//! `{id}` path segment extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;

/// Employee id taken from the `{id}` path segment.
///
/// Ids that are not an `i32` are rejected with `AppError::BadRequest`,
/// so clients get the usual `{"error":{"code":"BAD_REQUEST",...}}` body
/// instead of axum's plain-text rejection.
pub struct EmployeeId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(EmployeeId(id))
    }
}
