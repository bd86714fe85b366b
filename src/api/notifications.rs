// SPDX-License-Identifier: MPL-2.0
//! Notification endpoints.
//!
//! Two operations exist: fetching the full notification list and marking a
//! single notification read. The wire shape uses camelCase field names as
//! emitted by the backend.

use super::{ApiClient, ApiError, ApiResult};
use crate::store::Notification;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Wire representation of a notification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: u64,
    pub summary: String,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Notification {
            id: dto.id,
            summary: dto.summary,
            body: dto.body,
            created_at: dto.created_at,
            is_read: dto.is_read,
        }
    }
}

/// Fetches the full notification list for the current user.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a
/// non-success status, or the body cannot be decoded.
pub async fn fetch_notifications(client: &ApiClient) -> ApiResult<Vec<Notification>> {
    let response = client
        .request(reqwest::Method::GET, "/api/notifications")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    let dtos: Vec<NotificationDto> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(dtos.into_iter().map(Notification::from).collect())
}

/// Marks one notification read server-side.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers with a
/// non-success status.
pub async fn read_notification(client: &ApiClient, id: u64) -> ApiResult<()> {
    let response = client
        .request(
            reqwest::Method::POST,
            &format!("/api/notifications/{id}/read"),
        )
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    Ok(())
}
