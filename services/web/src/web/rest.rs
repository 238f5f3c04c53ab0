//! services/web/src/web/rest.rs
//!
//! Contains the Axum handlers for the JSON chat endpoints polled by the chat pages,
//! and the master definition for their OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sitio_core::domain::Message;
use sitio_core::ports::PortError;
use std::sync::Arc;
use tracing::{error, warn};
use utoipa::{OpenApi, ToSchema};

/// Error text returned when a chat message lacks its sender or body.
pub const MISSING_DATA: &str = "Faltan datos";

/// Display format of message timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_messages_handler,
        send_message_handler,
    ),
    components(
        schemas(MessageResponse, SendMessageRequest, StatusResponse, ErrorResponse)
    ),
    tags(
        (name = "Sitio Chat API", description = "Endpoints behind the shared chat channel.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// One chat message as the chat pages render it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub id: i64,
    pub remitente: String,
    pub mensaje: String,
    /// UTC, formatted `YYYY-MM-DD HH:MM:SS`.
    pub fecha: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            remitente: message.sender,
            mensaje: message.body,
            fecha: message.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    #[serde(default, alias = "sender")]
    pub remitente: Option<String>,
    #[serde(default, alias = "body")]
    pub mensaje: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn json_error(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List every chat message, oldest first.
#[utoipa::path(
    get,
    path = "/obtener_mensajes",
    responses(
        (status = 200, description = "All messages in creation order", body = [MessageResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_messages_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let messages = app_state.chat.list().await.map_err(|e| {
        error!("Failed to list messages: {:?}", e);
        json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error al obtener los mensajes",
        )
    })?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Post a message to the shared channel.
///
/// Both `remitente` and `mensaje` must be present and non-empty.
#[utoipa::path(
    post,
    path = "/enviar_mensaje",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message stored", body = StatusResponse),
        (status = 400, description = "Missing sender or body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn send_message_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(|e| {
        warn!("Rejected chat payload: {}", e);
        json_error(StatusCode::BAD_REQUEST, MISSING_DATA)
    })?;

    match app_state
        .chat
        .send(req.remitente.as_deref(), req.mensaje.as_deref())
        .await
    {
        Ok(_) => Ok(Json(StatusResponse {
            status: "success".to_string(),
        })),
        Err(PortError::Invalid(reason)) => {
            warn!("Rejected chat message: {}", reason);
            Err(json_error(StatusCode::BAD_REQUEST, MISSING_DATA))
        }
        Err(e) => {
            error!("Failed to store message: {:?}", e);
            Err(json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al enviar el mensaje",
            ))
        }
    }
}
