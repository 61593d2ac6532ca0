//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching incoming commands and forwarding filtered events.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::messages::{WsCommand, WsMessage, WsMessageType};
use super::subscription::{SubscriptionManager, parse_targets};
use crate::api::dto::WarehouseDto;
use crate::domain::WarehouseEvent;
use crate::service::WarehouseService;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads commands from the client and dispatches them.
/// - Forwards matching events from the [`broadcast::Receiver`] to the client.
pub async fn run_connection(
    socket: WebSocket,
    mut event_rx: broadcast::Receiver<WarehouseEvent>,
    service: Arc<WarehouseService>,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut subs = SubscriptionManager::new();

    loop {
        tokio::select! {
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let response = handle_text_message(&text, &mut subs, &service).await;
                        if let Some(resp_json) = response
                            && ws_tx.send(Message::text(resp_json)).await.is_err() {
                                break;
                            }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
            event = event_rx.recv() => {
                match event {
                    Ok(event) => {
                        if subs.matches(event.warehouse()) {
                            let msg = WsMessage::reply(
                                uuid::Uuid::new_v4().to_string(),
                                WsMessageType::Event,
                                serde_json::to_value(&event).unwrap_or_default(),
                            );
                            let json = serde_json::to_string(&msg).unwrap_or_default();
                            if ws_tx.send(Message::text(json)).await.is_err() {
                                break;
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, "ws client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!("ws connection closed");
}

/// Handles a text message from the client, returning an optional JSON
/// response.
async fn handle_text_message(
    text: &str,
    subs: &mut SubscriptionManager,
    service: &WarehouseService,
) -> Option<String> {
    let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
        return serde_json::to_string(&WsMessage::error(String::new(), 400, "malformed JSON")).ok();
    };

    let Ok(command) = serde_json::from_value::<WsCommand>(msg.payload) else {
        return serde_json::to_string(&WsMessage::error(msg.id, 404, "unknown command")).ok();
    };

    let response = match command {
        WsCommand::Subscribe { warehouses } => {
            let (names, wildcard) = parse_targets(&warehouses);
            subs.subscribe(&names, wildcard);
            WsMessage::reply(
                msg.id,
                WsMessageType::Response,
                serde_json::json!({
                    "subscribed": names.iter().map(|n| n.as_str()).collect::<Vec<_>>(),
                    "count": subs.count(),
                    "wildcard": subs.is_subscribed_all(),
                }),
            )
        }
        WsCommand::Unsubscribe { warehouses } => {
            let (names, wildcard) = parse_targets(&warehouses);
            subs.unsubscribe(&names, wildcard);
            WsMessage::reply(
                msg.id,
                WsMessageType::Response,
                serde_json::json!({
                    "unsubscribed": names.iter().map(|n| n.as_str()).collect::<Vec<_>>(),
                    "remaining_count": subs.count(),
                    "wildcard": subs.is_subscribed_all(),
                }),
            )
        }
        WsCommand::GetState { warehouse } => match service.get_warehouse(&warehouse).await {
            Ok(summary) => WsMessage::reply(
                msg.id,
                WsMessageType::Response,
                serde_json::to_value(WarehouseDto::from(summary)).unwrap_or_default(),
            ),
            Err(err) => WsMessage::error(msg.id, err.error_code(), &err.to_string()),
        },
    };
    serde_json::to_string(&response).ok()
}
