//! Live profile feeds over WebSocket.
//!
//! `/ws/profiles/:user_id` streams one document, `/ws/profiles` streams the
//! public directory. Each socket owns a store [`Subscription`]; closing the
//! socket drops it. Frames go through a `watch` channel, so a slow client
//! only ever has the newest snapshot waiting for it.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::watch;

use crate::error::ApiError;
use crate::models::{DirectoryEntry, Profile, UserId};
use crate::services::Subscription;
use crate::AppState;

pub async fn profile_socket(
    ws: WebSocketUpgrade,
    Path(user_id): Path<UserId>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let (tx, rx) = watch::channel(None);
    let path = state.profiles.document_path(&user_id);
    let id = user_id.clone();

    let subscription = state
        .profiles
        .subscribe_profile(&user_id, move |profile| {
            tx.send_replace(Some(profile_message(&id, &path, profile.as_ref())));
        })
        .await?;

    tracing::info!("WebSocket subscribed to profile {}", user_id);
    Ok(ws.on_upgrade(move |socket| forward(socket, rx, subscription)))
}

pub async fn directory_socket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let (tx, rx) = watch::channel(None);

    let subscription = state
        .profiles
        .subscribe_public_profiles(move |profiles| {
            tx.send_replace(Some(directory_message(&profiles)));
        })
        .await?;

    tracing::info!("WebSocket subscribed to public directory");
    Ok(ws.on_upgrade(move |socket| forward(socket, rx, subscription)))
}

pub fn profile_message(user_id: &str, path: &str, profile: Option<&Profile>) -> String {
    serde_json::json!({
        "type": "profile",
        "id": user_id,
        "path": path,
        "profile": profile,
    })
    .to_string()
}

pub fn directory_message(profiles: &[DirectoryEntry]) -> String {
    serde_json::json!({
        "type": "directory",
        "profiles": profiles,
    })
    .to_string()
}

async fn forward(
    socket: WebSocket,
    mut updates: watch::Receiver<Option<String>>,
    subscription: Subscription,
) {
    let (mut sender, mut receiver) = socket.split();

    // Store snapshots -> client; ends once the subscription drops its sender
    let mut send_task = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let latest = updates.borrow_and_update().clone();
            let Some(msg) = latest else { continue };
            if sender.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
        let _ = sender.send(Message::Close(None)).await;
    });

    // Client -> nothing; we only watch for the close frame
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    subscription.unsubscribe();
    tracing::debug!("WebSocket closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn profile_message_uses_null_for_missing_document() {
        let msg: Value = serde_json::from_str(&profile_message("u1", "artifacts/a/public/data/users/u1", None)).unwrap();
        assert_eq!(
            msg,
            json!({
                "type": "profile",
                "id": "u1",
                "path": "artifacts/a/public/data/users/u1",
                "profile": null
            })
        );
    }

    #[test]
    fn directory_message_wraps_entries() {
        let entries = vec![DirectoryEntry {
            id: "u1".into(),
            profile: Profile {
                name: Some("Ann".into()),
                is_public: Some(true),
                ..Default::default()
            },
        }];
        let msg: Value = serde_json::from_str(&directory_message(&entries)).unwrap();
        assert_eq!(msg["type"], "directory");
        assert_eq!(msg["profiles"][0]["name"], "Ann");
        assert_eq!(msg["profiles"][0]["id"], "u1");
    }
}
