use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Utterance;
use crate::services::conversation;
use crate::state::AppState;

#[derive(Deserialize, Default)]
pub struct ConversationRef {
    #[serde(default)]
    pub id: String,
}

#[derive(Deserialize, Default)]
pub struct Participant {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
}

/// Inbound message activity from the messaging channel.
#[derive(Deserialize)]
pub struct InboundActivity {
    #[serde(default)]
    pub conversation: ConversationRef,
    pub id: Option<String>,
    #[serde(default)]
    pub from: Participant,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct OutboundReply {
    pub conversation_id: String,
    pub reply: Option<String>,
}

impl InboundActivity {
    fn into_utterance(self) -> Result<Utterance, AppError> {
        let conversation_id = self.conversation.id.trim().to_string();
        if conversation_id.is_empty() {
            return Err(AppError::BadRequest("conversation id is required".to_string()));
        }

        Ok(Utterance {
            conversation_id,
            message_id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            sender_id: self.from.id,
            sender_name: self.from.name,
            text: self.text.unwrap_or_default(),
        })
    }
}

// POST /api/messages
pub async fn receive_message(
    State(state): State<Arc<AppState>>,
    Json(activity): Json<InboundActivity>,
) -> Result<Json<OutboundReply>, AppError> {
    let utterance = activity.into_utterance()?;

    tracing::info!(
        conversation = %utterance.conversation_id,
        message = %utterance.message_id,
        "incoming message"
    );

    let reply = conversation::process_message(&state, &utterance).await;

    Ok(Json(OutboundReply {
        conversation_id: utterance.conversation_id,
        reply,
    }))
}
