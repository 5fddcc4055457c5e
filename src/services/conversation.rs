use crate::models::{SchedulingRequest, Utterance};
use crate::services::arbitration::{decide, Decision};
use crate::services::classifier::classify;
use crate::services::knowledge::{ask, top_confidence};
use crate::state::AppState;

pub const BOOKED_PREFIX: &str = "✅ Your appointment is booked for";
pub const BOOKING_FAILED: &str = "Sorry, I could not book that appointment right now.";
pub const AVAILABILITY_FAILED: &str = "Sorry, I could not retrieve availability right now.";
pub const ASK_FOR_DATE: &str = "Sure — for what date and time?";
pub const FALLBACK: &str = "Sorry, I don't have that information yet.";

/// Answers requested from the knowledge base per turn.
const KNOWLEDGE_TOP: usize = 1;

/// Run one turn and produce its single reply. Returns `None` only for an
/// empty or whitespace-only utterance, which is ignored entirely.
pub async fn process_message(state: &AppState, utterance: &Utterance) -> Option<String> {
    let text = utterance.content()?;
    let conversation_id = utterance.conversation_id.as_str();

    // A pending slot consumes this utterance as the date/time, whatever it says.
    if state.conversations.clear_awaiting_date(conversation_id) {
        tracing::info!(conversation = conversation_id, "consuming pending date/time slot");
        let decision = Decision::Book {
            date_time: text.to_string(),
        };
        return Some(execute(state, utterance, decision).await);
    }

    let (classification, answers) = tokio::join!(
        classify(state.classifier.as_ref(), utterance),
        ask(state.knowledge.as_ref(), text, KNOWLEDGE_TOP),
    );

    let decision = decide(&classification, &answers);

    tracing::info!(
        conversation = conversation_id,
        text,
        intent = %classification.top_intent,
        intent_score = classification.score,
        knowledge_score = top_confidence(&answers),
        decision = decision.as_str(),
        "routing message"
    );

    Some(execute(state, utterance, decision).await)
}

async fn execute(state: &AppState, utterance: &Utterance, decision: Decision) -> String {
    match decision {
        Decision::Answer(answer) => answer,
        Decision::ListAvailability => match state.scheduler.availability().await {
            Ok(slots) => format!("These time slots are available: {}", slots.join(", ")),
            Err(e) => {
                tracing::error!(error = %e, "availability lookup failed");
                AVAILABILITY_FAILED.to_string()
            }
        },
        Decision::Book { date_time } => {
            let request = SchedulingRequest::new(&date_time, utterance.sender_name.as_deref());
            match state.scheduler.book(&request).await {
                Ok(booking) => format!("{BOOKED_PREFIX} **{}**.", booking.date_time),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        conversation = %utterance.conversation_id,
                        "booking failed"
                    );
                    BOOKING_FAILED.to_string()
                }
            }
        }
        Decision::AskForDate => {
            state.conversations.set_awaiting_date(&utterance.conversation_id);
            ASK_FOR_DATE.to_string()
        }
        Decision::Fallback => FALLBACK.to_string(),
    }
}
