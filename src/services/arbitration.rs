use crate::models::{ClassificationResult, KnowledgeAnswer};
use crate::services::knowledge::top_confidence;

/// Minimum knowledge-base confidence for an answer to win the turn.
pub const KNOWLEDGE_THRESHOLD: f64 = 0.25;

/// Minimum classifier confidence for an intent branch to fire.
pub const INTENT_THRESHOLD: f64 = 0.5;

pub const AVAILABILITY_INTENT: &str = "GetAvailability";
pub const SCHEDULE_INTENT: &str = "ScheduleAppointment";

/// What a turn should do, decided before any scheduler call is made.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Reply with a knowledge-base answer verbatim.
    Answer(String),
    ListAvailability,
    Book { date_time: String },
    /// Scheduling intent without a date: remember the slot and ask for one.
    AskForDate,
    Fallback,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Answer(_) => "answer",
            Decision::ListAvailability => "list_availability",
            Decision::Book { .. } => "book",
            Decision::AskForDate => "ask_for_date",
            Decision::Fallback => "fallback",
        }
    }
}

/// Precedence for an idle conversation: a confident knowledge answer first,
/// then the intent branches, then the fallback.
pub fn decide(classification: &ClassificationResult, answers: &[KnowledgeAnswer]) -> Decision {
    if top_confidence(answers) >= KNOWLEDGE_THRESHOLD {
        if let Some(top) = answers.first() {
            return Decision::Answer(top.answer.clone());
        }
    }

    if classification.is_none() || classification.score < INTENT_THRESHOLD {
        return Decision::Fallback;
    }

    match classification.top_intent.as_str() {
        AVAILABILITY_INTENT => Decision::ListAvailability,
        SCHEDULE_INTENT => match classification.datetime_entity() {
            Some(entity) => Decision::Book {
                date_time: entity.text.clone(),
            },
            None => Decision::AskForDate,
        },
        _ => Decision::Fallback,
    }
}
