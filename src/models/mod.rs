pub mod classification;
pub mod knowledge;
pub mod scheduling;
pub mod utterance;

pub use classification::{ClassificationResult, Entity, DATETIME_CATEGORIES, NONE_INTENT};
pub use knowledge::KnowledgeAnswer;
pub use scheduling::{SchedulingRequest, SchedulingResponse, DEFAULT_PATIENT_NAME};
pub use utterance::Utterance;
