use crate::services::classifier::ClassifierProvider;
use crate::services::knowledge::KnowledgeProvider;
use crate::services::scheduler::SchedulerProvider;
use crate::services::state_store::ConversationStore;

pub struct AppState {
    pub classifier: Box<dyn ClassifierProvider>,
    pub knowledge: Box<dyn KnowledgeProvider>,
    pub scheduler: Box<dyn SchedulerProvider>,
    pub conversations: Box<dyn ConversationStore>,
}
