pub mod arbitration;
pub mod classifier;
pub mod conversation;
pub mod knowledge;
pub mod scheduler;
pub mod state_store;
