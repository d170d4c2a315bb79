mod agent;
mod call;

pub use agent::Agent;
pub use call::{Call, ChatMessage, Satisfaction, Speaker};
