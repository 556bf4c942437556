mod client;
mod feedback;
mod job;
mod talent;

pub use client::ClientCommands;
pub use feedback::FeedbackCommands;
pub use job::JobCommands;
pub use talent::TalentCommands;
