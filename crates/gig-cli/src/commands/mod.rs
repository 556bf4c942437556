pub mod client;
pub mod dispatch;
pub mod feedback;
pub mod job;
pub mod profile;
mod shared;
pub mod talent;
