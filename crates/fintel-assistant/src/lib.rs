//! # fintel-assistant
//!
//! A chat panel that answers franchise questions from a fixed set of
//! replies picked by keyword. There is no model and no network access.

pub mod panel;
pub mod replies;

pub use panel::{AssistantPanel, ChatMessage, PendingReply, Role};
pub use replies::respond;
