//! Assistant sidebar model: transcript, request bookkeeping, and action dispatch planning.
//!
//! The reactive sidebar in [`crate::components`] and the async jobs in `host::assistant_jobs`
//! drive an [`AssistantSession`]; everything here is plain data so it can be tested without a
//! reactive runtime.

pub mod dispatch;
pub mod session;
pub mod transcript;

pub use dispatch::{plan_action, ActionPlan};
pub use session::{AssistantSession, SendStep};
pub use transcript::{
    image_reference, image_reference_url, ChatMessage, MessageBody, Notice, Transcript,
};
