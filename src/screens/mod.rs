//! Screen controllers for the list, create and edit flows.
//!
//! Each screen owns its state (loaded rows, or a draft plus field errors) and
//! talks to the product actor through a [`ProductClient`](crate::clients::ProductClient).
//! Rendering and navigation belong to the caller.

mod create;
mod edit;
mod list;

pub use create::CreateScreen;
pub use edit::EditScreen;
pub use list::{Decision, DeleteOutcome, DeletePrompt, ListScreen};
