pub mod diagnostic;
pub mod event;
pub mod job;

pub use diagnostic::Diagnostic;
pub use event::{Action, Event};
pub use job::{Job, JobId, JobMap};
