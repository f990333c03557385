pub mod event;
pub mod seed;

pub use event::{EventId, EventPatch, EventRecord, NewEvent};
pub use seed::seed_events;
