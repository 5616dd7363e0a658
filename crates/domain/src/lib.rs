mod date;
mod event;
mod shared;

pub use date::parse_wire_date;
pub use event::{CalendarEvent, CalendarEventPatch};
pub use shared::entity::Entity;
