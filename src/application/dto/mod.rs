//! Data transfer objects for the application layer.

mod page_event;

pub use page_event::PageEvent;
