//! Listener side: the message log, display regions, and the handler that
//! ties them together.
//!
//! Everything here is owned by one [`MessageListener`];
//! the transport lives in [`crate::client`].

pub mod display;
pub mod message_listener;
pub mod message_log;

pub use display::{DisplayRegion, FileRegion, MemoryRegion, StdoutRegion, render_paragraphs};
pub use message_listener::MessageListener;
pub use message_log::MessageLog;
