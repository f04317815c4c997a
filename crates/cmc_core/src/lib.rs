//! CMC Core Runtime
//!
//! This crate provides the primitives the documentation page layer runs on:
//!
//! - **Document**: An arena of element and text nodes standing in for a rendered page
//! - **Event Routing**: Click, input, focus and key events bubbled through the document
//! - **Timers**: A deadline scheduler driven by an injectable clock
//!
//! # Example
//!
//! ```rust
//! use cmc_core::dom::Document;
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let button = doc.build("button").id("save").class("copy-btn").text("Copy").append_to(body);
//!
//! assert_eq!(doc.get_element_by_id("save"), Some(button));
//! assert_eq!(doc.text_content(button), "Copy");
//! ```

pub mod dom;
pub mod events;
pub mod scheduler;

pub use dom::{Document, ElementBuilder, NodeId};
pub use events::{
    event_types, Event, EventData, EventDispatcher, EventType, KeyCode, Listener, Modifiers,
};
pub use scheduler::{Clock, ManualClock, SystemClock, TimerId, TimerScheduler};
