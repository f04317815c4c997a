//! Event routing
//!
//! Events target a node and bubble through its ancestors. Handlers are plain
//! data (`H: Copy`), so the owner of the document decides what a handler does
//! and no closure ever has to borrow the document it mutates.

use crate::dom::{Document, NodeId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const CLICK: EventType = 1;
    pub const BLUR: EventType = 11;
    pub const KEY_DOWN: EventType = 20;
    /// Value of an input element changed
    pub const INPUT: EventType = 22;
}

/// A page event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
    pub data: EventData,
    pub default_prevented: bool,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Key { key: KeyCode, modifiers: Modifiers },
    /// Current value of the input element
    Input {
        value: String,
    },
    None,
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const K: KeyCode = KeyCode(0x4B);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000; // Cmd on macOS, Win on Windows

    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }

    /// Ctrl or Meta, whichever the platform uses for shortcuts
    pub const fn command_like(&self) -> bool {
        self.ctrl() || self.meta()
    }
}

impl Event {
    pub fn new(event_type: EventType, target: NodeId, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            default_prevented: false,
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(event_types::CLICK, target, EventData::None)
    }

    pub fn input(target: NodeId, value: &str) -> Self {
        Self::new(
            event_types::INPUT,
            target,
            EventData::Input {
                value: value.to_string(),
            },
        )
    }

    pub fn blur(target: NodeId) -> Self {
        Self::new(event_types::BLUR, target, EventData::None)
    }

    pub fn key_down(target: NodeId, key: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(
            event_types::KEY_DOWN,
            target,
            EventData::Key { key, modifiers },
        )
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn key(&self) -> Option<(KeyCode, Modifiers)> {
        match self.data {
            EventData::Key { key, modifiers } => Some((key, modifiers)),
            _ => None,
        }
    }
}

/// Where a routed handler was registered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listener {
    /// On a node in the target's ancestor chain
    Node(NodeId),
    /// On the document itself
    Document,
}

/// Maps (node, event type) pairs to handler tags
pub struct EventDispatcher<H> {
    handlers: FxHashMap<(NodeId, EventType), SmallVec<[H; 2]>>,
    document_handlers: FxHashMap<EventType, SmallVec<[H; 2]>>,
}

impl<H: Copy> EventDispatcher<H> {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
            document_handlers: FxHashMap::default(),
        }
    }

    /// Register a handler for a node and event type
    pub fn register(&mut self, node: NodeId, event_type: EventType, handler: H) {
        self.handlers
            .entry((node, event_type))
            .or_default()
            .push(handler);
    }

    /// Register a handler that sees every event of a type after bubbling
    pub fn register_document(&mut self, event_type: EventType, handler: H) {
        self.document_handlers
            .entry(event_type)
            .or_default()
            .push(handler);
    }

    /// Handlers for an event in bubbling order: target, its ancestors, then the document
    pub fn route(&self, doc: &Document, event: &Event) -> SmallVec<[(Listener, H); 4]> {
        let mut out = SmallVec::new();
        let mut current = Some(event.target);
        while let Some(node) = current {
            if let Some(handlers) = self.handlers.get(&(node, event.event_type)) {
                out.extend(handlers.iter().map(|&h| (Listener::Node(node), h)));
            }
            current = doc.parent(node);
        }
        if let Some(handlers) = self.document_handlers.get(&event.event_type) {
            out.extend(handlers.iter().map(|&h| (Listener::Document, h)));
        }
        out
    }

    pub fn len(&self) -> usize {
        self.handlers.values().map(SmallVec::len).sum::<usize>()
            + self
                .document_handlers
                .values()
                .map(SmallVec::len)
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: Copy> Default for EventDispatcher<H> {
    fn default() -> Self {
        Self::new()
    }
}
