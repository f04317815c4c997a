//! Clipboard access with a legacy fallback
//!
//! Copying first tries [`Clipboard::write_text`]. When that fails, a
//! temporary `textarea` is added to the document, its contents selected and
//! handed to [`Clipboard::exec_copy`], then removed again. Either way the
//! control that triggered the copy shows an acknowledgment label that is put
//! back by a timer.

use std::cell::RefCell;
use std::rc::Rc;

use cmc_core::{Document, NodeId, TimerScheduler};
use smallvec::SmallVec;

use crate::error::ClipboardError;
use crate::page::Task;

/// System clipboard capability
pub trait Clipboard {
    /// Primary path: write text directly
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Legacy path: copy the current selection. Returns whether it copied.
    fn exec_copy(&mut self, selection: &str) -> bool;
}

/// Which path a copy took
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback { copied: bool },
}

/// Copy `text`, falling back to a selected temporary field
pub fn copy_text(doc: &mut Document, clipboard: &mut dyn Clipboard, text: &str) -> CopyOutcome {
    match clipboard.write_text(text) {
        Ok(()) => CopyOutcome::Primary,
        Err(err) => {
            tracing::debug!(%err, "clipboard write failed, using legacy copy");
            let body = doc.body();
            let field = doc
                .build("textarea")
                .attr("value", text)
                .style("position", "fixed")
                .style("left", "-9999px")
                .append_to(body);
            doc.select(field);
            let selection = doc.selected_text().unwrap_or_default();
            let copied = clipboard.exec_copy(&selection);
            doc.remove(field);
            if !copied {
                tracing::debug!("legacy copy failed");
            }
            CopyOutcome::Fallback { copied }
        }
    }
}

/// How a control acknowledges a copy
pub struct CopyFeedback<'a> {
    pub ack_label: &'a str,
    /// Inline styles applied on a primary-path copy
    pub accent: &'a [(&'a str, &'a str)],
    /// Label restored after a fallback copy
    pub fallback_label: &'a str,
    pub revert_ms: u64,
}

/// Swap the control's label and schedule the revert
pub fn acknowledge(
    doc: &mut Document,
    timers: &mut TimerScheduler<Task>,
    control: NodeId,
    outcome: CopyOutcome,
    feedback: &CopyFeedback<'_>,
) {
    let task = match outcome {
        CopyOutcome::Primary => {
            let label = doc.text_content(control);
            for &(property, value) in feedback.accent {
                doc.set_style(control, property, value);
            }
            Task::RestoreControl {
                node: control,
                label,
                clear_styles: feedback
                    .accent
                    .iter()
                    .map(|(property, _)| property.to_string())
                    .collect(),
            }
        }
        CopyOutcome::Fallback { .. } => Task::RestoreControl {
            node: control,
            label: feedback.fallback_label.to_string(),
            clear_styles: SmallVec::new(),
        },
    };
    doc.set_text_content(control, feedback.ack_label);
    timers.schedule(feedback.revert_ms, task);
}

#[derive(Debug)]
struct ClipboardState {
    contents: Option<String>,
    primary_available: bool,
    legacy_available: bool,
    primary_writes: usize,
    legacy_copies: usize,
}

/// In-memory clipboard. Clones share the same contents.
#[derive(Clone, Debug)]
pub struct MemoryClipboard {
    state: Rc<RefCell<ClipboardState>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ClipboardState {
                contents: None,
                primary_available: true,
                legacy_available: true,
                primary_writes: 0,
                legacy_copies: 0,
            })),
        }
    }

    /// Clipboard whose primary path always fails
    pub fn legacy_only() -> Self {
        let clipboard = Self::new();
        clipboard.set_primary_available(false);
        clipboard
    }

    pub fn set_primary_available(&self, available: bool) {
        self.state.borrow_mut().primary_available = available;
    }

    pub fn set_legacy_available(&self, available: bool) {
        self.state.borrow_mut().legacy_available = available;
    }

    pub fn contents(&self) -> Option<String> {
        self.state.borrow().contents.clone()
    }

    pub fn primary_writes(&self) -> usize {
        self.state.borrow().primary_writes
    }

    pub fn legacy_copies(&self) -> usize {
        self.state.borrow().legacy_copies
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self.state.borrow_mut();
        if !state.primary_available {
            return Err(ClipboardError::Unavailable);
        }
        state.contents = Some(text.to_string());
        state.primary_writes += 1;
        Ok(())
    }

    fn exec_copy(&mut self, selection: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.legacy_available {
            return false;
        }
        state.contents = Some(selection.to_string());
        state.legacy_copies += 1;
        true
    }
}
