//! CMC Documentation Page
//!
//! Interactive behaviors of the CMC design system documentation page, run
//! against a [`cmc_core::Document`]:
//!
//! - **Search**: filters the page's indexed sections as the user types
//! - **Copy**: code block and hex swatch copy buttons with a legacy fallback
//! - **Scroll spy**: highlights the sidebar link of the visible section
//! - **Mobile sidebar**: open and close controls
//! - **Code toggle**: show/hide for component example code
//! - **Hex codes**: turns `#RRGGBB` text into copy buttons
//!
//! # Example
//!
//! ```rust
//! use cmc_core::{Document, Event, ManualClock};
//! use cmc_docs::{DocsConfig, DocsPage, MemoryClipboard};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let p = doc.build("p").text("Primary is #0891B2").append_to(body);
//!
//! let clipboard = MemoryClipboard::new();
//! let clock = ManualClock::new();
//! let mut page = DocsPage::init(
//!     doc,
//!     Box::new(clipboard.clone()),
//!     Box::new(clock.clone()),
//!     DocsConfig::default(),
//! );
//!
//! let swatch = page.document().query_class("hex-code-btn")[0];
//! page.dispatch(Event::click(swatch));
//! assert_eq!(clipboard.contents().as_deref(), Some("#0891B2"));
//! assert_eq!(page.document().text_content(p), "Primary is Copied!");
//!
//! clock.advance(1500);
//! page.tick();
//! assert_eq!(page.document().text_content(p), "Primary is #0891B2");
//! ```

pub mod clipboard;
pub mod code_toggle;
pub mod config;
pub mod copy;
pub mod error;
pub mod hex;
pub mod page;
pub mod scroll_spy;
pub mod search;
pub mod sidebar;

pub use clipboard::{Clipboard, CopyOutcome, MemoryClipboard};
pub use config::{
    CodeToggleConfig, CopyConfig, DocsConfig, HexConfig, ScrollSpyConfig, SearchConfig,
    SidebarConfig,
};
pub use error::{ClipboardError, ConfigError};
pub use hex::{annotate, Segment};
pub use page::{DocsPage, InitReport, Task};
pub use scroll_spy::{IntersectionEntry, RootMargin, SectionRect};
pub use search::{SearchIndex, SearchOutcome, SearchableItem};
