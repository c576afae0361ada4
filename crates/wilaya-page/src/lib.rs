//! Wilaya rankings page
//!
//! The interactive layer of the Algeria GitHub rankings site: a card grid
//! of the 69 wilayas, search-as-you-type over it, counting stat displays,
//! a last-update stamp, smooth in-page anchors and a navbar shadow.
//!
//! Everything runs against a [`DocumentView`], implemented here for the
//! headless [`wilaya_dom::Document`].
//!
//! # Example
//! ```rust,ignore
//! use wilaya_page::{ManualClock, Page, PageConfig};
//! use wilaya_dom::Document;
//!
//! let mut doc = Document::default();
//! let page = Page::new(PageConfig::default(), ManualClock::new());
//! page.install(&mut doc);
//! doc.finish_loading();
//! page.settle(&mut doc, 10_000);
//! ```

mod catalog;
mod config;
pub mod cosmetics;
pub mod format;
pub mod last_update;
mod page;
pub mod render;
pub mod search;
pub mod stats;
pub mod timers;
mod view;

pub use catalog::{Catalog, Wilaya};
pub use config::{ConfigError, PageConfig};
pub use page::{Page, StartupReport, Today};
pub use stats::{StatCounter, StatTick};
pub use timers::{Clock, ManualClock, MonotonicClock, TimerControl, TimerId, Timers};
pub use view::{DocumentView, Handler};
