//! Headless page runs
//!
//! Builds the skeleton, boots the page script on `DOMContentLoaded`, replays
//! the requested interactions and drives the stat counters to completion.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info};
use wilaya_dom::Document;
use wilaya_page::{Clock, ManualClock, MonotonicClock, Page, PageConfig, Today};

use crate::skeleton::build_index;

/// Upper bound on counter ticks for one virtual-time run
const MAX_TICKS: usize = 100_000;

/// What to do with the page once it has loaded
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub query: Option<String>,
    pub scroll: Option<f64>,
    pub click: Option<String>,
    pub realtime: bool,
    pub date: Option<NaiveDate>,
}

/// Run the page and return the final document
pub fn run_page(config: PageConfig, options: &RunOptions) -> Result<Document> {
    let mut doc = Document::new("file:///index.html");
    build_index(&mut doc, &config).context("building page skeleton")?;
    let today = options.date.map_or(Today::Local, Today::Fixed);

    if options.realtime {
        let expected = animation_length(&config);
        let page = Page::new(config, MonotonicClock::new()).with_today(today);
        load_and_interact(&page, &mut doc, options)?;
        info!(?expected, "running counters on the wall clock");
        while let Some(wait) = page.time_until_next() {
            if !wait.is_zero() {
                thread::sleep(wait);
            }
            page.run_due(&mut doc);
        }
    } else {
        let page = Page::new(config, ManualClock::new()).with_today(today);
        load_and_interact(&page, &mut doc, options)?;
        let ticks = page.settle(&mut doc, MAX_TICKS);
        debug!(ticks, "counters settled on virtual time");
        if page.is_animating() {
            bail!("stat counters still running after {MAX_TICKS} ticks");
        }
    }

    Ok(doc)
}

fn load_and_interact<C: Clock + 'static>(
    page: &Page<Document, C>,
    doc: &mut Document,
    options: &RunOptions,
) -> Result<()> {
    page.install(doc);
    doc.finish_loading();
    info!(url = doc.url(), cards = doc.get_elements_by_class_name("wilaya-card").len(), "page loaded");

    if let Some(query) = &options.query {
        let search = doc
            .get_element_by_id(&page.config().search_id)
            .with_context(|| format!("no search field #{}", page.config().search_id))?;
        doc.input(search, query)?;
        info!(query = %query, shown = doc.get_elements_by_class_name("wilaya-card").len(), "searched");
    }

    if let Some(y) = options.scroll {
        doc.scroll_to(y);
    }

    if let Some(fragment) = &options.click {
        click_anchor(doc, fragment)?;
        // A smooth scroll lands immediately in a headless document
        debug!(scroll_y = doc.scroll_y(), "anchor clicked");
    }

    Ok(())
}

/// Click the first anchor whose `href` is `fragment` (leading `#` optional)
fn click_anchor(doc: &mut Document, fragment: &str) -> Result<()> {
    let href = if fragment.starts_with('#') {
        fragment.to_string()
    } else {
        format!("#{fragment}")
    };
    let anchor = doc
        .get_elements_by_tag_name("a")
        .into_iter()
        .find(|&a| doc.get_attribute(a, "href") == Some(href.as_str()))
        .with_context(|| format!("no anchor with href {href}"))?;
    doc.click(anchor);
    Ok(())
}

/// Virtual time a full run takes with `config`, for progress logging.
/// Saturates at `Duration::MAX`.
pub fn animation_length(config: &PageConfig) -> Duration {
    config
        .tick_interval()
        .checked_mul(config.animation_steps.saturating_add(1))
        .unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> RunOptions {
        RunOptions {
            date: NaiveDate::from_ymd_opt(2026, 10, 14),
            ..RunOptions::default()
        }
    }

    #[test]
    fn test_plain_run_settles_counters() {
        let doc = run_page(PageConfig::default(), &fixed()).unwrap();
        let values: Vec<String> = doc
            .get_elements_by_class_name("stat-value")
            .into_iter()
            .map(|n| doc.text_content(n))
            .collect();
        assert_eq!(values, vec!["69", "5", "2,500", "Weekly"]);
    }

    #[test]
    fn test_click_without_hash() {
        let options = RunOptions {
            click: Some("about".to_string()),
            ..fixed()
        };
        let doc = run_page(PageConfig::default(), &options).unwrap();
        assert_eq!(doc.scroll_y(), 3240.0);
    }

    #[test]
    fn test_unknown_anchor_is_an_error() {
        let options = RunOptions {
            click: Some("#nowhere".to_string()),
            ..fixed()
        };
        assert!(run_page(PageConfig::default(), &options).is_err());
    }

    #[test]
    fn test_animation_length() {
        assert_eq!(animation_length(&PageConfig::default()), Duration::from_millis(1530));
    }

    #[test]
    fn test_animation_length_saturates() {
        let config = PageConfig {
            tick_interval_ms: u64::MAX,
            animation_steps: u32::MAX,
            ..PageConfig::default()
        };
        assert_eq!(animation_length(&config), Duration::MAX);
    }
}
