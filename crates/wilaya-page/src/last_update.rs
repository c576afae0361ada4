//! "Last updated" stamp

use crate::{DocumentView, PageConfig};
use chrono::NaiveDate;
use tracing::debug;

/// en-US long date, e.g. `October 14, 2026`
pub fn format_last_update(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Write `date` into the last-update element; returns false when the page
/// has none
pub fn update_last_update<V: DocumentView>(view: &mut V, config: &PageConfig, date: NaiveDate) -> bool {
    let Some(node) = view.get_element_by_id(&config.last_update_id) else {
        return false;
    };
    match view.set_text_content(node, &format_last_update(date)) {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "last update stamp failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wilaya_dom::Document;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format() {
        assert_eq!(format_last_update(date(2026, 10, 14)), "October 14, 2026");
        assert_eq!(format_last_update(date(2025, 3, 1)), "March 1, 2025");
    }

    #[test]
    fn test_update() {
        let mut doc = Document::default();
        let body = doc.body();
        let span = doc.append_element(body, "span", &[("id", "lastUpdate")]).unwrap();
        doc.set_text_content(span, "Loading...").unwrap();

        assert!(update_last_update(&mut doc, &PageConfig::default(), date(2024, 12, 25)));
        assert_eq!(doc.text_content(span), "December 25, 2024");
    }

    #[test]
    fn test_missing_element() {
        let mut doc = Document::default();
        assert!(!update_last_update(&mut doc, &PageConfig::default(), date(2024, 1, 1)));
    }
}
