//! Scroll cosmetics: smooth in-page anchors and the navbar shadow

use crate::{DocumentView, PageConfig};
use tracing::debug;
use wilaya_dom::{DomEvent, DomEventType, ScrollIntoViewOptions};

/// `box-shadow` value for the navbar at vertical offset `scroll_y`
pub fn navbar_shadow(scroll_y: f64, config: &PageConfig) -> &str {
    if scroll_y > config.shadow_threshold {
        &config.navbar_shadow
    } else {
        "none"
    }
}

/// Make every `<a href="#...">` scroll smoothly to its target instead of
/// jumping. Returns the number of anchors hooked.
pub fn setup_smooth_scroll<V: DocumentView>(view: &mut V) -> usize {
    let anchors: Vec<_> = view
        .elements_by_tag_name("a")
        .into_iter()
        .filter(|&a| view.get_attribute(a, "href").is_some_and(|href| href.starts_with('#')))
        .collect();

    for &anchor in &anchors {
        view.add_event_listener(
            anchor,
            DomEventType::Click,
            Box::new(move |view: &mut V, event: &mut DomEvent| {
                event.prevent_default();
                let href = view.get_attribute(anchor, "href").unwrap_or_default();
                let fragment = href.strip_prefix('#').unwrap_or(href.as_str());
                if fragment.is_empty() {
                    return;
                }
                let Some(target) = view.get_element_by_id(fragment) else {
                    debug!(fragment, "anchor target missing");
                    return;
                };
                if let Err(err) = view.scroll_into_view(target, ScrollIntoViewOptions::smooth_start()) {
                    debug!(%err, "smooth scroll failed");
                }
            }),
        );
    }
    anchors.len()
}

/// Toggle the navbar shadow from the window scroll offset; returns false
/// when the page has no navbar
pub fn setup_navbar_scroll<V: DocumentView>(view: &mut V, config: &PageConfig) -> bool {
    let Some(navbar) = view.elements_by_class_name(&config.navbar_class).into_iter().next() else {
        debug!(class = %config.navbar_class, "no navbar; shadow toggle disabled");
        return false;
    };

    let config = config.clone();
    let window = view.window();
    view.add_event_listener(
        window,
        DomEventType::Scroll,
        Box::new(move |view: &mut V, _: &mut DomEvent| {
            let value = navbar_shadow(view.scroll_y(), &config);
            if let Err(err) = view.set_style_property(navbar, "box-shadow", value) {
                debug!(%err, "navbar shadow update failed");
            }
        }),
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use wilaya_dom::{DOMRect, Document, ScrollBehavior};

    #[test]
    fn test_navbar_shadow_threshold() {
        let config = PageConfig::default();
        assert_eq!(navbar_shadow(0.0, &config), "none");
        assert_eq!(navbar_shadow(100.0, &config), "none");
        assert_eq!(navbar_shadow(100.5, &config), "0 2px 10px rgba(0,0,0,0.1)");
    }

    #[test]
    fn test_navbar_follows_scroll() {
        let mut doc = Document::default();
        let body = doc.body();
        let nav = doc.append_element(body, "nav", &[("class", "navbar")]).unwrap();
        assert!(setup_navbar_scroll(&mut doc, &PageConfig::default()));

        doc.scroll_to(250.0);
        assert_eq!(doc.style_property(nav, "box-shadow"), Some("0 2px 10px rgba(0,0,0,0.1)"));

        doc.scroll_to(40.0);
        assert_eq!(doc.style_property(nav, "box-shadow"), Some("none"));
    }

    #[test]
    fn test_no_navbar() {
        let mut doc = Document::default();
        assert!(!setup_navbar_scroll(&mut doc, &PageConfig::default()));
        doc.scroll_to(500.0);
    }

    #[test]
    fn test_smooth_scroll_to_anchor() {
        let mut doc = Document::default();
        let body = doc.body();
        let link = doc.append_element(body, "a", &[("href", "#wilayas")]).unwrap();
        let external = doc.append_element(body, "a", &[("href", "national/README.md")]).unwrap();
        let section = doc.append_element(body, "section", &[("id", "wilayas")]).unwrap();
        doc.set_rect(section, DOMRect::from_xywh(0.0, 640.0, 1024.0, 900.0)).unwrap();

        assert_eq!(setup_smooth_scroll(&mut doc), 1);

        assert!(!doc.click(link));
        assert_eq!(doc.scroll_y(), 640.0);
        assert_eq!(doc.last_scroll_behavior(), Some(ScrollBehavior::Smooth));
        assert_eq!(doc.location_hash(), "");

        assert!(doc.click(external));
    }

    #[test]
    fn test_anchor_without_target() {
        let mut doc = Document::default();
        let body = doc.body();
        let bare = doc.append_element(body, "a", &[("href", "#")]).unwrap();
        let dangling = doc.append_element(body, "a", &[("href", "#nowhere")]).unwrap();

        assert_eq!(setup_smooth_scroll(&mut doc), 2);
        assert!(!doc.click(bare));
        assert!(!doc.click(dangling));
        assert_eq!(doc.scroll_y(), 0.0);
    }
}
