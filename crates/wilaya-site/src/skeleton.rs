//! Index page skeleton
//!
//! The static markup the page script expects to find: navbar with in-page
//! anchors, hero stats, search field, empty card grid and footer stamp.
//! Sections get fixed layout boxes so anchor scrolling has somewhere to go.

use wilaya_dom::{DOMRect, Document, DomResult, NodeId};
use wilaya_page::PageConfig;

/// Hero stats: label, `data-target`, initial text
const STATS: &[(&str, Option<&str>, &str)] = &[
    ("Wilayas", Some("69"), "0"),
    ("Categories", Some("5"), "0"),
    ("Developers ranked", Some("2500"), "0"),
    ("Updated", None, "Weekly"),
];

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#wilayas", "Wilayas"),
    ("#about", "About"),
];

// Section heights, stacked top to bottom
const HOME_HEIGHT: f64 = 640.0;
const WILAYAS_HEIGHT: f64 = 2600.0;
const ABOUT_HEIGHT: f64 = 480.0;

/// Node handles of the built skeleton
#[derive(Debug, Clone, Copy)]
pub struct Skeleton {
    pub navbar: NodeId,
    pub search: NodeId,
    pub grid: NodeId,
    pub last_update: NodeId,
}

/// Build the index page skeleton into `doc`'s body
pub fn build_index(doc: &mut Document, config: &PageConfig) -> DomResult<Skeleton> {
    let body = doc.body();
    let head = doc.head();
    let title = doc.append_element(head, "title", &[])?;
    doc.set_text_content(title, "Algeria GitHub Rankings")?;

    let navbar = doc.append_element(body, "nav", &[("class", config.navbar_class.as_str())])?;
    for &(href, label) in NAV_LINKS {
        let link = doc.append_element(navbar, "a", &[("href", href), ("class", "nav-link")])?;
        doc.set_text_content(link, label)?;
    }

    let mut top = 0.0;
    let mut section = |doc: &mut Document, id: &str, height: f64| -> DomResult<NodeId> {
        let node = doc.append_element(body, "section", &[("id", id)])?;
        doc.set_rect(node, DOMRect::from_xywh(0.0, top, 1024.0, height))?;
        top += height;
        Ok(node)
    };
    let home = section(doc, "home", HOME_HEIGHT)?;
    let wilayas = section(doc, "wilayas", WILAYAS_HEIGHT)?;
    let about = section(doc, "about", ABOUT_HEIGHT)?;

    let stats = doc.append_element(home, "div", &[("class", "hero-stats")])?;
    for &(label, target, text) in STATS {
        let stat = doc.append_element(stats, "div", &[("class", "stat")])?;
        let value = doc.append_element(stat, "span", &[("class", config.stat_class.as_str())])?;
        if let Some(target) = target {
            doc.set_attribute(value, &config.stat_target_attr, target)?;
        }
        doc.set_text_content(value, text)?;
        let caption = doc.append_element(stat, "span", &[("class", "stat-label")])?;
        doc.set_text_content(caption, label)?;
    }

    let search = doc.append_element(
        wilayas,
        "input",
        &[
            ("type", "text"),
            ("id", config.search_id.as_str()),
            ("placeholder", "Search wilaya..."),
        ],
    )?;
    let grid = doc.append_element(wilayas, "div", &[("id", config.grid_id.as_str()), ("class", "wilayas-grid")])?;

    let about_text = doc.append_element(about, "p", &[])?;
    doc.set_text_content(about_text, "Rankings of GitHub developers across the 69 wilayas of Algeria.")?;

    let footer = doc.append_element(body, "footer", &[])?;
    let stamp = doc.append_element(footer, "p", &[])?;
    doc.set_text_content(stamp, "Last updated: ")?;
    let last_update = doc.append_element(stamp, "span", &[("id", config.last_update_id.as_str())])?;
    doc.set_text_content(last_update, "Loading...")?;

    Ok(Skeleton { navbar, search, grid, last_update })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_hooks() {
        let mut doc = Document::default();
        let config = PageConfig::default();
        let skeleton = build_index(&mut doc, &config).unwrap();

        assert_eq!(doc.get_element_by_id("wilayasGrid"), Some(skeleton.grid));
        assert_eq!(doc.get_element_by_id("wilayaSearch"), Some(skeleton.search));
        assert_eq!(doc.get_element_by_id("lastUpdate"), Some(skeleton.last_update));
        assert_eq!(doc.get_elements_by_class_name("navbar"), vec![skeleton.navbar]);
        assert_eq!(doc.get_elements_by_class_name("stat-value").len(), STATS.len());
    }

    #[test]
    fn test_sections_stack() {
        let mut doc = Document::default();
        build_index(&mut doc, &PageConfig::default()).unwrap();

        let about = doc.get_element_by_id("about").unwrap();
        assert_eq!(doc.element(about).unwrap().rect.top(), HOME_HEIGHT + WILAYAS_HEIGHT);
    }

    #[test]
    fn test_custom_ids() {
        let mut doc = Document::default();
        let config = PageConfig {
            grid_id: "grid".to_string(),
            ..PageConfig::default()
        };
        let skeleton = build_index(&mut doc, &config).unwrap();
        assert_eq!(doc.get_element_by_id("grid"), Some(skeleton.grid));
    }
}
