//! Search-as-you-type over the catalog

use crate::render::render;
use crate::{Catalog, DocumentView, PageConfig};
use std::rc::Rc;
use tracing::{debug, trace};
use wilaya_dom::{DomEvent, DomEventType};

/// Re-render the grid with the wilayas matching `query`; returns the
/// number of cards shown
pub fn on_search_input<V: DocumentView>(
    view: &mut V,
    config: &PageConfig,
    catalog: Catalog,
    query: &str,
) -> usize {
    let matches = catalog.filter(query);
    trace!(query, matches = matches.len(), "search");
    render(view, config, &matches)
}

/// Hook the search field's `input` event; returns false when the page has
/// no search field
pub fn setup_search<V: DocumentView>(view: &mut V, config: Rc<PageConfig>, catalog: Catalog) -> bool {
    let Some(input) = view.get_element_by_id(&config.search_id) else {
        debug!(id = %config.search_id, "no search field; search disabled");
        return false;
    };

    view.add_event_listener(
        input,
        DomEventType::Input,
        Box::new(move |view: &mut V, event: &mut DomEvent| {
            let query = view.input_value(event.target).unwrap_or_default();
            on_search_input(view, &config, catalog, &query);
        }),
    );
    true
}
