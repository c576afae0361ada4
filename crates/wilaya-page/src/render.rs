//! Wilaya card grid

use crate::catalog::Wilaya;
use crate::{DocumentView, PageConfig};
use tracing::{debug, trace};
use wilaya_dom::{DomResult, NodeId};

/// Replace the grid's content with one card per wilaya; returns the number
/// of cards shown.
///
/// A page without the grid container simply has nothing to render into.
pub fn render<V: DocumentView>(view: &mut V, config: &PageConfig, regions: &[&Wilaya]) -> usize {
    let Some(grid) = view.get_element_by_id(&config.grid_id) else {
        debug!(id = %config.grid_id, "no grid container; skipping render");
        return 0;
    };
    match fill_grid(view, grid, regions) {
        Ok(()) => {
            trace!(cards = regions.len(), "grid rendered");
            regions.len()
        }
        Err(err) => {
            debug!(%err, "grid render aborted");
            0
        }
    }
}

fn fill_grid<V: DocumentView>(view: &mut V, grid: NodeId, regions: &[&Wilaya]) -> DomResult<()> {
    view.clear_children(grid)?;
    for wilaya in regions {
        let card = render_card(view, wilaya)?;
        view.append_child(grid, card)?;
    }
    Ok(())
}

/// Build one detached card:
///
/// ```html
/// <a href="by-wilaya/wilaya_16.md" class="wilaya-card">
///     <div class="wilaya-code">16</div>
///     <div class="wilaya-name">Algiers</div>
///     <div class="wilaya-name-ar">الجزائر</div>
/// </a>
/// ```
pub fn render_card<V: DocumentView>(view: &mut V, wilaya: &Wilaya) -> DomResult<NodeId> {
    let card = view.create_element("a");
    view.set_attribute(card, "href", &wilaya.ranking_path())?;
    view.set_attribute(card, "class", "wilaya-card")?;

    let fields = [
        ("wilaya-code", wilaya.code),
        ("wilaya-name", wilaya.name_en),
        ("wilaya-name-ar", wilaya.name_ar),
    ];
    for (class, text) in fields {
        let div = view.create_element("div");
        view.set_attribute(div, "class", class)?;
        view.set_text_content(div, text)?;
        view.append_child(card, div)?;
    }
    Ok(card)
}
