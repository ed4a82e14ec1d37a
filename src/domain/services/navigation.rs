//! Sidebar navigation planning
//! Builds the rendered link list from the app's page sequence and owns the
//! expand/collapse state machine.
//!
//! The plan is pure data: the component layer maps it to markup and feeds user
//! events back through `NavState::toggle` and the per-link dispatch target.
//! Keeping the decision logic here, out of the component, makes every rule
//! testable without a renderer.

use crate::domain::models::PageDescriptor;
use crate::shared::logging;

/// Ephemeral state owned by the sidebar nav. Re-created on every mount, never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub expanded: bool,
}

impl NavState {
    /// The single mutation the nav performs: flip collapsed <-> expanded.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        logging::log_nav_toggle(self.expanded);
    }
}

/// One entry of the rendered link list.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    /// Display label, underscores already replaced by spaces.
    pub label: String,
    /// Dispatch target: empty string for the main page, the original
    /// (underscored) page name for every other entry.
    pub target: String,
    /// Backing resource of the page, surfaced unchanged for collaborators.
    pub script_path: Option<String>,
}

/// Render description for one frame of the sidebar nav.
#[derive(Debug, Clone, PartialEq)]
pub struct NavPlan {
    pub links: Vec<NavLink>,
    pub show_separator: bool,
    pub expanded: bool,
}

/// Build the render plan for the current inputs and state.
///
/// Returns `None` when the page sequence has fewer than two entries: with zero
/// or one destinations there is nothing to navigate, so the component renders
/// nothing at all (this is the normal situation before the app's page set is
/// known).
///
/// The separator doubles as the expand/collapse control and is only rendered
/// when the caller has other sidebar content below the nav; without it the
/// toggle is unreachable and the list stays at its collapsed bound.
pub fn build_nav_plan(
    pages: &[PageDescriptor],
    has_sidebar_elements: bool,
    state: NavState,
) -> Option<NavPlan> {
    let _span = crate::nav_context!(pages.len(), state.expanded).entered();

    if pages.len() < 2 {
        logging::log_nav_hidden(pages.len());
        return None;
    }

    let links = pages
        .iter()
        .enumerate()
        .map(|(index, page)| NavLink {
            label: page.display_name(),
            // The first entry is the main page: selecting it always signals
            // "no specific page" rather than its own name.
            target: if index == 0 {
                String::new()
            } else {
                page.page_name.clone()
            },
            script_path: page.script_path.clone(),
        })
        .collect::<Vec<_>>();

    logging::log_nav_render(links.len(), has_sidebar_elements);

    Some(NavPlan {
        links,
        show_separator: has_sidebar_elements,
        expanded: state.expanded,
    })
}
