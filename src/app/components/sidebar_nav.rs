use dioxus::prelude::*;

use crate::domain::models::PageDescriptor;
use crate::domain::services::navigation::{build_nav_plan, NavState};
use crate::shared::logging;

/// Collapsible navigation list for a multipage app.
///
/// Renders nothing until at least two pages exist. Link activation never
/// follows the anchor; the component intercepts it and reports the selection
/// through `on_page_change`: empty string for the main (first) page, the
/// original underscored page name for every other entry.
#[component]
pub fn SidebarNav(
    app_pages: Vec<PageDescriptor>,
    has_sidebar_elements: bool,
    on_page_change: EventHandler<String>,
) -> Element {
    let mut nav_state = use_signal(NavState::default);

    let Some(plan) = build_nav_plan(&app_pages, has_sidebar_elements, nav_state()) else {
        return rsx! {};
    };

    let items_class = if plan.expanded {
        "c-sidebar-nav__items c-sidebar-nav__items--expanded"
    } else {
        "c-sidebar-nav__items"
    };

    rsx! {
        nav { class: "c-sidebar-nav",
            ul { class: "{items_class}",
                for (label, target) in plan.links.into_iter().map(|link| (link.label, link.target)) {
                    li { class: "c-sidebar-nav__item",
                        a {
                            class: "c-sidebar-nav__link",
                            href: "#",
                            onclick: move |evt: Event<MouseData>| {
                                // Intercept first, then dispatch, in the same
                                // handler invocation.
                                evt.prevent_default();
                                logging::log_page_change(&target);
                                on_page_change.call(target.clone());
                            },
                            "{label}"
                        }
                    }
                }
            }
            if plan.show_separator {
                div {
                    class: "c-sidebar-nav__separator",
                    onclick: move |_| nav_state.write().toggle(),
                }
            }
        }
    }
}
