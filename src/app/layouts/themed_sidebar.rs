use dioxus::prelude::*;

use crate::app::components::SidebarNav;
use crate::domain::models::PageDescriptor;
use crate::shared::theme::{create_sidebar_theme, ThemeConfig};

/// Sidebar container with its own derived theme.
///
/// The caller resolves the ambient theme once and passes it in; the sidebar
/// variant (backgrounds swapped, marked for sidebar use) is derived here and
/// applied to the subtree via CSS variables, together with the chevron
/// downshift from the layout.
#[component]
pub fn ThemedSidebar(
    theme: ThemeConfig,
    chevron_downshift: f64,
    app_pages: Vec<PageDescriptor>,
    has_sidebar_elements: bool,
    on_page_change: EventHandler<String>,
    children: Element,
) -> Element {
    let sidebar_theme = create_sidebar_theme(&theme);

    let background = sidebar_theme.background_color.to_hex();
    let secondary = sidebar_theme.secondary_background_color.to_hex();
    let text = sidebar_theme.text_color.to_hex();
    let style = format!(
        "--background: {background}; \
         --secondary-background: {secondary}; \
         --text-color: {text}; \
         --chevron-downshift: {chevron_downshift}px;"
    );

    rsx! {
        aside { class: "c-sidebar", style: "{style}",
            SidebarNav {
                app_pages,
                has_sidebar_elements,
                on_page_change: move |page_name| on_page_change.call(page_name),
            }
            div { class: "c-sidebar__content", {children} }
        }
    }
}
