//! Structured logging module for the sidebar navigation
//!
//! Provides consistent, contextual logging across the crate.
//! Uses tracing with structured fields keyed by operation.

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    NavRender,
    PageChange,
    NavToggle,
    ThemeDerivation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::NavRender => "nav_render",
            LogOperation::PageChange => "page_change",
            LogOperation::NavToggle => "nav_toggle",
            LogOperation::ThemeDerivation => "theme_derivation",
        }
    }
}

/// Log a nav render that produced no output (fewer than two pages)
pub fn log_nav_hidden(page_count: usize) {
    tracing::trace!(
        operation = LogOperation::NavRender.as_str(),
        page_count = page_count,
        "Sidebar nav hidden, not enough pages to navigate"
    );
}

/// Log a nav plan build
pub fn log_nav_render(link_count: usize, has_sidebar_elements: bool) {
    tracing::debug!(
        operation = LogOperation::NavRender.as_str(),
        link_count = link_count,
        has_sidebar_elements = has_sidebar_elements,
        "Built sidebar nav plan"
    );
}

/// Log a page change dispatch
pub fn log_page_change(target: &str) {
    tracing::debug!(
        operation = LogOperation::PageChange.as_str(),
        target = target,
        main_page = target.is_empty(),
        "Dispatching page change"
    );
}

/// Log an expand/collapse toggle
pub fn log_nav_toggle(expanded: bool) {
    tracing::debug!(
        operation = LogOperation::NavToggle.as_str(),
        expanded = expanded,
        "Toggled sidebar nav"
    );
}

/// Log a sidebar theme derivation
pub fn log_sidebar_theme(base_theme: &str) {
    tracing::debug!(
        operation = LogOperation::ThemeDerivation.as_str(),
        base_theme = base_theme,
        "Derived sidebar theme"
    );
}

/// Macro for creating structured log context
#[macro_export]
macro_rules! nav_context {
    ($pages:expr) => {
        tracing::debug_span!("sidebar_nav", page_count = $pages)
    };
    ($pages:expr, $expanded:expr) => {
        tracing::debug_span!("sidebar_nav", page_count = $pages, expanded = $expanded)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::NavRender.as_str(), "nav_render");
        assert_eq!(LogOperation::PageChange.as_str(), "page_change");
        assert_eq!(LogOperation::NavToggle.as_str(), "nav_toggle");
        assert_eq!(LogOperation::ThemeDerivation.as_str(), "theme_derivation");
    }
}
