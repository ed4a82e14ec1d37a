use serde::{Deserialize, Serialize};

/// One navigable page of a multipage app.
///
/// The parent container owns the ordered page list and passes it into the
/// sidebar on every render. `script_path` identifies the backing resource and
/// may be absent while the app's page set is still being resolved; nothing in
/// the navigation logic depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub page_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_path: Option<String>,
}

impl PageDescriptor {
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            script_path: None,
        }
    }

    pub fn with_script_path(page_name: impl Into<String>, script_path: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            script_path: Some(script_path.into()),
        }
    }

    /// Label shown in the sidebar: every underscore becomes a single space.
    /// The original `page_name` is kept intact for dispatch.
    pub fn display_name(&self) -> String {
        self.page_name.replace('_', " ")
    }
}
