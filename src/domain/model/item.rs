use serde::Serialize;

/// Display data for an item from the item metadata service
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemMeta {
    pub id: u32,
    pub name: String,
    /// Icon path relative to the item-data host, e.g. `/i/020000/020001.png`
    pub icon: Option<String>,
}

impl ItemMeta {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: None,
        }
    }

    /// Absolute icon URL, falling back to `placeholder` when the item has no icon
    pub fn icon_url(&self, base_url: &str, placeholder: &str) -> String {
        let path = self
            .icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
            .unwrap_or(placeholder);

        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
