/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the backend layer and the UI layer.
use chrono::{DateTime, Utc};

/// A portfolio entry as displayed in the gallery.
///
/// Fetched wholesale from the hosted backend; never patched in place. A new
/// fetch replaces the whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Opaque backend id, unique within one fetched list
    pub id: String,
    /// Display title (e.g., "Cocina minimalista en L")
    pub title: String,
    /// Longer display text shown in the detail view
    pub description: String,
    /// Public image URL on the image host, if one was uploaded
    pub image_url: Option<String>,
    /// Backend id of the category this project belongs to
    pub category_id: Option<String>,
    /// Resolved category name; `None` when the reference is dangling
    pub category_name: Option<String>,
    /// Creation timestamp from the backend (newest first ordering)
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Display label for the category badge, with the defensive fallback
    /// for dangling or missing references.
    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or("Sin categoría")
    }
}

/// A named grouping key for portfolio entries
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// A material swatch from the built-in catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: &'static str,
    /// Folder acts as the swatch's category key
    pub folder: &'static str,
    /// Manufacturer reference code (e.g., "JC007")
    pub reference: &'static str,
    /// Available finishes ("MT", "HG" or both)
    pub finish: &'static str,
}

/// How a gallery section presents its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Continuously scrolling, seamlessly wrapping strip
    #[default]
    Carousel,
    /// Static wrapped grid, no animation
    Grid,
}

/// The currently selected category subset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterKey {
    /// Sentinel: no filtering, every item shown
    #[default]
    All,
    /// Only items whose category key matches
    Category(String),
}

impl FilterKey {
    pub fn matches(&self, category_key: Option<&str>) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Category(key) => category_key == Some(key.as_str()),
        }
    }
}
