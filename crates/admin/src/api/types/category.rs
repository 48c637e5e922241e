//! Category domain types.

use backoffice_core::CategoryId;
use serde::{Deserialize, Serialize};

use super::{Validate, require_text};

/// Reference to a parent category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: CategoryId,
}

/// A product category as returned by `/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Distance from a root category (roots are level 0).
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default = "default_true")]
    pub active: bool,
    /// Whether the storefront navigation menu lists this category.
    #[serde(rename = "showInMenu", default)]
    pub show_in_menu: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

const fn default_true() -> bool {
    true
}

impl Category {
    /// Parent category id, if this is not a root.
    #[must_use]
    pub fn parent_id(&self) -> Option<CategoryId> {
        self.parent.map(|p| p.id)
    }

    /// Whether this category has no parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl Validate for Category {
    fn validate(&self) -> Result<(), String> {
        require_text("category name", &self.name)?;
        if self.parent_id() == Some(self.id) {
            return Err(format!("category {} is its own parent", self.id));
        }
        Ok(())
    }
}

/// Payload for creating or replacing a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parent: Option<ParentRef>,
    pub level: u32,
    pub active: bool,
    #[serde(rename = "showInMenu")]
    pub show_in_menu: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CategoryInput {
    /// Start a new active category placed under `parent` (or at the root).
    ///
    /// The level is derived from the parent so the stored hierarchy stays
    /// consistent with what the tree builder computes.
    #[must_use]
    pub fn under(name: &str, parent: Option<&Category>) -> Self {
        Self {
            name: name.to_string(),
            parent: parent.map(|p| ParentRef { id: p.id }),
            level: parent.map_or(0, |p| p.level + 1),
            active: true,
            ..Self::default()
        }
    }

    /// Set the storefront URL slug.
    #[must_use]
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Set whether the category appears in the storefront menu.
    #[must_use]
    pub const fn show_in_menu(mut self, show: bool) -> Self {
        self.show_in_menu = show;
        self
    }
}

/// Partial update sent with PATCH; only set fields are serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "showInMenu", skip_serializing_if = "Option::is_none")]
    pub show_in_menu: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_backend_shape() {
        let json = r#"{
            "id": 2, "name": "Shoes", "level": 1, "parent": {"id": 1},
            "active": true, "showInMenu": true, "url": "shoes"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(category.parent_id(), Some(CategoryId::new(1)));
        assert!(category.show_in_menu);
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_null_parent_is_root() {
        let json = r#"{"id": 1, "name": "All", "parent": null}"#;
        let category: Category = serde_json::from_str(json).unwrap_or_else(|e| panic!("{e}"));
        assert!(category.is_root());
        assert_eq!(category.level, 0);
        assert!(category.active);
    }

    #[test]
    fn test_self_parent_fails_validation() {
        let json = r#"{"id": 3, "name": "Loop", "parent": {"id": 3}, "level": 1}"#;
        let category: Category = serde_json::from_str(json).unwrap_or_else(|e| panic!("{e}"));
        assert!(category.validate().is_err());
    }

    #[test]
    fn test_input_derives_level_from_parent() {
        let parent: Category =
            serde_json::from_str(r#"{"id": 5, "name": "Men", "level": 1, "parent": {"id": 1}}"#)
                .unwrap_or_else(|e| panic!("{e}"));
        let input = CategoryInput::under("Boots", Some(&parent)).url("boots");
        assert_eq!(input.level, 2);
        assert_eq!(input.parent, Some(ParentRef { id: CategoryId::new(5) }));

        let root = CategoryInput::under("Sale", None);
        assert_eq!(root.level, 0);
        assert!(root.parent.is_none());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = CategoryPatch {
            show_in_menu: Some(false),
            ..CategoryPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap_or_default();
        assert_eq!(json, r#"{"showInMenu":false}"#);
    }
}
