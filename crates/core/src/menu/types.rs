use serde::{Deserialize, Serialize};

/// Discriminator value stored in the `entity` attribute of menu items.
pub const ENTITY_MENU_ITEM: &str = "MENU_ITEM";

/// A menu category of one branch.
///
/// Categories live under the `{country}#CAT#BR#{branch}` partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub pk: String,
    pub sk: String,
    /// Display name of the category.
    pub category: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
}

impl Category {
    /// Creates a category with the given keys and name.
    pub fn new(
        pk: impl Into<String>,
        sk: impl Into<String>,
        category: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
            category: category.into(),
            category_id: category_id.into(),
        }
    }
}

/// A single dish or drink on the menu.
///
/// Menu items live under the `{country}#MI#BR#{branch}` partition with a
/// `{categoryId}#{itemId}` sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub pk: String,
    pub sk: String,
    /// Entity discriminator (see [`ENTITY_MENU_ITEM`]).
    pub entity: String,
    pub entity_id: String,
    /// Secondary index partition key. Stored but never queried.
    #[serde(rename = "indexGSI1PK")]
    pub gsi1_pk: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub price_unit: String,
    /// Display name of the owning category.
    pub category: String,
    pub category_id: String,
    pub sub_category: String,
    pub tags: Vec<String>,
    pub is_available: bool,
}

impl MenuItem {
    /// Creates an available menu item with no tags and empty optional text.
    pub fn new(
        pk: impl Into<String>,
        sk: impl Into<String>,
        entity_id: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        price_unit: impl Into<String>,
    ) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
            entity: ENTITY_MENU_ITEM.to_string(),
            entity_id: entity_id.into(),
            gsi1_pk: String::new(),
            title: title.into(),
            description: String::new(),
            image_url: String::new(),
            price,
            price_unit: price_unit.into(),
            category: String::new(),
            category_id: String::new(),
            sub_category: String::new(),
            tags: Vec::new(),
            is_available: true,
        }
    }

    /// Sets the owning category name and id.
    pub fn with_category(
        mut self,
        category: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        self.category = category.into();
        self.category_id = category_id.into();
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_gsi1_pk(mut self, gsi1_pk: impl Into<String>) -> Self {
        self.gsi1_pk = gsi1_pk.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the availability flag.
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}
