//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB `AttributeValue` maps and
//! catalog entities. Attribute names match the JSON field names of the
//! entities. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::menu::{Category, MenuItem};

use super::RepositoryError;

/// A raw DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Attribute names
// ============================================================================

pub const PK: &str = "pk";
pub const SK: &str = "sk";
pub const ENTITY: &str = "entity";
pub const ENTITY_ID: &str = "entityId";
pub const GSI1_PK: &str = "indexGSI1PK";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const IMAGE_URL: &str = "imageUrl";
pub const PRICE: &str = "price";
pub const PRICE_UNIT: &str = "priceUnit";
pub const CATEGORY: &str = "category";
pub const CATEGORY_ID: &str = "categoryId";
pub const SUB_CATEGORY: &str = "subCategory";
pub const TAGS: &str = "tags";
pub const IS_AVAILABLE: &str = "isAvailable";

// ============================================================================
// Category conversions
// ============================================================================

/// Convert a Category to DynamoDB item.
pub fn category_to_item(category: &Category) -> Item {
    let mut item = HashMap::new();

    // Keys
    item.insert(PK.to_string(), AttributeValue::S(category.pk.clone()));
    item.insert(SK.to_string(), AttributeValue::S(category.sk.clone()));

    // Data
    item.insert(
        CATEGORY.to_string(),
        AttributeValue::S(category.category.clone()),
    );
    item.insert(
        CATEGORY_ID.to_string(),
        AttributeValue::S(category.category_id.clone()),
    );

    item
}

/// Convert a DynamoDB item to Category.
pub fn item_to_category(item: &Item) -> Result<Category, RepositoryError> {
    Ok(Category {
        pk: get_string(item, PK)?,
        sk: get_string(item, SK)?,
        category: get_string(item, CATEGORY)?,
        category_id: get_string(item, CATEGORY_ID)?,
    })
}

// ============================================================================
// Menu item conversions
// ============================================================================

/// Convert a MenuItem to DynamoDB item.
///
/// Tags are written as a list so an empty tag set survives the round trip.
/// An empty `indexGSI1PK` is omitted.
pub fn menu_item_to_item(menu_item: &MenuItem) -> Item {
    let mut item = HashMap::new();

    // Keys
    item.insert(PK.to_string(), AttributeValue::S(menu_item.pk.clone()));
    item.insert(SK.to_string(), AttributeValue::S(menu_item.sk.clone()));
    // Index keys cannot be empty strings; an item without one stays out of GSI1.
    if !menu_item.gsi1_pk.is_empty() {
        item.insert(
            GSI1_PK.to_string(),
            AttributeValue::S(menu_item.gsi1_pk.clone()),
        );
    }

    // Entity type
    item.insert(
        ENTITY.to_string(),
        AttributeValue::S(menu_item.entity.clone()),
    );
    item.insert(
        ENTITY_ID.to_string(),
        AttributeValue::S(menu_item.entity_id.clone()),
    );

    // Data
    item.insert(TITLE.to_string(), AttributeValue::S(menu_item.title.clone()));
    item.insert(
        DESCRIPTION.to_string(),
        AttributeValue::S(menu_item.description.clone()),
    );
    item.insert(
        IMAGE_URL.to_string(),
        AttributeValue::S(menu_item.image_url.clone()),
    );
    item.insert(
        PRICE.to_string(),
        AttributeValue::N(menu_item.price.to_string()),
    );
    item.insert(
        PRICE_UNIT.to_string(),
        AttributeValue::S(menu_item.price_unit.clone()),
    );
    item.insert(
        CATEGORY.to_string(),
        AttributeValue::S(menu_item.category.clone()),
    );
    item.insert(
        CATEGORY_ID.to_string(),
        AttributeValue::S(menu_item.category_id.clone()),
    );
    item.insert(
        SUB_CATEGORY.to_string(),
        AttributeValue::S(menu_item.sub_category.clone()),
    );
    item.insert(
        TAGS.to_string(),
        AttributeValue::L(
            menu_item
                .tags
                .iter()
                .map(|tag| AttributeValue::S(tag.clone()))
                .collect(),
        ),
    );
    item.insert(
        IS_AVAILABLE.to_string(),
        AttributeValue::Bool(menu_item.is_available),
    );

    item
}

/// Convert a DynamoDB item to MenuItem.
pub fn item_to_menu_item(item: &Item) -> Result<MenuItem, RepositoryError> {
    Ok(MenuItem {
        pk: get_string(item, PK)?,
        sk: get_string(item, SK)?,
        entity: get_string(item, ENTITY)?,
        entity_id: get_string(item, ENTITY_ID)?,
        gsi1_pk: get_optional_string(item, GSI1_PK)?,
        title: get_string(item, TITLE)?,
        description: get_optional_string(item, DESCRIPTION)?,
        image_url: get_optional_string(item, IMAGE_URL)?,
        price: get_number(item, PRICE)?,
        price_unit: get_string(item, PRICE_UNIT)?,
        category: get_string(item, CATEGORY)?,
        category_id: get_string(item, CATEGORY_ID)?,
        sub_category: get_optional_string(item, SUB_CATEGORY)?,
        tags: get_string_list(item, TAGS)?,
        is_available: get_bool(item, IS_AVAILABLE)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn invalid_field(key: &str) -> RepositoryError {
    RepositoryError::InvalidData(format!("Missing or invalid field: {}", key))
}

/// Returns the attribute unless it is absent or an explicit NULL.
fn get_present<'a>(item: &'a Item, key: &str) -> Option<&'a AttributeValue> {
    item.get(key).filter(|v| !v.is_null())
}

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| invalid_field(key))
}

/// Get an optional string attribute, defaulting to empty.
///
/// A present attribute of another type is still an error.
fn get_optional_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    match get_present(item, key) {
        None => Ok(String::new()),
        Some(v) => v
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| invalid_field(key)),
    }
}

/// Get a required number attribute as `f64`.
fn get_number(item: &Item, key: &str) -> Result<f64, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| invalid_field(key))?;
    n.parse::<f64>()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required boolean attribute.
fn get_bool(item: &Item, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| invalid_field(key))
}

/// Get an optional list of strings, stored either as `L` of `S` or as `SS`.
fn get_string_list(item: &Item, key: &str) -> Result<Vec<String>, RepositoryError> {
    match get_present(item, key) {
        None => Ok(Vec::new()),
        Some(AttributeValue::Ss(values)) => Ok(values.clone()),
        Some(AttributeValue::L(values)) => values
            .iter()
            .map(|v| v.as_s().map(|s| s.to_string()).map_err(|_| invalid_field(key)))
            .collect(),
        Some(_) => Err(invalid_field(key)),
    }
}
