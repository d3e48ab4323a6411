//! Seed command implementation.

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;

use smartmenu_core::menu::DemoCatalog;
use smartmenu_core::storage::conversions::{category_to_item, menu_item_to_item, Item};

use super::error::{DynamodbError, Result};

/// Maximum number of put requests in one `BatchWriteItem` call.
const BATCH_SIZE: usize = 25;

/// Convert the demo catalog into table items, categories first.
pub fn catalog_items(catalog: &DemoCatalog) -> Vec<Item> {
    catalog
        .categories
        .iter()
        .map(category_to_item)
        .chain(catalog.menu_items.iter().map(menu_item_to_item))
        .collect()
}

/// Insert items into DynamoDB, returning how many were written.
pub async fn seed_items(client: &Client, table_name: &str, items: Vec<Item>) -> Result<usize> {
    let mut inserted = 0;

    for chunk in items.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|item| {
                let put = PutRequest::builder()
                    .set_item(Some(item.clone()))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
                Ok(WriteRequest::builder().put_request(put).build())
            })
            .collect::<Result<Vec<_>>>()?;

        let response = client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(DisplayErrorContext(&e).to_string()))?;

        let unprocessed = response
            .unprocessed_items()
            .and_then(|items| items.get(table_name))
            .map_or(0, Vec::len);
        if unprocessed > 0 {
            return Err(DynamodbError::AwsSdk(format!(
                "{} items were not processed after {} were written",
                unprocessed,
                inserted + chunk.len() - unprocessed
            )));
        }

        inserted += chunk.len();
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::AttributeValue;
    use smartmenu_core::menu::demo_catalog;
    use smartmenu_core::storage::conversions::{item_to_category, item_to_menu_item, PK};
    use smartmenu_core::storage::keys;

    #[test]
    fn test_catalog_items_cover_whole_catalog() {
        let catalog = demo_catalog("US", "b1");

        let items = catalog_items(&catalog);

        assert_eq!(
            items.len(),
            catalog.categories.len() + catalog.menu_items.len()
        );
        assert_eq!(
            items[0].get(PK),
            Some(&AttributeValue::S(keys::categories_pk("US", "b1")))
        );
    }

    #[test]
    fn test_catalog_items_decode_back() {
        let catalog = demo_catalog("UY", "b2");
        let items = catalog_items(&catalog);
        let (category_items, menu_items) = items.split_at(catalog.categories.len());

        for (item, category) in category_items.iter().zip(&catalog.categories) {
            assert_eq!(&item_to_category(item).unwrap(), category);
        }
        for (item, menu_item) in menu_items.iter().zip(&catalog.menu_items) {
            assert_eq!(&item_to_menu_item(item).unwrap(), menu_item);
        }
    }
}
