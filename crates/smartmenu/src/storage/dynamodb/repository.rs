//! DynamoDB repository implementation.
//!
//! Implements `CatalogRepository` from `smartmenu_core::storage` on the
//! single `SmartMenu` table. Every operation issues exactly one request; the
//! client is built with retries disabled.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use smartmenu_core::menu::{Category, MenuItem};
use smartmenu_core::storage::conversions::{item_to_category, item_to_menu_item, Item, PK, SK};
use smartmenu_core::storage::{keys, CatalogRepository, QueryOutcome, Result};

use super::error::{map_get_item_error, map_query_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the store configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region
    /// and optional endpoint override.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Runs a key-condition query and returns the raw items of the first
    /// result page.
    async fn query(&self, condition: KeyCondition) -> Result<Option<Vec<Item>>> {
        tracing::debug!(
            table = %self.table_name,
            condition = %condition.expression,
            "Querying partition"
        );

        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression(condition.expression)
            .set_expression_attribute_values(Some(condition.values))
            .send()
            .await
            .map_err(map_query_error)?;

        Ok(result.items)
    }
}

/// Key condition expression with its placeholder values.
#[derive(Debug, Clone, PartialEq)]
struct KeyCondition {
    expression: String,
    values: HashMap<String, AttributeValue>,
}

impl KeyCondition {
    /// Every item of one partition.
    fn partition(pk: String) -> Self {
        Self {
            expression: format!("{PK} = :pk"),
            values: HashMap::from([(":pk".to_string(), AttributeValue::S(pk))]),
        }
    }

    /// Items of one partition whose sort key starts with `sk_prefix`.
    fn partition_with_prefix(pk: String, sk_prefix: String) -> Self {
        Self {
            expression: format!("{PK} = :pk AND begins_with({SK}, :sk_prefix)"),
            values: HashMap::from([
                (":pk".to_string(), AttributeValue::S(pk)),
                (":sk_prefix".to_string(), AttributeValue::S(sk_prefix)),
            ]),
        }
    }
}

fn categories_condition(country_code: &str, branch_id: &str) -> KeyCondition {
    KeyCondition::partition(keys::categories_pk(country_code, branch_id))
}

fn menu_items_condition(country_code: &str, branch_id: &str, category_id: &str) -> KeyCondition {
    KeyCondition::partition_with_prefix(
        keys::menu_items_pk(country_code, branch_id),
        keys::category_sk_prefix(category_id),
    )
}

fn branch_items_condition(branch_id: &str) -> KeyCondition {
    KeyCondition::partition(keys::branch_all_items_pk(branch_id))
}

/// Decode a query page; a missing or empty page is `Empty`.
fn decode_items<T>(
    items: Option<Vec<Item>>,
    decode: fn(&Item) -> Result<T>,
) -> Result<QueryOutcome<Vec<T>>> {
    let decoded = items
        .unwrap_or_default()
        .iter()
        .map(decode)
        .collect::<Result<Vec<_>>>()?;
    Ok(QueryOutcome::from_items(decoded))
}

/// Decode a GetItem result; no item, or an empty one, is `Empty`.
fn decode_menu_item(item: Option<Item>) -> Result<QueryOutcome<MenuItem>> {
    let item = item.filter(|item| !item.is_empty());
    Ok(item.as_ref().map(item_to_menu_item).transpose()?.into())
}

#[async_trait]
impl CatalogRepository for DynamoDbRepository {
    async fn list_categories(
        &self,
        country_code: &str,
        branch_id: &str,
    ) -> Result<QueryOutcome<Vec<Category>>> {
        let items = self
            .query(categories_condition(country_code, branch_id))
            .await?;
        decode_items(items, item_to_category)
    }

    async fn list_menu_items_by_category(
        &self,
        country_code: &str,
        branch_id: &str,
        category_id: &str,
    ) -> Result<QueryOutcome<Vec<MenuItem>>> {
        let items = self
            .query(menu_items_condition(country_code, branch_id, category_id))
            .await?;
        decode_items(items, item_to_menu_item)
    }

    async fn list_all_menu_items_for_branch(
        &self,
        branch_id: &str,
    ) -> Result<QueryOutcome<Vec<MenuItem>>> {
        let items = self.query(branch_items_condition(branch_id)).await?;
        decode_items(items, item_to_menu_item)
    }

    async fn get_menu_item(&self, pk: &str, sk: &str) -> Result<QueryOutcome<MenuItem>> {
        tracing::debug!(table = %self.table_name, pk, sk, "Getting menu item");

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PK, AttributeValue::S(pk.to_string()))
            .key(SK, AttributeValue::S(sk.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        decode_menu_item(result.item)
    }
}
