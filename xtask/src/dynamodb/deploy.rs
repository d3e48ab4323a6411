//! Table deployment operations (Imperative Shell).

use std::time::Duration;

use aws_sdk_dynamodb::error::{BuildError, DisplayErrorContext};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, CreateGlobalSecondaryIndexAction, GlobalSecondaryIndex,
    GlobalSecondaryIndexUpdate, KeySchemaElement, KeyType, Projection, ProjectionType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use super::client;
use super::config::{GsiConfig, KeyAttribute, TableConfig};
use super::error::{DynamodbError, Result};
use super::planning::{DeployPlan, DestroyPlan};

const ACTIVATION_ATTEMPTS: u32 = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// Execute a deploy plan.
pub async fn execute_deploy_plan(client: &Client, plan: &DeployPlan) -> Result<()> {
    match plan {
        DeployPlan::CreateTable { config } => {
            create_table(client, config).await?;
            wait_for_table_active(client, &config.table_name).await?;
        }
        DeployPlan::AddGsis {
            table_name,
            gsis_to_add,
        } => {
            // DynamoDB accepts one index creation per UpdateTable call.
            for gsi in gsis_to_add {
                add_gsi(client, table_name, gsi).await?;
                wait_for_table_active(client, table_name).await?;
            }
        }
        DeployPlan::Blocked { table_name, status } => {
            return Err(DynamodbError::TableBusy {
                table_name: table_name.clone(),
                status: status.to_string(),
            });
        }
        DeployPlan::NoChanges { .. } => {}
    }
    Ok(())
}

/// Execute a destroy plan.
pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    if let DestroyPlan::DeleteTable { table_name } = plan {
        client
            .delete_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(DisplayErrorContext(&e).to_string()))?;
    }
    Ok(())
}

fn build_error(err: BuildError) -> DynamodbError {
    DynamodbError::AwsSdk(err.to_string())
}

fn key_schema(
    partition_key: &KeyAttribute,
    sort_key: Option<&KeyAttribute>,
) -> Result<Vec<KeySchemaElement>> {
    std::iter::once((partition_key, KeyType::Hash))
        .chain(sort_key.map(|sk| (sk, KeyType::Range)))
        .map(|(key, key_type)| {
            KeySchemaElement::builder()
                .attribute_name(&key.name)
                .key_type(key_type)
                .build()
                .map_err(build_error)
        })
        .collect()
}

fn attribute_definitions<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<AttributeDefinition>> {
    names
        .into_iter()
        .map(|name| {
            AttributeDefinition::builder()
                .attribute_name(name)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .map_err(build_error)
        })
        .collect()
}

fn projection_all() -> Projection {
    Projection::builder()
        .projection_type(ProjectionType::All)
        .build()
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let mut request = client
        .create_table()
        .table_name(&config.table_name)
        .set_key_schema(Some(key_schema(
            &config.partition_key,
            config.sort_key.as_ref(),
        )?))
        .set_attribute_definitions(Some(attribute_definitions(config.key_attribute_names())?))
        .billing_mode(BillingMode::PayPerRequest);

    for gsi in &config.gsis {
        request = request.global_secondary_indexes(
            GlobalSecondaryIndex::builder()
                .index_name(&gsi.name)
                .set_key_schema(Some(key_schema(&gsi.partition_key, gsi.sort_key.as_ref())?))
                .projection(projection_all())
                .build()
                .map_err(build_error)?,
        );
    }

    request
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(DisplayErrorContext(&e).to_string()))?;
    Ok(())
}

async fn add_gsi(client: &Client, table_name: &str, gsi: &GsiConfig) -> Result<()> {
    let key_names = std::iter::once(gsi.partition_key.name.as_str())
        .chain(gsi.sort_key.as_ref().map(|sk| sk.name.as_str()));

    client
        .update_table()
        .table_name(table_name)
        .set_attribute_definitions(Some(attribute_definitions(key_names)?))
        .global_secondary_index_updates(
            GlobalSecondaryIndexUpdate::builder()
                .create(
                    CreateGlobalSecondaryIndexAction::builder()
                        .index_name(&gsi.name)
                        .set_key_schema(Some(key_schema(
                            &gsi.partition_key,
                            gsi.sort_key.as_ref(),
                        )?))
                        .projection(projection_all())
                        .build()
                        .map_err(build_error)?,
                )
                .build(),
        )
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(DisplayErrorContext(&e).to_string()))?;

    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..ACTIVATION_ATTEMPTS {
        let ready = client::get_table_state(client, table_name)
            .await?
            .is_some_and(|state| state.is_ready());
        if ready {
            return Ok(());
        }
        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    Err(DynamodbError::TableActivationTimeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::smartmenu_table_config;

    #[test]
    fn test_key_schema_for_table() {
        let config = smartmenu_table_config();

        let schema = key_schema(&config.partition_key, config.sort_key.as_ref()).unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema[0].attribute_name(), "pk");
        assert_eq!(schema[0].key_type(), &KeyType::Hash);
        assert_eq!(schema[1].attribute_name(), "sk");
        assert_eq!(schema[1].key_type(), &KeyType::Range);
    }

    #[test]
    fn test_key_schema_for_hash_only_index() {
        let config = smartmenu_table_config();
        let gsi = &config.gsis[0];

        let schema = key_schema(&gsi.partition_key, gsi.sort_key.as_ref()).unwrap();

        assert_eq!(schema.len(), 1);
        assert_eq!(schema[0].attribute_name(), "indexGSI1PK");
    }

    #[test]
    fn test_attribute_definitions_are_strings() {
        let config = smartmenu_table_config();

        let definitions = attribute_definitions(config.key_attribute_names()).unwrap();

        let names: Vec<&str> = definitions.iter().map(|d| d.attribute_name()).collect();
        assert_eq!(names, vec!["pk", "sk", "indexGSI1PK"]);
        assert!(definitions
            .iter()
            .all(|d| d.attribute_type() == &ScalarAttributeType::S));
    }
}
