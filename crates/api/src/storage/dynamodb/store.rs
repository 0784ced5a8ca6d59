//! DynamoDB table store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValuesOnConditionCheckFailure};
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use uuid::Uuid;

use todo_core::storage::{ConcurrencyToken, RowStream, StorageRow, StoreResult, TableStore};

use super::conversions::{item_to_row, row_key, row_to_item, ATTR_ETAG, ATTR_PK};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error, WriteKind,
};
use crate::config::Config;

/// DynamoDB-based table store.
///
/// Expects a table with a string partition key `PK` and string sort key `SK`.
pub struct DynamoDbTableStore {
    client: Client,
    table_name: String,
}

impl DynamoDbTableStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from configuration.
    ///
    /// Uses the AWS SDK default credential chain, the configured region and,
    /// when set, a custom endpoint (for local DynamoDB).
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn next_token() -> ConcurrencyToken {
        ConcurrencyToken::new(format!("\"{}\"", Uuid::new_v4().simple()))
    }
}

/// Condition for a write against an existing row, checking `expected`
/// unless it is the wildcard.
fn existing_row_condition(expected: &ConcurrencyToken) -> (String, Option<AttributeValue>) {
    if expected.is_wildcard() {
        (format!("attribute_exists({ATTR_PK})"), None)
    } else {
        (
            format!("attribute_exists({ATTR_PK}) AND {ATTR_ETAG} = :expected"),
            Some(AttributeValue::S(expected.as_str().to_string())),
        )
    }
}

#[async_trait]
impl TableStore for DynamoDbTableStore {
    async fn insert(&self, row: &StorageRow) -> StoreResult<ConcurrencyToken> {
        let token = Self::next_token();
        let item = row_to_item(row, &token, Utc::now());

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(format!("attribute_not_exists({ATTR_PK})"))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, row, WriteKind::Insert))?;

        Ok(token)
    }

    async fn replace(
        &self,
        row: &StorageRow,
        expected: &ConcurrencyToken,
    ) -> StoreResult<ConcurrencyToken> {
        let token = Self::next_token();
        let item = row_to_item(row, &token, Utc::now());
        let (condition, expected_value) = existing_row_condition(expected);

        let mut request = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(condition)
            .return_values_on_condition_check_failure(ReturnValuesOnConditionCheckFailure::AllOld);

        if let Some(value) = expected_value {
            request = request.expression_attribute_values(":expected", value);
        }

        request
            .send()
            .await
            .map_err(|e| map_put_item_error(e, row, WriteKind::Replace))?;

        Ok(token)
    }

    async fn get_by_key(
        &self,
        partition_key: &str,
        row_key_value: &str,
    ) -> StoreResult<Option<StorageRow>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(row_key(partition_key, row_key_value)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_row(&item)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, row: &StorageRow) -> StoreResult<()> {
        let (condition, expected_value) = existing_row_condition(&row.etag_or_any());

        let mut request = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(row_key(&row.partition_key, &row.row_key)))
            .condition_expression(condition)
            .return_values_on_condition_check_failure(ReturnValuesOnConditionCheckFailure::AllOld);

        if let Some(value) = expected_value {
            request = request.expression_attribute_values(":expected", value);
        }

        request
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, row))?;

        Ok(())
    }

    fn scan_all(&self, partition_key: &str) -> RowStream<'_> {
        let partition_key = partition_key.to_string();

        Box::pin(async_stream::try_stream! {
            let mut pages = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(format!("{ATTR_PK} = :pk"))
                .expression_attribute_values(":pk", AttributeValue::S(partition_key))
                .consistent_read(true)
                .into_paginator()
                .send();

            while let Some(page) = pages.next().await {
                let page = page.map_err(map_query_error)?;
                for item in page.items() {
                    yield item_to_row(item)?;
                }
            }
        })
    }
}
