use std::env;

use todo_core::storage::TABLE_NAME_DEFAULT;

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Table holding item rows (default: "todoitems")
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB (default: unset)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODO_TABLE_NAME` - Table name (default: "todoitems")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TODO_TABLE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| TABLE_NAME_DEFAULT.to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
