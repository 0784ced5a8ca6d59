//! todo_client - CLI client for the todo API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::TodoClient;
pub use error::{ClientError, Result};
