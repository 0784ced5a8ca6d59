//! todo-client CLI entry point.

use clap::Parser;
use todo_client::cli::{Cli, Commands};
use todo_client::output::{format_item, format_items};
use todo_client::TodoClient;
use todo_core::item::Item;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TodoClient::new(&cli.base_url);

    match cli.command {
        Commands::List => {
            let items = client.list_items().await?;
            println!("{}", format_items(&items, cli.format));
        }
        Commands::Get { id } => {
            let (item, _) = client.get_item(&id).await?;
            println!("{}", format_item(&item, cli.format));
        }
        Commands::Add { text } => {
            let item = client.create_item(&text).await?;
            println!("{}", format_item(&item, cli.format));
        }
        Commands::Update {
            id,
            text,
            completed,
            if_match,
        } => {
            let item = Item::new(text).with_id(id).with_completed(completed);
            client.update_item(&item, if_match.as_deref()).await?;
            if !cli.quiet {
                println!("Updated {}", format_item(&item, cli.format));
            }
        }
        Commands::Complete { id } => {
            let (item, etag) = client.get_item(&id).await?;
            let item = item.with_completed(true);
            client.update_item(&item, etag.as_deref()).await?;
            if !cli.quiet {
                println!("Completed {}", format_item(&item, cli.format));
            }
        }
        Commands::Delete { id } => {
            client.delete_item(&id).await?;
            if !cli.quiet {
                println!("Deleted item {}", id);
            }
        }
    }

    Ok(())
}
