//! # User Directory Demo
//!
//! Loads the first page, prints it, then walks through a search, a letter
//! filter, a sort toggle and a page change, printing each frame.

use user_directory::config::DirectoryConfig;
use user_directory::lifecycle::{setup_tracing, DirectorySystem};
use user_directory::model::SortField;
use user_directory::render::render;
use user_directory::store::DirectoryView;
use tracing::{info, Instrument};

fn show(title: &str, view: &DirectoryView, config: &DirectoryConfig) {
    println!("== {title}");
    println!("{}", render(view, config.layout));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = DirectoryConfig::default();
    info!(endpoint = %config.endpoint, "Starting user directory");
    let system = DirectorySystem::new(&config)?;
    let client = system.client.clone();

    let span = tracing::info_span!("walkthrough");
    async {
        let view = client.loaded().await?;
        show("Initial page", &view, &config);

        let view = client.search("bluth").await?;
        show("Search \"bluth\"", &view, &config);

        client.search("").await?;
        let view = client.filter_letter("e").await?;
        show("First letter E", &view, &config);

        client.filter_letter("all").await?;
        let view = client.toggle_sort(SortField::LastName).await?;
        show("Sorted by last name", &view, &config);
        let view = client.toggle_sort(SortField::LastName).await?;
        show("Sorted by last name, descending", &view, &config);

        client.next_page().await?;
        let view = client.loaded().await?;
        show("Next page", &view, &config);

        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    drop(client);
    system.shutdown().await?;

    info!("Directory demo completed");
    Ok(())
}
