use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{InventoryApp, ThemeService, THEME_STORAGE_KEY};
use shared::domain::SortKey;
use storage::Storage;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "sqlite://stridegear-prefs.db")]
    database_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One line per visible seed record.
    List(QueryArgs),
    /// Card markup for the visible seed records.
    Render(QueryArgs),
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Args, Debug)]
struct QueryArgs {
    #[arg(long, default_value = "")]
    search: String,
    /// brand, name or recent; anything else sorts by recent.
    #[arg(long, default_value = "recent")]
    sort: String,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    Show,
    Toggle,
}

fn query_inventory(args: &QueryArgs) -> Result<InventoryApp> {
    tracing::debug!(search = %args.search, sort = %args.sort, "querying seed inventory");
    let mut app = InventoryApp::seeded().context("failed to load bundled seed inventory")?;
    app.on_search_input(args.search.as_str());
    app.on_sort_change(SortKey::from_value(&args.sort));
    Ok(app)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List(args) => {
            let app = query_inventory(&args)?;
            for shoe in app.visible() {
                println!(
                    "{}\t{}\t{}\tsize={}\tshape={}\t{}",
                    shoe.id,
                    shoe.shoe_brand,
                    shoe.shoe_name,
                    shoe.shoe_size,
                    shoe.feet_shape,
                    shoe.source_link
                );
            }
            println!("count={}", app.count());
        }
        Command::Render(args) => {
            let app = query_inventory(&args)?;
            println!("{}", app.view().markup);
            println!("<!-- count={} -->", app.count());
        }
        Command::Theme { action } => {
            let storage = Storage::new(&cli.database_url).await?;
            storage.health_check().await?;
            let themes = ThemeService::new(storage);
            match action {
                ThemeAction::Show => {
                    println!("{}", themes.current_theme().await?);
                    for pref in themes.store().list_preferences().await? {
                        if pref.key == THEME_STORAGE_KEY {
                            println!("updated_at={}", pref.updated_at.to_rfc3339());
                        }
                    }
                }
                ThemeAction::Toggle => {
                    let mode = themes.toggle_theme().await?;
                    println!("switched to {mode}");
                }
            }
        }
    }

    Ok(())
}
