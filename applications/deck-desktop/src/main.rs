//! Deck Player - dashboard command-line shell
use clap::{Args, Parser, Subcommand};
use deck_core::{Breakpoint, ModuleId, SizeDimension, StyleField};
use deck_desktop::{open_dashboard, DeckConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "deck-desktop")]
#[command(about = "Deck Player dashboard layout manager", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./deck.toml when present)
    #[arg(short, long, env = "DECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(multiple = false)]
struct Viewport {
    /// Viewport width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Breakpoint name (lg, md, sm, xs, xxs)
    #[arg(long, value_parser = parse_breakpoint)]
    breakpoint: Option<Breakpoint>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the reconciled layout as JSON
    Show {
        #[command(flatten)]
        viewport: Viewport,
    },
    /// Show or hide a module
    Toggle {
        /// Module id (e.g. library, now-playing)
        module: String,
    },
    /// Rename a module (an empty title restores the default)
    Rename {
        module: String,
        title: String,
    },
    /// Set a style override (an empty value clears it)
    Style {
        module: String,
        /// background, textColor, borderRadius, opacity, fontSize or fontFamily
        #[arg(value_parser = parse_style_field)]
        field: StyleField,
        value: String,
    },
    /// Set logical size overrides in reference-breakpoint units
    Size {
        module: String,
        /// Width in columns (empty clears)
        #[arg(long)]
        w: Option<String>,
        /// Height in rows (empty clears)
        #[arg(long)]
        h: Option<String>,
    },
    /// Restore default geometry and drop size overrides
    ResetLayout,
    /// Restore default titles, visibility and overrides
    ResetModules,
}

fn parse_breakpoint(s: &str) -> Result<Breakpoint, String> {
    Breakpoint::from_str(s).ok_or_else(|| format!("unknown breakpoint '{s}'"))
}

fn parse_style_field(s: &str) -> Result<StyleField, String> {
    StyleField::from_str(s).ok_or_else(|| format!("unknown style field '{s}'"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = DeckConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut dashboard = open_dashboard(&config).await?;

    match cli.command {
        Commands::Show { viewport } => {
            if let Some(width) = viewport.width {
                dashboard.on_width_change(width).await?;
            } else if let Some(breakpoint) = viewport.breakpoint {
                dashboard.on_breakpoint_change(breakpoint).await?;
            }
            print_json(&dashboard.snapshot())?;
        }
        Commands::Toggle { module } => {
            let visible = dashboard.toggle_visibility(&ModuleId::new(module.as_str())).await?;
            println!("{module}: {}", if visible { "visible" } else { "hidden" });
        }
        Commands::Rename { module, title } => {
            let title = dashboard
                .rename_module(&ModuleId::new(module.as_str()), &title)
                .await?;
            println!("{module}: {title}");
        }
        Commands::Style {
            module,
            field,
            value,
        } => {
            let style = dashboard
                .set_style_field(&ModuleId::new(module.as_str()), field, &value)
                .await?;
            print_json(&style)?;
        }
        Commands::Size { module, w, h } => {
            let id = ModuleId::new(module.as_str());
            if let Some(w) = w {
                dashboard.set_size_field(&id, SizeDimension::Width, &w).await?;
            }
            if let Some(h) = h {
                dashboard.set_size_field(&id, SizeDimension::Height, &h).await?;
            }
            print_json(&dashboard.sizes().get(&id))?;
        }
        Commands::ResetLayout => {
            dashboard.reset_layout().await?;
            println!("Layout reset to defaults");
        }
        Commands::ResetModules => {
            dashboard.reset_modules().await?;
            println!("Modules reset to defaults");
        }
    }

    Ok(())
}
