// SPDX-License-Identifier: GPL-3.0-only

//! CLI wrapper around the drive type catalog, backed by a JSON file store

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use drive_type_catalog::{
    CatalogConfig, DriveTypeCatalog, DriveTypeId, DriveTypeUpdate, JsonFileStore, NewDriveType,
    RequestContext, logging,
};

/// Manage drive type records
#[derive(Parser)]
#[command(name = "drive-type-cli")]
#[command(about = "CLI tool for drive type catalog operations", long_about = None)]
struct Cli {
    /// JSON file holding the catalog
    #[arg(long, global = true, default_value = "drive-types.json")]
    store: PathBuf,

    /// TOML file with name template settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a drive type
    Create {
        /// Drive class label, e.g. SATA
        drive_type: String,
        /// Capacity in gigabytes
        size_gb: u64,
        /// Rotational speed label
        rpm: String,
        /// Capability tag
        #[arg(long, default_value = "")]
        capabilities: String,
        /// Create the record hidden from default listings
        #[arg(long)]
        hidden: bool,
        /// Explicit name instead of the template-derived one
        #[arg(long)]
        name: Option<String>,
    },
    /// Update fields of a drive type; empty values are ignored
    Update {
        id: u64,
        #[arg(long = "type")]
        drive_type: Option<String>,
        #[arg(long)]
        size_gb: Option<u64>,
        #[arg(long)]
        rpm: Option<String>,
        #[arg(long)]
        capabilities: Option<String>,
        #[arg(long)]
        visible: Option<bool>,
    },
    /// Rename a drive type, or reset it to its default name
    Rename {
        /// Current name
        name: String,
        /// New name; omit to derive it from the record
        new_name: Option<String>,
    },
    /// Delete a drive type
    Delete { id: u64 },
    /// Show a drive type by id
    Get { id: u64 },
    /// Show a drive type by name
    GetByName { name: String },
    /// List drive types
    List {
        /// List hidden records instead of visible ones
        #[arg(long)]
        hidden: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = logging::init("info");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    let catalog = DriveTypeCatalog::from_config(JsonFileStore::new(&cli.store), &config)?;
    let ctx = RequestContext::admin();

    match cli.command {
        Commands::Create {
            drive_type,
            size_gb,
            rpm,
            capabilities,
            hidden,
            name,
        } => {
            let mut request = NewDriveType::new(drive_type, size_gb, rpm)
                .with_capabilities(capabilities)
                .with_visible(!hidden);
            request.name = name;

            let record = catalog.create(&ctx, request).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Update {
            id,
            drive_type,
            size_gb,
            rpm,
            capabilities,
            visible,
        } => {
            let update = DriveTypeUpdate {
                drive_type,
                size_gb,
                rpm: rpm.map(Into::into),
                capabilities,
                visible,
            };
            let record = catalog.update(&ctx, DriveTypeId::new(id), update).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Rename { name, new_name } => {
            let record = catalog.rename(&ctx, &name, new_name.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Delete { id } => {
            catalog.delete(&ctx, DriveTypeId::new(id)).await?;
            println!("{{\"success\": true}}");
        }
        Commands::Get { id } => {
            let record = catalog.get(&ctx, DriveTypeId::new(id)).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::GetByName { name } => {
            let record = catalog.get_by_name(&ctx, &name).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::List { hidden } => {
            let records = catalog.list(&ctx, !hidden).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}
