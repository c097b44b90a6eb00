use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use vending::application::vending::VendingMachine;
use vending::config::{DEFAULT_DENOMINATIONS, OutputFormat, VendingConfig};
use vending::domain::ports::CatalogStoreBox;
use vending::domain::product::Product;
use vending::error::{Result, VendingError};
use vending::infrastructure::in_memory::InMemoryCatalogStore;
use vending::interfaces::csv::catalog_reader::CatalogReader;
use vending::interfaces::csv::catalog_writer::CatalogWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    /// Products CSV (`name,price`) loaded into the catalog before the command runs
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Comma-separated coin values accepted by `buy`
    #[arg(long, global = true, default_value = DEFAULT_DENOMINATIONS)]
    denominations: String,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new product
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        price: i64,
    },
    /// List every product in the catalog
    List,
    /// Show one product
    Get { name: String },
    /// Replace the price of an existing product
    Update {
        name: String,
        #[arg(allow_negative_numbers = true)]
        price: i64,
    },
    /// Remove a product
    Delete { name: String },
    /// Insert coins and dispense the most expensive products they cover
    Buy {
        #[arg(allow_negative_numbers = true)]
        coins: Vec<i64>,
    },
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    setup_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        let code = err.kind().exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = VendingConfig::new(&cli.denominations, cli.db_path, cli.catalog, cli.format)?;

    let store = open_store(config.db_path.as_deref())?;
    let machine = VendingMachine::new(store, config.denominations.clone());

    if let Some(seed) = &config.catalog_seed {
        seed_catalog(&machine, seed).await?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Add { name, price } => {
            let product = machine.create_product(Product::new(name, price)).await?;
            print_products(&mut out, config.format, vec![product], false)?;
        }
        Command::List => {
            let products = machine.list_products().await?;
            print_products(&mut out, config.format, products, true)?;
        }
        Command::Get { name } => {
            let product = machine.get_product(&name).await?;
            print_products(&mut out, config.format, vec![product], false)?;
        }
        Command::Update { name, price } => {
            let product = machine.update_product(Product::new(name, price)).await?;
            print_products(&mut out, config.format, vec![product], false)?;
        }
        Command::Delete { name } => {
            machine.delete_product(&name).await?;
        }
        Command::Buy { coins } => {
            let purchase = machine.buy(&coins).await?;
            let lines = purchase.display_lines();
            match config.format {
                OutputFormat::Text => {
                    for line in lines {
                        writeln!(out, "{}", line)?;
                    }
                }
                OutputFormat::Json => print_json(&mut out, &lines)?,
            }
        }
    }

    Ok(())
}

#[cfg(feature = "storage-rocksdb")]
fn open_store(db_path: Option<&Path>) -> Result<CatalogStoreBox> {
    use vending::infrastructure::rocksdb::RocksDbCatalogStore;

    match db_path {
        Some(path) => Ok(Box::new(RocksDbCatalogStore::open(path)?)),
        None => Ok(Box::new(InMemoryCatalogStore::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_store(db_path: Option<&Path>) -> Result<CatalogStoreBox> {
    if db_path.is_some() {
        warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
        );
    }
    Ok(Box::new(InMemoryCatalogStore::new()))
}

/// Loads products from a CSV file, skipping rows that cannot be stored.
async fn seed_catalog(machine: &VendingMachine, path: &Path) -> Result<()> {
    let file = File::open(path)?;
    for row in CatalogReader::new(file).products() {
        match row {
            Ok(product) => match machine.create_product(product).await {
                Ok(_) => {}
                Err(VendingError::DuplicateKey(name)) => {
                    warn!(%name, "catalog row skipped, product already exists");
                }
                Err(VendingError::Validation(reason)) => {
                    warn!(%reason, "catalog row skipped");
                }
                Err(e) => return Err(e),
            },
            Err(e) => warn!(error = %e, "Error reading catalog row"),
        }
    }
    Ok(())
}

fn print_products<W: Write>(
    out: &mut W,
    format: OutputFormat,
    products: Vec<Product>,
    as_list: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => CatalogWriter::new(out).write_products(products),
        OutputFormat::Json if as_list => print_json(out, &products),
        OutputFormat::Json => match products.first() {
            Some(product) => print_json(out, product),
            None => Ok(()),
        },
    }
}

fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
