//! Static preview server for rendered charts.
//!
//! Serves a directory over HTTP:
//! - `GET /` - the fixed preview page (`preview.html`)
//! - `GET /<path>` - file at `<path>` relative to the root directory
//! - Hardcoded extension -> MIME table, 404 for anything missing

mod server;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "preview-server")]
#[command(about = "Static file server for chart previews")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1:8123")]
    listen: String,

    /// Directory to serve files from
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let addr: SocketAddr = args.listen.parse()?;
    let app = server::router(args.root.clone());

    info!(address = %addr, root = %args.root.display(), "Listening");
    println!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
