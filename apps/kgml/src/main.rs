//! # kgml - KEGG pathway inspector
//!
//! The main binary for the KGML parser.
//!
//! ## Usage
//!
//! ```bash
//! # Pathway overview
//! kgml summary -f hsa04010.xml
//!
//! # Parse without ever touching the network for the DTD
//! kgml --offline entries -f hsa04010.xml -t gene
//!
//! # One entry with its relations, as JSON
//! kgml --json-mode entry -f hsa04010.xml --id 42
//!
//! # Export the whole graph
//! kgml export -f hsa04010.xml -o hsa04010.json
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — KGML_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("KGML_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kgml=info,kgml_core=info".into());

    // Logs go to stderr so that stdout stays clean for JSON and strip-dtd output.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = kgml::cli::Cli::parse();

    if let Err(e) = kgml::cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
