#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Batch CLI for the entity-to-POI transform.
//!
//! Reads a JSON entity payload (one entity or an array) from a file or
//! stdin, runs the rendering pipeline and prints the POI list as JSON on
//! stdout. Input-shape faults exit nonzero before anything is printed.

use std::io::Read as _;
use std::path::PathBuf;

use clap::Parser;
use ngsi_poi_pipeline::{Payload, process};
use ngsi_poi_render::context::{BaseUrl, RenderContext};

#[derive(Parser)]
#[command(name = "ngsi_poi_cli", about = "NGSI entity to POI transform")]
struct Cli {
    /// Input file with one NGSI entity or an array of them. Reads stdin
    /// when omitted.
    input: Option<PathBuf>,
    /// Language code used for date formatting (e.g. "en", "es", "pt-PT")
    #[arg(long, default_value = "en")]
    language: String,
    /// Base URL prepended to icon paths. Icon paths stay relative when
    /// empty.
    #[arg(long, default_value = "")]
    base_url: String,
    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let resolver = BaseUrl::new(cli.base_url);
    let ctx = RenderContext::new(&cli.language, &resolver);
    let pois = process(Payload::from(text), &ctx)?;
    log::info!("Rendered {} POIs", pois.len());

    let output = if cli.pretty {
        serde_json::to_string_pretty(&pois)?
    } else {
        serde_json::to_string(&pois)?
    };
    println!("{output}");

    Ok(())
}
