//! netgen — bootstrap material for a local test network.
//!
//! Generates one RSA staking identity per node, registers every node as an
//! initial staker in the genesis template, and prints the result as JSON:
//!
//!   { "genesis": "<genesis json>", "keyPairs": [{ "cert", "key", "id" }, ...] }
//!
//! Logs go to stderr so stdout can be piped straight into a file.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use netgen_core::constants::DEFAULT_NETWORK_SIZE;
use netgen_crypto::RsaIdentityGenerator;
use netgen_genesis::{assemble_network, AssemblyMode, GenesisTemplate};

#[derive(Parser, Debug)]
#[command(
    name = "netgen",
    version,
    about = "Generate staking identities and a genesis document for a local test network"
)]
struct Args {
    /// Number of nodes to generate.
    #[arg(long, short = 'n', default_value_t = DEFAULT_NETWORK_SIZE)]
    size: usize,

    /// Genesis template JSON. Defaults to the built-in local network template.
    #[arg(long)]
    genesis_template: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,

    /// Generate keys one at a time instead of in parallel.
    #[arg(long)]
    sequential: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let template = load_template(args.genesis_template.as_deref())?;
    let mode = if args.sequential {
        AssemblyMode::Sequential
    } else {
        AssemblyMode::Parallel
    };
    if args.size == 0 {
        warn!("network size is 0, genesis will carry no generated stakers");
    }

    let network = assemble_network(&template, args.size, &RsaIdentityGenerator::default(), mode)
        .context("assembling network")?;
    info!(nodes = network.key_pairs().len(), "network ready");

    let json = if args.pretty {
        serde_json::to_string_pretty(&network)
    } else {
        serde_json::to_string(&network)
    }
    .context("serializing network")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("writing network to stdout")?;
    Ok(())
}

/// Load a genesis template from `path`, or the built-in local one.
fn load_template(path: Option<&Path>) -> anyhow::Result<GenesisTemplate> {
    let Some(p) = path else {
        return GenesisTemplate::local().context("parsing built-in genesis template");
    };
    let json = std::fs::read_to_string(p)
        .with_context(|| format!("reading genesis template from {}", p.display()))?;
    GenesisTemplate::from_json(&json)
        .with_context(|| format!("parsing genesis template {}", p.display()))
}
