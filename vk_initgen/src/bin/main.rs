use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use vk_initgen::{load_header, resolve_header_path, GenConfig, InitRegistry};

#[derive(Parser)]
#[command(name = "vk_initgen")]
#[command(about = "Generates sType-prefilled initializers from vulkan_core.h")]
struct Cli {
    /// Vulkan SDK root; the header is read from Include/vulkan/vulkan_core.h below it
    #[arg(long, env = "VULKAN_SDK")]
    sdk: Option<PathBuf>,
    /// Header to scan instead of the SDK's vulkan_core.h
    #[arg(long)]
    header: Option<PathBuf>,
    /// Write the initializers to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // stdout carries the generated code
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();

    let path = resolve_header_path(cli.header.as_deref(), cli.sdk.as_deref())?;
    let lines = load_header(&path)?;
    let registry = InitRegistry::new(&lines)
        .with_context(|| format!("'{}' does not look like vulkan_core.h", path.display()))?;

    match cli.output {
        Some(output) => {
            let file = File::create(&output)
                .with_context(|| format!("could not create '{}'", output.display()))?;
            registry.gen_initializers(&mut BufWriter::new(file), GenConfig::default())?;
        }
        None => {
            let stdout = io::stdout();
            registry.gen_initializers(&mut BufWriter::new(stdout.lock()), GenConfig::default())?;
        }
    }

    Ok(())
}
