use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sufra_shared::{Domain, RenderStyle};

#[derive(Parser, Debug)]
#[command(name = "sufra", version, about = "Localize backend error payloads into Arabic")]
pub struct Cli {
    /// TOML configuration file; environment variables are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate an error payload for one domain
    Translate(TranslateArgs),
    /// Print the shape of an error payload
    Classify(ClassifyArgs),
}

#[derive(clap::Args, Debug)]
pub struct TranslateArgs {
    /// auth, admin-user, admin-branch or delivery-area
    #[arg(long, short)]
    pub domain: Domain,

    /// plain or marked-up (defaults to the configured style)
    #[arg(long, short)]
    pub style: Option<RenderStyle>,

    /// Payload file (JSON); reads stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Payload file (JSON); reads stdin when omitted
    pub file: Option<PathBuf>,
}
