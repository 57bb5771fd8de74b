use clap::Parser;

/// Shelf - browse your album collection by artist, year, week or recency 💿
#[derive(Parser, Debug)]
#[command(name = "shelf", version, about)]
pub struct Args {
    /// Album library JSON (defaults to library_path from config.toml)
    #[arg(long, short = 'l')]
    pub library: Option<String>,

    /// Start with this preset (e.g. "By Year")
    #[arg(long, short = 'p')]
    pub preset: Option<String>,

    /// Print the grouped list to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
