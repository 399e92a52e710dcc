use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seasonize::renamer::TreeRenamer;

#[derive(Parser, Debug)]
#[command(name = "seasonize")]
#[command(about = "Renames TV season directories and episode files to Season N / SxxEyy naming")]
struct Args {
    /// Root of the directory tree to normalize
    directory: PathBuf,

    /// Rename matched subdirectories inside their own parent instead of
    /// moving them under the root
    #[arg(long)]
    in_place: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args = Args::parse();
    if !args.directory.is_dir() {
        bail!("{} is not a valid directory", args.directory.display());
    }

    let stats = TreeRenamer::new(&args.directory, args.in_place).run()?;
    println!(
        "Summary: {} file(s) renamed, {} directory(ies) renamed, {} directory(ies) left untouched",
        stats.files_renamed, stats.dirs_renamed, stats.dirs_skipped
    );
    Ok(())
}
