use adstat::profile::profile_file;
use adstat::render;
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "adstat",
    about = "Streaming descriptive statistics for ad-archive CSV exports"
)]
pub struct Cli {
    /// CSV file to analyse
    pub file: PathBuf,

    /// Emit the full JSON report instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Number of top categorical values to list in the text summary
    #[arg(long, default_value_t = 1)]
    pub top: usize,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

pub fn run(cli: &Cli) -> Result<()> {
    let delimiter = u8::try_from(cli.delimiter as u32)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| {
            format!(
                "Delimiter must be a single ASCII character: {:?}",
                cli.delimiter
            )
        })?;

    let response = profile_file(&cli.file, delimiter, cli.top)
        .with_context(|| format!("Failed to profile {}", cli.file.display()))?;

    if cli.json {
        println!("{}", render::render_json(&response.report)?);
    } else {
        print!("{}", render::render_text(&response.report));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["adstat", "ads.csv"]);
        assert!(!cli.json);
        assert_eq!(cli.top, 1);
        assert_eq!(cli.delimiter, ',');
    }
}
