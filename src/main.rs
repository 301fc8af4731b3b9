use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser};
use emission_colors::color::Color;
use emission_colors::color_system::ColorSystem;
use emission_colors::csv_reader;
use log::{info, warn};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emission-colors")]
#[command(about = "Assign stable chart colors to the groups in a CSV column", long_about = None)]
struct Args {
    #[arg(short = 'g', long = "group", required = true, help = "Group column (name or 0-based index)")]
    group_column: String,

    #[arg(short = 'i', long = "input", help = "Read CSV from this file instead of stdin")]
    input: Option<PathBuf>,

    #[arg(long = "override", value_name = "NAME=COLOR", help = "Pin a group to a color (repeatable)")]
    overrides: Vec<String>,

    #[arg(long = "max-series", default_value = "10", help = "Warn when more groups than this are present")]
    max_series: usize,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, help = "Verbose logging (-v info, -vv debug)")]
    verbose: u8,
}

fn parse_override(raw: &str) -> Result<(String, Color)> {
    let (name, color) = raw
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("Override '{}' must look like NAME=COLOR", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Override '{}' has an empty group name", raw));
    }

    Ok((name.to_string(), Color::new(color.trim())))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let csv_data = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            csv_reader::read_csv(file)
        }
        None => csv_reader::read_csv(io::stdin()),
    }
    .context("Failed to read CSV")?;

    let selector = csv_reader::parse_column_selector(&args.group_column);
    let (column_name, groups) = csv_reader::extract_group_names(&csv_data, selector)
        .context("Failed to extract group column")?;
    info!("{} groups in column '{}'", groups.len(), column_name);

    if groups.len() > args.max_series {
        warn!(
            "{} groups exceed the {}-series limit; colors will repeat past the palette",
            groups.len(),
            args.max_series
        );
    }

    let mut system = ColorSystem::new();
    for raw in &args.overrides {
        let (name, color) = parse_override(raw)?;
        if !color.is_hex_token() {
            warn!("Override color '{}' for '{}' is not #RRGGBB", color, name);
        }
        system.set_color_for_group(name, color);
    }

    let assigned = system.assign_colors(&groups);

    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());
    writer
        .write_record([column_name.as_str(), "color"])
        .context("Failed to write CSV header")?;
    for (name, color) in &assigned {
        writer
            .write_record([name.as_str(), color.as_str()])
            .context("Failed to write CSV record")?;
    }
    writer.flush().context("Failed to flush stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        let (name, color) = parse_override("Power stations=#123456").unwrap();
        assert_eq!(name, "Power stations");
        assert_eq!(color.as_str(), "#123456");
    }

    #[test]
    fn test_parse_override_splits_on_last_equals() {
        let (name, color) = parse_override("a=b=#000000").unwrap();
        assert_eq!(name, "a=b");
        assert_eq!(color.as_str(), "#000000");
    }

    #[test]
    fn test_parse_override_missing_equals() {
        let result = parse_override("Power");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("NAME=COLOR"));
    }

    #[test]
    fn test_parse_override_empty_name() {
        assert!(parse_override("=#123456").is_err());
    }
}
