use std::path::PathBuf;

use clap::Parser;

/// Explore US bikeshare trip data interactively.
#[derive(Debug, Clone, Parser)]
#[command(name = "bikeshare", version, about)]
pub struct Config {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv.
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Raw rows shown per page.
    #[arg(long, env = "BIKESHARE_PAGE_SIZE", default_value_t = 5, value_parser = parse_page_size)]
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("."),
            page_size: 5,
        }
    }
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid page size '{s}': {e}")),
    }
}
