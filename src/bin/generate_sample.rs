//! Writes small synthetic `chicago.csv`, `new_york_city.csv` and
//! `washington.csv` files so the explorer can run without the real datasets.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bikeshare_explorer::data::model::City;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "generate_sample", about = "Write deterministic sample bikeshare CSVs")]
struct Args {
    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Trips per city.
    #[arg(long, default_value_t = 500)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[lo, hi)`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo) as f64) as i64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.range(0, items.len() as i64) as usize]
    }
}

fn stations(city: City) -> &'static [&'static str] {
    match city {
        City::Chicago => &[
            "Streeter Dr & Grand Ave",
            "Clinton St & Washington Blvd",
            "Lake Shore Dr & Monroe St",
            "Canal St & Adams St",
            "Michigan Ave & Oak St",
        ],
        City::NewYorkCity => &[
            "Pershing Square North",
            "E 17 St & Broadway",
            "W 21 St & 6 Ave",
            "Broadway & E 22 St",
            "Lafayette St & E 8 St",
        ],
        City::Washington => &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "15th & P St NW",
            "Massachusetts Ave & Dupont Circle NW",
        ],
    }
}

/// A trip start between 2017-01-01 and 2017-06-30, skewed to commute hours.
fn start_time(first: NaiveDateTime, rng: &mut SimpleRng) -> NaiveDateTime {
    let day = rng.range(0, 181);
    let hour = if rng.next_f64() < 0.5 {
        *[7i64, 8, 8, 9, 17, 17, 18]
            .get(rng.range(0, 7) as usize)
            .unwrap_or(&8)
    } else {
        rng.range(0, 24)
    };
    first + Duration::days(day) + Duration::hours(hour) + Duration::seconds(rng.range(0, 3600))
}

fn write_city(city: City, args: &Args, rng: &mut SimpleRng) -> Result<PathBuf> {
    let path = city.path_in(&args.out_dir);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    let with_demographics = city != City::Washington;

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if with_demographics {
        header.extend(["Gender", "Birth Year"]);
    }
    writer.write_record(&header)?;

    let first = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("invalid first sample date")?;
    let names = stations(city);
    for i in 0..args.rows {
        let start = start_time(first, rng);
        let seconds = rng.range(60, 3600);
        let end = start + Duration::seconds(seconds);
        let user_type = if rng.next_f64() < 0.8 {
            "Subscriber"
        } else {
            "Customer"
        };

        let mut record = vec![
            i.to_string(),
            start.format("%Y-%m-%d %H:%M:%S").to_string(),
            end.format("%Y-%m-%d %H:%M:%S").to_string(),
            seconds.to_string(),
            rng.pick(names).to_string(),
            rng.pick(names).to_string(),
            user_type.to_string(),
        ];
        if with_demographics {
            // Customers rarely report demographics.
            if user_type == "Customer" && rng.next_f64() < 0.7 {
                record.extend([String::new(), String::new()]);
            } else {
                record.push(rng.pick(&["Male", "Male", "Female"]).to_string());
                record.push(format!("{:.1}", rng.range(1940, 2002) as f64));
            }
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(path)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for city in City::ALL {
        let path = write_city(city, &args, &mut rng)?;
        println!("Wrote {} trips to {}", args.rows, path.display());
    }
    Ok(())
}
