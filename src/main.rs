// src/main.rs
//! LiveView Navigator - coordinate arithmetic from the command line

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use liveview_nav::{
    config::NavConfig, logging, CoordinateUpdate, Endianness, Geopoint, GeopointFormat,
    UpdateReceiver,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "liveview-nav", version, about = "Geographic point arithmetic and formatting")]
struct Cli {
    /// Coordinate format (defaults to the configured one)
    #[arg(long, global = true)]
    format: Option<GeopointFormat>,

    /// Byte order for binary records (defaults to the configured one)
    #[arg(long, global = true)]
    endianness: Option<Endianness>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
struct PointArgs {
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

impl PointArgs {
    fn geopoint(&self) -> Geopoint {
        Geopoint::new(self.lat, self.lon)
    }
}

#[derive(Args, Debug, Clone, Copy)]
struct TargetArgs {
    /// Target latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    to_lat: f64,
    /// Target longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    to_lon: f64,
}

impl TargetArgs {
    fn geopoint(&self) -> Geopoint {
        Geopoint::new(self.to_lat, self.to_lon)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print a point in one or all coordinate formats
    Format {
        #[command(flatten)]
        point: PointArgs,
        /// Print every format
        #[arg(long)]
        all: bool,
    },
    /// Great-circle distance in kilometers
    Distance {
        #[command(flatten)]
        from: PointArgs,
        #[command(flatten)]
        to: TargetArgs,
    },
    /// Initial bearing in degrees
    Bearing {
        #[command(flatten)]
        from: PointArgs,
        #[command(flatten)]
        to: TargetArgs,
    },
    /// Point reached by moving along a bearing
    Project {
        #[command(flatten)]
        from: PointArgs,
        /// Bearing in degrees
        #[arg(long, allow_hyphen_values = true)]
        bearing: f64,
        /// Distance in kilometers
        #[arg(long)]
        distance: f64,
    },
    /// Distance, bearing and destination label from a provider update
    Navigate {
        #[command(flatten)]
        from: PointArgs,
        /// Provider extras, e.g. '{"latitude": 52.6, "longitude": 10.05}'
        update: String,
    },
    /// Encode a point as a hex binary record
    Encode {
        #[command(flatten)]
        point: PointArgs,
    },
    /// Decode a hex binary record
    Decode {
        /// 32 hex digits
        record: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = NavConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.log_level)?;
    debug!("using config {:?}", config);

    let format = cli.format.unwrap_or(config.default_format);
    let endianness = cli.endianness.unwrap_or(config.record_endianness);

    match cli.command {
        Command::Format { point, all } => {
            let gp = point.geopoint();
            if all {
                for f in GeopointFormat::ALL {
                    println!("{:<26} {}", f.display_name(), gp.format(f));
                }
            } else {
                println!("{}", gp.format(format));
            }
        }
        Command::Distance { from, to } => {
            println!("{:.3}", from.geopoint().distance_to(&to.geopoint()));
        }
        Command::Bearing { from, to } => {
            println!("{:.1}", from.geopoint().bearing_to(&to.geopoint()));
        }
        Command::Project { from, bearing, distance } => {
            let projected = from.geopoint().project(bearing, distance);
            println!("{}", projected.format(format));
        }
        Command::Navigate { from, update } => {
            let update = CoordinateUpdate::from_json(&update).context("Invalid update")?;
            let mut receiver = UpdateReceiver::from_config(&config);
            receiver.on_receive(update);
            if let Some(nav) = receiver.navigate_from(&from.geopoint()) {
                println!("{}", nav.destination);
                println!("{:.3} km @ {:.1}°", nav.distance_km, nav.bearing_deg);
            }
        }
        Command::Encode { point } => {
            println!("{}", hex::encode(point.geopoint().to_record(endianness)));
        }
        Command::Decode { record } => {
            let bytes = hex::decode(record.trim()).context("Record is not valid hex")?;
            let gp = Geopoint::from_record(&bytes, endianness)?;
            println!("{} {}", gp.latitude(), gp.longitude());
            println!("{}", gp.format(format));
        }
    }

    Ok(())
}
