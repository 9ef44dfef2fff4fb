//! Disha - localize in a landmark field from the landmarks in view.
//!
//! Usage:
//!   disha --field data/square.txt --x 1 --y 1 --radius 20
//!   disha -c configs/config.yaml --x 120 --y 45 --parallel
//!
//! Set `RUST_LOG=disha=debug` for per-phase logging.

use clap::Parser;
use log::{info, warn};
use std::error::Error;
use std::path::{Path, PathBuf};

use disha::config::{DEFAULT_CONFIG_PATH, DishaConfig};
use disha::io::load_field;
use disha::{NavigationResult, Navigator, WorldPoint};

/// Find where you are from the landmarks you can see
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark file (YAML, or one `x y` pair per line).
    /// Overrides `field.path` from the config.
    #[arg(short, long)]
    field: Option<PathBuf>,

    /// Reported X position
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    /// Reported Y position
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,

    /// Visibility radius around the closest landmark.
    /// Defaults to `navigation.visible_radius` from the config.
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Build the catalog and match on all cores
    #[arg(short, long)]
    parallel: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut config = DishaConfig::load_or_default(&args.config)?;
    if args.parallel {
        config.matching.use_parallel = true;
    }

    let navigator_config = config.to_navigator_config();
    navigator_config.validate()?;

    let field_path = args
        .field
        .or_else(|| config.field.path.as_ref().map(PathBuf::from))
        .ok_or("no landmark file given (use --field or set field.path in the config)")?;
    info!("Loading landmarks from {:?}", field_path);
    let field = load_field(&field_path)?;
    if let Some((min, max)) = field.bounds() {
        info!(
            "Field spans ({}, {}) to ({}, {})",
            min.x, min.y, max.x, max.y
        );
    }

    let radius = match args.radius {
        Some(r) if r > 0.0 && r.is_finite() => r,
        Some(r) => {
            warn!(
                "Invalid visible radius {}, using {}",
                r, navigator_config.visible_radius
            );
            navigator_config.visible_radius
        }
        None => navigator_config.visible_radius,
    };

    let navigator = Navigator::new(field, navigator_config);
    let position = WorldPoint::new(args.x, args.y);
    let result = navigator.navigate(position, radius);

    print_report(
        &field_path,
        navigator.field().len(),
        radius,
        &result,
        config.navigation.report_limit,
    );

    Ok(())
}

fn print_report(
    field_path: &Path,
    map_size: usize,
    radius: f64,
    result: &NavigationResult,
    report_limit: usize,
) {
    println!("Map: {}", field_path.display());
    println!("Map size: {}", map_size);
    println!("Visible radius: {}", radius);
    println!(
        "Offline phase took: {:.6} seconds",
        result.offline_time.as_secs_f64()
    );

    let Some(closest) = result.closest else {
        println!("Map is empty, nothing to match");
        return;
    };

    println!(
        "Closest point: ({}, {}), with distance: {:.3}",
        closest.point.x, closest.point.y, closest.distance
    );
    println!("Number of visible points: {}", result.visible_neighbors());
    println!(
        "Online phase took: {:.6} seconds",
        result.online_time.as_secs_f64()
    );

    let total = result.suggested_points.len();
    println!("Results: {} suggested point(s)", total);

    let shown = if report_limit == 0 {
        total
    } else {
        report_limit.min(total)
    };
    for p in &result.suggested_points[..shown] {
        let marker = if *p == closest.point { " *" } else { "" };
        println!("  ({}, {}){}", p.x, p.y, marker);
    }
    if shown < total {
        println!("  ... and {} more", total - shown);
    }
}
