use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_atlas::models::{ConfigOverrides, EnumerationConfig};
use color_atlas::services::{Enumerator, JsonFileWriter, TracingProgress};
use color_metrics::{
    contrast_against_black, contrast_against_white, random_rgb, relative_luminance, rgb_to_hsl,
    Rgb,
};

#[derive(Parser)]
#[command(name = "color-atlas")]
#[command(about = "Enumerate a quantized RGB space with hex, HSL and WCAG contrast metrics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every color at the given depth and write batch files
    Generate {
        /// YAML config file (CLI flags override its values)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Bits per channel (1-8)
        #[arg(short, long)]
        bits: Option<u8>,

        /// Also enumerate every depth up to this one
        #[arg(long)]
        bits_end: Option<u8>,

        /// Maximum records per batch file
        #[arg(long)]
        batch_size: Option<usize>,

        /// Log progress every N colors
        #[arg(short, long)]
        progress_interval: Option<u64>,

        /// Directory for batch files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print hex, HSL, luminance and contrast ratios for colors
    Inspect {
        /// Colors as hex, e.g. "#542cfa" or "ff8000"
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Print random colors with their metrics
    Random {
        /// Number of colors
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            config,
            bits,
            bits_end,
            batch_size,
            progress_interval,
            output_dir,
            pretty,
        }) => {
            init_tracing("color_atlas=info");
            let overrides = ConfigOverrides {
                bits_per_channel: bits,
                batch_size,
                progress_interval,
                output_dir,
                pretty,
            };
            run_generate_command(config, overrides, bits_end)
        }
        Some(Commands::Inspect { colors }) => {
            init_tracing("color_atlas=warn");
            run_inspect_command(&colors)
        }
        Some(Commands::Random { count }) => {
            init_tracing("color_atlas=warn");
            run_random_command(count);
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Enumerate one or more depths, writing batch files for each
fn run_generate_command(
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    bits_end: Option<u8>,
) -> anyhow::Result<()> {
    let base = match config_path {
        Some(ref path) => EnumerationConfig::load(path)?,
        None => EnumerationConfig::default(),
    };
    let config = base.with_overrides(&overrides);
    config.validate()?;

    let bits_start = config.bits_per_channel;
    let bits_end = bits_end.unwrap_or(bits_start);
    if bits_end < bits_start {
        anyhow::bail!("--bits-end ({bits_end}) must not be below --bits ({bits_start})");
    }

    for bits in bits_start..=bits_end {
        let config = EnumerationConfig {
            bits_per_channel: bits,
            ..config.clone()
        };
        let total = config.total_colors()?;

        let mut writer = JsonFileWriter::new(&config.output_dir, bits)
            .with_context(|| format!("Cannot prepare output directory for {bits}-bit run"))?
            .pretty(config.pretty);
        let mut progress = TracingProgress::new(total);
        let mut enumerator = Enumerator::new(config)?;

        let summary = enumerator
            .run(&mut writer, &mut progress)
            .with_context(|| format!("Enumeration at {bits} bits per channel failed"))?;

        println!(
            "{} bits/channel: {} colors in {} batch files under {}",
            summary.bits_per_channel,
            summary.colors,
            summary.batches,
            writer.output_dir().display()
        );
    }

    Ok(())
}

fn print_color_report(color: Rgb) {
    let Rgb { red, green, blue } = color;
    println!("{color}  rgb({red}, {green}, {blue})  {}", rgb_to_hsl(color));
    println!("  Relative luminance: {}", relative_luminance(color));
    println!("  Against white 1:{}", contrast_against_white(color));
    println!("  Against black 1:{}", contrast_against_black(color));
}

fn run_inspect_command(colors: &[String]) -> anyhow::Result<()> {
    for input in colors {
        let color: Rgb = input
            .parse()
            .with_context(|| format!("Invalid color {input:?}"))?;
        print_color_report(color);
    }
    Ok(())
}

fn run_random_command(count: usize) {
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        print_color_report(random_rgb(&mut rng));
    }
}

fn run_status_command() {
    println!("Color Atlas v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Commands:");
    println!("  generate   Enumerate a quantized RGB space into JSON batch files");
    println!("  inspect    Show metrics for one or more hex colors");
    println!("  random     Show metrics for random colors");
    println!();
    println!("Example:");
    println!("  color-atlas generate --bits 8 --progress-interval 100000 --output-dir out");
}
