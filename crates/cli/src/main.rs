#![deny(unsafe_code)]
//! CLI binary for the annotation editor color model.
//!
//! Subcommands:
//! - `convert <color>` — show a CSS color as HSV, RGB, Hex and alpha
//! - `hsv <h> <s> <v>` — format an HSV color (plus alpha) as CSS
//! - `contrast <hex>` — black or white label color for a fill
//! - `swatches` — print a swatch set, or render it as PNG
//! - `plane` — render the saturation/value box for a hue as PNG
//! - `list` — print swatch sets and alpha formats

mod error;

use annotate_color_core::{
    contrast_text_color, format_css, hsv_to_rgb, parse_color, Hsv, PickerConfig, SwatchSet,
};
use annotate_color_preview::pixel::{saturation_value_plane, swatch_strip};
use annotate_color_preview::snapshot::write_png;
use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "annotate-color", about = "Color model CLI for the annotation editor")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Picker configuration as a JSON string.
    #[arg(long, global = true, default_value = "{}")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a CSS color and show every representation.
    Convert {
        /// `transparent`, `#RRGGBB`, `#RGB`, `rgb(...)` or `rgba(...)`.
        color: String,
    },
    /// Convert HSV (plus alpha) to a CSS color string.
    Hsv {
        /// Hue in degrees; wraps modulo 360.
        #[arg(allow_hyphen_values = true)]
        h: f64,
        /// Saturation in percent.
        s: f64,
        /// Value in percent.
        v: f64,
        /// Alpha in percent.
        #[arg(short, long, default_value_t = 100.0)]
        alpha: f64,
    },
    /// Pick black or white label text for a hex fill color.
    Contrast {
        /// Fill color as hex.
        color: String,
    },
    /// Print the colors of a swatch set, or render them with --output.
    Swatches {
        /// Swatch set name; defaults to the configured set.
        #[arg(long)]
        set: Option<String>,

        /// Write a PNG strip instead of printing.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Square size per swatch in pixels.
        #[arg(long, default_value_t = 32)]
        cell: usize,
    },
    /// Render the saturation/value box for a hue as PNG.
    Plane {
        /// Hue in degrees.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        hue: f64,

        /// Width and height in pixels.
        #[arg(long, default_value_t = 256)]
        size: usize,

        /// Output file path.
        #[arg(short, long, default_value = "plane.png")]
        output: PathBuf,
    },
    /// List swatch sets and alpha formats.
    List,
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let params: serde_json::Value = serde_json::from_str(&cli.config)
        .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
    let config = PickerConfig::from_json(&params)?;
    log::debug!("using {config:?}");

    match cli.command {
        Command::Convert { color } => {
            let parsed = parse_color(&color)?;
            let css = parsed.to_css(config.alpha_format);
            let label = parsed.rgb.contrast_text().to_css_hex();
            if cli.json {
                print_json(&serde_json::json!({
                    "input": color,
                    "hex": parsed.rgb.to_hex(),
                    "rgb": [parsed.rgb.r, parsed.rgb.g, parsed.rgb.b],
                    "hsv": parsed.hsv,
                    "alpha": parsed.alpha,
                    "css": css,
                    "contrast_text": label,
                }))?;
            } else {
                println!("hex      {}", parsed.rgb.to_hex());
                println!(
                    "rgb      {}, {}, {}",
                    parsed.rgb.r, parsed.rgb.g, parsed.rgb.b
                );
                println!(
                    "hsv      {:.1}, {:.1}%, {:.1}%",
                    parsed.hsv.h, parsed.hsv.s, parsed.hsv.v
                );
                println!("alpha    {}%", parsed.alpha);
                println!("css      {css}");
                println!("contrast {label}");
            }
        }
        Command::Hsv { h, s, v, alpha } => {
            let hsv = Hsv::new(h, s, v);
            let rgb = hsv_to_rgb(hsv);
            let css = format_css(rgb, alpha, config.alpha_format);
            if cli.json {
                print_json(&serde_json::json!({
                    "hsv": hsv,
                    "rgb": [rgb.r, rgb.g, rgb.b],
                    "hex": rgb.to_hex(),
                    "css": css,
                }))?;
            } else {
                println!("{css}");
            }
        }
        Command::Contrast { color } => {
            let text = contrast_text_color(&color)?;
            if cli.json {
                print_json(&serde_json::json!({ "fill": color, "text": text }))?;
            } else {
                println!("{text}");
            }
        }
        Command::Swatches { set, output, cell } => {
            let name = set.unwrap_or_else(|| config.swatch_set.clone());
            let swatches = SwatchSet::from_name(&name)?;
            match output {
                Some(path) => {
                    let raster = swatch_strip(swatches.colors(), cell)?;
                    write_png(&raster, &path)?;
                    log::info!("wrote {} swatches to {}", swatches.len(), path.display());
                    if cli.json {
                        print_json(&serde_json::json!({
                            "set": name,
                            "output": path.display().to_string(),
                        }))?;
                    } else {
                        eprintln!("rendered {name} ({} swatches) -> {}", swatches.len(), path.display());
                    }
                }
                None if cli.json => {
                    print_json(&serde_json::json!({
                        "set": name,
                        "colors": swatches.colors(),
                    }))?;
                }
                None => {
                    for color in swatches.colors() {
                        println!("{color}");
                    }
                }
            }
        }
        Command::Plane { hue, size, output } => {
            let raster = saturation_value_plane(hue, size, size)?;
            write_png(&raster, &output)?;
            log::info!("wrote {size}x{size} plane for hue {hue} to {}", output.display());
            if cli.json {
                print_json(&serde_json::json!({
                    "hue": hue,
                    "size": size,
                    "output": output.display().to_string(),
                }))?;
            } else {
                eprintln!(
                    "rendered hue {hue} ({size}x{size}) -> {}",
                    output.display()
                );
            }
        }
        Command::List => {
            let sets = SwatchSet::list_names();
            let formats = ["canonical", "always_rgba"];
            if cli.json {
                print_json(&serde_json::json!({
                    "swatch_sets": sets,
                    "alpha_formats": formats,
                }))?;
            } else {
                println!("Swatch sets:");
                for name in sets {
                    println!("  {name}");
                }
                println!("Alpha formats:");
                println!("  {}", formats.join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
