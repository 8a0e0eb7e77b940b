// SPDX-License-Identifier: MIT
//
// tonal — tonal color ramps synchronized into named paint styles.
//
// This is the host surface that wires the crates together:
//
//   tonal-color  → hex parsing, integer HSL conversion
//   tonal-ramp   → seed → token ramp derivation
//   tonal-studio → style document, synchronization, startup seeds
//
// One invocation is one message: a batch of swatches, either as
// `label=#rrggbb` arguments or as a JSON object piped on stdin
// (`{"primary": "#0d99ff", "accent": "#663399"}`). Each valid swatch fans
// out into sixteen named styles in the in-memory document. Malformed
// swatches are rejected here — before the generator ever sees them — and
// reported individually; the rest of the batch still applies.

use std::env;
use std::io::Read;
use std::process;

use regex::Regex;
use tonal_ramp::Palette;
use tonal_studio::{MemoryStyleStore, seed_colors, sync_swatch};
use tracing::warn;
use tracing_subscriber::EnvFilter;

// ─── Input message ──────────────────────────────────────────────────────────

/// A seed color as validated on the way in: six hex digits, optional `#`.
const COLOR_PATTERN: &str = r"^#?[0-9a-fA-F]{6}$";

/// One labeled swatch from the input message.
struct Swatch {
    label: String,
    color: String,
}

/// Parse `label=color` arguments into swatches.
fn swatches_from_args(args: &[String]) -> Result<Vec<Swatch>, String> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(label, color)| Swatch {
                    label: label.to_string(),
                    color: color.to_string(),
                })
                .ok_or_else(|| format!("`{arg}` is not a label=color pair"))
        })
        .collect()
}

/// Read one JSON object message from stdin: label → hex color.
fn swatches_from_stdin() -> Result<Vec<Swatch>, String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("reading stdin: {e}"))?;

    let message: serde_json::Value =
        serde_json::from_str(&input).map_err(|e| format!("parsing message: {e}"))?;
    let Some(entries) = message.as_object() else {
        return Err("message must be a JSON object of label → hex color".to_string());
    };

    entries
        .iter()
        .map(|(label, value)| {
            value
                .as_str()
                .map(|color| Swatch {
                    label: label.clone(),
                    color: color.to_string(),
                })
                .ok_or_else(|| format!("value for `{label}` must be a string"))
        })
        .collect()
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// Print one generated ramp, token per line.
fn print_ramp(label: &str, seed: &str, palette: &Palette) {
    println!("{label} ← {seed}");
    for (name, color) in palette.iter() {
        println!("  {name:<12} {color}");
    }
    println!();
}

fn print_usage() {
    eprintln!("usage: tonal label=#rrggbb [label=#rrggbb ...]");
    eprintln!("       echo '{{\"primary\": \"#0d99ff\"}}' | tonal");
    eprintln!();
    eprintln!("Each swatch fans out into sixteen named styles: the seed, eleven");
    eprintln!("lightness steps (label/5 ... label/95), and four alpha variants");
    eprintln!("(label/a20 ... label/a80). RUST_LOG=debug shows the generated ramps.");
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    let swatches = if args.is_empty() {
        swatches_from_stdin()
    } else {
        swatches_from_args(&args)
    };
    let swatches = match swatches {
        Ok(swatches) => swatches,
        Err(err) => {
            eprintln!("tonal: {err}");
            process::exit(2);
        }
    };
    if swatches.is_empty() {
        print_usage();
        process::exit(2);
    }

    let color_ok = Regex::new(COLOR_PATTERN).expect("color pattern is valid");

    let mut store = MemoryStyleStore::new();
    let mut failures = 0usize;

    for Swatch { label, color } in &swatches {
        if !color_ok.is_match(color) {
            warn!(%label, %color, "rejected malformed swatch");
            eprintln!("tonal: skipping `{label}`: `{color}` is not a six-digit hex color");
            failures += 1;
            continue;
        }

        match sync_swatch(&mut store, label, color) {
            Ok(palette) => print_ramp(label, color, &palette),
            Err(err) => {
                eprintln!("tonal: skipping `{label}`: {err}");
                failures += 1;
            }
        }
    }

    let seeds = seed_colors(&store);
    println!("document: {} styles", store.len());
    println!(
        "seeds:    primary {}  accent {}  cover {}",
        seeds.primary, seeds.accent, seeds.cover
    );

    if failures > 0 {
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    // ── Argument parsing ──────────────────────────────────────────────────

    #[test]
    fn parses_label_color_pairs() {
        let swatches = swatches_from_args(&args(&["primary=#ff0000", "accent=00ff00"])).unwrap();
        assert_eq!(swatches.len(), 2);
        assert_eq!(swatches[0].label, "primary");
        assert_eq!(swatches[0].color, "#ff0000");
        assert_eq!(swatches[1].color, "00ff00");
    }

    #[test]
    fn splits_on_the_first_equals_only() {
        let swatches = swatches_from_args(&args(&["a=b=c"])).unwrap();
        assert_eq!(swatches[0].label, "a");
        assert_eq!(swatches[0].color, "b=c");
    }

    #[test]
    fn rejects_arguments_without_equals() {
        assert!(swatches_from_args(&args(&["primary"])).is_err());
    }

    // ── Color validation ──────────────────────────────────────────────────

    #[test]
    fn color_pattern_accepts_six_hex_digits() {
        let re = Regex::new(COLOR_PATTERN).unwrap();
        assert!(re.is_match("#0d99ff"));
        assert!(re.is_match("0D99FF"));
    }

    #[test]
    fn color_pattern_rejects_everything_else() {
        let re = Regex::new(COLOR_PATTERN).unwrap();
        for bad in ["#12345", "#1234567", "#12345g", "red", "", "#", "b=c"] {
            assert!(!re.is_match(bad), "should reject {bad:?}");
        }
    }
}
