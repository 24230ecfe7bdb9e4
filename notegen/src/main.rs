// notegen — CLI entry point.
//
// Generates a note sequence for a chosen style, prints a summary and a
// short preview, and optionally writes the sequence to a JSON file.
//
// Usage:
//   cargo run -p notegen -- [--style NAME] [--tempo BPM] [--duration SECS]
//     [--seed N] [--out FILE] [--all]
//
// Styles: ambient, classical, electronic, jazz, rock, cinematic
// --all generates every style, writing notegen_<style>.json for each.

use notegen::export::write_json;
use notegen::generator::MusicGenerator;
use notegen::style::Style;
use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let style_name: String =
        parse_flag(&args, "--style").unwrap_or_else(|| "ambient".to_string());
    let tempo: f64 = parse_flag(&args, "--tempo").unwrap_or(120.0);
    let duration: f64 = parse_flag(&args, "--duration").unwrap_or(30.0);
    let seed: Option<u64> = parse_flag(&args, "--seed");
    let out: Option<String> = parse_flag(&args, "--out");
    let all = args.iter().any(|a| a == "--all");

    println!("=== notegen ===");
    println!("Tempo: {} BPM", tempo);
    println!("Duration: {}s", duration);
    if let Some(s) = seed {
        println!("Seed: {}", s);
    }
    println!();

    let generator = match seed {
        Some(s) => MusicGenerator::seeded(s),
        None => MusicGenerator::new(),
    };

    if all {
        // One generator for the whole sweep, so every style shares the
        // same scorer weights.
        for style in Style::ALL {
            let file = format!("notegen_{}.json", style.name());
            run_style(&generator, style.name(), tempo, duration, Some(file.as_str()));
            println!();
        }
    } else {
        run_style(&generator, &style_name, tempo, duration, out.as_deref());
    }
}

/// Generate one style, print the summary and preview, and write the
/// JSON file if requested. Exits the process on failure.
fn run_style(
    generator: &MusicGenerator,
    style_name: &str,
    tempo: f64,
    duration: f64,
    out: Option<&str>,
) {
    let notes = match generator.generate(style_name, tempo, duration) {
        Ok(notes) => notes,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Styles: {}", Style::ALL.map(|s| s.name()).join(", "));
            std::process::exit(1);
        }
    };

    println!("[{}]", style_name);
    if let Some(style) = Style::from_name(style_name) {
        let config = style.config();
        println!(
            "  Scale: {} | progression: {:?} | note probability: {}",
            config.scale.name(),
            config.progression,
            config.note_probability
        );
    }
    println!("  Total beats: {:.1}", tempo / 60.0 * duration);
    println!("  Notes: {}", notes.len());

    if !notes.is_empty() {
        println!("  Preview:");
        for note in notes.iter().take(5) {
            println!(
                "    {:<4} at {:6.2}s  vel {:.2}  dur {:.2}s",
                note.note_name(),
                note.start_time,
                note.velocity,
                note.duration
            );
        }
    }

    if let Some(path) = out {
        match write_json(style_name, tempo, duration, &notes, Path::new(path)) {
            Ok(()) => println!("  Wrote {}", path),
            Err(e) => {
                eprintln!("  Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
