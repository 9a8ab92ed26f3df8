//! CLI handler for cleaning transcripts.
//!
//! Each non-empty input line is treated as one finalized utterance and
//! cleaned independently, matching how a recording session hands over
//! segments one at a time.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::warn;

use crate::cli::args::{CleanCliArgs, OutputFormat};
use crate::config::{CleanupConfig, Config};
use crate::pipeline::TranscriptCleaner;

/// One cleaned utterance, for JSON output.
#[derive(Serialize)]
struct CleanedSegment {
    raw: String,
    cleaned: String,
}

pub fn handle_clean_command(args: CleanCliArgs) -> Result<()> {
    let input = read_input(&args)?;

    let config = Config::load()?;
    let cleanup = apply_overrides(config.cleanup, &args);
    let cleaner = TranscriptCleaner::new(&cleanup)?;

    let segments: Vec<CleanedSegment> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|raw| CleanedSegment {
            raw: raw.to_string(),
            cleaned: cleaner.clean(raw),
        })
        .collect();

    for segment in segments.iter().filter(|s| s.cleaned.is_empty()) {
        warn!("Nothing meaningful in segment {:?}", segment.raw);
    }

    let output_text = format_output(&segments, args.format)?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &output_text).context("Failed to write output file")?;
        eprintln!("Cleaned transcript saved to: {}", output_path.display());
    } else if !output_text.is_empty() {
        println!("{output_text}");
    }

    Ok(())
}

/// Resolve the raw transcript from the argument, a file, or stdin.
fn read_input(args: &CleanCliArgs) -> Result<String> {
    match (&args.text, &args.file) {
        (Some(_), Some(_)) => bail!("Pass transcript text or --file, not both"),
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => {
            std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")
        }
    }
}

/// CLI flags win over the config file for the comma stage.
fn apply_overrides(mut cleanup: CleanupConfig, args: &CleanCliArgs) -> CleanupConfig {
    if args.commas {
        cleanup.insert_commas = true;
    }
    if args.no_commas {
        cleanup.insert_commas = false;
    }
    cleanup
}

fn format_output(segments: &[CleanedSegment], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(segments
            .iter()
            .map(|s| s.cleaned.as_str())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(segments).context("Failed to serialize output")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(raw: &str, cleaned: &str) -> CleanedSegment {
        CleanedSegment {
            raw: raw.to_string(),
            cleaned: cleaned.to_string(),
        }
    }

    #[test]
    fn test_format_output_text_skips_empty_segments() {
        let segments = vec![
            segment("i go to school", "I go to school."),
            segment("um uh", ""),
            segment("what time is it", "What time is it?"),
        ];
        assert_eq!(
            format_output(&segments, OutputFormat::Text).unwrap(),
            "I go to school.\nWhat time is it?"
        );
    }

    #[test]
    fn test_format_output_json() {
        let segments = vec![segment("um hello", "Hello.")];
        let output = format_output(&segments, OutputFormat::Json).unwrap();
        assert!(output.contains("\"raw\""));
        assert!(output.contains("\"cleaned\""));
        assert!(output.contains("Hello."));
    }

    #[test]
    fn test_comma_flags_override_config() {
        let base = CleanupConfig::default();

        let on = apply_overrides(
            base.clone(),
            &CleanCliArgs {
                commas: true,
                ..CleanCliArgs::default()
            },
        );
        assert!(on.insert_commas);

        let off = apply_overrides(
            CleanupConfig {
                insert_commas: true,
                ..base
            },
            &CleanCliArgs {
                no_commas: true,
                ..CleanCliArgs::default()
            },
        );
        assert!(!off.insert_commas);
    }

    #[test]
    fn test_read_input_rejects_text_and_file_together() {
        let args = CleanCliArgs {
            text: Some("hello".to_string()),
            file: Some("transcript.txt".into()),
            ..CleanCliArgs::default()
        };
        assert!(read_input(&args).is_err());
    }
}
