//! Entry point for the word-timing pipeline.
//!
//! Usage: `words_to_json [input_dir] [output_dir]`
//! (defaults: `input/` and `build/`).

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use lessonpack::WordPipelineConfig;
use lessonpack::pipeline::run_word_pipeline;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let input_dir = args.next().unwrap_or_else(|| "input".to_string());
    let output_dir = args.next().unwrap_or_else(|| "build".to_string());
    let config = WordPipelineConfig::new(input_dir, output_dir);

    match run_word_pipeline(&config) {
        Ok(summary) => {
            tracing::info!("converted {} document(s)", summary.converted);
            if summary.failures.is_empty() {
                ExitCode::SUCCESS
            } else {
                for failure in &summary.failures {
                    eprintln!("failed: {}: {}", failure.source, failure.error);
                }
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("word-timing pipeline failed: {e}");
            ExitCode::FAILURE
        }
    }
}
