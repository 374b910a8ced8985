//! Entry point for the lesson-hierarchy pipeline.
//!
//! Usage: `lessons_to_json [lessons_file] [quiz_data_dir] [output_dir]`
//! (defaults: `lessons.yml`, `json/` and `build/`).

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use lessonpack::LessonPipelineConfig;
use lessonpack::pipeline::run_lesson_pipeline;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let lessons_file = args.next().unwrap_or_else(|| "lessons.yml".to_string());
    let quiz_data_dir = args.next().unwrap_or_else(|| "json".to_string());
    let output_dir = args.next().unwrap_or_else(|| "build".to_string());
    let config = LessonPipelineConfig::new(lessons_file, quiz_data_dir, output_dir);

    match run_lesson_pipeline(&config) {
        Ok(summary) => {
            tracing::info!("converted {} document(s)", summary.converted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("lesson-hierarchy pipeline failed: {e}");
            ExitCode::FAILURE
        }
    }
}
