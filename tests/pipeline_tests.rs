mod common;

use common::{TestResult, sample_resume, sample_resume_value};
use std::fs;
use std::path::{Path, PathBuf};
use vitae::render::recording::RecordingEngine;
use vitae::{Pipeline, PipelineError, cli, template};

fn recording_pipeline() -> Pipeline<RecordingEngine> {
    Pipeline::new(RecordingEngine::new(), template::engine_config(Path::new(".")))
        .expect("recording engine accepts any configuration")
}

#[test]
fn engine_config_registers_both_resume_fonts() {
    let pipeline = recording_pipeline();
    let fonts = pipeline.engine().registered_fonts();
    assert_eq!(fonts.len(), 2);
    assert_eq!(fonts[0].0, "Figtree");
    assert!(fonts[0].1.ends_with("assets/fonts/Figtree-Bold.ttf"));
    assert_eq!(fonts[1].0, "Lato");
    assert!(fonts[1].1.ends_with("assets/fonts/Lato-Regular.ttf"));
}

#[test]
fn configured_hyphenation_keeps_words_whole() {
    let pipeline = recording_pipeline();
    // The callback must map any word to a one-element sequence containing
    // the word unchanged.
    let fragments = pipeline.engine().hyphenate("incomprehensibilities");
    assert_eq!(fragments, vec!["incomprehensibilities".to_string()]);
}

#[test]
fn render_to_file_hands_the_engine_one_document() -> TestResult {
    let data = sample_resume();
    let mut pipeline = recording_pipeline();
    pipeline.render_to_file(&data, Path::new("out.pdf"))?;

    let rendered = pipeline.engine().rendered();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].1, PathBuf::from("out.pdf"));
    assert_eq!(rendered[0].0.title, "Jane Doe");
    Ok(())
}

#[test]
fn driver_reports_the_output_filename_on_success() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("resume.json");
    fs::write(&input, serde_json::to_string(&sample_resume_value())?)?;

    let message = cli::run_with_engine(&input, RecordingEngine::new(), Path::new("."))?;
    assert_eq!(message, "Content rendered to out.pdf");
    assert!(message.contains("out.pdf"));
    Ok(())
}

#[test]
fn missing_argument_is_a_usage_error() {
    let err = cli::parse_args(vec!["vitae".to_string()]).unwrap_err();
    assert!(matches!(err, PipelineError::Usage(_)));
    assert!(err.to_string().contains("Usage"));
}

#[test]
fn extra_arguments_are_a_usage_error() {
    let err = cli::parse_args(vec![
        "vitae".to_string(),
        "a.json".to_string(),
        "b.json".to_string(),
    ])
    .unwrap_err();
    assert!(matches!(err, PipelineError::Usage(_)));
}

#[test]
fn single_argument_is_the_input_path() {
    let path = cli::parse_args(vec!["vitae".to_string(), "resume.json".to_string()]).unwrap();
    assert_eq!(path, PathBuf::from("resume.json"));
}

#[test]
fn malformed_json_is_a_parse_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("broken.json");
    fs::write(&input, "{ this is not json")?;

    let err = cli::run_with_engine(&input, RecordingEngine::new(), Path::new(".")).unwrap_err();
    assert!(matches!(err, PipelineError::Json(_)));
    Ok(())
}

#[test]
fn unreadable_input_is_an_io_error() {
    let err = cli::run_with_engine(
        Path::new("does-not-exist.json"),
        RecordingEngine::new(),
        Path::new("."),
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
}
