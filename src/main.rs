use std::env;
use std::path::PathBuf;
use std::process;
use vitae::cli;
use vitae::render::pdf::PdfEngine;

/// Renders one resume JSON file to the PDF path named inside it.
fn main() {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info");
        }
    }
    env_logger::init();

    let input = match cli::parse_args(env::args()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Font and icon assets ship alongside the binary.
    let asset_root = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    let engine = PdfEngine::with_asset_root(&asset_root);
    match cli::run_with_engine(&input, engine, &asset_root) {
        Ok(message) => println!("{}", message),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
