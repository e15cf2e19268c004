use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use mendpad::{AutoCorrect, Config};

/// Run one correction pass over a file (or stdin) and print the result.
/// The GUI editor drives the same core through `EditorSession`; this
/// binary is the pipe-friendly shell around it.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load();
    if !config.enabled {
        info!("Autocorrect disabled in config, passing text through");
    }

    let mut args = std::env::args().skip(1);
    let mut input_path: Option<PathBuf> = None;
    let mut dict_path = config.dictionary_path.clone();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dict" => {
                let path = args.next().context("--dict requires a path")?;
                dict_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                eprintln!("Usage: mendpad [--dict corrections.json] [FILE]");
                eprintln!("Reads FILE (or stdin) and writes the corrected text to stdout.");
                return Ok(());
            }
            _ => input_path = Some(PathBuf::from(arg)),
        }
    }

    let text = match input_path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let output = if config.enabled {
        let corrector = AutoCorrect::new(dict_path.as_deref());
        info!("Running correction pass over {} bytes", text.len());
        corrector.correct_text(&text)
    } else {
        text
    };

    print!("{}", output);
    Ok(())
}
