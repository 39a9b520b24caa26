use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};

use bec_core::{render, translate, DEFAULT_INDENT};

#[derive(Parser)]
#[command(name = "bec")]
#[command(about = "Translates BEC configuration documents into JSON", version)]
struct Cli {
    /// Source file to translate; reads standard input when omitted
    input: Option<PathBuf>,

    /// Write the JSON here instead of to standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per indentation level in the JSON output
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let (source, file_name) = match &cli.input {
        Some(path) => {
            let source = fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            (source, path.display().to_string())
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .into_diagnostic()
                .wrap_err("failed to read standard input")?;
            (source, "<stdin>".to_string())
        }
    };

    let translation = translate(&source, &file_name)?;
    let json = render(&translation.document.root, cli.indent).into_diagnostic()?;

    match &cli.output {
        Some(path) => fs::write(path, json + "\n")
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
