use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use mdtex::translate;

#[derive(Parser)]
#[command(version, about = "Translate simplified markdown into LaTeX")]
struct Cli {
    /// LaTeX emitted verbatim before the translated body
    #[arg(long, default_value = "", conflicts_with = "header_file")]
    header: String,
    /// LaTeX emitted verbatim after the translated body
    #[arg(long, default_value = "", conflicts_with = "footer_file")]
    footer: String,
    /// Read the header from a file
    #[arg(long)]
    header_file: Option<PathBuf>,
    /// Read the footer from a file
    #[arg(long)]
    footer_file: Option<PathBuf>,
    /// Markdown files to translate; stdin when omitted
    files: Vec<PathBuf>,
}

fn read_opt(path: Option<&PathBuf>, literal: &str) -> anyhow::Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(literal.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let header = read_opt(cli.header_file.as_ref(), &cli.header)?;
    let footer = read_opt(cli.footer_file.as_ref(), &cli.footer)?;

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", translate(&[], &input, &header, &footer));
        return Ok(());
    }

    for path in &cli.files {
        let src = fs::read_to_string(path)?;
        print!("{}", translate(&[], &src, &header, &footer));
    }

    Ok(())
}
