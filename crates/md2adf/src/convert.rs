use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use md2adf_core::{markdown_to_adf, AtlasDocFormatBody, Document};

#[derive(Debug, clap::Args, Clone)]
pub struct ConvertOptions {
    /// Markdown file to convert
    pub input: PathBuf,

    /// File to write the ADF JSON to (defaults to stdout)
    pub output: Option<PathBuf>,

    /// Emit single-line JSON instead of 2-space indented JSON
    #[arg(long, env = "MD2ADF_COMPACT")]
    pub compact: bool,

    /// Wrap the document in a Confluence `atlas_doc_format` page body
    #[arg(long, env = "MD2ADF_CONFLUENCE_BODY")]
    pub confluence_body: bool,
}

pub fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    let markdown = read_input(&options.input)?;
    log::debug!(
        "Read {} bytes ({} lines) from {}",
        markdown.len(),
        markdown.lines().count(),
        options.input.display()
    );

    let document = markdown_to_adf(&markdown);
    log::debug!("Converted into {} top-level blocks", document.content.len());

    let json = render(&document, options.compact, options.confluence_body)?;

    match &options.output {
        Some(path) => {
            write_output(path, &json)?;
            log::info!("Wrote {} bytes to {}", json.len(), path.display());
            println!("ADF JSON written to {}", path.display());
        }
        None => println!("{json}"),
    }

    if global.verbose {
        print_summary(&document);
    }

    Ok(())
}

/// Serialize the document, or its Confluence page body, to JSON text.
pub fn render(document: &Document, compact: bool, confluence_body: bool) -> Result<String> {
    let json = if confluence_body {
        let body = AtlasDocFormatBody::from_document(document)
            .map_err(|e| Error::Serialize(e.to_string()))?;
        if compact {
            serde_json::to_string(&body)
        } else {
            serde_json::to_string_pretty(&body)
        }
        .map_err(|e| Error::Serialize(e.to_string()))?
    } else {
        document
            .to_json(!compact)
            .map_err(|e| Error::Serialize(e.to_string()))?
    };

    Ok(json)
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::ReadInput(f!("{}: {e}", path.display())))
        .with_context(|| "Markdown input must be a readable UTF-8 file")
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, json).map_err(|e| Error::WriteOutput(f!("{}: {e}", path.display())))?;
    Ok(())
}

/// Count top-level blocks by ADF node type.
fn block_counts(document: &Document) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for block in &document.content {
        *counts.entry(block.kind()).or_insert(0) += 1;
    }
    counts
}

fn print_summary(document: &Document) {
    let counts = block_counts(document);
    let colorize = std::io::stderr().is_terminal();

    let total = document.content.len().to_string();
    let header = if colorize {
        f!("{} {}", "Blocks:".green(), total.bright_cyan().bold())
    } else {
        f!("Blocks: {total}")
    };
    eprintln!("{header}");

    for (kind, count) in counts {
        if colorize {
            eprintln!("  {}: {}", kind.bright_white(), count.to_string().bright_yellow());
        } else {
            eprintln!("  {kind}: {count}");
        }
    }
}
