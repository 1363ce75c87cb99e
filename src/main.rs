use clap::{Parser, Subcommand};
use og_press::template::{Brand, Palette};
use og_press::{batch, discover, fonts::FontSet, frontmatter, output};
use std::path::PathBuf;

/// Site identity rendered into every card.
#[derive(clap::Args, Clone)]
struct BrandArgs {
    /// Wordmark shown in the card header
    #[arg(long, default_value = "Docs")]
    brand: String,

    /// Footer tagline (left side)
    #[arg(long, default_value = "Read the docs")]
    tagline: String,

    /// Footer destination identifier (right side)
    #[arg(long, default_value = "docs.example.com")]
    site: String,
}

#[derive(clap::Args, Clone)]
struct FontArgs {
    /// Load .ttf/.otf files from a local directory instead of fetching
    #[arg(long)]
    font_dir: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "og-press")]
#[command(about = "Social preview image generator for documentation sites")]
#[command(long_about = "\
Social preview image generator for documentation sites

Walks a documentation content tree and produces one 1200x630 PNG card per
page, written at a path mirroring the site's routing:

  content/docs/getting-started/quick-start.mdx
      → public/og/getting-started/quick-start.png
  content/docs/guides/index.md   → public/og/guides.png
  content/docs/index.md          → public/og/index.png

Each card shows the brand mark, a section badge for nested pages, the page
title and description from YAML frontmatter (with fixed fallbacks when
absent), and a footer with the tagline and site host. Pages are processed
independently; a page that fails to render is reported and counted but never
aborts the batch.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content/docs", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "public/og", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one social preview image per documentation page
    Build {
        #[command(flatten)]
        brand: BrandArgs,
        #[command(flatten)]
        fonts: FontArgs,
        /// Exit non-zero when any document failed
        #[arg(long)]
        strict: bool,
    },
    /// List discovered documents and their metadata without rendering
    Scan,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            brand,
            fonts,
            strict,
        } => {
            let font_set = match &fonts.font_dir {
                Some(dir) => FontSet::load_dir(dir)?,
                None => {
                    println!("==> Fetching fonts");
                    FontSet::fetch()?
                }
            };

            println!(
                "==> Generating social previews: {} → {}",
                cli.source.display(),
                cli.output.display()
            );
            let brand = Brand {
                wordmark: brand.brand,
                tagline: brand.tagline,
                site: brand.site,
            };
            let summary = batch::run(
                &cli.source,
                &cli.output,
                &font_set,
                &Palette::default(),
                &brand,
            )?;
            println!("{}", output::format_summary(&summary));

            if strict && summary.errors > 0 {
                std::process::exit(1);
            }
        }
        Command::Scan => {
            let docs = discover::discover(&cli.source)?;
            let entries: Vec<_> = docs
                .into_iter()
                .map(|doc| {
                    let meta = std::fs::read_to_string(&doc.path)
                        .map(|content| frontmatter::extract(&content))
                        .unwrap_or_default();
                    (doc, meta)
                })
                .collect();
            output::print_scan_output(&entries, &cli.source);
        }
    }

    Ok(())
}
