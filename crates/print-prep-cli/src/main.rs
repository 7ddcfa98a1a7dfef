use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use print_paginate::{
    CancelToken, LayoutKind, LayoutOptions, LogicalPage, NupOrder, Orientation, PageSettings,
    Paginator, PaperSize, Rect, Renderable, Size, calculate_statistics, ticket_entries,
};

#[derive(Parser)]
#[command(name = "printprep", about = "Print pagination preview CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Paginate a document description and print the resulting sheets
    Paginate {
        /// Input document JSON ({"pages": [{"width": .., "height": ..}]})
        #[arg(short, long)]
        input: PathBuf,

        /// Layout options JSON (defaults applied when omitted)
        #[arg(short, long)]
        options: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Rendering resolution in dots per inch
        #[arg(long, default_value = "96")]
        dpi: f32,
    },

    /// Print expected sheet counts without paginating
    Stats {
        /// Number of source pages
        #[arg(short, long)]
        pages: usize,

        /// Layout options JSON (defaults applied when omitted)
        #[arg(short, long)]
        options: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print the ticket metadata exported for platform adapters
    Ticket {
        /// Layout options JSON (defaults applied when omitted)
        #[arg(short, long)]
        options: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Layout flags overriding whatever the options file provides
#[derive(clap::Args)]
struct LayoutArgs {
    /// Composition strategy
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// N-Up grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// N-Up grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Poster tile count
    #[arg(long)]
    tiles: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Standard,
    Nup,
    Booklet,
    Poster,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl LayoutArgs {
    fn apply(&self, mut options: LayoutOptions) -> LayoutOptions {
        if let Some(kind) = self.kind {
            options.layout_kind = match kind {
                KindArg::Standard => LayoutKind::Standard,
                KindArg::Nup => LayoutKind::NUp,
                KindArg::Booklet => LayoutKind::Booklet,
                KindArg::Poster => LayoutKind::Poster,
            };
        }
        if let Some(paper) = self.paper {
            options.paper_size = match paper {
                PaperArg::A3 => PaperSize::A3,
                PaperArg::A4 => PaperSize::A4,
                PaperArg::A5 => PaperSize::A5,
                PaperArg::Letter => PaperSize::Letter,
                PaperArg::Legal => PaperSize::Legal,
                PaperArg::Tabloid => PaperSize::Tabloid,
            };
        }
        if let Some(orientation) = self.orientation {
            options.orientation = match orientation {
                OrientationArg::Portrait => Orientation::Portrait,
                OrientationArg::Landscape => Orientation::Landscape,
            };
        }
        if let Some(rows) = self.rows {
            options.nup_rows = rows;
        }
        if let Some(columns) = self.columns {
            options.nup_columns = columns;
        }
        if let Some(tiles) = self.tiles {
            options.poster_tile_count = tiles;
        }
        options
    }
}

/// Document description consumed by `paginate`
#[derive(Deserialize)]
struct DocumentSpec {
    pages: Vec<PageSpec>,
}

#[derive(Deserialize)]
struct PageSpec {
    /// Content width in device units (1/96 inch)
    width: f32,
    /// Content height in device units
    height: f32,
    #[serde(default)]
    page_break_after: bool,
}

/// Fixed-size stand-in for a host visual tree
struct BoxContent {
    size: Size,
}

impl Renderable for BoxContent {
    fn measure(&self, _available: Size) -> Size {
        self.size
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }
}

async fn load_options(path: &Option<PathBuf>, layout: &LayoutArgs) -> Result<LayoutOptions> {
    let base = match path {
        Some(path) => LayoutOptions::load(path)
            .await
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => LayoutOptions::default(),
    };
    Ok(layout.apply(base))
}

async fn load_document(path: &PathBuf) -> Result<Vec<LogicalPage>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    let spec: DocumentSpec = serde_json::from_slice(&bytes).context("Failed to parse document")?;

    Ok(spec
        .pages
        .into_iter()
        .map(|p| {
            let mut page = LogicalPage::new(
                Arc::new(BoxContent {
                    size: Size::new(p.width, p.height),
                }),
                PageSettings::default(),
            );
            page.is_page_break_after = p.page_break_after;
            page
        })
        .collect())
}

fn print_sheets(sheets: impl Iterator<Item = print_paginate::PhysicalSheet>) {
    for (i, sheet) in sheets.enumerate() {
        let Some(metrics) = sheet.metrics.as_ref() else {
            println!("sheet {:>3}: (no metrics)", i + 1);
            continue;
        };
        let tile_count = sheet
            .content
            .composition()
            .map(|c| c.tiles().len())
            .unwrap_or(1);
        println!(
            "sheet {:>3}: {:.0}x{:.0} content {:.0}x{:.0}+{:.0}+{:.0} offset ({:.1}, {:.1}) tiles {}{}",
            i + 1,
            metrics.page_size.width,
            metrics.page_size.height,
            metrics.content_rect.width,
            metrics.content_rect.height,
            metrics.content_rect.x,
            metrics.content_rect.y,
            metrics.content_offset.x,
            metrics.content_offset.y,
            tile_count,
            if sheet.is_page_break_after {
                " [break]"
            } else {
                ""
            },
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Paginate {
            input,
            options,
            layout,
            dpi,
        } => {
            let options = load_options(&options, &layout).await?;
            let pages = load_document(&input).await?;
            println!("{} source pages, {:?} layout", pages.len(), options.layout_kind);

            let sequence =
                Paginator::new().paginate(pages, &options, dpi, &CancelToken::new())?;
            print_sheets(sequence);
        }

        Commands::Stats {
            pages,
            options,
            layout,
        } => {
            let options = load_options(&options, &layout).await?;
            let stats = calculate_statistics(pages, &options)?;
            println!("source pages:      {}", stats.source_pages);
            println!("output sheets:     {}", stats.output_sheets);
            println!("blank pages added: {}", stats.blank_pages_added);
            println!("tiles per sheet:   {}", stats.tiles_per_sheet);
            if let Some((rows, cols)) = stats.poster_grid {
                println!("poster grid:       {}x{}", rows, cols);
            }
        }

        Commands::Ticket { options, layout } => {
            let options = load_options(&options, &layout).await?;
            for (key, value) in ticket_entries(&options) {
                println!("{} = {}", key, value);
            }
        }
    }

    Ok(())
}
