//! gridsheet CLI - view and edit a sheet stored on a gridsheet server

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridsheet_client::{ClientConfig, SheetClient, SheetSession};
use gridsheet_core::{parse_column_header, Grid, LoadState, DEFAULT_SHEET_ID};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridsheet")]
#[command(author, version, about = "View and edit a shared spreadsheet")]
struct Cli {
    /// Base URL of the gridsheet server
    #[arg(long, env = "GRIDSHEET_API_URL", default_value = gridsheet_client::config::DEFAULT_API_URL)]
    api_url: String,

    /// Sheet to work on
    #[arg(short, long, default_value = DEFAULT_SHEET_ID)]
    sheet: String,

    /// Rows of the blank grid used when the sheet was never saved
    #[arg(long, default_value = "10")]
    rows: usize,

    /// Columns of the blank grid used when the sheet was never saved
    #[arg(long, default_value = "10")]
    columns: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sheet with its row and column headers
    Show,

    /// Print one cell's content
    Get {
        /// Row number (1-based, as shown in the row headers)
        row: usize,
        /// Column header, e.g. B1
        col: String,
    },

    /// Set one cell's content and save
    Set {
        /// Row number (1-based, as shown in the row headers)
        row: usize,
        /// Column header, e.g. B1
        col: String,
        /// New content
        value: String,
    },

    /// Append an empty row and save
    AddRow,

    /// Append an empty column and save
    AddColumn,

    /// Remove the last row and save
    DeleteRow,

    /// Remove the last column and save
    DeleteColumn,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = SheetClient::new(&ClientConfig::new(&cli.api_url))?;
    let mut session =
        SheetSession::new(client, &cli.sheet).with_initial_size(cli.rows, cli.columns);

    if let LoadState::Failed(message) = session.load().await {
        bail!("{message} ('{}' from {})", cli.sheet, cli.api_url);
    }

    match cli.command {
        Commands::Show => {
            if let Some(grid) = session.grid() {
                print!("{}", render_grid(grid));
            }
            Ok(())
        }
        Commands::Get { row, col } => {
            let (row, col) = parse_position(row, &col)?;
            println!("{}", session.select(row, col)?);
            Ok(())
        }
        Commands::Set { row, col, value } => {
            let (row, col) = parse_position(row, &col)?;
            session.input(row, col, value)?;
            save(&session).await
        }
        Commands::AddRow => {
            session.add_row()?;
            save(&session).await
        }
        Commands::AddColumn => {
            session.add_column()?;
            save(&session).await
        }
        Commands::DeleteRow => {
            if !session.delete_row()? {
                eprintln!("Only one row left, nothing deleted");
                return Ok(());
            }
            save(&session).await
        }
        Commands::DeleteColumn => {
            if !session.delete_column()? {
                eprintln!("Only one column left, nothing deleted");
                return Ok(());
            }
            save(&session).await
        }
    }
}

async fn save(session: &SheetSession) -> Result<()> {
    let sheet = session.save().await.context("Failed to save/update sheet.")?;
    eprintln!(
        "Sheet saved/updated successfully! ({} rows x {} columns)",
        sheet.rows, sheet.columns
    );
    Ok(())
}

/// Convert a 1-based row number and a column header to zero-based indices
fn parse_position(row: usize, col: &str) -> Result<(usize, usize)> {
    if row == 0 {
        bail!("Row numbers start at 1");
    }
    let col = parse_column_header(col).with_context(|| format!("Bad column '{col}'"))?;
    Ok((row - 1, col))
}

/// Render the grid as an aligned text table with headers
fn render_grid(grid: &Grid) -> String {
    let headers = grid.column_headers();
    let row_headers = grid.row_headers();

    let gutter = row_headers.iter().map(|h| h.chars().count()).max().unwrap_or(0);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(c, header)| {
            grid.cells()
                .iter()
                .map(|row| row[c].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, "", gutter, headers.iter().map(String::as_str), &widths);
    for (label, row) in row_headers.iter().zip(grid.cells()) {
        push_line(&mut out, label, gutter, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(
    out: &mut String,
    label: &str,
    gutter: usize,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) {
    out.push_str(&format!("{label:>gutter$}"));
    for (cell, width) in cells.zip(widths) {
        out.push_str(" | ");
        out.push_str(&format!("{cell:<width$}"));
    }
    out.push_str(" |\n");
}
