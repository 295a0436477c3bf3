use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use serde::Serialize;
use sweeper_core::{BoardConfig, BoardView, CellCount, Coord, Difficulty};

use crate::command::{Command, HELP};
use crate::session::{Notice, Preset, Session};

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset to start with
    #[arg(short, long, default_value_t = Difficulty::default())]
    difficulty: Difficulty,

    /// Custom number of rows, overrides the preset
    #[arg(long, requires_all = ["cols", "mines"])]
    rows: Option<Coord>,

    /// Custom number of columns, overrides the preset
    #[arg(long, requires_all = ["rows", "mines"])]
    cols: Option<Coord>,

    /// Custom number of mines, overrides the preset
    #[arg(long, requires_all = ["rows", "cols"])]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every frame as a JSON line instead of a text grid
    #[arg(long)]
    json: bool,
}

impl Args {
    fn preset(&self) -> Result<Preset> {
        match (self.rows, self.cols, self.mines) {
            (Some(rows), Some(cols), Some(mines)) => BoardConfig::new(rows, cols, mines)
                .map(Preset::Custom)
                .context("Invalid custom board"),
            _ => Ok(Preset::Difficulty(self.difficulty)),
        }
    }
}

#[derive(Serialize)]
struct Frame<'a> {
    preset: String,
    notice: Option<&'a str>,
    board: &'a BoardView,
}

fn draw(out: &mut impl Write, session: &Session, notice: &Notice, json: bool) -> Result<()> {
    let view = session.board().view();
    if json {
        let frame = Frame {
            preset: session.preset().to_string(),
            notice: notice.message(),
            board: &view,
        };
        serde_json::to_writer(&mut *out, &frame).context("Failed to encode frame")?;
        writeln!(out)?;
    } else {
        if notice.redraw() {
            write!(out, "{}", render::render(&view, &session.preset().to_string()))?;
        }
        if let Some(message) = notice.message() {
            writeln!(out, "{}", message)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let preset = args.preset()?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let mut session = Session::new(preset, seed);
    let mut out = io::stdout().lock();
    if !args.json {
        writeln!(out, "{}", HELP)?;
    }
    draw(&mut out, &session, &Notice::None, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::debug!("Rejected input {:?}: {}", line, err);
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        match session.apply(command) {
            Ok(Notice::Quit) => break,
            Ok(notice) => draw(&mut out, &session, &notice, args.json)?,
            Err(err) => writeln!(out, "{}", err)?,
        }
    }

    log::debug!("Session ended");
    Ok(())
}
