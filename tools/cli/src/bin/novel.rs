use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use novel_engine::{load_novel, validate, Engine, Novel};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Read line-oriented visual novels")]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a story page by page, pressing Enter to continue.
    Play {
        manifest: PathBuf,
        /// Print every page without waiting for input.
        #[arg(long, default_value_t = false)]
        auto: bool,
    },
    /// Report every integrity problem in a story.
    Check { manifest: PathBuf },
    /// Walk a story without input and write a JSON transcript.
    Trace {
        manifest: PathBuf,
        /// Maximum number of pages to record.
        #[arg(
            long,
            default_value_t = 1_000,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        steps: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct TraceEntry {
    step: usize,
    scene: String,
    page: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct TraceEnvelope {
    novel: String,
    reached_ending: bool,
    pages: Vec<TraceEntry>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    match cli.command {
        Command::Play { manifest, auto } => {
            let novel = load_checked(&manifest)?;
            let stdin = io::stdin();
            play(&novel, stdin.lock(), io::stdout().lock(), auto)
        }
        Command::Check { manifest } => check(&manifest),
        Command::Trace {
            manifest,
            steps,
            output,
        } => {
            let novel = load_checked(&manifest)?;
            let envelope = trace(&novel, steps)?;
            let json = serde_json::to_string_pretty(&envelope)?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
                }
                None => println!("{json}"),
            }
            Ok(())
        }
    }
}

fn load_checked(path: &Path) -> Result<Novel> {
    let novel = load_novel(path).with_context(|| format!("load {}", path.display()))?;
    novel.validate().context("validate story")?;
    info!(novel = %novel.name, scenes = novel.scenes.len(), "story loaded");
    Ok(novel)
}

fn check(path: &Path) -> Result<()> {
    let novel = load_novel(path).with_context(|| format!("load {}", path.display()))?;
    let issues: Vec<_> = validate::issues(&novel).collect();
    if issues.is_empty() {
        println!("{}: ok ({} scenes)", novel.name, novel.scenes.len());
        return Ok(());
    }
    for issue in &issues {
        println!("error: {issue}");
    }
    anyhow::bail!("{} integrity problem(s) in '{}'", issues.len(), novel.name)
}

fn play<R: BufRead, W: Write>(novel: &Novel, mut input: R, mut out: W, auto: bool) -> Result<()> {
    let mut engine = Engine::new(novel)?;
    writeln!(out, "Playing {}\n", engine.name())?;
    loop {
        writeln!(out, "{}", engine.current_page().text_content())?;
        if engine.at_ending() {
            writeln!(out)?;
            break;
        }
        out.flush()?;
        if !auto {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // reader closed the input
                break;
            }
        }
        engine.advance()?;
    }
    Ok(())
}

fn trace(novel: &Novel, steps: usize) -> Result<TraceEnvelope> {
    let mut engine = Engine::new(novel)?;
    let mut pages = Vec::new();
    let mut reached_ending = false;
    for step in 0..steps {
        pages.push(TraceEntry {
            step,
            scene: engine.scene_id().to_string(),
            page: engine.page_id().to_string(),
            text: engine.current_page().text_content().to_string(),
        });
        if engine.at_ending() {
            reached_ending = true;
            break;
        }
        engine.advance()?;
    }
    Ok(TraceEnvelope {
        novel: novel.name.clone(),
        reached_ending,
        pages,
    })
}
