use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;

/// Render a 1280x720 thumbnail: background photo plus three lines of outlined text.
///
/// Inputs not given by flags or a job file are asked for on stdin.
#[derive(Parser, Debug)]
#[command(name = "thumbgen", version)]
struct Cli {
    /// JSON job file with `background`, `top`, `middle` and `bottom`.
    #[arg(long)]
    job: Option<PathBuf>,

    /// Background image URL, `file://` URL or local path.
    #[arg(long)]
    background: Option<String>,

    /// Top line text.
    #[arg(long)]
    top: Option<String>,

    /// Middle line text.
    #[arg(long)]
    middle: Option<String>,

    /// Bottom line text.
    #[arg(long)]
    bottom: Option<String>,

    /// Font file [default: ~/.local/share/fonts/BebasNeue-Regular.ttf].
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = thumbgen::DEFAULT_OUTPUT)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let job = resolve_job(&cli)?;

    let font_path = match &cli.font {
        Some(p) => p.clone(),
        None => thumbgen::default_font_path()?,
    };

    let raster = thumbgen::generate_job(&job, &font_path)
        .with_context(|| format!("render thumbnail over '{}'", job.background))?;

    thumbgen::write_png(&raster, &cli.out)?;
    println!("Thumbnail saved as {}", cli.out.display());
    Ok(())
}

/// Flags win over the job file; anything still missing is asked for on stdin.
fn resolve_job(cli: &Cli) -> anyhow::Result<thumbgen::ThumbnailJob> {
    let base = match &cli.job {
        Some(path) => Some(thumbgen::ThumbnailJob::from_path(path)?),
        None => None,
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut pick = |flag: &Option<String>,
                    from_job: Option<&String>,
                    prompt: &str|
     -> anyhow::Result<String> {
        if let Some(v) = flag {
            return Ok(v.clone());
        }
        if let Some(v) = from_job {
            return Ok(v.clone());
        }
        ask(&mut input, prompt)
    };

    Ok(thumbgen::ThumbnailJob {
        background: pick(
            &cli.background,
            base.as_ref().map(|j| &j.background),
            "Enter background image URL: ",
        )?,
        top: pick(
            &cli.top,
            base.as_ref().map(|j| &j.top),
            "Enter top line text: ",
        )?,
        middle: pick(
            &cli.middle,
            base.as_ref().map(|j| &j.middle),
            "Enter middle line text: ",
        )?,
        bottom: pick(
            &cli.bottom,
            base.as_ref().map(|j| &j.bottom),
            "Enter bottom line text: ",
        )?,
    })
}

fn ask(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<String> {
    let mut stdout = std::io::stdout();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("read stdin")?;
    Ok(line.trim().to_string())
}
