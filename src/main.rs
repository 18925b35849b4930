use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use luxbook::chart::Theme;
use luxbook::jobs::{self, RunConfig};

/// Generates school-lighting report booklets from the command line.
///
/// PDFs and chart images land under `--out-dir`. A plain-text study-notes
/// file given via `--study` is digested into the merged booklet; when the
/// file is absent a placeholder line is embedded instead.
#[derive(Parser)]
#[command(author, version, about = "Generates school-lighting report booklets")]
struct Cli {
    /// Output directory for PDFs and chart images.
    #[arg(long, default_value = "booklet_output", global = true)]
    out_dir: PathBuf,

    /// Plain-text study notes folded into the merged booklet.
    #[arg(long, default_value = "schools_information.txt", global = true)]
    study: PathBuf,

    /// Chart color theme.
    #[arg(long, value_enum, default_value_t = ThemeArg::Standard, global = true)]
    theme: ThemeArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    /// Muted default palette.
    Standard,
    /// Saturated palette for projector-friendly output.
    Vivid,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Standard => Theme::standard(),
            ThemeArg::Vivid => Theme::vivid(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the merged booklet with one chart per parameter.
    #[command(name = "booklet")]
    Booklet,

    /// Render one standalone deep-dive PDF per parameter.
    #[command(name = "chapters")]
    Chapters,

    /// Render the standalone introduction document.
    #[command(name = "intro", aliases = ["introduction"])]
    Intro,

    /// Render every document variant.
    #[command(name = "all", aliases = ["run-all", "run_all"])]
    All,
}

fn main() {
    let cli = Cli::parse();
    let config = RunConfig {
        out_dir: cli.out_dir,
        study: cli.study,
        theme: cli.theme.into(),
    };

    let result = match cli.command {
        Commands::Booklet => jobs::booklet::run(&config).map(|_| ()),
        Commands::Chapters => jobs::chapters::run(&config).map(|_| ()),
        Commands::Intro => jobs::intro::run(&config).map(|_| ()),
        Commands::All => jobs::run_all::run(&config),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
