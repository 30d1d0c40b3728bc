//! Wordle - CLI
//!
//! Terminal word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{run_simple, score_words},
    config::{DEFAULT_CONFIG_PATH, GameConfig, load_config},
    logging,
    output::{SymbolSet, render_verdicts},
    select::TargetSelector,
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word; every letter is scored Absent, Present or Correct",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: wordle.toml in the current directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// File of accepted guesses, one word per line
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// File of possible target words, one word per line
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Use today's word instead of a random one
    #[arg(short, long, global = true)]
    daily: bool,

    /// Seed for the random target choice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of guesses per game
    #[arg(short = 'n', long, global = true)]
    max_attempts: Option<usize>,

    /// Verbose logging; reveals the target word
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Score a guess against a target and print the verdicts
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,

        /// Print G/Y/- instead of the configured glyphs
        #[arg(long)]
        ascii: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Config file settings with command-line flags applied on top
    fn resolve_config(&self) -> Result<GameConfig> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut config = logging::with_startup_logging(|| load_config(&path))?;

        if let Some(n) = self.max_attempts {
            config.max_attempts = n;
        }
        if self.daily {
            config.seed_from_date = true;
        }
        if self.debug {
            config.debug_mode = true;
        }
        if self.allowed.is_some() {
            config.allowed_path.clone_from(&self.allowed);
        }
        if self.targets.is_some() {
            config.targets_path.clone_from(&self.targets);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(config.debug_mode);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Score {
            guess,
            target,
            ascii,
        } => run_score_command(&guess, &target, ascii, &config),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Commands::Play => {
            let bank = load_word_bank(&config)?;
            let selector = TargetSelector::from_settings(config.seed_from_date, cli.seed);
            run_play_command(&bank, &config, selector)
        }
        Commands::Simple => {
            let bank = load_word_bank(&config)?;
            let selector = TargetSelector::from_settings(config.seed_from_date, cli.seed);
            run_simple(&bank, &config, selector)
        }
    }
}

/// Load word lists once; a malformed list stops the program here
fn load_word_bank(config: &GameConfig) -> Result<WordBank> {
    WordBank::load(
        config.allowed_path.as_deref(),
        config.targets_path.as_deref(),
        config.word_length,
    )
    .with_context(|| {
        let source = |p: Option<&Path>| {
            p.map_or_else(|| "embedded".to_string(), |p| p.display().to_string())
        };
        format!(
            "failed to load {}-letter word lists (allowed: {}, targets: {})",
            config.word_length,
            source(config.allowed_path.as_deref()),
            source(config.targets_path.as_deref())
        )
    })
}

fn run_score_command(guess: &str, target: &str, ascii: bool, config: &GameConfig) -> Result<()> {
    let result = score_words(guess, target)?;
    let symbols = if ascii {
        SymbolSet::ascii()
    } else {
        SymbolSet::from(&config.display_symbols)
    };

    println!(
        "{} {}",
        result.guess.text().to_uppercase(),
        render_verdicts(&result.verdicts, &symbols)
    );
    Ok(())
}

fn run_play_command(bank: &WordBank, config: &GameConfig, selector: TargetSelector) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(bank, config, selector)?;
    run_tui(app)
}
