use clap::{Parser, Subcommand};
use std::path::PathBuf;

use word_game_engine::{EngineConfig, GameEngine};

#[derive(Parser)]
#[command(name = "word-game-cli")]
#[command(about = "Word Game Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// fastText model path
    #[arg(short, long, env = "WORD_GAME_MODEL_PATH")]
    model: Option<PathBuf>,

    /// Word list path
    #[arg(short, long, env = "WORD_GAME_WORDS_PATH")]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against a secret word
    Score {
        secret: String,
        guess: String,
    },

    /// Rank of a guess among the word list
    Rank {
        secret: String,
        guess: String,
    },

    /// Words closest to the secret
    Hints {
        secret: String,

        /// Number of hints
        #[arg(short, default_value = "10")]
        k: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env()?;
    if let Some(model) = cli.model {
        config = config.with_model_path(model);
    }
    if let Some(words) = cli.words {
        config = config.with_words_path(words);
    }

    let engine = GameEngine::new(&config).await?;
    let mode = if engine.model_available() { "fastText" } else { "character overlap" };

    match cli.command {
        Commands::Score { secret, guess } => {
            let scored = engine.score_words(&secret, &guess);
            let similarity = scored.score();

            println!("🎯 {} vs {}", guess, secret);
            println!("   Similarity: {:.4}", similarity.value());
            println!("   Score: {}", similarity.points());
            println!("   Method: {}", scored.method());
        }

        Commands::Rank { secret, guess } => {
            let vocabulary_size = engine.vocabulary().len();

            match engine.rank_word(&secret, &guess) {
                Some(rank) => println!("📈 {} is #{} of {} ({})", guess, rank, vocabulary_size, mode),
                None => println!("📈 {} has no rank (secret word or not in word list)", guess),
            }
        }

        Commands::Hints { secret, k } => {
            let hints = engine.hints_for(&secret, k);

            println!("💡 Closest words to {} ({}):", secret, mode);
            for (i, hint) in hints.iter().enumerate() {
                println!("   {}. {} ({:.4})", i + 1, hint.word, hint.similarity.value());
            }
        }
    }

    Ok(())
}
