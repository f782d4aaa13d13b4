use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_search_engine::{
    config::Config,
    dictionary::WordBank,
    game::{BoardGenerator, SessionRegistry, SubmitOutcome, WordScorer},
    settings::{load_scoring_config, FileSettings},
};

/// Used when no word list file is available
const FALLBACK_WORDS: &str = "\
CAT\nDOG\nZEBRA\nTIGER\nLION\nOTTER\nPANDA\nCAMEL\nGIRAFFE\nELEPHANT\n\
RABBIT\nMONKEY\nBADGER\nFALCON\nDOLPHIN\nPENGUIN\nKANGAROO\nCROCODILE\n";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded, board size {}", config.board_size());

    // Load word bank
    let bank = match WordBank::load(&config.words.word_list_path).await {
        Ok(bank) if !bank.is_empty() => bank,
        Ok(_) => {
            tracing::warn!(
                "Word list {} is empty. Using built-in words.",
                config.words.word_list_path
            );
            WordBank::from_lines(FALLBACK_WORDS)
        }
        Err(e) => {
            tracing::warn!("Failed to load word list: {:#}. Using built-in words.", e);
            WordBank::from_lines(FALLBACK_WORDS)
        }
    };

    // Scoring snapshot
    let settings = FileSettings::new(&config.settings.game_settings_path);
    let scoring = load_scoring_config(&settings).await;

    let mut rng = rand::rng();
    let words = bank.pick(
        config.words.words_per_level,
        config.board.longest_run(),
        &mut rng,
    );
    let board = BoardGenerator::generate(&words, &config.board, &mut rng)?;

    println!("{}\n", board.grid);
    for placed in &board.placed {
        println!(
            "{:<16} {:>3} pts  {:?} from ({}, {})",
            placed.word,
            WordScorer::points_for_word(&placed.word, &scoring),
            placed.direction,
            placed.start.row,
            placed.start.col
        );
    }

    // Self-check: trace every placed word through a live session
    let registry = SessionRegistry::new();
    let session_id = registry.create(board.clone(), scoring.clone());
    for placed in &board.placed {
        match registry.submit(&session_id, &placed.positions) {
            Some(SubmitOutcome::Found(_)) => {}
            other => anyhow::bail!("Tracing {} was not accepted: {:?}", placed.word, other),
        }
    }

    if let Some(session) = registry.remove(&session_id) {
        println!(
            "\nLevel total: {} points across {} words",
            session.score(),
            session.found().len()
        );
    }

    Ok(())
}
