use clap::Parser;
use survival_advisor::core::session::DEFAULT_FAVORITE_COLOR;
use survival_advisor::utils::{logger, validation::Validate};
use survival_advisor::{AdviceEngine, CliConfig, FileConfig, FormSession, HttpAdviceClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting survival-advisor CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut session = FormSession::with_input(config.submission());

    // An explicit --favorite-color always wins over the file default.
    let client = match &config.config {
        Some(path) => {
            let file = FileConfig::from_file(path)?;
            if let Err(e) = file.validate() {
                tracing::error!("❌ Config file validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            if session.favorite_color == DEFAULT_FAVORITE_COLOR {
                if let Some(color) = file.default_favorite_color() {
                    session.favorite_color = color.to_string();
                }
            }
            HttpAdviceClient::new(&file)?
        }
        None => HttpAdviceClient::new(&config)?,
    };

    let engine = AdviceEngine::new(client);

    match session.submit(&engine).await {
        Ok(advice) => {
            tracing::info!("✅ Survival protocol generated");
            println!("🛸 {}'s Alien Survival Protocol 🛸", advice.nickname);
            println!("Based on cosmic AI analysis from {}", advice.birthplace);
            println!();
            println!("♈ Zodiac Analysis");
            println!(
                "As a {} with a {} personality...",
                advice.zodiac_sign, advice.personality
            );
            println!();
            println!("🍽️ Survival Nutrition");
            println!("Eat {} because {}.", advice.food, advice.food_reason);
            println!();
            println!("⚔️ Weapon of Choice: {}", advice.weapon);
            println!("👗 Battle Outfit: {}", advice.clothing);
            println!();
            println!("🎵 Victory Dance");
            println!(
                "Dance to \"{}\" non-stop! {}",
                advice.song, advice.song_reason
            );
        }
        Err(e) => {
            tracing::error!("❌ Advice generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
