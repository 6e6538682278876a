use clap::Parser;
use pet_match::utils::logger;
use pet_match::{
    fetch_directory, found_message, ApiNinjasClient, App, BreedRepository, CliConfig, Console,
    PetMatchError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在時忽略
    dotenv::dotenv().ok();

    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting pet-match");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置，缺少 API key 時不送出任何請求
    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let api = match ApiNinjasClient::new(settings) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("❌ Failed to build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("API settings: {:?}", api.settings());

    let directory = match fetch_directory(&api).await {
        Ok(directory) => directory,
        Err(e) => {
            // 清單為空時仍先報告找到的數量
            if let PetMatchError::EmptyDirectoryError { cats, dogs, .. } = &e {
                println!("{}", found_message(*cats, *dogs));
            }
            tracing::error!("❌ Breed directory fetch failed: {}", e);
            eprintln!("❌ Could not load breed data. Check your internet connection and API key.");
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(-1);
        }
    };
    println!("{}", found_message(directory.cats.len(), directory.dogs.len()));

    let cache_enabled = api.settings().cache_enabled;
    let repository = BreedRepository::new(api, cache_enabled);
    let console = Console::new(std::io::stdin().lock(), std::io::stdout(), !config.no_clear);

    let mut app = App::new(repository, directory, console);
    app.run().await?;

    tracing::info!("Bye");
    Ok(())
}
