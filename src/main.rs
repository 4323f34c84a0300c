use anyhow::Context;
use clap::Parser;
use vacancy_stats::core::VacancySource;
use vacancy_stats::utils::logger;
use vacancy_stats::{
    AppConfig, AsciiTable, CliConfig, HeadHunterClient, StatsCollector, StatsError,
    SuperJobClient,
};

async fn print_report<S: VacancySource>(source: S, config: &AppConfig) -> anyhow::Result<()> {
    let title = source.title().to_string();
    let collector = StatsCollector::new(
        source,
        config.search.page_delay(),
        config.search.max_pages,
    );

    let report = collector
        .collect(&config.search.languages)
        .await
        .inspect_err(|e| {
            if e.is_upstream() {
                tracing::error!("{} API call failed: {}", title, e);
            }
        })
        .with_context(|| format!("collecting {} statistics failed", title))?;

    println!("{}", AsciiTable::from(&report).render());
    Ok(())
}

fn with_suggestion(err: StatsError, action: &str) -> anyhow::Error {
    match err.recovery_suggestion() {
        Some(hint) => {
            tracing::error!("💡 Suggestion: {}", hint);
            anyhow::Error::new(err).context(format!("{} ({})", action, hint))
        }
        None => anyhow::Error::new(err).context(action.to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // SJ_KEY may live in .env, and clap reads it from the environment.
    dotenvy::dotenv().ok();

    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli
        .load_app_config()
        .map_err(|e| with_suggestion(e, "invalid configuration"))?;

    // Both clients are built before the first request.
    let headhunter = if cli.provider.includes_headhunter() {
        Some(
            HeadHunterClient::new(config.headhunter.clone(), &config.http)
                .map_err(|e| with_suggestion(e, "building the HeadHunter client failed"))?,
        )
    } else {
        None
    };
    let superjob = if cli.provider.includes_superjob() {
        Some(
            SuperJobClient::new(config.superjob.clone(), &config.http)
                .map_err(|e| with_suggestion(e, "building the SuperJob client failed"))?,
        )
    } else {
        None
    };

    if let Some(source) = headhunter {
        print_report(source, &config).await?;
    }
    if let Some(source) = superjob {
        print_report(source, &config).await?;
    }

    Ok(())
}
