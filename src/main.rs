use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use pitch_directory::config::Command;
use pitch_directory::core::dates::{format_absolute, format_relative, parse_timestamp};
use pitch_directory::core::{form_validator, likes};
use pitch_directory::utils::logger;
use pitch_directory::{
    CliConfig, Directory, DirectoryError, FormInput, StartupSummary, STARTUP_CATEGORIES,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    match cli.command {
        Command::List { sort, category, now } => {
            let now = match now {
                Some(raw) => parse_timestamp(&raw)
                    .with_context(|| format!("--now '{}' is not a valid timestamp", raw))?,
                None => Utc::now(),
            };
            let sort = sort.unwrap_or_else(|| config.display.default_sort.to_string());
            let category = category.or_else(|| config.display.category.clone());

            let directory = match Directory::from_config(&config) {
                Ok(directory) => directory,
                Err(e) => fail(&e),
            };
            match directory.listing(&sort, category.as_deref()).await {
                Ok(startups) => print_listing(&startups, now),
                Err(e) => fail(&e),
            }
        }
        Command::Stats => {
            let directory = match Directory::from_config(&config) {
                Ok(directory) => directory,
                Err(e) => fail(&e),
            };
            match directory.stats().await {
                Ok(stats) => println!("{}", serde_json::to_string_pretty(&stats)?),
                Err(e) => fail(&e),
            }
        }
        Command::Validate {
            title,
            description,
            category,
            pitch,
            link,
        } => {
            let input = FormInput {
                title,
                description,
                category,
                pitch,
                link,
            };
            let result = form_validator::validate(&input);
            println!("{}", serde_json::to_string_pretty(&result)?);

            if !result.is_valid {
                std::process::exit(1);
            }
        }
        Command::Like { likes: current, user } => {
            let updated = likes::toggle(&current, &user);
            let liked = likes::has_liked(Some(updated.as_slice()), &user);
            tracing::info!(
                "{} {} ({} likes)",
                user,
                if liked { "liked" } else { "unliked" },
                likes::count(Some(updated.as_slice()))
            );
            println!("{}", updated.join(","));
        }
        Command::Categories => {
            for category in STARTUP_CATEGORIES {
                println!("{}", category);
            }
        }
    }

    Ok(())
}

fn print_listing(startups: &[StartupSummary], now: DateTime<Utc>) {
    if startups.is_empty() {
        println!("No startups found");
        return;
    }

    for startup in startups {
        println!(
            "{} | {} | {} views | {} likes | {} ({})",
            startup.title.as_deref().unwrap_or("Untitled"),
            startup.category.as_deref().unwrap_or("-"),
            startup.views.unwrap_or(0),
            likes::count(startup.likes.as_deref()),
            format_absolute(&startup.created_at),
            format_relative(&startup.created_at, now),
        );
    }
}

fn fail(e: &DirectoryError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e {
        DirectoryError::ConfigValidationError { .. }
        | DirectoryError::InvalidConfigValueError { .. }
        | DirectoryError::MissingConfigError { .. } => 2,
        _ => 1,
    };
    std::process::exit(exit_code);
}
