use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;

use abhawa_core::{Config, OpenWeatherProvider, WeatherService, WeatherSnapshot};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "abhawa", version, about = "Bilingual weather panel CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show the weather panel for a location.
    Show {
        /// Location name, e.g. "Rangpur".
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(&location).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn show(location: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let service = WeatherService::new(Box::new(OpenWeatherProvider::new(&config)));

    for snapshot in service.acquire(location).await {
        println!("{}", format_row(&snapshot));
    }

    Ok(())
}

fn format_row(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{:<6} {:<8} {:>3}°C  {:>3}%  [{}] {} ({})",
        snapshot.day,
        snapshot.day_localized,
        snapshot.temperature_c,
        snapshot.humidity_pct,
        snapshot.icon,
        snapshot.condition,
        snapshot.condition_localized,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use abhawa_core::IconTag;

    #[test]
    fn parses_show_with_location() {
        let cli = Cli::try_parse_from(["abhawa", "show", "Rangpur"]).expect("valid args");
        match cli.command {
            Command::Show { location } => assert_eq!(location, "Rangpur"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_configure() {
        let cli = Cli::try_parse_from(["abhawa", "configure"]).expect("valid args");
        assert!(matches!(cli.command, Command::Configure));
    }

    #[test]
    fn show_requires_a_location() {
        assert!(Cli::try_parse_from(["abhawa", "show"]).is_err());
    }

    #[test]
    fn row_carries_both_languages_and_the_icon_tag() {
        let row = format_row(&WeatherSnapshot {
            day: "Today".to_string(),
            day_localized: "আজ".to_string(),
            temperature_c: 28,
            condition: "Clouds".to_string(),
            condition_localized: "মেঘলা".to_string(),
            icon: IconTag::Cloud,
            humidity_pct: 75,
        });

        assert!(row.contains("Today"));
        assert!(row.contains("আজ"));
        assert!(row.contains("28°C"));
        assert!(row.contains("[cloud]"));
        assert!(row.contains("মেঘলা"));
    }
}
