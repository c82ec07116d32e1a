use std::io::{self, Write};

use anyhow::{Context, anyhow};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use wu_core::{
    Category, Config, RenderContext, Units, WeatherProvider, WeatherRequest,
    provider_from_settings,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wu", version, about = "Weather Underground reports on the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Report the current weather conditions.
    #[arg(long)]
    pub conditions: bool,

    /// Report the 3-day forecast.
    #[arg(long)]
    pub forecast: bool,

    /// Report the 10-day forecast.
    #[arg(long)]
    pub forecast10: bool,

    /// Report normal and record temperatures for today.
    #[arg(long)]
    pub almanac: bool,

    /// Report sunrise, sunset and lunar phase.
    #[arg(long)]
    pub astro: bool,

    /// Report active weather alerts.
    #[arg(long)]
    pub alerts: bool,

    /// Report yesterday's weather summary.
    #[arg(long)]
    pub yesterday: bool,

    /// Report tidal data, if the station has any.
    #[arg(long)]
    pub tides: bool,

    /// Report the weather summary for a past day.
    #[arg(long, value_name = "YYYYMMDD", value_parser = parse_history_date)]
    pub history: Option<String>,

    /// Report travel odds for a date range of up to 30 days.
    #[arg(long, value_name = "MMDDMMDD", value_parser = parse_planner_range)]
    pub planner: Option<String>,

    /// List weather stations near a location.
    #[arg(long, value_name = "STATION")]
    pub lookup: Option<String>,

    /// Report everything.
    #[arg(long)]
    pub all: bool,

    /// Reports by name, comma separated (e.g. "tide,astronomy"). History and
    /// planner need their own flags since they take a date.
    #[arg(short, long, value_name = "NAME", value_delimiter = ',', value_parser = parse_category)]
    pub category: Vec<Category>,

    /// Weather station: "city, state-abbreviation", zip code, 3- or 4-letter
    /// airport code, or LAT,LONG.
    #[arg(short, long)]
    pub station: Option<String>,

    /// Temperature scale for current conditions.
    #[arg(short, long, value_enum, default_value_t = UnitsArg::F)]
    pub units: UnitsArg,

    /// More log output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default station.
    Configure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    F,
    C,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::F => Units::Fahrenheit,
            UnitsArg::C => Units::Celsius,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => self.report().await,
        }
    }

    async fn report(&self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let settings = config.resolve(self.station.as_deref())?;
        let provider = provider_from_settings(&settings);
        let requests = self.requests(&settings.station);
        let today = Local::now().date_naive();

        let mut stdout = io::stdout().lock();
        run_requests(provider.as_ref(), &requests, self.units.into(), today, &mut stdout).await
    }

    /// Requests for every category asked for on the command line, in the
    /// order they are reported.
    pub fn requests(&self, station: &str) -> Vec<WeatherRequest> {
        let selected: Vec<Category> = if self.all {
            Category::all()
                .iter()
                .copied()
                .filter(|c| match c {
                    Category::History => self.history.is_some(),
                    Category::Planner => self.planner.is_some(),
                    _ => true,
                })
                .collect()
        } else {
            let named = |c: Category| self.category.contains(&c);
            let flags = [
                (self.alerts || named(Category::Alerts), Category::Alerts),
                (self.almanac || named(Category::Almanac), Category::Almanac),
                (self.astro || named(Category::Astronomy), Category::Astronomy),
                (self.conditions || named(Category::Conditions), Category::Conditions),
                (self.forecast || named(Category::Forecast), Category::Forecast),
                (self.forecast10 || named(Category::Forecast10), Category::Forecast10),
                (self.history.is_some(), Category::History),
                (self.yesterday || named(Category::Yesterday), Category::Yesterday),
                (self.planner.is_some(), Category::Planner),
                (self.tides || named(Category::Tide), Category::Tide),
                (self.lookup.is_some() || named(Category::Lookup), Category::Lookup),
            ];
            let chosen: Vec<Category> =
                flags.into_iter().filter(|(on, _)| *on).map(|(_, c)| c).collect();

            if chosen.is_empty() { vec![Category::Conditions] } else { chosen }
        };

        selected
            .into_iter()
            .map(|category| WeatherRequest {
                category,
                station: match category {
                    Category::Lookup => self.lookup.as_deref().unwrap_or(station).to_string(),
                    _ => station.to_string(),
                },
                date: match category {
                    Category::History => self.history.clone(),
                    Category::Planner => self.planner.clone(),
                    _ => None,
                },
            })
            .collect()
    }
}

/// Fetches and prints each request in turn. A formatting failure is reported
/// on stderr and the remaining requests still run; fetch errors stop the run.
pub async fn run_requests(
    provider: &dyn WeatherProvider,
    requests: &[WeatherRequest],
    units: Units,
    today: NaiveDate,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut failed = 0usize;

    for request in requests {
        let record = provider.fetch(request).await?;
        let ctx = RenderContext { station: request.station.clone(), units, today };

        match record.render(&ctx) {
            Ok(report) => {
                if report.is_halted() {
                    tracing::info!(category = %request.category, "report ended early");
                }
                print_lines(out, &report.into_lines())?;
            }
            Err(err) => {
                failed += 1;
                tracing::error!(category = %request.category, error = %err, "could not format report");
                eprintln!("{}: {err}", request.category);
            }
        }
    }

    if failed > 0 {
        return Err(anyhow!("{failed} of {} report(s) could not be formatted", requests.len()));
    }
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let mut key_prompt = inquire::Text::new("Weather Underground API key:");
    if let Some(existing) = config.api_key.as_deref() {
        key_prompt = key_prompt.with_default(existing);
    }
    let api_key = key_prompt.prompt().context("Failed to read API key")?;

    let station = inquire::Text::new("Default station:")
        .with_default(config.station_or_default())
        .with_help_message("\"city, state-abbreviation\", zip code, airport code, or LAT,LONG")
        .prompt()
        .context("Failed to read default station")?;

    config.api_key = Some(api_key.trim().to_string());
    config.station = Some(station.trim().to_string());

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn parse_category(value: &str) -> Result<Category, String> {
    let category = Category::try_from(value).map_err(|e| e.to_string())?;
    if category.takes_date() {
        return Err(format!("'{category}' needs a date; use --{category} instead"));
    }
    Ok(category)
}

fn parse_history_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map(|_| value.to_string())
        .map_err(|_| format!("'{value}' is not a date in YYYYMMDD form"))
}

fn parse_planner_range(value: &str) -> Result<String, String> {
    let invalid = || format!("'{value}' is not a date range in MMDDMMDD form");

    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    for part in [&value[..4], &value[4..]] {
        let month: u32 = part[..2].parse().map_err(|_| invalid())?;
        let day: u32 = part[2..].parse().map_err(|_| invalid())?;
        // Leap year, so 0229 is accepted.
        NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;
    }

    Ok(value.to_string())
}
