//! loadboard - Training statistics dashboard
//!
//! Prints stats cards, volume/progress series and the load calendar for the
//! built-in sample history.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;

use loadboard::dashboard::ExercisePicker;
use loadboard::exercises::{BodyPart, Category};
use loadboard::load::WeeklyMicrocycle;
use loadboard::repository::{InMemoryRepository, SyntheticTrainings};
use loadboard::series::{Grouping, SeriesPoint};
use loadboard::{Action, Dashboard, DashboardConfig, DashboardState, PeriodKind};

#[derive(Parser)]
#[command(name = "loadboard")]
#[command(author, version, about = "Training statistics: volume, progress and ACWR")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Period: 7d, 30d, 3m, all or custom (--from/--to imply custom)
    #[arg(short, long, global = true, default_value = "30d")]
    period: PeriodKind,

    /// Start of a custom range (YYYY-MM-DD)
    #[arg(long, global = true, requires = "to", required_if_eq("period", "custom"))]
    from: Option<NaiveDate>,

    /// End of a custom range (YYYY-MM-DD)
    #[arg(long, global = true, requires = "from", required_if_eq("period", "custom"))]
    to: Option<NaiveDate>,

    /// Body part: arms, torso, legs or all
    #[arg(short, long, global = true, default_value = "all")]
    body_part: BodyPart,

    /// Exercise id to compare (repeatable, at most 2)
    #[arg(short, long = "exercise", global = true)]
    exercises: Vec<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Lower bound of the "all" period
    #[arg(long, global = true, env = "LOADBOARD_EPOCH", default_value = "2024-01-01")]
    epoch: NaiveDate,

    /// Calendar weeks shown for the "all" period
    #[arg(long, global = true, env = "LOADBOARD_ALL_TIME_WEEKS", default_value = "16")]
    all_weeks: u32,

    /// Seed of the synthetic training calendar
    #[arg(long, global = true, env = "LOADBOARD_SEED", default_value = "42")]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Workout, exercise and volume totals
    Stats,

    /// Volume per session date
    Volume {
        /// Group by ISO week instead of by day
        #[arg(short, long)]
        weekly: bool,
    },

    /// Cumulative volume per exercise
    Progress,

    /// Weekly load calendar with ACWR
    Calendar,

    /// Exercises available for the body part
    Exercises {
        /// Filter by category: strength, mobility or cardio
        #[arg(short, long)]
        category: Option<Category>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let config = DashboardConfig {
        dataset_epoch: cli.epoch,
        all_time_weeks: cli.all_weeks,
        seed: cli.seed,
        ..Default::default()
    };

    let dashboard = Dashboard::new(
        InMemoryRepository::mock(today),
        SyntheticTrainings::new(config.seed),
        config,
    )
    .context("Invalid dashboard configuration")?;
    dashboard.check_selection(&cli.exercises)?;

    let custom = cli.from.zip(cli.to);
    let kind = if custom.is_some() { PeriodKind::Custom } else { cli.period };
    let period = kind.into_period(custom)?;

    let mut state = DashboardState::new(dashboard.config())
        .apply(Action::SelectBodyPart(cli.body_part))
        .apply(Action::SelectPeriod(period));
    for id in cli.exercises {
        state = state.apply(Action::SelectExercise(id));
    }

    match cli.command.unwrap_or(Commands::Stats) {
        Commands::Stats => {
            let summary = dashboard.summary(state.body_part);
            if cli.json {
                return print_json(&summary);
            }
            println!("Statystyki: {}", state.body_part.label());
            println!("{:-<40}", "");
            println!("Treningów:     {}", summary.total_workouts);
            println!("Ćwiczeń:       {}", summary.total_exercises);
            println!("kg wolumenu:   {:.0}", summary.total_volume);
        }

        Commands::Volume { weekly } => {
            let grouping = if weekly { Grouping::Weekly } else { Grouping::Daily };
            let series = dashboard.volume(&state, today, grouping)?;
            if cli.json {
                return print_json(&series);
            }
            print_series(&format!("Wolumen ({})", state.period.label()), &series);
        }

        Commands::Progress => {
            let series = dashboard.progress(&state, today)?;
            if cli.json {
                return print_json(&series);
            }
            print_series(&format!("Progres ({})", state.period.label()), &series);
        }

        Commands::Calendar => {
            let microcycles = dashboard.calendar(&state, today)?;
            if cli.json {
                return print_json(&microcycles);
            }
            print_calendar(&microcycles);
        }

        Commands::Exercises { category } => {
            let state = state.apply(Action::SelectCategory(category));
            let picker = dashboard.exercise_picker(&state);
            if cli.json {
                return print_json(&picker);
            }
            print_picker(&picker);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn print_series(title: &str, series: &[SeriesPoint]) {
    println!("{}", title);
    println!("{:-<60}", "");
    if series.is_empty() {
        println!("Brak danych dla wybranego okresu");
        return;
    }
    for point in series {
        let values: Vec<String> = point
            .values
            .iter()
            .map(|v| format!("{}: {:.0} kg", v.label, v.value))
            .collect();
        println!("{} | {}", point.label, values.join(" | "));
    }
}

fn print_calendar(microcycles: &[WeeklyMicrocycle]) {
    println!(
        "{:>3} | {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} | {:>8} | ACWR",
        "#", "Pn", "Wt", "Śr", "Cz", "Pt", "Sb", "Nd", "Wolumen"
    );
    println!("{:-<80}", "");
    for week in microcycles {
        let days: Vec<String> = week
            .days
            .iter()
            .map(|d| match d.volume() {
                Some(v) => format!("{:>5.0}", v),
                None => format!("{:>5}", "-"),
            })
            .collect();
        println!(
            "{:>3} | {} | {:>8.0} | {:.2} ({})",
            week.week_number,
            days.join(" "),
            week.total_volume,
            week.acwr,
            week.acwr_band.label()
        );
    }
}

fn print_picker(picker: &ExercisePicker) {
    let categories: Vec<&str> = picker.categories.iter().map(|c| c.label()).collect();
    println!("Kategorie: {}", categories.join(", "));
    println!("{:-<40}", "");
    if picker.exercises.is_empty() {
        println!("Brak ćwiczeń dla wybranych filtrów");
    }
    for exercise in &picker.exercises {
        let marker = if picker.selected.iter().any(|s| s.id == exercise.id) { "*" } else { " " };
        println!(
            "{} {:>3} {:35} {}",
            marker,
            exercise.id,
            exercise.name,
            exercise.category.label()
        );
    }
}
