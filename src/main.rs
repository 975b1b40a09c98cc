// Month Planner
// Command-line front end over the calendar session

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use month_planner::models::event::EventId;
use month_planner::models::label::LABEL_CLASSES;
use month_planner::models::settings::Settings;
use month_planner::services::calendar::{DayPartition, WEEKDAY_HEADERS};
use month_planner::services::event::{EventStore, PersistenceWarning};
use month_planner::services::session::{EventForm, Session};
use month_planner::services::settings;
use month_planner::services::storage::KeyValueStore;
use month_planner::utils::date;

type CliSession = Session<Box<dyn KeyValueStore>>;

#[derive(Parser)]
#[command(name = "month-planner")]
#[command(about = "Plan events on a monthly calendar", version)]
struct Cli {
    /// Config file (defaults to $MONTH_PLANNER_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month grid with per-day event counts
    Month {
        /// Months relative to the current one (e.g. -1 for last month)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Hide events with this label (repeatable)
        #[arg(long = "hide-label")]
        hide_label: Vec<String>,
    },
    /// Print the events of one day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "hide-label")]
        hide_label: Vec<String>,
    },
    /// Create an event
    Add(EventArgs),
    /// Replace fields of an existing event
    Edit {
        id: EventId,

        #[command(flatten)]
        fields: EventArgs,
    },
    /// Delete an event
    Delete { id: EventId },
    /// List labels in use and the palette
    Labels,
    /// Write the current settings to the config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct EventArgs {
    #[arg(long)]
    title: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    label: Option<String>,

    #[arg(long, conflicts_with_all = ["start", "end"])]
    all_day: bool,

    /// Start time (HH:MM)
    #[arg(long)]
    start: Option<String>,

    /// End time (HH:MM)
    #[arg(long)]
    end: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(settings::config_path);

    let (settings, config_error) = match settings::read_settings_file(&config_path) {
        Ok(found) => (found.unwrap_or_default(), None),
        Err(err) => (Settings::default(), Some(err)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    log::debug!("Starting month-planner");
    match config_error {
        Some(err) => log::warn!("Ignoring config {}: {err:#}", config_path.display()),
        None => log::debug!("Using config {}", config_path.display()),
    }

    let today = Local::now().date_naive();
    let open_session = || -> Result<CliSession> {
        let storage = settings::open_storage(&settings)?;
        Session::new(EventStore::load(storage), &settings, today)
    };

    match cli.command {
        Commands::Month { offset, hide_label } => {
            let mut session = open_session()?;
            hide_labels(&mut session, &hide_label);
            let index = session.month_index().saturating_add(offset);
            let _ = session.select_month(index);
            print_month(&session);
        }
        Commands::Day { date, hide_label } => {
            let date = parse_date(&date)?;
            let mut session = open_session()?;
            hide_labels(&mut session, &hide_label);
            print_day(date, &session.select_day(date));
        }
        Commands::Add(fields) => {
            let date = fields.date.as_deref().map(parse_date).transpose()?;
            let mut session = open_session()?;
            let mut form = EventForm::new(date.unwrap_or(today));
            apply_fields(&mut form, fields)?;
            submit(&mut session, &form)?;
        }
        Commands::Edit { id, fields } => {
            let mut session = open_session()?;
            if session.select_event(&id).is_none() {
                bail!("No event with id {}", id);
            }
            let mut form = session.edit_form();
            apply_fields(&mut form, fields)?;
            submit(&mut session, &form)?;
        }
        Commands::Delete { id } => {
            let mut session = open_session()?;
            let outcome = session.request_delete(&id);
            if !outcome.changed {
                bail!("No event with id {}", id);
            }
            report_warning(outcome.warning.as_ref());
            println!("Deleted event {}", id);
        }
        Commands::Labels => print_labels(&open_session()?),
        Commands::InitConfig { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config {} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            settings::save_settings(&settings, &config_path)?;
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    date::parse_date(text).ok_or_else(|| anyhow!("Invalid date '{}', expected YYYY-MM-DD", text))
}

fn hide_labels(session: &mut CliSession, names: &[String]) {
    for name in names {
        if !session.set_label_checked(name, false) {
            log::warn!("No events use label '{}'", name);
        }
    }
}

fn apply_fields(form: &mut EventForm, fields: EventArgs) -> Result<()> {
    if let Some(title) = fields.title {
        form.title = title;
    }
    if let Some(text) = fields.date {
        form.day = parse_date(&text)?;
    }
    if let Some(label) = fields.label {
        form.label = label;
    }

    if fields.all_day {
        form.is_all_day = true;
        form.start_time.clear();
        form.end_time.clear();
    } else if fields.start.is_some() || fields.end.is_some() {
        form.is_all_day = false;
        if let Some(start) = fields.start {
            form.start_time = start;
        }
        if let Some(end) = fields.end {
            form.end_time = end;
        }
    }
    Ok(())
}

fn submit(session: &mut CliSession, form: &EventForm) -> Result<()> {
    let outcome = session.submit_event(form)?;
    report_warning(outcome.warning.as_ref());

    if form.editing.is_some() {
        println!("Updated event {}", outcome.id);
    } else {
        println!("Created event {}", outcome.id);
    }
    Ok(())
}

fn report_warning(warning: Option<&PersistenceWarning>) {
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }
}

fn print_month(session: &CliSession) {
    println!("{}", session.month_title());
    let header: Vec<String> = WEEKDAY_HEADERS.iter().map(|h| format!("{h:>7}")).collect();
    println!("{}", header.concat());

    for row in session.grid().rows() {
        let line: String = row
            .iter()
            .map(|&day| {
                let info = session.cell_info(day);
                let count = session
                    .filtered_events()
                    .iter()
                    .filter(|event| event.occurs_on(day))
                    .count();
                let marker = if info.is_today {
                    '*'
                } else if info.in_month {
                    ' '
                } else {
                    '.'
                };
                let count = if count > 0 {
                    format!("({count})")
                } else {
                    String::new()
                };
                format!("{:>7}", format!("{marker}{}{count}", day.format("%-d")))
            })
            .collect();
        println!("{line}");
    }
}

fn print_day(date: NaiveDate, day: &DayPartition<'_>) {
    println!("{}", date.format("%A, %B %-d, %Y"));
    if day.is_empty() {
        println!("  No events");
        return;
    }

    for (index, event) in day.all_day().enumerate() {
        if index == day.visible.len() {
            println!("  +{} More", day.overflow_count());
        }
        let indent = if index < day.visible.len() { "  " } else { "    " };
        println!("{indent}[{}] {} ({})", event.id, event.title, event.label);
    }
    for (event, line) in day.timed.iter().zip(day.timed_lines()) {
        println!("  [{}] {}", event.id, line);
    }
}

fn print_labels(session: &CliSession) {
    if session.labels().is_empty() {
        println!("No labels in use");
    }
    for label in session.labels() {
        println!("{} {}", if label.checked { "[x]" } else { "[ ]" }, label.name);
    }

    println!();
    println!("Palette:");
    for class in LABEL_CLASSES.iter() {
        println!("  {} {}", class.name, class.color);
    }
}
