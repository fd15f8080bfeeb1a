//! Shift Schedule Demo
//!
//! Reads a sign-up sheet exported as CSV, staffs the day's shifts and
//! prints the roster.
//!
//! ```text
//! shift-schedule responses.csv --shift-size 2 --friends 1,2
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use shiftforge::report::{PeopleReport, RosterReport};
use shiftforge::roster::{load_roster, RosterError};
use shiftforge::{
    ConfigError, FriendGroup, ModelVariant, ScheduleConfig, ShiftCap, ShiftForgeError, Solver,
};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "shift-schedule",
    about = "Staff a day of volunteer shifts from a sign-up sheet",
    version
)]
struct Cli {
    /// Sign-up sheet (header-less CSV)
    #[arg(default_value = "responses.csv")]
    responses: PathBuf,

    /// Schedule configuration file (.toml, .yaml or .yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of shifts to staff, counted from the first
    #[arg(long)]
    num_shifts: Option<usize>,

    /// People per shift
    #[arg(long)]
    shift_size: Option<usize>,

    /// Variable layout of the model
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Everyone works zero or two shifts, never one
    #[arg(long)]
    strict: bool,

    /// Don't require a veteran on every shift
    #[arg(long)]
    no_veteran_coverage: bool,

    /// Keep split-eligible people off consecutive shifts
    #[arg(long)]
    split: bool,

    /// One friend group, e.g. `--friends 1,2`; more groups go in the
    /// configuration file
    #[arg(long, value_delimiter = ',')]
    friends: Vec<usize>,

    /// Give up after this many seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// List the people before solving
    #[arg(long)]
    list_people: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    ShiftMajor,
    PersonMajorRanked,
    PersonMajorThreshold,
}

impl From<VariantArg> for ModelVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::ShiftMajor => ModelVariant::ShiftMajor,
            VariantArg::PersonMajorRanked => ModelVariant::PersonMajorRanked,
            VariantArg::PersonMajorThreshold => ModelVariant::PersonMajorThreshold,
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solve(#[from] ShiftForgeError),
}

fn main() -> ExitCode {
    shiftforge::console::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let people = load_roster(&cli.responses)?;
    if cli.list_people {
        print!("{}", PeopleReport(&people));
    }

    let config = build_config(&cli)?;
    let result = Solver::new(config).solve(&people)?;
    print!("{}", RosterReport::new(&people, &result));
    Ok(())
}

fn load_config(path: &Path) -> Result<ScheduleConfig, ConfigError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => ScheduleConfig::from_yaml_file(path),
        _ => ScheduleConfig::from_toml_file(path),
    }
}

/// Command-line flags override the configuration file.
fn build_config(cli: &Cli) -> Result<ScheduleConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ScheduleConfig::default(),
    };

    if let Some(n) = cli.num_shifts {
        config = config.with_num_shifts(n);
    }
    if let Some(size) = cli.shift_size {
        config = config.with_shift_size(size);
    }
    if let Some(variant) = cli.variant {
        config = config.with_model_variant(variant.into());
    }
    if cli.strict {
        config = config.with_shift_cap(ShiftCap::zero_or_two());
    }
    if cli.no_veteran_coverage {
        config = config.with_veteran_coverage(false);
    }
    if cli.split {
        config = config.with_split_adjacency(true);
    }
    if !cli.friends.is_empty() {
        config = config.with_friend_group(FriendGroup::new(cli.friends.iter().copied()));
    }
    if let Some(secs) = cli.time_limit {
        config = config.with_termination_seconds(secs);
    }
    Ok(config)
}
