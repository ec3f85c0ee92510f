use clap::Parser;
use std::time::Duration;

use super::defaults::DEFAULT_HOST;
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_u64, parse_positive_usize, parse_wait_arg,
};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Async HTTP load generator for the pet clinic application: each simulated user creates an owner, then a pet for that owner."
)]
pub struct TesterArgs {
    /// Base URL of the pet clinic application
    #[arg(long = "host", short = 'u', env = "PETCLINIC_LOAD_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Number of concurrent simulated users
    #[arg(
        long = "users",
        short = 'c',
        default_value = "1",
        value_parser = parse_positive_usize
    )]
    pub users: PositiveUsize,

    /// Users started per second until --users are running
    #[arg(
        long = "spawn-rate",
        short = 'r',
        default_value = "1",
        value_parser = parse_positive_u64
    )]
    pub spawn_rate: PositiveU64,

    /// Test duration (supports ms/s/m/h)
    #[arg(
        long = "run-time",
        short = 't',
        default_value = "60s",
        value_parser = parse_duration_arg
    )]
    pub run_time: Duration,

    /// Minimum pause between iterations of one user (supports ms/s/m/h, may be 0)
    #[arg(long = "wait-min", default_value = "1s", value_parser = parse_wait_arg)]
    pub wait_min: Duration,

    /// Maximum pause between iterations of one user (supports ms/s/m/h, may be 0)
    #[arg(long = "wait-max", default_value = "3s", value_parser = parse_wait_arg)]
    pub wait_max: Duration,

    /// Request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Connect timeout (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Path to config file (TOML/JSON). Defaults to ./petclinic-load.toml or ./petclinic-load.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by PETCLINIC_LOAD_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
