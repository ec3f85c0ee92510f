use super::loader::load_config_file;
use super::{apply_config, parse_duration_value, parse_wait_value};
use clap::{CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::TesterArgs;
use crate::error::{AppError, AppResult, ConfigError};

fn write_config(name: &str, content: &str) -> AppResult<(tempfile::TempDir, std::path::PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok((dir, path))
}

fn args_and_matches(argv: &[&str]) -> AppResult<(TesterArgs, clap::ArgMatches)> {
    let matches = TesterArgs::command().try_get_matches_from(argv)?;
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> AppResult<()> {
    let (_dir, path) = write_config(
        "petclinic-load.toml",
        r#"
host = "http://clinic.test:9966"
users = 10
spawn_rate = 2
run_time = "5m"
wait_min = 0
wait_max = "500ms"
"#,
    )?;

    let config = load_config_file(&path)?;
    if config.host.as_deref() != Some("http://clinic.test:9966") {
        return Err(AppError::config("Unexpected host"));
    }
    if config.users != Some(10) || config.spawn_rate != Some(2) {
        return Err(AppError::config("Unexpected users/spawn_rate"));
    }
    let run_time = config
        .run_time
        .as_ref()
        .ok_or_else(|| AppError::config("Expected run_time"))?
        .to_duration()?;
    if run_time != Duration::from_secs(300) {
        return Err(AppError::config(format!("Unexpected run_time: {:?}", run_time)));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> AppResult<()> {
    let (_dir, path) = write_config(
        "petclinic-load.json",
        r#"{ "base_url": "http://clinic.test", "users": 3, "timeout": 2 }"#,
    )?;

    let config = load_config_file(&path)?;
    if config.host.as_deref() != Some("http://clinic.test") {
        return Err(AppError::config("Expected base_url alias to fill host"));
    }
    if config.users != Some(3) {
        return Err(AppError::config("Unexpected users"));
    }
    let timeout = config
        .timeout
        .as_ref()
        .ok_or_else(|| AppError::config("Expected timeout"))?
        .to_duration()?;
    if timeout != Duration::from_secs(2) {
        return Err(AppError::config(format!("Unexpected timeout: {:?}", timeout)));
    }
    Ok(())
}

#[test]
fn unknown_fields_are_rejected() -> AppResult<()> {
    let (_dir, path) = write_config("petclinic-load.toml", "hosts = \"typo\"\n")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected unknown field to be rejected")),
    }
}

#[test]
fn unsupported_extension_is_rejected() -> AppResult<()> {
    let (_dir, path) = write_config("petclinic-load.yaml", "host: x\n")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected yaml to be rejected")),
    }
}

#[test]
fn apply_config_fills_unset_options() -> AppResult<()> {
    let (_dir, path) = write_config(
        "petclinic-load.toml",
        r#"
host = "http://clinic.test"
users = 7
spawn_rate = 3
run_time = "90s"
wait_min = "100ms"
wait_max = "200ms"
timeout = "4s"
connect_timeout = "1s"
verbose = true
no_color = true
"#,
    )?;
    let config = load_config_file(&path)?;
    let (mut args, matches) = args_and_matches(&["petclinic-load"])?;

    apply_config(&mut args, &matches, &config)?;

    let checks = [
        (args.host == "http://clinic.test", "Unexpected host"),
        (args.users.get() == 7, "Unexpected users"),
        (args.spawn_rate.get() == 3, "Unexpected spawn_rate"),
        (args.run_time == Duration::from_secs(90), "Unexpected run_time"),
        (args.wait_min == Duration::from_millis(100), "Unexpected wait_min"),
        (args.wait_max == Duration::from_millis(200), "Unexpected wait_max"),
        (
            args.request_timeout == Duration::from_secs(4),
            "Unexpected request_timeout",
        ),
        (
            args.connect_timeout == Duration::from_secs(1),
            "Unexpected connect_timeout",
        ),
        (args.verbose, "Expected verbose"),
        (args.no_color, "Expected no_color"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::config(message));
        }
    }
    Ok(())
}

#[test]
fn apply_config_keeps_cli_values() -> AppResult<()> {
    let (_dir, path) = write_config("petclinic-load.toml", "users = 7\nrun_time = 90\n")?;
    let config = load_config_file(&path)?;
    let (mut args, matches) =
        args_and_matches(&["petclinic-load", "--users", "2", "--run-time", "10s"])?;

    apply_config(&mut args, &matches, &config)?;

    if args.users.get() != 2 {
        return Err(AppError::config(format!(
            "Expected CLI users to win, got {}",
            args.users.get()
        )));
    }
    if args.run_time != Duration::from_secs(10) {
        return Err(AppError::config("Expected CLI run_time to win"));
    }
    Ok(())
}

#[test]
fn apply_config_rejects_zero_users() -> AppResult<()> {
    let (_dir, path) = write_config("petclinic-load.toml", "users = 0\n")?;
    let config = load_config_file(&path)?;
    let (mut args, matches) = args_and_matches(&["petclinic-load"])?;

    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::FieldMustBePositive { field, .. })) if field == "users" => {
            Ok(())
        }
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected zero users to be rejected")),
    }
}

#[test]
fn apply_config_rejects_zero_run_time() -> AppResult<()> {
    let (_dir, path) = write_config("petclinic-load.toml", "run_time = 0\n")?;
    let config = load_config_file(&path)?;
    let (mut args, matches) = args_and_matches(&["petclinic-load"])?;

    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::InvalidDuration { field, .. })) if field == "run_time" => {
            Ok(())
        }
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected zero run time to be rejected")),
    }
}

#[test]
fn duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_value(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "{} parsed as {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn wait_allows_zero_but_duration_does_not() -> AppResult<()> {
    if parse_wait_value("0")? != Duration::ZERO {
        return Err(AppError::validation("Expected zero wait"));
    }
    if parse_duration_value("0ms").is_ok() {
        return Err(AppError::validation("Expected zero duration to be rejected"));
    }
    if parse_duration_value("ms").is_ok() || parse_duration_value("").is_ok() {
        return Err(AppError::validation("Expected malformed durations to be rejected"));
    }
    Ok(())
}
