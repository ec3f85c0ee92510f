use super::test_support::parse_test_args;
use crate::error::{AppError, AppResult};
use std::time::Duration;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["petclinic-load", "-u", "http://localhost:9966"])?;

    let checks = [
        (args.host == "http://localhost:9966", "Unexpected host"),
        (args.users.get() == 1, "Unexpected users"),
        (args.spawn_rate.get() == 1, "Unexpected spawn_rate"),
        (args.run_time == Duration::from_secs(60), "Unexpected run_time"),
        (args.wait_min == Duration::from_secs(1), "Unexpected wait_min"),
        (args.wait_max == Duration::from_secs(3), "Unexpected wait_max"),
        (
            args.request_timeout == Duration::from_secs(10),
            "Unexpected request_timeout",
        ),
        (
            args.connect_timeout == Duration::from_secs(5),
            "Unexpected connect_timeout",
        ),
        (args.config.is_none(), "Expected config to be None"),
        (!args.verbose, "Expected verbose to be false"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_load_shape() -> AppResult<()> {
    let args = parse_test_args([
        "petclinic-load",
        "--users",
        "25",
        "--spawn-rate",
        "5",
        "--run-time",
        "2m",
        "--wait-min",
        "0",
        "--wait-max",
        "250ms",
    ])?;

    if args.users.get() != 25 || args.spawn_rate.get() != 5 {
        return Err(AppError::validation("Unexpected users/spawn rate"));
    }
    if args.run_time != Duration::from_secs(120) {
        return Err(AppError::validation(format!(
            "Unexpected run_time: {:?}",
            args.run_time
        )));
    }
    if args.wait_min != Duration::ZERO || args.wait_max != Duration::from_millis(250) {
        return Err(AppError::validation("Unexpected wait range"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_users() -> AppResult<()> {
    if parse_test_args(["petclinic-load", "--users", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero users to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_run_time() -> AppResult<()> {
    if parse_test_args(["petclinic-load", "--run-time", "0s"]).is_ok() {
        return Err(AppError::validation("Expected zero run time to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_unknown_unit() -> AppResult<()> {
    if parse_test_args(["petclinic-load", "--timeout", "5d"]).is_ok() {
        return Err(AppError::validation("Expected unknown unit to be rejected"));
    }
    Ok(())
}
