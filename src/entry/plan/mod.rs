mod build;
mod execute;
mod types;

pub(super) use build::build_plan;
pub(super) use execute::execute_plan;

#[cfg(test)]
pub(super) use build::parse_host;
