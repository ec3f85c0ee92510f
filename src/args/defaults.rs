pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("petclinic-load/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_HOST: &str = "http://localhost:8080";

/// Config files picked up from the working directory when `--config` is not
/// given, in lookup order.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["petclinic-load.toml", "petclinic-load.json"];
