use crate::http::ClientSettings;
use crate::runner::RunSettings;

/// Everything a run needs once arguments and config are merged.
#[derive(Debug, Clone)]
pub(crate) struct RunPlan {
    pub client: ClientSettings,
    pub run: RunSettings,
    pub verbose: bool,
    pub no_color: bool,
}
