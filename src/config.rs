use crate::cli::{Args, LogFormat};

const DEFAULT_FILTER: &str = "startwatch=warn";
const VERBOSE_FILTER: &str = "startwatch=debug";

#[derive(Clone, Debug)]
pub struct Config {
    pub log_filter: String,
    pub log_format: LogFormat,
    pub json:       bool,
    pub verbose:    bool,
}

impl From<&Args> for Config {
    fn from(a: &Args) -> Self {
        let log_filter = match &a.log_filter {
            Some(filter) => filter.clone(),
            None if a.verbose => VERBOSE_FILTER.to_string(),
            None => DEFAULT_FILTER.to_string(),
        };
        Self {
            log_filter,
            log_format: a.log_format,
            json:       a.json,
            verbose:    a.verbose,
        }
    }
}
