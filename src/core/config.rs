use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Configuration
-------------------------------------------------------------------------------------------------*/

/// Where the candidate tokens come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// A file with one token per line.
    File(PathBuf),

    /// A comma-separated list of tokens.
    List(String),
}

/// Run configuration, built once and passed by reference to the collector, the fetcher, and the
/// planner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub input: Input,
    pub ip_set_id: Option<String>,
    pub region: Option<String>,
    pub change_token: Option<String>,
    pub dry_run: bool,
}

impl Config {
    pub fn new(input: Input) -> Self {
        Self {
            input,
            ip_set_id: None,
            region: None,
            change_token: None,
            dry_run: false,
        }
    }

    /// The IPSet to fetch, when a live comparison is in effect: an IPSet id and a region were
    /// given and the run is not a dry run.
    pub fn remote_ip_set(&self) -> Option<(&str, &str)> {
        if self.dry_run {
            return None;
        }
        match (&self.ip_set_id, &self.region) {
            (Some(ip_set_id), Some(region)) => Some((ip_set_id, region)),
            _ => None,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
