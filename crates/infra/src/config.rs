use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Maximum supported reminder cycle in days. The reminder feed is
    /// always computed for this superset and consumers narrow it down to
    /// the cycle the end user selected.
    pub reminder_lookahead_days: i64,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        Self {
            port,
            reminder_lookahead_days: 360,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
