use std::fs;
use std::time::Duration;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
pub const DEFAULT_VIDEOS_URL: &str = "https://youtube.googleapis.com/youtube/v3/videos";

/// Livestream status service
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Optional TOML config file, CLI and environment values take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Channel to watch
    #[arg(long, env = "CHANNEL_ID")]
    pub channel_id: Option<String>,

    /// Data API credential
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// HTTP listen address (e.g., 0.0.0.0:5000)
    #[arg(long, env = "LISTEN_ADDR")]
    pub listen_addr: Option<String>,

    /// Refresh interval in seconds
    #[arg(long, env = "REFRESH_INTERVAL_SECS")]
    pub refresh_interval: Option<u64>,

    /// Upstream request timeout in seconds (no timeout if not specified)
    ///
    /// Without one, a hung call delays only the next refresh; on shutdown it
    /// is abandoned after a short grace period.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub channel_id: String,

    #[serde(default)]
    pub api_key: String,

    // http listen address: eg: 0.0.0.0:5000
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    // delay between the end of one refresh and the start of the next
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_search_url")]
    pub search_url: String,

    #[serde(default = "default_videos_url")]
    pub videos_url: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_refresh_interval_secs() -> u64 {
    15 * 60
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_videos_url() -> String {
    DEFAULT_VIDEOS_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_id: String::new(),
            api_key: String::new(),
            listen_addr: default_listen_addr(),
            refresh_interval_secs: default_refresh_interval_secs(),
            request_timeout_secs: None,
            search_url: default_search_url(),
            videos_url: default_videos_url(),
        }
    }
}

impl Config {
    /// Layer defaults, the optional config file, then explicitly supplied CLI/env values.
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let mut config = match args.config.as_deref() {
            Some(path) => load(path)?,
            None => Config::default(),
        };

        if let Some(channel_id) = args.channel_id {
            config.channel_id = channel_id;
        }
        if let Some(api_key) = args.api_key {
            config.api_key = api_key;
        }
        if let Some(listen_addr) = args.listen_addr {
            config.listen_addr = listen_addr;
        }
        if let Some(secs) = args.refresh_interval {
            config.refresh_interval_secs = secs;
        }
        if args.request_timeout.is_some() {
            config.request_timeout_secs = args.request_timeout;
        }

        Ok(config)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

pub fn load(path: &str) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
