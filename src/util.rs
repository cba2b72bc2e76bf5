use std::time::Duration;

const STATS_URL: &str = "STATS_URL";

pub fn get_url() -> Option<String> {
    let url_from_env = std::env::var(STATS_URL);
    url_from_env.ok().filter(|url| !url.is_empty())
}

const STATS_INTERVAL_MS: &str = "STATS_INTERVAL_MS";

pub fn get_interval() -> Option<Duration> {
    let interval_from_env = std::env::var(STATS_INTERVAL_MS);
    interval_from_env
        .ok()
        .and_then(|res| res.parse().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
