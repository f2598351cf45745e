use chrono::Local;

/// Today's calendar date in server-local time, `YYYY-MM-DD`. The quota
/// window is anchored to this value; ISO dates compare correctly as text.
pub fn today_local() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
