use env_logger::Env;

/// Filter applies to this crate only unless `RUST_LOG` is set. Safe to call more than once.
pub fn init(level: Option<&str>) {
    let filter = format!("{}={}", env!("CARGO_CRATE_NAME"), level.unwrap_or("info"));
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .try_init();
}
