use env_logger::Env;

/// Install the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .try_init();
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    let mut line = format!("{}: {}", prefix, e);
    let mut source = e.source();
    while let Some(cause) = source {
        line.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    log::error!("{}", line);
}
