use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity and configured level.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "contact_book=debug".to_string(),
        (false, Some(level)) => format!("contact_book={}", level.trim().to_ascii_lowercase()),
        (false, None) => "contact_book=warn".to_string(),
    }
}

/// Logs go to stderr, stdout belongs to the prompt.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true, Some("error")), "contact_book=debug");
        assert_eq!(default_directive(false, Some("INFO")), "contact_book=info");
        assert_eq!(default_directive(false, None), "contact_book=warn");
    }
}
