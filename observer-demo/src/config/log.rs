use env_logger::{Builder, Env, Target};
use log::SetLoggerError;

/// Diagnostics go to stderr so stdout only carries the demo output.
/// `RUST_LOG` wins over `default_filter`.
pub fn init(default_filter: &str) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Stderr)
        .try_init()
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use crate::config::log::init;

    #[test]
    fn test_init() {
        let noop_logger = log::logger();
        let result = init("warn");
        let logger = log::logger();
        assert!(result.is_ok());
        assert!(
            !ptr::eq(&*noop_logger, &*logger),
            "Should initialize global logger"
        );
        assert!(init("debug").is_err(), "Should refuse a second initialization");
    }
}
