use switchlog::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // development defaults: console, debug level, stdout/stderr
    let logger = switchlog::default_logger()?;
    let _guard = SyncGuard::new(&logger);

    logger.debug(&[&"request count", &42]);
    switchlog::infof!(logger, "server starting on port {}", 8080);
    logger.warnw("retrying", &[("attempt", 3.into()), ("backoff_ms", 250.into())]);
    logger.error(&[&"database connection failed"]);

    Ok(())
}
