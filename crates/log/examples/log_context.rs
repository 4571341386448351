//! Swapping backends behind a `LogContext`

use switchlog::prelude::*;

fn main() -> LogResult<()> {
    let mut context = LogContext::new();

    // nothing set yet: init and sync are no-ops
    context.init(&Config::default())?;
    context.sync()?;

    context.set_strategy(StandardLogStrategy::new());
    context.init(&Config::development().with_level("info"))?;
    context.logger().info(&[&"console backend"]);
    context.logger().debug(&[&"filtered at info"]);
    context.sync()?;

    context.set_strategy(StandardLogStrategy::new());
    context.init(&Config::production())?;
    switchlog::logw!(context.logger(), Severity::Info, "json backend", "switched" => true);
    context.sync()?;

    Ok(())
}
