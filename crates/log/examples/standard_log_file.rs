//! Standard strategy writing to a dated log file in the working directory

use switchlog::prelude::*;

fn main() -> anyhow::Result<()> {
    let today = time::OffsetDateTime::now_utc().date();
    let file_name = format!(
        "{:04}{:02}{:02}.log",
        today.year(),
        u8::from(today.month()),
        today.day()
    );

    let config = Config {
        environment: Environment::Development,
        level: "info".to_string(),
        encoding: None,
        sinks: Some(SinkConfig::new([file_name.as_str()], ["stderr"])),
    };

    let mut standard = StandardLogStrategy::new();
    standard.init(&config)?;
    let _guard = SyncGuard::new(&standard);

    standard.info(&[&"Application started"]);
    standard.warn(&[&"This is a warning message"]);
    // error and above go to err_outputs only, so this line lands on stderr
    standard.error(&[&"This is an error message"]);
    standard.debugf(format_args!("Debugging value: {}", 42));

    println!("wrote {file_name}");
    Ok(())
}
