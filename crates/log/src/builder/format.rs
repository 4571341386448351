//! Format layer creation macros, the shared timer and the JSON record format

use std::fmt;

use serde_json::{Map, Value};
use time::format_description::well_known::Iso8601;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::time::{FormatTime, UtcTime};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Field carrying the keyed pairs of a record, pre-rendered as a JSON object
const PAIRS_FIELD: &str = "fields";

/// ISO-8601 UTC timestamps for both encodings
pub(crate) fn make_timer() -> UtcTime<Iso8601> {
    UtcTime::new(Iso8601::DEFAULT)
}

/// One JSON object per line: `timestamp`, `level`, then the event fields
///
/// The keyed pairs are written as a nested `fields` object, keys in call
/// order.
#[derive(Debug)]
pub(crate) struct JsonRecord {
    timer: UtcTime<Iso8601>,
}

impl Default for JsonRecord {
    fn default() -> Self {
        Self {
            timer: make_timer(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonRecord
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut timestamp = String::new();
        self.timer
            .format_time(&mut format::Writer::new(&mut timestamp))?;

        let mut record = Map::new();
        record.insert("timestamp".to_string(), Value::String(timestamp));
        record.insert(
            "level".to_string(),
            Value::from(event.metadata().level().as_str()),
        );
        event.record(&mut RecordVisitor(&mut record));

        let line = serde_json::to_string(&record).map_err(|_| fmt::Error)?;
        writeln!(writer, "{line}")
    }
}

struct RecordVisitor<'a>(&'a mut Map<String, Value>);

impl RecordVisitor<'_> {
    fn insert(&mut self, field: &Field, value: Value) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for RecordVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        let value = if field.name() == PAIRS_FIELD {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        } else {
            Value::String(text)
        };
        self.insert(field, value);
    }
}

/// Human-readable single line with a colored level label
///
/// Target, file and line are left out: every record carries the real call
/// site in its `caller` field instead.
macro_rules! create_console_layer {
    ($writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .with_writer($writer)
            .with_ansi(true)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_timer($crate::builder::format::make_timer())
    }};
}

/// One JSON object per line
macro_rules! create_json_layer {
    ($writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .with_writer($writer)
            .with_ansi(false)
            .event_format($crate::builder::format::JsonRecord::default())
    }};
}
