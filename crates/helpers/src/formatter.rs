use nu_ansi_term::{Color, Style};
use std::fmt::{self, Write};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format::Writer, time::FormatTime},
    registry::LookupSpan,
};

/// Single line event format: `<time> <LEVEL> <target>: <fields>`.
///
/// Colors are only emitted when the writer accepts ANSI escapes.
pub struct LevelFormatter;

impl<S, N> FormatEvent<S, N> for LevelFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let ansi = writer.has_ansi_escapes();
        let meta = event.metadata();

        let dimmed = if ansi { Style::new().dimmed() } else { Style::new() };
        write!(writer, "{}", dimmed.prefix())?;
        tracing_subscriber::fmt::time().format_time(&mut writer)?;
        write!(writer, "{} ", dimmed.suffix())?;

        let level = level_label(meta.level());
        if ansi {
            write!(writer, "{} ", level_color(meta.level()).paint(level))?;
        } else {
            write!(writer, "{level} ")?;
        }

        let bold = if ansi { Style::new().bold() } else { Style::new() };
        write!(writer, "{}: ", bold.paint(meta.target()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writer.write_char('\n')
    }
}

fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => " INFO",
        Level::WARN => " WARN",
        Level::ERROR => "ERROR",
    }
}

fn level_color(level: &Level) -> Color {
    match *level {
        Level::TRACE => Color::Purple,
        Level::DEBUG => Color::Blue,
        Level::INFO => Color::Green,
        Level::WARN => Color::Yellow,
        Level::ERROR => Color::Red,
    }
}
