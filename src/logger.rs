use std::io::{self, IsTerminal, Write};

use log::{Level, LevelFilter, Record};

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[31m",
        Level::Warn => "\x1b[33m",
        Level::Info => "\x1b[36m",
        Level::Debug => "\x1b[37m",
        Level::Trace => "\x1b[90m",
    }
}

/// One log line: `<level> <module> <message>`, lower-case level, colour
/// escapes only when `color` is set.
fn format_line(buf: &mut impl Write, record: &Record, color: bool) -> io::Result<()> {
    let level = record.level().to_string().to_lowercase();
    let module = record.module_path().unwrap_or("unknown");

    if color {
        writeln!(
            buf,
            "{}{}\x1b[0m \x1b[90m{}\x1b[0m {}",
            level_color(record.level()),
            level,
            module,
            record.args()
        )
    } else {
        writeln!(buf, "{} {} {}", level, module, record.args())
    }
}

/// Installs the stderr logger. `RUST_LOG` overrides the default `warn` level,
/// e.g. `RUST_LOG=trace` shows which rule decided each word.
pub fn setup_logger() {
    let color = io::stderr().is_terminal();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format(move |buf, record| format_line(buf, record, color))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(level: Level, color: bool) -> String {
        let mut out = Vec::new();
        format_line(
            &mut out,
            &Record::builder()
                .args(format_args!("hour -> an"))
                .level(level)
                .module_path(Some("indefinite::article"))
                .build(),
            color,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_line_has_no_escapes() {
        let line = render(Level::Trace, false);
        assert_eq!(line, "trace indefinite::article hour -> an\n");
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_colored_line_wraps_level() {
        let line = render(Level::Warn, true);
        assert!(line.starts_with("\x1b[33mwarn\x1b[0m"));
        assert!(line.ends_with("hour -> an\n"));
    }
}
