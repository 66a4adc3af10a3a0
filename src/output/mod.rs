//! Report lines written to the output sink
//!
//! Per-request lines read `<url>: <duration>`; statistics lines read
//! `<ok>/<attempts> ok, <timeout> timeout (<pct>%) <min>/<avg>/<max>`.
//! The final statistics line is preceded by a `Summary:` header.

use crate::{error::Result, models::ProbeResult, stats::StatsSnapshot};
use std::io::Write;

/// Format a single probe result as a per-request line
pub fn format_probe_line(result: &ProbeResult) -> String {
    format!("{}: {:?}", result.url, result.duration)
}

/// Writes report lines to any `Write` sink, flushing after each line
pub struct ReportWriter<W: Write> {
    sink: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn probe_line(&mut self, result: &ProbeResult) -> Result<()> {
        self.line(&format_probe_line(result))
    }

    /// Periodic statistics line
    pub fn stats_line(&mut self, snapshot: &StatsSnapshot) -> Result<()> {
        self.line(&snapshot.to_string())
    }

    /// Final statistics block
    pub fn summary(&mut self, snapshot: &StatsSnapshot) -> Result<()> {
        self.line("Summary:")?;
        self.line(&snapshot.to_string())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.sink, "{}", text)?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::time::Duration;

    fn written(write: impl FnOnce(&mut ReportWriter<Vec<u8>>)) -> String {
        let mut writer = ReportWriter::new(Vec::new());
        write(&mut writer);
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_probe_line_keeps_full_precision() {
        let result = ProbeResult::success("https://example.com/", Duration::from_micros(12_345), 200);
        assert_eq!(format_probe_line(&result), "https://example.com/: 12.345ms");
    }

    #[test]
    fn test_failed_probe_line_has_same_shape() {
        let result = ProbeResult::failed(
            "http://127.0.0.1:1/",
            Duration::from_millis(3),
            AppError::network("connection refused"),
        );
        assert_eq!(format_probe_line(&result), "http://127.0.0.1:1/: 3ms");
    }

    #[test]
    fn test_summary_block() {
        let snapshot = StatsSnapshot {
            ok: 9,
            attempts: 10,
            timeouts: 1,
            min: Duration::from_millis(20),
            avg: Duration::from_millis(25),
            max: Duration::from_millis(41),
        };

        let text = written(|w| w.summary(&snapshot).unwrap());
        assert_eq!(text, "Summary:\n9/10 ok, 1 timeout (10.00%) 20ms/25ms/41ms\n");

        let text = written(|w| w.stats_line(&snapshot).unwrap());
        assert_eq!(text, "9/10 ok, 1 timeout (10.00%) 20ms/25ms/41ms\n");
    }
}
