//! Presentation of generated plans.

pub mod text;

pub use text::{render_day, render_plan};

use crate::{types::TripPlan, PlannerError, Result};
use std::{io::Write, str::FromStr};

/// Output formats understood by the render sinks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
}

impl RenderFormat {
    /// Render a plan in this format
    pub fn render(&self, plan: &TripPlan) -> Result<String> {
        match self {
            RenderFormat::Text => Ok(render_plan(plan)),
            RenderFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            other => Err(PlannerError::Config(format!(
                "unknown output format `{}` (expected text or json)",
                other
            ))),
        }
    }
}

/// Something that displays a finished plan
pub trait RenderSink {
    fn display(&mut self, plan: &TripPlan) -> Result<()>;
}

/// Writes rendered plans to any [`Write`] target
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    format: RenderFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: RenderFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for WriterSink<W> {
    fn display(&mut self, plan: &TripPlan) -> Result<()> {
        let rendered = self.format.render(plan)?;
        writeln!(self.writer, "{}", rendered)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::ItineraryGenerator;
    use crate::types::TripRequest;
    use chrono::NaiveDate;

    fn plan() -> TripPlan {
        let request = TripRequest::new("Alice", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .with_destinations(["Penang"])
            .with_duration(1)
            .with_budget(100.0);
        ItineraryGenerator::new()
            .with_seed(5)
            .generate_plan(&request)
            .unwrap()
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<RenderFormat>().unwrap(), RenderFormat::Json);
        assert_eq!("text".parse::<RenderFormat>().unwrap(), RenderFormat::Text);
        assert!("html".parse::<RenderFormat>().is_err());
    }

    #[test]
    fn test_json_sink_writes_parseable_plan() {
        let plan = plan();
        let mut sink = WriterSink::new(Vec::new(), RenderFormat::Json);
        sink.display(&plan).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        let decoded: TripPlan = serde_json::from_str(written.trim()).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn test_text_sink() {
        let mut sink = WriterSink::new(Vec::new(), RenderFormat::Text);
        sink.display(&plan()).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.contains("Day 1 - Penang"));
        assert!(written.ends_with('\n'));
    }
}
