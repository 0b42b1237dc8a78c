use std::io::Write;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use rust_decimal::Decimal;

use crate::core::types::{CalculationResult, CalculationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_result(&mut self, result: &CalculationResult) -> anyhow::Result<()>;
}

/// Build a writer for the requested format over any output sink
pub fn create_writer(format: OutputFormat, sink: Box<dyn Write>) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "| Quantity | Value |")?;
        writeln!(self.writer, "|----------|-------|")?;
        writeln!(self.writer, "| Status | {} |", result.status)?;
        writeln!(
            self.writer,
            "| Unadjusted function points | {} |",
            display_decimal(result.unadjusted_fp)
        )?;
        writeln!(
            self.writer,
            "| Value adjustment factor | {}{} |",
            display_decimal(result.vaf),
            if result.vaf_defaulted {
                " (neutral default)"
            } else {
                ""
            }
        )?;
        writeln!(
            self.writer,
            "| Adjusted function points | {} |",
            display_decimal(result.adjusted_fp)
        )?;
        writeln!(self.writer, "| Reuse level | {} |", result.reuse_level)?;
        writeln!(
            self.writer,
            "| Final function points | {} |",
            display_decimal(result.final_fp)
        )?;
        writeln!(
            self.writer,
            "| Person-months | {} |",
            display_decimal(result.person_months)
        )?;
        writeln!(self.writer, "| Cost | {} |", display_decimal(result.cost))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        if result.breakdown.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Function point breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Name | Type | Complexity | Weight |")?;
        writeln!(self.writer, "|------|------|------------|--------|")?;
        for item in &result.breakdown {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                item.name.as_deref().unwrap_or("-"),
                item.fp_type,
                item.level,
                item.weight
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_result(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Function Point Estimate")?;
        writeln!(self.writer)?;
        if let Some(project) = &result.project {
            writeln!(self.writer, "Project: {project}")?;
        }
        writeln!(
            self.writer,
            "Generated: {}",
            result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        self.write_summary(result)?;
        if let Some(remark) = &result.remark {
            writeln!(self.writer, "> {remark}")?;
            writeln!(self.writer)?;
        }
        self.write_breakdown(result)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_result(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let status = match result.status {
            CalculationStatus::Completed => result.status.as_str().green().bold(),
            CalculationStatus::Failed => result.status.as_str().red().bold(),
        };
        writeln!(
            self.writer,
            "{} {}",
            result.project.as_deref().unwrap_or("(unnamed project)").bold(),
            status
        )?;
        if let Some(remark) = &result.remark {
            writeln!(self.writer, "  {}", remark.yellow())?;
        }

        let mut summary = Table::new();
        summary
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Quantity", "Value"]);
        summary.add_row(vec![
            Cell::new("Unadjusted function points"),
            Cell::new(display_decimal(result.unadjusted_fp)),
        ]);
        let vaf = if result.vaf_defaulted {
            format!("{} (neutral default)", display_decimal(result.vaf))
        } else {
            display_decimal(result.vaf)
        };
        summary.add_row(vec![Cell::new("Value adjustment factor"), Cell::new(vaf)]);
        summary.add_row(vec![
            Cell::new("Adjusted function points"),
            Cell::new(display_decimal(result.adjusted_fp)),
        ]);
        summary.add_row(vec![
            Cell::new("Reuse level"),
            Cell::new(result.reuse_level.to_string()),
        ]);
        summary.add_row(vec![
            Cell::new("Final function points"),
            Cell::new(display_decimal(result.final_fp)),
        ]);
        summary.add_row(vec![
            Cell::new("Person-months"),
            Cell::new(display_decimal(result.person_months)),
        ]);
        summary.add_row(vec![Cell::new("Cost"), Cell::new(display_decimal(result.cost))]);
        writeln!(self.writer, "{summary}")?;

        if !result.breakdown.is_empty() {
            let mut breakdown = Table::new();
            breakdown
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Name", "Type", "Complexity", "Weight"]);
            for item in &result.breakdown {
                breakdown.add_row(vec![
                    Cell::new(item.name.as_deref().unwrap_or("-")),
                    Cell::new(item.fp_type.to_string()),
                    Cell::new(item.level.to_string()),
                    Cell::new(item.weight.to_string()),
                ]);
            }
            writeln!(self.writer, "{breakdown}")?;
        }
        Ok(())
    }
}

fn display_decimal(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EstimationConfig;
    use crate::core::types::{FunctionPoint, FunctionPointType};
    use crate::pipeline::{calculate, CalculationInput};
    use crate::vaf::uniform_scores;

    fn completed_result() -> CalculationResult {
        let input = CalculationInput {
            project: Some("portal".to_string()),
            function_points: vec![FunctionPoint::new(FunctionPointType::Ilf, 15)
                .with_ret(1)
                .named("citizen file")],
            gsc_scores: uniform_scores(3),
            reuse_level: None,
        };
        calculate(&input, &EstimationConfig::default()).unwrap()
    }

    #[test]
    fn json_writer_emits_the_wire_form() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_result(&completed_result())
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json["status"], "COMPLETED");
        assert_eq!(json["unadjusted_fp"], "7.0000");
        assert_eq!(json["vaf"], "1.0700");
        assert_eq!(json["reuse_level"], "NONE");
        assert_eq!(json["breakdown"][0]["fp_type"], "ILF");
        assert_eq!(json["breakdown"][0]["level"], "LOW");
    }

    #[test]
    fn markdown_writer_includes_summary_and_breakdown() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_result(&completed_result())
            .unwrap();
        let report = String::from_utf8(buffer).unwrap();
        assert!(report.contains("# Function Point Estimate"));
        assert!(report.contains("| Unadjusted function points | 7.0000 |"));
        assert!(report.contains("## Function point breakdown"));
        assert!(report.contains("| citizen file | ILF | LOW | 7 |"));
    }

    #[test]
    fn failed_result_renders_the_remark() {
        let result = CalculationResult::failed(
            Some("broken".to_string()),
            crate::reuse::ReuseLevel::None,
            "function point set is empty",
        );
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_result(&result).unwrap();
        let report = String::from_utf8(buffer).unwrap();
        assert!(report.contains("FAILED"));
        assert!(report.contains("function point set is empty"));
    }
}
