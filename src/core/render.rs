use crate::domain::model::ClassifyReport;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

pub fn write_report<W: Write>(
    writer: &mut W,
    report: &ClassifyReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, report),
        OutputFormat::Csv => write_csv(writer, report),
        OutputFormat::Json => write_json(writer, report),
    }
}

fn write_text<W: Write>(writer: &mut W, report: &ClassifyReport) -> Result<()> {
    for classification in &report.classifications {
        writeln!(writer, "{}\t{}", classification.input, classification.form)?;
    }
    Ok(())
}

fn write_csv<W: Write>(writer: &mut W, report: &ClassifyReport) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["input", "form"])?;
    for classification in &report.classifications {
        csv_writer.write_record([classification.input.as_str(), classification.form.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(writer: &mut W, report: &ClassifyReport) -> Result<()> {
    let json = serde_json::to_string_pretty(&report.classifications)?;
    writer.write_all(json.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}
