//! Renders lottery reports as JSON, CSV or a plain-text table.

use crate::models::LotteryReport;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Table,
}

/// Flattened CSV row; numbers are space-separated.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    lottery_id: Option<u32>,
    title: &'a str,
    date: &'a str,
    numbers: String,
    strong_number: &'a str,
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(out: W, reports: &[LotteryReport]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    for report in reports {
        for draw in &report.draws {
            writer
                .serialize(CsvRow {
                    lottery_id: report.lottery_id.map(|id| id.get()),
                    title: &draw.title,
                    date: &draw.date,
                    numbers: draw.numbers.join(" "),
                    strong_number: &draw.strong_number,
                })
                .context("Failed to write CSV row")?;
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn write_table<W: Write>(mut out: W, reports: &[LotteryReport]) -> Result<()> {
    for report in reports {
        writeln!(out, "─────────────────────────────────")?;
        match report.lottery_id {
            Some(id) => writeln!(out, "  Lottery {}", id)?,
            None => writeln!(out, "  {}", report.source)?,
        }
        writeln!(out, "─────────────────────────────────")?;

        if report.draws.is_empty() {
            writeln!(out, "  No draws found.")?;
        }
        for draw in &report.draws {
            writeln!(out, "  {}", draw.title)?;
            writeln!(out, "    Date    : {}", draw.date)?;
            writeln!(out, "    Numbers : {}", draw.numbers.join(" "))?;
            writeln!(out, "    Strong  : {}", draw.strong_number)?;
        }
    }
    Ok(())
}

pub fn write_reports<W: Write>(out: W, format: OutputFormat, reports: &[LotteryReport]) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Csv => write_csv(out, reports),
        OutputFormat::Table => write_table(out, reports),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrawRecord, LotteryId, ResultSet};
    use chrono::NaiveDate;

    fn report() -> LotteryReport {
        LotteryReport {
            lottery_id: LotteryId::new(3650),
            source: "https://pais.co.il/lotto/currentlotto.aspx?lotteryId=3650".into(),
            fetched_at: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            draws: ResultSet::from(vec![DrawRecord {
                title: "Lotto Draw 1234".into(),
                date: "01/01/2024".into(),
                numbers: vec!["41".into(), "22".into(), "17".into(), "9".into(), "5".into(), "3".into()],
                strong_number: "7".into(),
            }]),
        }
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[report()]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "lottery_id,title,date,numbers,strong_number\n3650,Lotto Draw 1234,01/01/2024,41 22 17 9 5 3,7\n"
        );
    }

    #[test]
    fn test_write_json_nests_draws() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[report()]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["lottery_id"], 3650);
        assert_eq!(value[0]["draws"][0]["strong_number"], "7");
        assert_eq!(value[0]["draws"][0]["numbers"][0], "41");
    }

    #[test]
    fn test_write_table() {
        let mut buf = Vec::new();
        write_table(&mut buf, &[report()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Lottery 3650"));
        assert!(text.contains("Numbers : 41 22 17 9 5 3"));
    }
}
