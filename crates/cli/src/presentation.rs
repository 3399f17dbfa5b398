// crates/cli/src/presentation.rs
use std::fmt::Write;

use crate::options::OutputFormat;
use crate::run::Report;

pub fn print_report(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => print!("{}", render_table(report)),
    }
}

fn print_json(report: &Report) {
    if let Ok(json) = serde_json::to_string_pretty(report) {
        println!("{json}");
    }
}

pub fn render_table(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "lazyq v{} · {} · n={} · parallel={}",
        crate::VERSION,
        report.command,
        report.len,
        report.workers
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<10} {:<12} {:>22} {:>12}", "OP", "ENGINE", "VALUE", "MS");
    let _ = writeln!(out, "{}", "-".repeat(59));
    for m in &report.measurements {
        let _ = writeln!(
            out,
            "{:<10} {:<12} {:>22} {:>12.2}",
            m.label,
            m.engine.to_string(),
            m.value.to_string(),
            m.elapsed_ms
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::{Engine, Measurement, Outcome};

    #[test]
    fn table_lists_every_measurement() {
        let report = Report {
            command: "aggregate",
            len: 10,
            workers: 2,
            measurements: vec![
                Measurement {
                    label: "max".to_owned(),
                    engine: Engine::Sequential,
                    value: Outcome::Integer(10),
                    elapsed_ms: 0.5,
                },
                Measurement {
                    label: "average".to_owned(),
                    engine: Engine::Parallel,
                    value: Outcome::Float(5.5),
                    elapsed_ms: 1.25,
                },
            ],
        };
        let table = render_table(&report);
        assert!(table.contains("n=10"));
        assert!(table.contains("parallel=2"));
        let rows: Vec<&str> = table.lines().skip(4).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("max") && rows[0].contains("sequential"));
        assert!(rows[1].contains("5.5000") && rows[1].contains("1.25"));
    }
}
