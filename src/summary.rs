//! Human readable reports of a [`Registry`].

use crate::registry::Registry;
use std::io::{self, Write};

const STAT_COLUMNS: [&str; 7] = ["elapsed", "count", "min", "max", "mean", "median", "p95"];

fn display_name(name: &str, active: bool) -> String {
    if active {
        format!("{name}*")
    } else {
        name.to_string()
    }
}

fn seconds(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.5}"))
}

/// Writes the elapsed time of every timer, marking running ones with `*`:
///
/// ```text
///
/// TimeUp timers summary
/// ========================
/// :roast   	0.06021s
/// :souffle*	0.00002s
///
/// * Denotes that the timer is still active
///
/// ```
///
/// # Errors
/// Returns any error from `out`
pub fn write_summary<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    let timers = registry.all_timers();

    let width = timers
        .iter()
        .map(|timer| timer.name().to_string().chars().count())
        .max()
        .unwrap_or(0)
        + 1;

    let lines: Vec<String> = timers
        .iter()
        .map(|timer| {
            let name = display_name(&timer.name().to_string(), timer.active());
            format!("{name:<width$}\t{:.5}s", timer.elapsed())
        })
        .collect();

    writeln!(out)?;
    writeln!(out, "TimeUp timers summary")?;
    writeln!(out, "========================")?;
    writeln!(out, "{}", lines.join("\n"))?;
    writeln!(out)?;

    if timers.iter().any(|timer| timer.active()) {
        writeln!(out, "* Denotes that the timer is still active")?;
    }

    writeln!(out)
}

/// Writes one row of statistics per timer, absent values shown as `-`
///
/// # Errors
/// Returns any error from `out`
pub fn write_stats_table<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    let rows: Vec<(String, [String; 7])> = registry
        .all_timers()
        .iter()
        .map(|timer| {
            let stats = timer.stats();
            let name = display_name(&timer.name().to_string(), timer.active());

            (
                name,
                [
                    format!("{:.5}", stats.elapsed),
                    stats.count.to_string(),
                    seconds(stats.min),
                    seconds(stats.max),
                    seconds(stats.mean),
                    seconds(stats.median),
                    seconds(stats.p95),
                ],
            )
        })
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("timer".len());

    let mut widths = STAT_COLUMNS.map(str::len);
    for (_, cells) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    write!(out, "{:<name_width$}", "timer")?;
    for (header, width) in STAT_COLUMNS.iter().zip(widths) {
        write!(out, "  {header:>width$}")?;
    }
    writeln!(out)?;

    for (name, cells) in &rows {
        write!(out, "{name:<name_width$}")?;
        for (cell, width) in cells.iter().zip(widths) {
            write!(out, "  {cell:>width$}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn render<F>(registry: &Registry, f: F) -> String
    where
        F: Fn(&Registry, &mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(registry, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_layout() {
        let registry = Registry::new();

        registry.timer("roast").record(Duration::from_millis(60));
        registry.timer("veggies").record(Duration::from_millis(30));
        registry.timer("pasta").record(Duration::from_millis(10));
        registry.start("souffle");

        let output = render(&registry, |r, out| write_summary(r, out));
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "TimeUp timers summary");
        assert_eq!(lines[2], "========================");
        assert_eq!(lines[3], ":roast   \t0.06000s");
        assert_eq!(lines[4], ":veggies \t0.03000s");
        assert_eq!(lines[5], ":pasta   \t0.01000s");
        assert!(lines[6].starts_with(":souffle*\t0.00"));
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "* Denotes that the timer is still active");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_summary_without_active_timers() {
        let registry = Registry::new();
        registry
            .timer(String::from("cool neat"))
            .record(Duration::from_millis(1500));

        let output = render(&registry, |r, out| write_summary(r, out));

        assert_eq!(
            output,
            "\nTimeUp timers summary\n========================\n\"cool neat\" \t1.50000s\n\n\n"
        );
    }

    #[test]
    fn test_summary_without_timers() {
        let output = render(&Registry::new(), |r, out| write_summary(r, out));
        assert_eq!(
            output,
            "\nTimeUp timers summary\n========================\n\n\n\n"
        );
    }

    #[test]
    fn test_stats_table() {
        let registry = Registry::new();

        let timer = registry.timer("samples");
        for ms in [100, 200, 100, 50] {
            timer.record(Duration::from_millis(ms));
        }
        registry.timer("empty");

        let output = render(&registry, |r, out| write_stats_table(r, out));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("timer"));
        assert!(lines[0].ends_with("p95"));

        let cells: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(
            cells,
            vec![":samples", "0.45000", "4", "0.05000", "0.20000", "0.11250", "0.10000", "0.18500"]
        );

        let cells: Vec<&str> = lines[2].split_whitespace().collect();
        assert_eq!(cells, vec![":empty", "0.00000", "0", "-", "-", "-", "-", "-"]);
    }
}
