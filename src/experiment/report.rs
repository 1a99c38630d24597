//! Read-only views over sweep results for printing and plotting.

use super::record::TimingRecord;

const HEADERS: [&str; 3] = [
    "Population Size (N)",
    "Sample Size (n)",
    "Average Time (seconds)",
];

/// Renders `records` as a right-aligned text table, one row per record in
/// input order.
pub fn render_table(records: &[TimingRecord]) -> String {
    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|r| {
            [
                r.population_size().to_string(),
                r.sample_size().to_string(),
                format!("{:.6}", r.average_seconds()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{:>w$}", c.as_ref()))
        .collect();
    out.push_str(&line.join(" "));
    out.push('\n');
}

/// Timings for one population size, ordered as they were recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub population_size: usize,
    /// `(sample_size, average_seconds)` points
    pub points: Vec<(usize, f64)>,
}

/// Splits `records` into one series per population size, in first-seen order.
pub fn group_by_population(records: &[TimingRecord]) -> Vec<Series> {
    let mut series: Vec<Series> = Vec::new();
    for r in records {
        let point = (r.sample_size(), r.average_seconds());
        match series
            .iter_mut()
            .find(|s| s.population_size == r.population_size())
        {
            Some(s) => s.points.push(point),
            None => series.push(Series {
                population_size: r.population_size(),
                points: vec![point],
            }),
        }
    }
    series
}
