//! CSV reports for the experiment sweeps.
//!
//! Timing reports carry one row per vertex count with both query times in
//! milliseconds. Connectivity reports record how many random edges were
//! needed to connect each graph.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::error::BenchSetupError;
use crate::experiment::{ConnectivityRecord, ShapeTimings, TimingRecord};

/// File name of the connectivity report.
pub const CONNECTIVITY_REPORT_FILE: &str = "connectivity.csv";

const TIMING_HEADER: &str = "n,edges,t_naive_ms,t_dsu_ms\n";
const CONNECTIVITY_HEADER: &str = "n,m_required\n";

#[expect(
    clippy::float_arithmetic,
    reason = "Reports express durations as fractional milliseconds."
)]
fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

fn timing_row(record: &TimingRecord) -> String {
    format!(
        "{},{},{:.6},{:.6}\n",
        record.vertex_count,
        record.edge_count,
        millis(record.naive),
        millis(record.dsu),
    )
}

fn connectivity_row(record: &ConnectivityRecord) -> String {
    format!("{},{}\n", record.vertex_count, record.edges_required)
}

fn write_report(
    report_path: &Path,
    header: &str,
    rows: impl Iterator<Item = String>,
) -> Result<PathBuf, BenchSetupError> {
    let report_file_path = report_path.to_path_buf();
    let io_error = |source| BenchSetupError::Report {
        path: report_file_path.clone(),
        source,
    };
    if let Some(parent) = report_file_path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut output = String::from(header);
    for row in rows {
        output.push_str(&row);
    }
    fs::write(&report_file_path, output).map_err(io_error)?;
    Ok(report_file_path)
}

/// Writes timing measurements to a CSV report file.
///
/// # Errors
///
/// Returns [`BenchSetupError::Report`] when directory creation or file
/// writing fails.
pub fn write_timing_report(
    report_path: impl AsRef<Path>,
    records: &[TimingRecord],
) -> Result<PathBuf, BenchSetupError> {
    write_report(report_path.as_ref(), TIMING_HEADER, records.iter().map(timing_row))
}

/// Writes connectivity measurements to a CSV report file.
///
/// # Errors
///
/// Returns [`BenchSetupError::Report`] when directory creation or file
/// writing fails.
pub fn write_connectivity_report(
    report_path: impl AsRef<Path>,
    records: &[ConnectivityRecord],
) -> Result<PathBuf, BenchSetupError> {
    write_report(
        report_path.as_ref(),
        CONNECTIVITY_HEADER,
        records.iter().map(connectivity_row),
    )
}

/// Writes one `<shape>.csv` per timing series and, when present,
/// `connectivity.csv`, all under `output_dir`.
///
/// Returns the written paths in the order the reports were produced.
///
/// # Errors
///
/// Returns the first [`BenchSetupError::Report`] encountered.
pub fn write_experiment_reports(
    output_dir: impl AsRef<Path>,
    timings: &[ShapeTimings],
    connectivity: Option<&[ConnectivityRecord]>,
) -> Result<Vec<PathBuf>, BenchSetupError> {
    let dir = output_dir.as_ref();
    let mut written = Vec::with_capacity(timings.len() + 1);
    for series in timings {
        let path = dir.join(format!("{}.csv", series.shape));
        written.push(write_timing_report(path, &series.records)?);
    }
    if let Some(records) = connectivity {
        written.push(write_connectivity_report(
            dir.join(CONNECTIVITY_REPORT_FILE),
            records,
        )?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GraphShape;

    fn sample_timing() -> TimingRecord {
        TimingRecord {
            vertex_count: 11,
            edge_count: 12,
            naive: Duration::from_micros(1_500),
            dsu: Duration::from_micros(250),
        }
    }

    #[test]
    fn write_timing_report_persists_header_and_rows() {
        let temp_dir = tempfile::tempdir().expect("tempdir should be created");
        let report_path = temp_dir.path().join("nested").join("dense.csv");

        let written_path =
            write_timing_report(&report_path, &[sample_timing()]).expect("report should be written");
        let written = fs::read_to_string(&written_path).expect("report should be readable");

        assert_eq!(written_path, report_path);
        assert_eq!(written, "n,edges,t_naive_ms,t_dsu_ms\n11,12,1.500000,0.250000\n");
    }

    #[test]
    fn write_connectivity_report_persists_header_and_rows() {
        let temp_dir = tempfile::tempdir().expect("tempdir should be created");
        let records = [
            ConnectivityRecord {
                vertex_count: 1,
                edges_required: 0,
            },
            ConnectivityRecord {
                vertex_count: 11,
                edges_required: 23,
            },
        ];

        let written_path = write_connectivity_report(temp_dir.path().join("c.csv"), &records)
            .expect("report should be written");
        let written = fs::read_to_string(written_path).expect("report should be readable");

        assert_eq!(written, "n,m_required\n1,0\n11,23\n");
    }

    #[test]
    fn experiment_reports_are_named_after_shapes() {
        let temp_dir = tempfile::tempdir().expect("tempdir should be created");
        let timings: Vec<ShapeTimings> = GraphShape::ALL
            .into_iter()
            .map(|shape| ShapeTimings {
                shape,
                records: vec![sample_timing()],
            })
            .collect();

        let written = write_experiment_reports(temp_dir.path(), &timings, Some(&[]))
            .expect("reports should be written");
        let names: Vec<String> = written
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["dense.csv", "tree.csv", "sparse.csv", "connectivity.csv"]);
    }

    #[test]
    fn unwritable_target_reports_the_path() {
        let temp_dir = tempfile::tempdir().expect("tempdir should be created");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("blocker file should be written");
        let target = blocker.join("dense.csv");

        let err = write_timing_report(&target, &[]).expect_err("parent is a file");
        match err {
            BenchSetupError::Report { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {other}"),
        }
    }
}
