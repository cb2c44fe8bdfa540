//! Drives the CLI library the way the binary does: parse, run, render.

use std::fs;

use clap::Parser;
use concomp_cli::cli::{Cli, render_output, run_cli};
use rstest::rstest;

fn run_and_render(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).expect("arguments must parse");
    let output = run_cli(cli).expect("command must succeed");
    let mut buffer = Vec::new();
    render_output(&output, &mut buffer).expect("rendering to memory cannot fail");
    String::from_utf8(buffer).expect("output is UTF-8")
}

#[rstest]
fn demo_prints_both_assignments() {
    let text = run_and_render(&["concomp", "demo"]);
    assert_eq!(text.matches("2 components").count(), 2);
    assert!(text.contains("naive:"));
    assert!(text.contains("dsu:"));
}

#[rstest]
fn components_reads_an_edge_list_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("star.txt");
    fs::write(&path, "# star around vertex 0\n4\n0 1\n0 2\n0 3\n").expect("input is written");
    let path_arg = path.to_str().expect("temp path is UTF-8");

    let text = run_and_render(&["concomp", "components", path_arg, "--algorithm", "naive"]);
    assert!(text.contains("vertices: 4\nedges: 3\nnaive: 1 components\n"));
    assert!(!text.contains("dsu:"));
}

#[rstest]
fn experiment_lists_written_reports() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let out = dir.path().join("out");
    let out_arg = out.to_str().expect("temp path is UTF-8");

    let text = run_and_render(&[
        "concomp",
        "experiment",
        "--output-dir",
        out_arg,
        "--max-vertices",
        "11",
        "--skip-connectivity",
    ]);
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|line| line.starts_with("wrote ")));
    assert!(out.join("tree.csv").exists());
}
