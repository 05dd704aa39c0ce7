#![cfg(unix)]

use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;
use zip::ZipArchive;

const SCORER_SCRIPT: &str = r#"#!/bin/sh
out=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --output_csv) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
cat > "$out" <<'EOF'
mutant,esm1v_score
M1A,0.9
A1A,0.85
M1C,0.1
A2K,0.9
EOF
"#;

const EMPTY_TABLE_SCRIPT: &str = r#"#!/bin/sh
out=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --output_csv) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
printf 'mutant,esm1v_score\n' > "$out"
"#;

const FAILING_SCRIPT: &str = r#"#!/bin/sh
echo "model weights not found" >&2
exit 3
"#;

const NO_OUTPUT_SCRIPT: &str = r#"#!/bin/sh
exit 0
"#;

fn install_scorer(dir: &Path, name: &str, script: &str) {
    let path = dir.join(name);
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

fn write_fasta(dir: &Path) -> PathBuf {
    let path = dir.join("protein.fasta");
    fs::write(&path, ">test\nMAK\n").unwrap();
    path
}

fn run(scorers: &Path, input: &Path, out: &Path, extra: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("kira-mutscan").unwrap();
    cmd.current_dir(out);
    cmd.env_remove("DEEPSEEK_API_KEY");
    cmd.args([
        "run",
        "--kind",
        "sequence",
        "--scorer",
        "ESM-1v",
        "--input",
        input.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--scorers-dir",
        scorers.to_str().unwrap(),
        "--json",
    ]);
    cmd.args(extra);
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn bundle_names(out: &Path) -> Vec<String> {
    let zip_path = fs::read_dir(out)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().and_then(|s| s.to_str()) == Some("zip"))
        .expect("bundle missing");
    let mut archive = ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn full_run_produces_results_heatmap_and_bundle() {
    let scorers = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    install_scorer(scorers.path(), "esm1v", SCORER_SCRIPT);
    let input = write_fasta(work.path());
    let out = TempDir::new().unwrap();

    let stdout = run(scorers.path(), &input, out.path(), &[]);
    assert!(stdout.contains("phase: started"));
    assert!(stdout.contains("phase: scored"));
    assert!(stdout.contains("phase: complete"));
    assert!(stdout.contains("Status: Prediction completed successfully!"));
    assert!(stdout.contains("Table: 4 rows, 3 valid mutations, 2 positions"));

    let csv = fs::read_to_string(out.path().join("prediction_results.csv")).unwrap();
    assert!(csv.contains("M1A"));
    // The malformed code is excluded from binning but kept in the raw table.
    assert!(csv.contains("A1A"));

    let html = fs::read_to_string(out.path().join("prediction_heatmap.html")).unwrap();
    assert!(html.contains("Prediction Heatmap"));

    let report: Value =
        serde_json::from_slice(&fs::read(out.path().join("mutscan.json")).unwrap()).unwrap();
    assert_eq!(report["tool"], "kira-mutscan");
    assert_eq!(report["analysis"]["kind"], "sequence");
    assert_eq!(report["analysis"]["sequence_length"], 3);
    assert_eq!(report["table"]["rows"], 4);
    assert_eq!(report["table"]["valid_mutations"], 3);
    assert_eq!(report["table"]["dropped_rows"], 1);

    assert_eq!(
        bundle_names(out.path()),
        vec!["prediction_heatmap.html", "prediction_results.csv"]
    );
}

#[test]
fn empty_table_still_bundles_the_csv_alone() {
    let scorers = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    install_scorer(scorers.path(), "esm1v", EMPTY_TABLE_SCRIPT);
    let input = write_fasta(work.path());
    let out = TempDir::new().unwrap();

    let stdout = run(scorers.path(), &input, out.path(), &[]);
    assert!(stdout.contains("phase: complete"));
    assert!(stdout.contains("Table: 0 rows, 0 valid mutations, 0 positions"));

    assert!(out.path().join("prediction_results.csv").exists());
    assert!(!out.path().join("prediction_heatmap.html").exists());
    assert_eq!(bundle_names(out.path()), vec!["prediction_results.csv"]);
}

#[test]
fn scorer_failure_halts_artifact_production_without_crashing() {
    let scorers = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    install_scorer(scorers.path(), "esm1v", FAILING_SCRIPT);
    let input = write_fasta(work.path());
    let out = TempDir::new().unwrap();

    let stdout = run(scorers.path(), &input, out.path(), &[]);
    assert!(stdout.contains("phase: failed"));
    assert!(stdout.contains("Status: Prediction failed: model weights not found"));

    assert!(!out.path().join("prediction_results.csv").exists());
    let zips = fs::read_dir(out.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("zip"))
        .count();
    assert_eq!(zips, 0);
}

#[test]
fn clean_exit_without_output_is_reported_distinctly() {
    let scorers = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    install_scorer(scorers.path(), "esm1v", NO_OUTPUT_SCRIPT);
    let input = write_fasta(work.path());
    let out = TempDir::new().unwrap();

    let stdout = run(scorers.path(), &input, out.path(), &[]);
    assert!(stdout.contains("Prediction completed but no output file was generated."));
    assert!(!stdout.contains("Prediction failed"));
    assert_eq!(bundle_names(out.path()), vec!["prediction_results.csv"]);
}

#[test]
fn missing_api_key_downgrades_to_the_placeholder() {
    let scorers = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    install_scorer(scorers.path(), "esm1v", SCORER_SCRIPT);
    let input = write_fasta(work.path());
    let out = TempDir::new().unwrap();

    let stdout = run(scorers.path(), &input, out.path(), &["--ai"]);
    assert!(stdout
        .contains("AI: No API key found. Please provide one or set the environment variable."));

    // The numeric artifacts are unaffected and the bundle has no report.
    assert_eq!(
        bundle_names(out.path()),
        vec!["prediction_heatmap.html", "prediction_results.csv"]
    );
    let report: Value =
        serde_json::from_slice(&fs::read(out.path().join("mutscan.json")).unwrap()).unwrap();
    assert_eq!(report["ai"]["enabled"], true);
    assert_eq!(report["ai"]["summary_available"], false);
}

#[test]
fn fixed_name_artifacts_are_deterministic() {
    let scorers = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    install_scorer(scorers.path(), "esm1v", SCORER_SCRIPT);
    let input = write_fasta(work.path());
    let out1 = TempDir::new().unwrap();
    let out2 = TempDir::new().unwrap();

    run(scorers.path(), &input, out1.path(), &[]);
    run(scorers.path(), &input, out2.path(), &[]);

    for name in ["prediction_results.csv", "prediction_heatmap.html"] {
        let a = fs::read(out1.path().join(name)).unwrap();
        let b = fs::read(out2.path().join(name)).unwrap();
        assert_eq!(a, b, "mismatch in {}", name);
    }
}
