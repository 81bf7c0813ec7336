//! End-to-end tests for the clean command.

use std::path::PathBuf;

use netinv_cli::commands::run_clean;
use netinv_cli::types::CleanOptions;

const INPUT_HEADER: &str = "source_row_id,ip,mac,hostname,fqdn,owner,device_type,notes,site";

fn write_input(rows: &[&str]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("inventory_raw.csv");
    let mut content = String::from(INPUT_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).expect("write input csv");
    (dir, path)
}

fn options(input: PathBuf, output_dir: PathBuf, dry_run: bool) -> CleanOptions {
    CleanOptions {
        input,
        output_dir,
        dry_run,
    }
}

#[test]
fn full_run_writes_cleaned_csv_and_anomaly_report() {
    let (dir, input) = write_input(&[
        "r1,192.168.010.005,AA-BB-CC-DD-EE-FF,host1,host1.example.com,\
         Jane Doe (NetOps) jane.doe@example.com,,rack 3 server,blr",
        "r2,10.0.1.300,AABBCC,host2,host1.example.com,,printer,,warehouse-9",
        "r3,fe80::1%eth0,,,printer-3f.example.com,,,,HQ",
    ]);
    let output_dir = dir.path().join("deliverables");

    let result = run_clean(&options(input, output_dir.clone(), false)).expect("run clean");

    assert_eq!(result.rows, 3);
    let csv_path = result.cleaned_csv.expect("cleaned csv path");
    let json_path = result.anomaly_json.expect("anomaly json path");
    assert_eq!(csv_path, output_dir.join("inventory_clean.csv"));

    // Cleaned CSV: header plus one row per input row, input order preserved.
    let mut reader = csv::Reader::from_path(&csv_path).expect("open cleaned csv");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.iter().next(), Some("ip"));
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("read cleaned rows");
    assert_eq!(rows.len(), 3);

    let col = |name: &str| headers.iter().position(|h| h == name).expect(name);
    assert_eq!(&rows[0][col("ip")], "192.168.10.5");
    assert_eq!(&rows[0][col("subnet_cidr")], "192.168.10.0/24");
    assert_eq!(&rows[0][col("mac")], "aa:bb:cc:dd:ee:ff");
    assert_eq!(&rows[0][col("owner")], "Jane Doe");
    assert_eq!(&rows[0][col("owner_team")], "NetOps");
    assert_eq!(&rows[0][col("owner_email")], "jane.doe@example.com");
    assert_eq!(&rows[0][col("device_type")], "server");
    assert_eq!(&rows[0][col("device_type_confidence")], "medium");
    assert_eq!(&rows[0][col("site_normalized")], "BLR CAMPUS");

    assert_eq!(&rows[1][col("ip_valid")], "false");
    assert_eq!(&rows[1][col("fqdn_consistent")], "false");
    assert_eq!(&rows[1][col("device_type")], "printer");
    assert_eq!(&rows[1][col("device_type_confidence")], "high");
    assert_eq!(&rows[1][col("source_row_id")], "r2");

    assert_eq!(&rows[2][col("ip")], "fe80::1");
    assert_eq!(&rows[2][col("subnet_cidr")], "fe80::/64");
    assert_eq!(&rows[2][col("hostname")], "printer-3f");
    assert_eq!(&rows[2][col("device_type")], "printer");
    assert_eq!(&rows[2][col("device_type_confidence")], "medium");

    // Anomaly report: all four issues belong to r2.
    let content = std::fs::read_to_string(&json_path).expect("read anomaly json");
    let anomalies: serde_json::Value = serde_json::from_str(&content).expect("parse anomaly json");
    let entries = anomalies.as_array().expect("anomaly array");
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|e| e["row_id"] == "r2"));
    let issue_types: Vec<&str> = entries
        .iter()
        .map(|e| e["issue_type"].as_str().unwrap())
        .collect();
    for expected in ["invalid_ip", "fqdn_mismatch", "invalid_mac", "unknown_site"] {
        assert!(issue_types.contains(&expected), "missing {expected}");
    }
    assert!(
        entries
            .iter()
            .all(|e| e["recommended_action"].as_str().is_some_and(|s| !s.is_empty()))
    );
}

#[test]
fn dry_run_writes_nothing() {
    let (dir, input) = write_input(&["r1,10.0.0.1,,host1,,,,,HQ"]);
    let output_dir = dir.path().join("deliverables");

    let result = run_clean(&options(input, output_dir.clone(), true)).expect("dry run");

    assert_eq!(result.rows, 1);
    assert!(result.cleaned_csv.is_none());
    assert!(result.anomaly_json.is_none());
    assert!(!output_dir.exists());
    // The in-memory report is still populated for the summary.
    assert_eq!(result.stats.ip_valid, 1);
}

#[test]
fn missing_input_is_a_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_clean(&options(
        dir.path().join("absent.csv"),
        dir.path().join("out"),
        false,
    ))
    .unwrap_err();
    assert!(format!("{err:#}").contains("absent.csv"));
}
