//! End-to-end tests of the `aiva-vrs` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn aiva_vrs() -> Command {
    Command::cargo_bin("aiva-vrs").expect("binary is built")
}

#[test]
fn test_generate_text() {
    aiva_vrs()
        .args(["generate", "chr1", "12345", "A", "T"])
        .assert()
        .success()
        .stdout("ga4gh:VA:1:-Lei2LuvWoB18NBkXBO6zbjiFCFb\n");
}

#[test]
fn test_generate_with_assembly() {
    aiva_vrs()
        .args(["generate", "1", "12345", "A", "T", "--assembly", "GRCh37"])
        .assert()
        .success()
        .stdout("ga4gh:VA:1:eS753jSI5ukTI73fPfsXiKC443J3\n");
}

#[test]
fn test_generate_empty_allele() {
    aiva_vrs()
        .args(["generate", "chr7", "55174772", "GGAATTAAGAGAAGC", ""])
        .assert()
        .success()
        .stdout("ga4gh:VA:7:EByCs2w8wDg4HTJ7WD6DnXA9Gmzk\n");
}

#[test]
fn test_generate_special() {
    aiva_vrs()
        .args(["generate", "1", "100", "*", "A"])
        .assert()
        .success()
        .stdout("ga4gh:VA:SPECIAL:1-100-*-A\n");
}

#[test]
fn test_generate_json() {
    let output = aiva_vrs()
        .args(["generate", "chrM", "100", "A", "G", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vrs_id"], "ga4gh:VA:MT:3TXYiCegHcqyn2styP6ZNB1f4JUQ");
    assert_eq!(json["chromosome"], "chrM");
    assert_eq!(json["normalized_chromosome"], "MT");
    assert_eq!(json["special"], false);
}

#[test]
fn test_generate_verbose_reports_canonical_record() {
    aiva_vrs()
        .args(["--verbose", "generate", "chr1", "12345", "A", "T"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Canonical record: GRCh38-1-12345-A-T"));
}

#[test]
fn test_parse_text() {
    aiva_vrs()
        .args(["parse", "ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chromosome: 7"))
        .stdout(predicate::str::contains(
            "Digest: v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP",
        ))
        .stdout(predicate::str::contains("Type: VA"));
}

#[test]
fn test_parse_json() {
    let output = aiva_vrs()
        .args(["parse", "ga4gh:VA:17:0WNx7PqRUIPudU4jNEi-rXwzzFfToSyM", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "vrs_id": "ga4gh:VA:17:0WNx7PqRUIPudU4jNEi-rXwzzFfToSyM",
            "chromosome": "17",
            "digest": "0WNx7PqRUIPudU4jNEi-rXwzzFfToSyM",
            "type": "VA",
        }])
    );
}

#[test]
fn test_parse_many_reports_each() {
    let output = aiva_vrs()
        .args([
            "parse",
            "ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP",
            "bogus",
            "ga4gh:VA:SPECIAL:1-100-*-A",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("1 of 3 identifiers could not be parsed"));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["chromosome"], "7");
    assert_eq!(results[1]["vrs_id"], "bogus");
    assert!(results[1]["error"]
        .as_str()
        .unwrap()
        .contains("Invalid VRS identifier format"));
    assert!(results[1].get("chromosome").is_none());
    assert_eq!(results[2]["digest"], "1-100-*-A");
}

#[test]
fn test_parse_many_text() {
    aiva_vrs()
        .args(["parse", "ga4gh:VA:1:abc", "ga4gh:VA:X:def"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VRS ID: ga4gh:VA:1:abc\nChromosome: 1"))
        .stdout(predicate::str::contains("VRS ID: ga4gh:VA:X:def\nChromosome: X"));
}

#[test]
fn test_parse_many_tsv() {
    aiva_vrs()
        .args(["parse", "ga4gh:VA:1:abc", "nope", "-f", "tsv"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(
            "vrs_id\tchromosome\tdigest\ttype\terror\nga4gh:VA:1:abc\t1\tabc\tVA\t\nnope\t\t\t\t",
        ));
}

#[test]
fn test_parse_invalid_fails() {
    aiva_vrs()
        .args(["parse", "not-a-vrs-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid VRS identifier format"));
}

#[test]
fn test_validate_all_valid() {
    aiva_vrs()
        .args([
            "validate",
            "ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP",
            "ga4gh:VA:SPECIAL:1-100-*-A",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP: valid",
        ));
}

#[test]
fn test_validate_reports_invalid() {
    aiva_vrs()
        .args(["validate", "ga4gh:VA:1:abc", "bogus"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ga4gh:VA:1:abc: valid"))
        .stdout(predicate::str::contains("bogus: invalid"))
        .stderr(predicate::str::contains("1 of 2 identifiers are invalid"));
}

#[test]
fn test_normalize() {
    aiva_vrs()
        .args(["normalize", "chrM", "chrUn", "chr7", "X"])
        .assert()
        .success()
        .stdout("MT\nUN\n7\nX\n");
}

#[test]
fn test_normalize_tsv() {
    aiva_vrs()
        .args(["normalize", "chrM", "--format", "tsv"])
        .assert()
        .success()
        .stdout("input\tnormalized\nchrM\tMT\n");
}

#[test]
fn test_query_text() {
    aiva_vrs()
        .args(["query", "ga4gh:VA:X:abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Table: variants_chrx"))
        .stdout(predicate::str::contains(
            "Query: SELECT * FROM public.variants_chrx WHERE id = :vrs_id AND chromosome = :chromosome",
        ))
        .stdout(predicate::str::contains(
            "Params: vrs_id=ga4gh:VA:X:abc, chromosome=X",
        ));
}

#[test]
fn test_query_json() {
    let output = aiva_vrs()
        .args(["query", "ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["table"], "variants_chr7");
    assert_eq!(
        json[0]["params"],
        serde_json::json!({
            "vrs_id": "ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP",
            "chromosome": "7",
        })
    );
}

#[test]
fn test_query_many_reports_each() {
    let output = aiva_vrs()
        .args(["query", "ga4gh:VA:1:abc", "", "ga4gh:VA:MT:def", "-f", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("1 of 3 identifiers could not be queried"));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["table"], "variants_chr1");
    assert_eq!(json[1]["error"], "VRS identifier is empty");
    assert_eq!(json[2]["table"], "variants_chrmt");
}

#[test]
fn test_generate_unrepresentable_fails() {
    aiva_vrs()
        .args(["generate", "chr", "100", "A", "T"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no parseable identifier"));
}
