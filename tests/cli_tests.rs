//! Integration tests for CLI functionality

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;
use std::path::Path;
use std::process::{Command, Output};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn aap_inspect_bin() -> &'static Path {
    assert_cmd::cargo::cargo_bin!("aap-inspect")
}

/// Command with the AAP_* variables stripped from the inherited environment
fn clean_command() -> Command {
    let mut cmd = Command::new(aap_inspect_bin());
    cmd.env_remove("AAP_URL")
        .env_remove("AAP_USERNAME")
        .env_remove("AAP_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Run the binary off the async runtime so the mock server keeps serving
async fn run_against(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || clean_command().args(&args).output().unwrap())
        .await
        .unwrap()
}

fn list_page(items: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "count": items.len(),
        "next": null,
        "previous": null,
        "results": items
    })
}

/// Organization "Engineering" (id 5) with 7 projects and one credential owned by org 9
async fn engineering_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/"))
        .and(query_param("name", "Engineering"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(vec![
            serde_json::json!({
                "id": 5,
                "name": "Engineering",
                "description": "Platform team",
                "max_hosts": 0,
                "related": {
                    "projects": "/api/v2/organizations/5/projects/",
                    "credentials": "/api/v2/organizations/5/credentials/"
                }
            }),
        ])))
        .mount(&server)
        .await;

    let projects = (1..=7)
        .map(|i| serde_json::json!({"id": 100 + i, "name": format!("project-{}", i)}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/5/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(projects)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/5/credentials/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(vec![
            serde_json::json!({"id": 42, "name": "galaxy"}),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/credentials/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "name": "galaxy",
            "organization": 9
        })))
        .mount(&server)
        .await;

    server
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    AssertCommand::new(aap_inspect_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Inspect Ansible Automation Platform organizations",
        ))
        .stdout(predicate::str::contains("--no-verify-ssl"))
        .stdout(predicate::str::contains("--export"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    AssertCommand::new(aap_inspect_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aap-inspect"));
}

/// Test that the organization argument is required
#[test]
fn test_missing_organization() {
    let output = clean_command()
        .args(["--url", "https://aap.example.com"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<ORGANIZATION>"));
}

/// Test that the URL is required when AAP_URL is unset
#[test]
fn test_missing_url() {
    let output = clean_command().arg("Engineering").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--url"));
}

/// Test invalid output format
#[test]
fn test_invalid_output_format() {
    let output = clean_command()
        .args(["Engineering", "--url", "https://aap.example.com", "-o", "csv"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("csv"));
}

/// Batch mode never prompts, so missing credentials are fatal
#[test]
fn test_batch_without_credentials() {
    let output = clean_command()
        .args(["Engineering", "--url", "https://aap.example.com", "--batch"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("username"));
    assert!(stderr.contains("AAP_USERNAME"));
}

/// A URL without a scheme is rejected before any request
#[test]
fn test_invalid_url_scheme() {
    let output = clean_command()
        .args(["Engineering", "--url", "aap.example.com", "--batch"])
        .env("AAP_USERNAME", "admin")
        .env("AAP_PASSWORD", "secret")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("aap.example.com"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_inspect_text_report_and_export() {
    let server = engineering_server().await;
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("engineering.json");

    let output = run_against(vec![
        "Engineering".to_string(),
        "--url".to_string(),
        server.uri(),
        "-u".to_string(),
        "admin".to_string(),
        "-p".to_string(),
        "secret".to_string(),
        "--batch".to_string(),
        "--export".to_string(),
        export_path.display().to_string(),
    ])
    .await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ORGANIZATION DETAILS: Engineering"));
    assert!(stdout.contains("Projects:\n  Count: 7"));
    assert!(stdout.contains("    - [101] project-1"));
    assert!(stdout.contains("    ... and 2 more"));
    assert!(stdout.contains("Credential 'galaxy' belongs to different organization (ID: 9)"));
    assert!(stdout.contains("Data exported to:"));
    assert!(stdout.contains("Inspection complete!"));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(exported["organization"]["id"], 5);
    assert_eq!(exported["organization"]["description"], "Platform team");
    assert_eq!(
        exported["dependencies"]["projects"].as_array().unwrap().len(),
        5
    );
    assert_eq!(
        exported["dependencies"]["cross_org_credentials"][0]["credential"]["id"],
        42
    );
    assert_eq!(
        exported["dependencies"]["cross_org_credentials"][0]["organization_id"],
        9
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_inspect_json_output() {
    let server = engineering_server().await;

    let output = run_against(vec![
        "Engineering".to_string(),
        "--url".to_string(),
        server.uri(),
        "-u".to_string(),
        "admin".to_string(),
        "-p".to_string(),
        "secret".to_string(),
        "-o".to_string(),
        "json".to_string(),
    ])
    .await;

    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["organization"]["name"], "Engineering");
    assert_eq!(document["dependencies"]["credentials"][0]["name"], "galaxy");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_organization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/"))
        .and(query_param("name", "Nope"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("nope.json");

    let output = run_against(vec![
        "Nope".to_string(),
        "--url".to_string(),
        server.uri(),
        "-u".to_string(),
        "admin".to_string(),
        "-p".to_string(),
        "secret".to_string(),
        "--batch".to_string(),
        "--export".to_string(),
        export_path.display().to_string(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Organization 'Nope' not found."));
    assert!(!export_path.exists());
}
