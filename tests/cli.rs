use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn no_arguments_prints_usage_and_exits_2() {
    Command::cargo_bin("mesh2hugo")
        .unwrap()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_url_exits_11() {
    let assert = Command::cargo_bin("mesh2hugo")
        .unwrap()
        .args(["-p", "demo"])
        .env_remove("RUST_LOG")
        .assert()
        .code(11);

    // Reported once, not again through the log subscriber.
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("No connection url specified").count(), 1);
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn missing_project_exits_10() {
    Command::cargo_bin("mesh2hugo")
        .unwrap()
        .args(["--url", "http://localhost:1/api/v1"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("project"));
}

#[test]
fn help_exits_0() {
    Command::cargo_bin("mesh2hugo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project"));
}

#[tokio::test]
async fn empty_project_run_succeeds_and_masks_key() {
    let server = MockServer::start().await;

    for route in ["/demo/schemas", "/demo/nodes"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
            .mount(&server)
            .await;
    }

    let temp = TempDir::new().unwrap();
    let output = temp.path().join("content");
    std::fs::create_dir_all(output.join("stale")).unwrap();
    let uri = server.uri();

    let assert = tokio::task::spawn_blocking(move || {
        let assert = Command::cargo_bin("mesh2hugo")
            .unwrap()
            .arg("-o")
            .arg(&output)
            .args(["--url", &uri, "-k", "secret", "-p", "demo", "-c"])
            .assert();
        (assert, output)
    })
    .await
    .unwrap();

    let (assert, output) = assert;
    assert
        .success()
        .stdout(predicate::str::contains("Using key: ******"))
        .stdout(predicate::str::contains("secret").not())
        .stdout(predicate::str::contains("All done..."));
    assert!(!output.join("stale").exists());
}
