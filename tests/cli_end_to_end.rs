#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;

#[test]
fn analytics_me_works_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/users/me/analytics");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"total_groups":2,"total_orders_participated":14,"total_spent":"131.80","average_order_value":"9.41","favorite_restaurant":"Thai Garden","total_balance_across_groups":"-3.20"}"#);
    });

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mensa"));
    let assert = cmd
        .env("MENSA_API_URL", format!("{}/api/", server.base_url()))
        .arg("analytics")
        .arg("me")
        .assert()
        .success();

    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("\"total_groups\": 2"));
    assert!(output.contains("Thai Garden"));
    mock.assert();
}

#[test]
fn server_rejection_fails_the_command() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/users/me/analytics");
        then.status(403)
            .header("content-type", "application/json")
            .body(r#"{"detail":"Admin privileges required","status_code":403}"#);
    });

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mensa"));
    cmd.env("MENSA_API_URL", format!("{}/api/", server.base_url()))
        .arg("analytics")
        .arg("me")
        .assert()
        .failure()
        .stderr(contains("Admin privileges required"));
}

#[test]
fn zero_timeout_fails_fast() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mensa"));
    cmd.env("MENSA_API_URL", "http://localhost:1/api/")
        .arg("--timeout-secs")
        .arg("0")
        .arg("groups")
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("timeout_secs"));
}
