use assert_cmd::Command;
use predicates::prelude::*;

fn railflow() -> Command {
    let mut command = Command::cargo_bin("railflow").expect("railflow binary");
    command
        .env_remove("RAILFLOW_BIND")
        .env_remove("RAILFLOW_RANDOM_SEED")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn integration_render_alerts_prints_html_document() {
    railflow()
        .args(["render", "/alerts"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!doctype html>"))
        .stdout(predicate::str::contains(r#"data-page="alerts""#))
        .stdout(predicate::str::contains("ALT-001"));
}

#[test]
fn integration_render_json_reports_not_found_page() {
    railflow()
        .args(["render", "/does-not-exist", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""page": "not-found""#));
}

#[test]
fn regression_zero_reply_delay_fails_before_serving() {
    railflow()
        .args(["--widget-reply-delay-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("value must be greater than 0"));
}

#[test]
fn regression_invalid_bind_address_reports_context() {
    railflow()
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --bind 'not-an-address'"));
}
