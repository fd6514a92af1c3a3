mod common;

use common::TestContext;
use predicates::prelude::*;

const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

#[test]
fn prompt_prints_rendered_prompt_for_profile_file() {
    let ctx = TestContext::new();
    ctx.write_scenario_profile();

    ctx.cli()
        .args(["prompt", "--profile", "profile.toml", "--locale", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"insurance is a scam\""))
        .stdout(predicate::str::contains("[Strategy One:"))
        .stdout(predicate::str::contains("[Strategy Two:"))
        .stdout(predicate::str::contains("not specified"))
        .stdout(predicate::str::contains("undefined").not());
}

#[test]
fn prompt_defaults_to_traditional_chinese() {
    let ctx = TestContext::new();
    ctx.write_scenario_profile();

    ctx.cli()
        .args(["prompt", "-p", "profile.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("【攻防策略一："))
        .stdout(predicate::str::contains("性別：女"));
}

#[test]
fn prompt_applies_set_overrides() {
    let ctx = TestContext::new();
    ctx.write_scenario_profile();

    ctx.cli()
        .args([
            "prompt",
            "--profile",
            "profile.toml",
            "--locale",
            "en",
            "--set",
            "targetProduct=critical illness cover",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"critical illness cover\""))
        .stdout(predicate::str::contains("not specified").not());
}

#[test]
fn prompt_builds_profile_from_set_flags_alone() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "prompt",
            "-l",
            "en",
            "-s",
            "birthday=1980-05-05",
            "-s",
            "gender=other",
            "-s",
            "occupation=chef",
            "-s",
            "interests=fishing",
            "-s",
            "income=600k",
            "-s",
            "history=term life",
            "-s",
            "quotes=I'll think about it",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gender: Other"))
        .stdout(predicate::str::contains("\"I'll think about it\""));
}

#[test]
fn prompt_rejects_incomplete_profile() {
    let ctx = TestContext::new();
    ctx.write_file("profile.toml", "birthday = \"1990-01-01\"\noccupation = \"engineer\"\n");

    ctx.cli()
        .args(["prompt", "--profile", "profile.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required fields"))
        .stderr(predicate::str::contains("quotes"));
}

#[test]
fn prompt_rejects_future_birthday() {
    let ctx = TestContext::new();
    ctx.write_scenario_profile();

    ctx.cli()
        .args(["prompt", "--profile", "profile.toml", "--set", "birthday=2999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("in the future"));
}

#[test]
fn unknown_field_in_set_is_an_error() {
    let ctx = TestContext::new();
    ctx.write_scenario_profile();

    ctx.cli()
        .args(["prompt", "--profile", "profile.toml", "--set", "nickname=Bo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown profile field 'nickname'"));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_scenario_profile();
    ctx.write_file("strategist.toml", "[generation]\ntemperature = 9.0\n");

    ctx.cli()
        .args(["prompt", "--profile", "profile.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn analyze_without_api_key_fails_before_any_request() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", GENERATE_PATH).expect(0).create();

    let ctx = TestContext::new();
    ctx.write_scenario_profile();
    ctx.write_config(&format!("{}/v1beta", server.url()), "en");

    ctx.cli()
        .args(["analyze", "--profile", "profile.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key is configured"));

    mock.assert();
}

#[test]
fn analyze_prints_generated_text() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"[Strategy One: Safety Net]"}]}}]}"#)
        .expect(1)
        .create();

    let ctx = TestContext::new();
    ctx.write_scenario_profile();
    ctx.write_config(&format!("{}/v1beta", server.url()), "en");

    ctx.cli()
        .args(["analyze", "--profile", "profile.toml"])
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Strategy One: Safety Net]"));

    mock.assert();
}

#[test]
fn analyze_upstream_failure_shows_generic_message() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(503)
        .with_body("backend exploded")
        .expect(1)
        .create();

    let ctx = TestContext::new();
    ctx.write_scenario_profile();
    ctx.write_config(&format!("{}/v1beta", server.url()), "en");

    ctx.cli()
        .args(["analyze", "--profile", "profile.toml"])
        .env("API_KEY", "test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Something went wrong while generating the analysis"))
        .stderr(predicate::str::contains("backend exploded").not());

    mock.assert();
}

#[test]
fn analyze_empty_response_prints_fallback() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(r#"{"candidates":[]}"#)
        .create();

    let ctx = TestContext::new();
    ctx.write_scenario_profile();
    ctx.write_config(&format!("{}/v1beta", server.url()), "zh-TW");

    ctx.cli()
        .args(["analyze", "--profile", "profile.toml"])
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("無法產生分析結果。"));
}
