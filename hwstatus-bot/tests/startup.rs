use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use predicates::str::contains;
use serde_json::{Value, json};
use std::process::Output;
use std::time::Duration;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runs the bot binary against the mock servers with only `vars` as secrets
async fn run_bot(
    practicum: &MockServer,
    telegram: &MockServer,
    vars: &'static [(&'static str, &'static str)],
    timeout: Duration,
) -> Output {
    let endpoint = format!("{}/statuses/", practicum.uri());
    let api_url = telegram.uri();

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("hwstatus-bot").unwrap();
        cmd.env_clear()
            .current_dir(std::env::temp_dir())
            .env("PRACTICUM_ENDPOINT", endpoint)
            .env("TELEGRAM_API_URL", api_url)
            .env("POLL_INTERVAL", "600")
            .env("REQUEST_TIMEOUT", "5")
            .envs(vars.iter().copied())
            .timeout(timeout);
        cmd.output().unwrap()
    })
    .await
    .unwrap()
}

async fn silent_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_secret_aborts_without_requests() {
    let practicum = silent_server().await;
    let telegram = silent_server().await;

    let output = run_bot(
        &practicum,
        &telegram,
        &[("PRACTICUM_TOKEN", "p-token"), ("TELEGRAM_CHAT_ID", "42")],
        Duration::from_secs(30),
    )
    .await;

    output.assert().failure().stderr(contains("TELEGRAM_TOKEN"));
    practicum.verify().await;
    telegram.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_secret_aborts_without_requests() {
    let practicum = silent_server().await;
    let telegram = silent_server().await;

    let output = run_bot(
        &practicum,
        &telegram,
        &[
            ("PRACTICUM_TOKEN", ""),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "42"),
        ],
        Duration::from_secs(30),
    )
    .await;

    output.assert().failure().stderr(contains("PRACTICUM_TOKEN"));
    practicum.verify().await;
    telegram.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn reports_status_after_startup_message() {
    let practicum = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statuses/"))
        .and(query_param("from_date", "1"))
        .and(header("Authorization", "OAuth p-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "lesson1", "status": "reviewing"}],
            "current_date": 1_700_000_000
        })))
        .mount(&practicum)
        .await;

    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bott-token/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&telegram)
        .await;

    // The loop never exits on its own; the timeout ends it mid-sleep
    run_bot(
        &practicum,
        &telegram,
        &[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "42"),
        ],
        Duration::from_secs(5),
    )
    .await;

    let texts: Vec<String> = telegram
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            assert_eq!(body["chat_id"], "42");
            body["text"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(texts.len(), 2, "{:?}", texts);
    assert!(texts[0].starts_with("Bot started: "));
    assert_eq!(
        texts[1],
        "Changed review status for \"lesson1\". Работа взята на проверку ревьюером."
    );
}
