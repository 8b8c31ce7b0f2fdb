mod common;

use ja3_cli::{
    auth::{self, AuthEndpoint},
    emulation::user_agent_for,
    Config,
};
use serde_json::{json, Value};

async fn run(endpoint: &AuthEndpoint, argv: &[&str]) -> Value {
    let envelope = auth::run_from(
        std::iter::once("ja3-auth").chain(argv.iter().copied()),
        endpoint,
        &Config::default(),
    )
    .await;
    serde_json::to_value(&envelope).unwrap()
}

#[tokio::test]
async fn test_authenticate_posts_with_browser_headers() {
    let addr = common::spawn_server().await;
    let endpoint = AuthEndpoint::with_url(format!("http://{addr}/api/auth/authenticate"));

    let payload = r#"{"wallet":"0xabc","signature":"0x01"}"#;
    let output = run(&endpoint, &[payload, "null", "chrome124"]).await;
    assert_eq!(output["status_code"], json!(200), "unexpected output: {output}");

    let request = &output["json"];
    assert_eq!(request["method"], json!("POST"));
    assert_eq!(request["headers"]["user-agent"], json!(user_agent_for("chrome124")));
    assert_eq!(request["headers"]["origin"], json!("https://app.humanoidnetwork.org"));
    assert_eq!(request["headers"]["referer"], json!("https://app.humanoidnetwork.org/"));
    assert_eq!(request["headers"]["accept"], json!("application/json, text/plain, */*"));
    assert_eq!(request["headers"]["content-type"], json!("application/json"));

    let body: Value = serde_json::from_str(request["body"].as_str().unwrap()).unwrap();
    assert_eq!(body, json!({"wallet": "0xabc", "signature": "0x01"}));
}

#[tokio::test]
async fn test_authenticate_default_profile() {
    let addr = common::spawn_server().await;
    let endpoint = AuthEndpoint::with_url(format!("http://{addr}/api/auth/authenticate"));

    let output = run(&endpoint, &["{}"]).await;
    assert_eq!(
        output["json"]["headers"]["user-agent"],
        json!(user_agent_for("chrome120"))
    );
}

#[tokio::test]
async fn test_authenticate_edge99_sends_its_user_agent() {
    let addr = common::spawn_server().await;
    let endpoint = AuthEndpoint::with_url(format!("http://{addr}/api/auth/authenticate"));

    let output = run(&endpoint, &["{}", "null", "edge99"]).await;
    assert_eq!(output["status_code"], json!(200), "unexpected output: {output}");

    let user_agent = output["json"]["headers"]["user-agent"].as_str().unwrap();
    assert!(user_agent.ends_with("Edg/99.0.1150.39"));
    assert_eq!(user_agent, user_agent_for("edge99"));
}

#[tokio::test]
async fn test_authenticate_through_proxy() {
    let proxy_addr = common::spawn_server().await;
    let proxy = format!("http://{proxy_addr}");
    let endpoint = AuthEndpoint::with_url("http://auth.invalid/api/auth/authenticate");

    let output = run(&endpoint, &["{}", &proxy]).await;
    assert_eq!(output["status_code"], json!(200), "unexpected output: {output}");
    assert!(output["json"]["uri"].as_str().unwrap().contains("auth.invalid"));
}

#[tokio::test]
async fn test_authenticate_connection_failure() {
    let endpoint = AuthEndpoint::with_url(format!(
        "http://{}/api/auth/authenticate",
        common::closed_addr()
    ));

    let output = run(&endpoint, &["{}"]).await;
    assert_eq!(output["status_code"], json!(0));
    assert_eq!(output["error"], output["text"]);
}

#[tokio::test]
async fn test_authenticate_missing_payload() {
    let output = run(&AuthEndpoint::default(), &[]).await;
    assert_eq!(output, json!({"error": "Missing payload"}));
}
