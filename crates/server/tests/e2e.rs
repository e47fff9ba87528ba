use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server(seed: bool) -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    // isolated data dir per test run
    cfg.storage.data_dir = std::env::temp_dir().join(format!("news_e2e_{}", uuid::Uuid::new_v4()));
    cfg.storage.seed_sample_data = seed;
    cfg.normalize_and_validate()?;

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn e2e_seeded_ticker_and_news_lifecycle() -> anyhow::Result<()> {
    let app = start_server(true).await?;
    let c = client();

    // two welcome items on first start
    let ticker = c.get(format!("{}/api/ticker", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(ticker["count"], 2);

    let res = c
        .post(format!("{}/api/news", app.base_url))
        .json(&json!({"content": "خبر تجريبي جديد"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["data"]["content"], "خبر تجريبي جديد");
    let id = created["data"]["id"].as_u64().unwrap_or_default();
    assert_eq!(id, 3);

    let res = c.put(format!("{}/api/news/{}/archive", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let archived = c.get(format!("{}/api/news/archived", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(archived["count"], 1);
    assert_eq!(archived["data"][0]["id"], id);

    let res = c.delete(format!("{}/api/news/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.delete(format!("{}/api/news/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_colors_round_trip() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let c = client();

    let res = c
        .put(format!("{}/api/settings/colors", app.base_url))
        .json(&json!({"orange": "#FF0000", "green": "#00FF00"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let body = c.get(format!("{}/api/settings/colors", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["orange"], "#FF0000");
    assert_eq!(body["data"]["green"], "#00FF00");
    Ok(())
}

#[tokio::test]
async fn e2e_cors_allows_other_origins() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let res = client()
        .get(format!("{}/api/ticker", app.base_url))
        .header("Origin", "https://widget.example.org")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().get("access-control-allow-origin").is_some());
    Ok(())
}
