//! 需要真实的sandbox账号，在`tests/sandbox/config.toml`中填写：
//!
//! ```toml
//! public_key = "..."
//! private_key = "..."
//! ```

#![cfg(all(feature = "account", feature = "jobs", feature = "order", feature = "service"))]

use gengo_sdk::{Client, Endpoint, NewJob};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SandboxConfig {
    pub public_key: String,
    pub private_key: String,
}

impl SandboxConfig {
    pub fn get_conf() -> Self {
        let file_str = std::fs::read_to_string("tests/sandbox/config.toml").unwrap();
        toml::from_str(&file_str).unwrap()
    }
}

fn get_sandbox_client() -> Client {
    let conf = SandboxConfig::get_conf();
    Client::builder()
        .public_key(conf.public_key)
        .private_key(conf.private_key)
        .endpoint(Endpoint::Sandbox)
        .build()
        .unwrap()
}

#[tokio::test]
#[ignore]
async fn account_balance_test() {
    let client = get_sandbox_client();
    match client.account().balance().await {
        Ok(s) => println!("[success] res:\n{:#?}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn language_pairs_test() {
    let client = get_sandbox_client();
    match client.service().language_pairs(Some("en")).await {
        Ok(s) => println!("[success] res:\n{:#?}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn submit_and_get_job_test() {
    let client = get_sandbox_client();
    let job = NewJob::builder()
        .slug("sdk test")
        .body_src("test first line.\ntest second line.")
        .lc_src("en")
        .lc_tgt("ja")
        .build();
    let order = client.jobs().submit().job(job).build().send().await;
    let order = match order {
        Ok(o) => o,
        Err(e) => {
            println!("[error] {:#?}", e);
            return;
        }
    };
    println!("[success] order:\n{:#?}", order);

    match client.order().get(order.order_id).await {
        Ok(s) => println!("[success] res:\n{:#?}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}
