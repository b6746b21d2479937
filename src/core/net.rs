// src/core/net.rs

// One blocking HTTPS GET. No retries; redirects and timeouts are reqwest defaults.

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::config::consts;
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder().build()?;
    get_with(&client, url)
}

fn get_with(client: &Client, url: &str) -> Result<String> {
    logd!("GET {url}");
    let resp = client
        .get(url)
        .header(USER_AGENT, consts::USER_AGENT)
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Network(format!("{status} {url}")));
    }

    let body = resp.text()?;
    logf!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
