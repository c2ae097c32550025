use eyre::{Result, bail, eyre};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

use crate::{misc::shared_init::RpcOpts, models::block::Block};

const CLIENT_ID: &str = "blockview";

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Minimal JSON-RPC 1.0 client for a Bitcoin-Core-compatible node.
#[derive(Clone, Debug)]
pub struct RpcClient {
    http: reqwest::Client,
    opts: RpcOpts,
}

impl RpcClient {
    pub fn new(opts: RpcOpts) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(opts.timeout).build()?;
        Ok(Self { http, opts })
    }

    pub async fn block_hash(&self, height: u64) -> Result<String> {
        self.call("getblockhash", json!([height])).await
    }

    pub async fn block(&self, hash: &str) -> Result<Block> {
        self.call("getblock", json!([hash, 1])).await
    }

    pub async fn best_block_hash(&self) -> Result<String> {
        self.call("getbestblockhash", json!([])).await
    }

    pub async fn block_at(&self, height: u64) -> Result<Block> {
        let hash = self.block_hash(height).await?;
        self.block(&hash).await
    }

    pub async fn best_block(&self) -> Result<Block> {
        let hash = self.best_block_hash().await?;
        self.block(&hash).await
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        debug!(method, %params, "rpc call");
        let body = json!({
            "jsonrpc": "1.0",
            "id": CLIENT_ID,
            "method": method,
            "params": params,
        });

        let mut request = self.http.post(&self.opts.rpc_url).json(&body);
        if let Some(user) = &self.opts.user {
            request = request.basic_auth(user, self.opts.password.as_ref());
        }

        let response = request.send().await?;
        let status = response.status();
        // bitcoind answers RPC errors with 404/500 but still sends the envelope
        let text = response.text().await?;
        parse_response(method, &text).map_err(|e| {
            if status.is_success() {
                e
            } else {
                eyre!("{method} failed with HTTP {status}: {e}")
            }
        })
    }
}

fn parse_response<T: DeserializeOwned>(method: &str, text: &str) -> Result<T> {
    let response: RpcResponse = serde_json::from_str(text)
        .map_err(|e| eyre!("invalid {method} response: {e}"))?;

    if let Some(error) = response.error {
        bail!("{method} error {}: {}", error.code, error.message);
    }

    let Some(result) = response.result else {
        bail!("{method} returned no result");
    };

    Ok(serde_json::from_value(result)?)
}
