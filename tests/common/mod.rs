// Different test files use different items from this module
#![allow(dead_code)]

use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path and query, e.g. `/api/v3/ticker/24hr?symbol=BTCUSDT`.
    pub target: String,
    /// Lowercased header names.
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Minimal HTTP/1.1 server on 127.0.0.1 answering every GET through `handler`.
pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler = Arc::new(handler);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let handler = Arc::clone(&handler);
                let recorded = Arc::clone(&recorded);

                tokio::spawn(async move {
                    let mut head = Vec::new();
                    let mut chunk = [0u8; 4096];
                    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => head.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let head = String::from_utf8_lossy(&head).to_string();
                    let mut lines = head.split("\r\n");
                    let target = lines
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    let headers = lines
                        .take_while(|line| !line.is_empty())
                        .filter_map(|line| line.split_once(':'))
                        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
                        .collect();

                    let (status, body) = handler(&target);
                    recorded
                        .lock()
                        .unwrap()
                        .push(RecordedRequest { target, headers });

                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason(status),
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Full `/api/v3/ticker/24hr` entry.
pub fn binance_ticker(symbol: &str, price_change_percent: &str) -> Value {
    json!({
        "symbol": symbol,
        "priceChange": "0.00000000",
        "priceChangePercent": price_change_percent,
        "weightedAvgPrice": "0.00000000",
        "prevClosePrice": "0.00000000",
        "lastPrice": "1.00000000",
        "lastQty": "0.00000000",
        "bidPrice": "0.99000000",
        "bidQty": "1.00000000",
        "askPrice": "1.01000000",
        "askQty": "1.00000000",
        "openPrice": "0.00000000",
        "highPrice": "0.00000000",
        "lowPrice": "0.00000000",
        "volume": "0.00000000",
        "quoteVolume": "0.00000000",
        "openTime": 1700000000000u64,
        "closeTime": 1700086400000u64,
        "firstId": -1,
        "lastId": -1,
        "count": 0
    })
}

/// Spot `/v5/market/tickers` list entry.
pub fn bybit_ticker(symbol: &str, price24h_pcnt: &str) -> Value {
    json!({
        "symbol": symbol,
        "bid1Price": "0.99",
        "bid1Size": "10",
        "ask1Price": "1.01",
        "ask1Size": "10",
        "lastPrice": "1.00",
        "prevPrice24h": "0.98",
        "price24hPcnt": price24h_pcnt,
        "highPrice24h": "1.05",
        "lowPrice24h": "0.95",
        "turnover24h": "1000",
        "volume24h": "1000",
        "usdIndexPrice": "1.00"
    })
}

pub fn bybit_envelope(category: &str, list: Vec<Value>) -> String {
    json!({
        "retCode": 0,
        "retMsg": "OK",
        "result": { "category": category, "list": list },
        "retExtInfo": {},
        "time": 1700000000000u64
    })
    .to_string()
}

pub fn bybit_error(ret_code: i64, ret_msg: &str) -> String {
    json!({
        "retCode": ret_code,
        "retMsg": ret_msg,
        "result": {},
        "retExtInfo": {},
        "time": 1700000000000u64
    })
    .to_string()
}
