//! 本地的一次性HTTP服务：每个连接都返回同一个body，并记录收到的请求

#![allow(dead_code)]

use gengo_sdk::{Client, Endpoint};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::form_urlencoded;

pub const PUBLIC_KEY: &str = "test-public-key";
pub const PRIVATE_KEY: &str = "test-private-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// path + query
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct MultipartField {
    pub name: String,
    pub file_name: Option<String>,
    pub content: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> HashMap<String, String> {
        let q = self.target.split_once('?').map(|(_, q)| q).unwrap_or_default();
        form_urlencoded::parse(q.as_bytes()).into_owned().collect()
    }

    pub fn form(&self) -> HashMap<String, String> {
        form_urlencoded::parse(&self.body).into_owned().collect()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn multipart(&self) -> Vec<MultipartField> {
        let content_type = self.header("content-type").unwrap_or_default();
        let Some((_, boundary)) = content_type.split_once("boundary=") else {
            return Vec::new();
        };
        let delimiter = format!("--{}", boundary.trim_matches('"'));
        let body = String::from_utf8_lossy(&self.body);

        body.split(delimiter.as_str())
            .filter_map(|part| {
                let part = part.strip_prefix("\r\n")?;
                let (head, content) = part.split_once("\r\n\r\n")?;
                let disposition = head
                    .split("\r\n")
                    .find(|l| l.to_ascii_lowercase().starts_with("content-disposition"))?;
                Some(MultipartField {
                    name: quoted_attr(disposition, "name")?,
                    file_name: quoted_attr(disposition, "filename"),
                    content: content.strip_suffix("\r\n").unwrap_or(content).to_owned(),
                })
            })
            .collect()
    }

    pub fn multipart_field(&self, name: &str) -> Option<MultipartField> {
        self.multipart().into_iter().find(|f| f.name == name)
    }
}

fn quoted_attr(disposition: &str, attr: &str) -> Option<String> {
    disposition.split(';').find_map(|kv| {
        let (k, v) = kv.trim().split_once('=')?;
        (k == attr).then(|| v.trim_matches('"').to_owned())
    })
}

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start(body: &str) -> Self {
        Self::start_with_status(200, body).await
    }

    pub async fn start_with_status(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let body = body.to_owned();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                let body = body.clone();
                tokio::spawn(async move {
                    handle(stream, status, &body, recorded).await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}/v2/"),
            requests,
        }
    }

    pub fn client(&self) -> Client {
        Client::builder()
            .public_key(PUBLIC_KEY)
            .private_key(PRIVATE_KEY)
            .endpoint(Endpoint::Custom(self.base_url.clone()))
            .build()
            .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// 恰好收到一个请求
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:#?}");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
) {
    let Some(req) = read_request(&mut stream).await else {
        return;
    };
    // 先记录再响应，客户端拿到响应时请求一定已经记录好了
    recorded.lock().unwrap().push(req);

    let reason = if status == 200 { "OK" } else { "Error" };
    let resp = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(resp.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// 返回None表示还没读完
fn decode_chunked(mut raw: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    loop {
        let line_end = find(raw, b"\r\n")?;
        let size_str = String::from_utf8_lossy(&raw[..line_end]);
        let size = usize::from_str_radix(size_str.split(';').next()?.trim(), 16).ok()?;
        raw = &raw[line_end + 2..];
        if size == 0 {
            return Some(out);
        }
        if raw.len() < size + 2 {
            return None;
        }
        out.extend_from_slice(&raw[..size]);
        raw = &raw[size + 2..];
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];

    let header_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split(' ');
    let method = request_line.next()?.to_owned();
    let target = request_line.next()?.to_owned();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_owned()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok());
    let chunked = headers
        .iter()
        .any(|(k, v)| k == "transfer-encoding" && v.contains("chunked"));

    let mut body = buf[header_end..].to_vec();
    if let Some(len) = content_length {
        while body.len() < len {
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
    } else if chunked {
        body = loop {
            if let Some(decoded) = decode_chunked(&body) {
                break decoded;
            }
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                return None;
            }
            body.extend_from_slice(&chunk[..n]);
        };
    }

    Some(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}
