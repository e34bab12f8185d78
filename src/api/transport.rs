use crate::api::error::ApiError;
use crate::api::ports::{Method, Transport};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::io::Read;
use std::sync::OnceLock;
use url::Url;

const API_KEY_HEADER: &str = "x-api-key";

/// Blocking HTTP adapter for the [`Transport`] port.
///
/// The reqwest client is created lazily on first use: blocking reqwest must
/// not be constructed on an async runtime thread, and every `execute` call
/// runs inside `spawn_blocking`.
pub struct HttpTransport {
    client: OnceLock<Client>,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(server_url: &str, api_key: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(server_url)?;
        Ok(Self {
            client: OnceLock::new(),
            base_url,
            api_key: api_key.to_string(),
        })
    }

    fn client(&self) -> &Client {
        self.client.get_or_init(Client::new)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        // Join by concatenation so a base URL with a path keeps it intact,
        // regardless of trailing slashes.
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, method: Method, path: &str, body: Option<&[u8]>) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(path)?;
        let mut req = self
            .client()
            .request(method.into(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(bytes) = body {
            req = req.body(bytes.to_vec());
        }

        let resp = req.send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        read_body(resp)
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Accumulate the response body, however the transport chunks it, into one
/// buffer. Growth failures surface as `ApiError::Allocation` rather than an
/// abort, and the buffer is dropped on every error path.
fn read_body(mut resp: reqwest::blocking::Response) -> Result<Vec<u8>, ApiError> {
    let mut buf: Vec<u8> = Vec::new();
    if let Some(len) = resp.content_length() {
        buf.try_reserve(len as usize)?;
    }
    let mut chunk = [0u8; 8 * 1024];
    loop {
        let n = resp.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        buf.try_reserve(n)?;
        buf.extend_from_slice(&chunk[..n]);
    }
    Ok(buf)
}
