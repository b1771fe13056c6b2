use crate::error::{Result, ScoutError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use std::time::Duration;
use url::Url;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome Safari";

/// Source of raw page markup. The aggregator only ever talks to this trait.
pub trait PageFetcher {
    fn fetch(&self, url: &Url) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    /// One GET, no retries. Anything but 200 counts as a failure.
    fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send()?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ScoutError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answers a single request on a local port with `response`, then closes.
    fn serve_once(response: impl Into<String>) -> Url {
        let response = response.into();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });
        Url::parse(&format!("http://{addr}/jobs?q=graphic+designer")).unwrap()
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_not_found_is_a_status_error() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found");
        match fetcher().fetch(&url) {
            Err(ScoutError::Status { status, url: failed }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url.to_string());
            }
            other => panic!("expected status error, got {:?}", other.map(|body| body.len())),
        }
    }

    #[test]
    fn test_no_content_is_a_status_error() {
        let url = serve_once("HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n");
        assert!(matches!(
            fetcher().fetch(&url),
            Err(ScoutError::Status { status: 204, .. })
        ));
    }

    #[test]
    fn test_ok_returns_body() {
        let body = "<ul><li><a href=\"/job/1\">Graphic Designer</a></li></ul>";
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ));
        assert_eq!(fetcher().fetch(&url).unwrap(), body);
    }
}
