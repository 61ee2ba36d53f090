//! Minimal HTTP/1.1 server that answers GETs with a scripted sequence of statuses.
//!
//! The n-th request gets the n-th status; once the script runs out the last
//! status repeats. The request count and raw request heads are shared so
//! tests can assert how many attempts reached the server and what they sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

pub struct StatusServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StatusServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Header lines of the most recent request, excluding the request line.
    pub fn last_request_headers(&self) -> Vec<String> {
        let requests = self.requests.lock().unwrap();
        requests
            .last()
            .map(|r| {
                r.lines()
                    .skip(1)
                    .take_while(|l| !l.trim().is_empty())
                    .map(|l| l.trim().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(statuses: Vec<u16>, body: &'static [u8]) -> StatusServer {
    assert!(!statuses.is_empty(), "need at least one status");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let hits_srv = Arc::clone(&hits);
    let requests_srv = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = hits_srv.fetch_add(1, Ordering::SeqCst);
            let status = statuses[n.min(statuses.len() - 1)];
            handle(stream, status, body, &requests_srv);
        }
    });
    StatusServer {
        url: format!("http://127.0.0.1:{}/data", port),
        hits,
        requests,
    }
}

/// Returns a URL on a port with nothing listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/data", port)
}

/// Records the raw request, then answers it.
fn handle(
    mut stream: std::net::TcpStream,
    status: u16,
    body: &[u8],
    requests: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    requests
        .lock()
        .unwrap()
        .push(String::from_utf8_lossy(&buf[..n]).into_owned());
    let body: &[u8] = if (200..300).contains(&status) { body } else { b"" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
