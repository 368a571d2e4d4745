#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// How the stub server misbehaves for particular page identifiers.
#[derive(Debug, Default, Clone)]
pub struct Faults {
    /// Answered with HTTP 500.
    pub failing: HashSet<String>,
    /// Answered only after `slow_for`.
    pub slow: HashSet<String>,
    pub slow_for: Duration,
    /// Answered with a body that is not valid UTF-8.
    pub non_utf8: HashSet<String>,
}

impl Faults {
    pub fn failing(ids: &[&str]) -> Self {
        Self {
            failing: ids.iter().map(|id| (*id).to_owned()).collect(),
            ..Self::default()
        }
    }
}

pub struct DocsServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl DocsServer {
    /// Page identifiers in the order they were requested.
    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().expect("lock requests").clone()
    }
}

impl Drop for DocsServer {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn page_html(id: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
  <head>
    <title>{id}</title>
    <style>body {{ font-family: sans-serif; }}</style>
    <script>window.__NEXT_DATA__ = {{"page": "{id}"}};</script>
  </head>
  <body>
    <p>Content for {id}.</p>
    <script>self.__next_f.push([1, "hydration payload"])</script>
    <p>See <a href="https://github.com/zed-industries/zed">the repository</a>.</p>
    <p>章間の移動には ← または → を押します</p>
  </body>
</html>
"#
    )
}

/// Serves `/zed/<id>` for any id; each request is answered on its own thread
/// so a slow page does not hold up the next request.
pub fn spawn_docs_server(faults: Faults) -> DocsServer {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
    let addr = server.server_addr();
    let base_url = format!("http://{addr}/zed");

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let faults = Arc::new(faults);

    let seen = Arc::clone(&requests);
    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let url = request.url().to_string();
            let Some(id) = url.strip_prefix("/zed/").map(str::to_owned) else {
                let _ = request.respond(
                    tiny_http::Response::from_string("not found").with_status_code(404),
                );
                continue;
            };
            seen.lock().expect("lock requests").push(id.clone());

            let faults = Arc::clone(&faults);
            thread::spawn(move || {
                if faults.slow.contains(&id) {
                    thread::sleep(faults.slow_for);
                }

                let response = if faults.failing.contains(&id) {
                    tiny_http::Response::from_string("internal error").with_status_code(500)
                } else if faults.non_utf8.contains(&id) {
                    tiny_http::Response::from_data(vec![0xff, 0xfe, b'<', b'p', b'>'])
                } else {
                    tiny_http::Response::from_string(page_html(&id))
                };

                let header = tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"text/html; charset=utf-8"[..],
                )
                .expect("build header");
                let _ = request.respond(response.with_header(header));
            });
        }
    });

    DocsServer {
        base_url,
        requests,
        shutdown_tx,
        handle: Some(handle),
    }
}
