//! In-process mock of the content API.
//!
//! Serves canned responses from a `tiny_http` server bound to
//! `127.0.0.1:0` on a background thread and records every request.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ludi_content::{
    ContentClient, ContentClientConfig, FetchObserver, OutcomeSummary, Resource,
};

/// A canned response for requests whose decoded URL starts with `prefix`.
pub struct Route {
    pub prefix: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn json(prefix: &'static str, body: &str) -> Self {
        Self {
            prefix,
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(prefix: &'static str, status: u16) -> Self {
        Self {
            prefix,
            status,
            body: String::from(r#"{"data":null,"error":{"status":500,"name":"InternalServerError"}}"#),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub url: String,
    pub authorization: Option<String>,
}

pub struct MockApi {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockApi {
    /// Start a server answering with the first route whose prefix matches.
    /// Unmatched requests get a 404.
    pub fn start(routes: Vec<Route>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
        let port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .expect("mock server port");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let url = urlencoding::decode(request.url())
                    .map(|u| u.into_owned())
                    .unwrap_or_else(|_| request.url().to_string());
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());
                seen.lock().unwrap().push(SeenRequest {
                    url: url.clone(),
                    authorization,
                });

                let (status, body) = routes
                    .iter()
                    .find(|r| url.starts_with(r.prefix))
                    .map_or((404, String::from(r#"{"data":null}"#)), |r| {
                        (r.status, r.body.clone())
                    });
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
        }
    }

    pub fn config(&self) -> ContentClientConfig {
        ContentClientConfig {
            use_system_proxy: false,
            ..ContentClientConfig::new(self.base_url.clone())
        }
    }

    pub fn client(&self) -> ContentClient {
        ContentClient::new(self.config()).expect("client builds")
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }
}

/// Base URL of a port nothing listens on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Observer that keeps every summary it is given.
#[derive(Default)]
pub struct RecordingObserver {
    pub seen: Mutex<Vec<(Resource, OutcomeSummary)>>,
}

impl FetchObserver for RecordingObserver {
    fn record(&self, resource: Resource, summary: &OutcomeSummary) {
        self.seen.lock().unwrap().push((resource, summary.clone()));
    }
}

impl RecordingObserver {
    pub fn summaries(&self) -> Vec<(Resource, OutcomeSummary)> {
        self.seen.lock().unwrap().clone()
    }
}
