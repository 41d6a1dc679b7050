use std::sync::{Arc, Mutex};
use std::time::Duration;

use wiremock::{
    matchers::{method, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

pub struct EndpointStub {
    pub status: u16,
    pub response: String,
    pub delay_ms: u64,
}

impl Default for EndpointStub {
    fn default() -> Self {
        EndpointStub {
            status: 200,
            response: String::new(),
            delay_ms: 0,
        }
    }
}

/// Stand-in for the key validation endpoint. Stubs are matched on the
/// `APIkey` query param (or any GET when no key filter is given) and every
/// received request is captured for assertions.
pub struct MockKeyApi {
    mock_server: MockServer,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockKeyApi {
    pub async fn new() -> MockKeyApi {
        MockKeyApi {
            mock_server: MockServer::start().await,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn stub(&self, stub: EndpointStub) {
        let reqs = self.requests.clone();

        Mock::given(method("GET"))
            .respond_with(move |req: &Request| {
                reqs.lock().unwrap().push(req.clone());

                ResponseTemplate::new(stub.status)
                    .set_body_string(stub.response.clone())
                    .set_delay(Duration::from_millis(stub.delay_ms))
            })
            .mount(&self.mock_server)
            .await;
    }

    pub async fn stub_for_key(&self, api_key: &str, stub: EndpointStub) {
        let reqs = self.requests.clone();

        Mock::given(method("GET"))
            .and(query_param("APIkey", api_key))
            .respond_with(move |req: &Request| {
                reqs.lock().unwrap().push(req.clone());

                ResponseTemplate::new(stub.status)
                    .set_body_string(stub.response.clone())
                    .set_delay(Duration::from_millis(stub.delay_ms))
            })
            .mount(&self.mock_server)
            .await;
    }

    pub fn url(&self) -> String {
        self.mock_server.uri()
    }

    pub fn times_called(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|req| req.url.to_string())
            .collect()
    }
}
