use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};
use gloo::timers::callback::Timeout;
use shared::{
    ApiRequest, ApiResponse, FinanceGateway, HttpMethod, HttpTransport, TrackerConfig,
    TransportError,
};
use std::cell::Cell;
use std::rc::Rc;
use web_sys::AbortController;

/// Gateway to the finance API as used by the browser app
pub type ApiClient = FinanceGateway<GlooTransport>;

/// Create an API client for the configured backend
pub fn api_client(config: &TrackerConfig) -> ApiClient {
    FinanceGateway::new(GlooTransport::new(config))
}

/// Fetch-based transport that aborts requests running longer than the
/// configured timeout
#[derive(Clone)]
pub struct GlooTransport {
    base_url: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = request.url(&self.base_url);
        match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let controller = AbortController::new()
            .map_err(|e| TransportError::Network(format!("AbortController unavailable: {:?}", e)))?;
        let timed_out = Rc::new(Cell::new(false));

        // Dropping the timer cancels it, so it only fires while the request is pending.
        let _deadline = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let builder = self.builder(&request).abort_signal(Some(&controller.signal()));
        let outgoing = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Encode(e.to_string()))?;

        let response = outgoing.send().await.map_err(|e| {
            if timed_out.get() {
                TransportError::Timeout(self.timeout_ms)
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
