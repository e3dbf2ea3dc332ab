//! Prometheus request metrics, collected by a fairing and exposed at `/metrics`.

use std::time::Instant;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use rocket::{
    fairing::{Fairing, Info, Kind},
    http::ContentType,
    Data, Request, Response, Route, State,
};

use crate::{access::AccessError, routes::RequestResult};

/// Label of requests that matched no route.
const UNMATCHED: &str = "unmatched";

/// Request counters and latencies, in their own registry.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
}

/// When the current request arrived.
struct RequestStart(Option<Instant>);

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some("games".to_owned()), None)?;

        let requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Handled HTTP requests"),
            &["method", "route", "status"],
        )?;
        let latency = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Time spent handling HTTP requests",
            ),
            &["method", "route"],
        )?;
        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;

        Ok(Self {
            registry,
            requests,
            latency,
        })
    }

    /// Renders every metric in the Prometheus text format.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
    }
}

#[rocket::async_trait]
impl Fairing for Metrics {
    fn info(&self) -> Info {
        Info {
            name: "Prometheus metrics",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        request.local_cache(|| RequestStart(Some(Instant::now())));
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        // Labelled by route template so slugs do not blow up the cardinality
        let route = request
            .route()
            .map(|route| route.uri.to_string())
            .unwrap_or_else(|| UNMATCHED.to_owned());
        let method = request.method().as_str();
        let status = response.status().code.to_string();

        self.requests
            .with_label_values(&[method, route.as_str(), status.as_str()])
            .inc();
        if let RequestStart(Some(start)) = request.local_cache(|| RequestStart(None)) {
            self.latency
                .with_label_values(&[method, route.as_str()])
                .observe(start.elapsed().as_secs_f64());
        }
    }
}

pub fn routes() -> Vec<Route> {
    rocket::routes![metrics]
}

#[rocket::get("/metrics")]
pub fn metrics(metrics: &State<Metrics>) -> RequestResult<(ContentType, String)> {
    let body = metrics
        .render()
        .map_err(|err| AccessError::Internal(format!("failed to render metrics: {}", err)))?;
    Ok((ContentType::Plain, body))
}
