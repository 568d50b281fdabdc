// Inference router - cache-first resolution of chat messages to results

use super::backend::{GenerationBackend, GenerationRequest, GenerationResponse};
use super::classifier::{select_route, Classifier};
use super::connection::ConnectionOptimizer;
use super::prompt;
use crate::cache::{CacheConfig, CacheKey, InferenceCache};
use crate::config::{AppConfig, RouterConfig};
use crate::error::{GatewayError, Result};
use crate::metrics;
use crate::models::{
    FunctionDeclaration, InferenceMetrics, InferenceResult, RouteKind, Tier, FALLBACK_MODEL,
};
use crate::utils::logging::sanitize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info_span, Instrument};

/// Reported latency for cache hits.
pub const CACHE_HIT_LATENCY_MS: u64 = 15;
/// Reported time-to-first-token for cache hits.
pub const CACHE_HIT_TTFT_MS: f64 = 5.0;
/// Floor for the time-to-first-token estimate of live calls.
pub const MIN_TTFT_MS: f64 = 20.0;
/// Share of total latency attributed to the first token.
pub const TTFT_RATIO: f64 = 0.15;
/// Characters per token in the cost estimate.
pub const CHARS_PER_TOKEN: f64 = 4.0;

pub const ACCELERATED_CLUSTER: &str = "H100-DGX-CLUSTER";
pub const EDGE_CLUSTER: &str = "EDGE-TPU-NODE";
pub const FALLBACK_PROVIDER: &str = "System";
pub const FALLBACK_CLUSTER: &str = "Local Fallback";

pub const EMPTY_RESPONSE_TEXT: &str = "Orchestration Fault: Empty response.";
pub const FALLBACK_TEXT: &str =
    "The federated gateway is experiencing upstream latency. Rerouting packet...";

/// Routes chat messages to a backend model, with a response cache in front.
///
/// The cache and connection tracker are owned by the router; one router per
/// process gives the single-instance semantics the cache relies on. Locks are
/// never held across the backend call, so two concurrent misses on the same
/// key may both reach the backend. The later write wins.
pub struct InferenceRouter {
    config: RouterConfig,
    classifier: Classifier,
    tools: Vec<FunctionDeclaration>,
    cache: InferenceCache,
    connections: ConnectionOptimizer,
    backend: Arc<dyn GenerationBackend>,
}

impl InferenceRouter {
    pub fn new(
        config: RouterConfig,
        cache: InferenceCache,
        connections: ConnectionOptimizer,
        backend: Arc<dyn GenerationBackend>,
    ) -> Self {
        Self {
            classifier: Classifier::new(&config),
            tools: prompt::tool_manifest(),
            config,
            cache,
            connections,
            backend,
        }
    }

    /// Build a router with cache and connection tracker sized from `config`.
    pub fn from_config(config: &AppConfig, backend: Arc<dyn GenerationBackend>) -> Self {
        Self::new(
            config.router.clone(),
            InferenceCache::new(CacheConfig::from(&config.cache)),
            ConnectionOptimizer::new(config.connection.clone()),
            backend,
        )
    }

    pub fn cache(&self) -> &InferenceCache {
        &self.cache
    }

    pub fn connections(&self) -> &ConnectionOptimizer {
        &self.connections
    }

    /// Route selection for a message without resolving it.
    pub fn route_for(&self, message: &str, boosted: bool) -> RouteKind {
        select_route(self.classifier.classify(message.trim()), boosted)
    }

    /// Resolve a message to a result.
    ///
    /// Only empty input is an error. Backend failures and timeouts produce a
    /// fail-soft result with `model_used == "Fallback"` instead.
    pub async fn resolve(
        &self,
        message: &str,
        boosted: bool,
        throughput: Option<f64>,
    ) -> Result<InferenceResult> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GatewayError::InvalidInput(
                "message must not be empty".to_string(),
            ));
        }

        let started = Instant::now();
        let throughput = throughput.unwrap_or(self.config.default_throughput);
        let complexity = self.classifier.classify(message);
        let route = select_route(complexity, boosted);
        let key = CacheKey::new(route, message);

        debug!(
            "Classified message as {} (boosted={}), routing to {}",
            complexity.as_str(),
            boosted,
            route
        );

        if let Some(cached) = self.cache.get(&key) {
            self.connections.record_active(route);
            metrics::record_request(route.id(), "hit");
            return Ok(Self::as_cache_hit(cached));
        }

        let span = info_span!(
            "backend_call",
            request_id = %uuid::Uuid::new_v4().simple(),
            route = route.id(),
            model = route.route().backing_model
        );

        let overhead = self.connections.estimate_overhead(route);
        let request = self.build_request(route, message, boosted, throughput);

        match self.call_backend(request).instrument(span).await {
            Ok(response) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                let result = Self::build_result(
                    route,
                    boosted,
                    throughput,
                    message,
                    response,
                    elapsed_ms + overhead,
                );

                self.cache.insert(key, result.clone());
                self.connections.record_active(route);
                metrics::record_request(route.id(), "miss");
                metrics::record_cost(route.id(), result.cost);
                Ok(result)
            }
            Err(e) => {
                error!("Routing error on {}: {}", route, sanitize(&e.to_string()));
                metrics::record_request(route.id(), "fallback");
                Ok(Self::fallback_result())
            }
        }
    }

    fn build_request(
        &self,
        route: RouteKind,
        message: &str,
        boosted: bool,
        throughput: f64,
    ) -> GenerationRequest {
        let descriptor = route.route();
        GenerationRequest {
            target_model: descriptor.backing_model.to_string(),
            prompt: message.to_string(),
            system_instruction: prompt::system_instruction(
                descriptor,
                throughput,
                &self.config.districts,
            ),
            tools: self.tools.clone(),
            temperature: if boosted {
                self.config.boosted_temperature
            } else {
                self.config.edge_temperature
            },
            thinking_budget: if boosted {
                self.config.boosted_thinking_budget
            } else {
                0
            },
        }
    }

    /// One backend call under the configured timeout. No retries.
    async fn call_backend(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let model = request.target_model.clone();
        let timeout = Duration::from_millis(self.config.request_timeout_ms);
        let started = Instant::now();

        let outcome = tokio::time::timeout(timeout, self.backend.generate(request)).await;
        let duration = started.elapsed().as_secs_f64();

        match outcome {
            Ok(Ok(response)) => {
                debug!("{} answered in {:.3}s", self.backend.name(), duration);
                metrics::record_backend_call(&model, "success", duration);
                Ok(response)
            }
            Ok(Err(e)) => {
                metrics::record_backend_call(&model, "error", duration);
                Err(e)
            }
            Err(_) => {
                metrics::record_backend_call(&model, "timeout", duration);
                Err(GatewayError::BackendUnavailable(format!(
                    "{} did not answer within {}ms",
                    self.backend.name(),
                    self.config.request_timeout_ms
                )))
            }
        }
    }

    fn build_result(
        route: RouteKind,
        boosted: bool,
        throughput: f64,
        message: &str,
        response: GenerationResponse,
        total_latency_ms: u64,
    ) -> InferenceResult {
        let descriptor = route.route();
        let text = if response.text.is_empty() {
            EMPTY_RESPONSE_TEXT.to_string()
        } else {
            response.text
        };

        let cost = estimate_cost(message, &text, descriptor.cost_per_1k);
        let cluster = match route.tier() {
            Tier::Accelerated => ACCELERATED_CLUSTER,
            Tier::Edge => EDGE_CLUSTER,
        };

        InferenceResult {
            metrics: InferenceMetrics {
                ttft_ms: MIN_TTFT_MS.max(total_latency_ms as f64 * TTFT_RATIO),
                total_latency_ms,
                cached: false,
                accelerated: boosted,
                provider: descriptor.provider.to_string(),
                cluster: cluster.to_string(),
                throughput,
            },
            tool_calls: response.tool_calls,
            cost,
            model_used: descriptor.label.to_string(),
            text,
        }
    }

    /// Copy of a cached result with the fixed cache-hit latency figures.
    fn as_cache_hit(mut result: InferenceResult) -> InferenceResult {
        result.metrics.cached = true;
        result.metrics.total_latency_ms = CACHE_HIT_LATENCY_MS;
        result.metrics.ttft_ms = CACHE_HIT_TTFT_MS;
        result
    }

    /// Degraded result returned when the backend fails.
    pub fn fallback_result() -> InferenceResult {
        InferenceResult {
            text: FALLBACK_TEXT.to_string(),
            metrics: InferenceMetrics {
                ttft_ms: 0.0,
                total_latency_ms: 0,
                cached: false,
                accelerated: false,
                provider: FALLBACK_PROVIDER.to_string(),
                cluster: FALLBACK_CLUSTER.to_string(),
                throughput: 0.0,
            },
            tool_calls: Vec::new(),
            cost: 0.0,
            model_used: FALLBACK_MODEL.to_string(),
        }
    }
}

/// Cost estimate using a characters/4 token approximation on both input and
/// output. Not a real tokenizer.
pub fn estimate_cost(input: &str, output: &str, cost_per_1k: f64) -> f64 {
    let input_tokens = input.chars().count() as f64 / CHARS_PER_TOKEN;
    let output_tokens = output.chars().count() as f64 / CHARS_PER_TOKEN;
    ((input_tokens + output_tokens) / 1000.0) * cost_per_1k
}
