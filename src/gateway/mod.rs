//! Inference routing core.
//!
//! A message is classified, mapped to a route of the routing matrix, looked up
//! in the response cache and, on a miss, sent to the generation backend. The
//! connection optimizer folds a cold/warm overhead estimate into the reported
//! latency.
//!
//! # Submodules
//!
//! - `backend`: The `GenerationBackend` trait the router calls.
//! - `classifier`: Complexity heuristic and route selection.
//! - `connection`: Per-route warmth tracking.
//! - `prompt`: System instruction and tool manifest.
//! - `router`: `InferenceRouter::resolve`.

pub mod backend;
pub mod classifier;
pub mod connection;
pub mod prompt;
pub mod router;

pub use backend::{GenerationBackend, GenerationRequest, GenerationResponse};
pub use classifier::{select_route, Classifier, Complexity};
pub use connection::{ConnectionOptimizer, ConnectionWarmth};
pub use router::{estimate_cost, InferenceRouter};
