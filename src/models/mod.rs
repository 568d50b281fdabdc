//! Data models for the inference gateway.
//!
//! This module contains the type definitions for:
//! - The routing matrix (`route`)
//! - Results returned to callers (`inference`)
//! - The upstream Google Gemini API (`gemini`)

pub mod gemini;
pub mod inference;
pub mod route;

pub use gemini::{FunctionDeclaration, GenerateContentRequest, GenerateContentResponse};
pub use inference::{
    InferenceMetrics, InferenceResult, SimulationEvent, ToolCall, ToolInvocation, FALLBACK_MODEL,
};
pub use route::{routing_matrix, Route, RouteEntry, RouteKind, Tier};
