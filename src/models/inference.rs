//! Result types returned by the router.
//!
//! An [`InferenceResult`] is built once per backend call and never mutated
//! afterwards; the cache hands out clones whose metrics are overridden for
//! hits.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label reported in `model_used` for fail-soft results.
pub const FALLBACK_MODEL: &str = "Fallback";

/// Performance metadata attached to every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceMetrics {
    /// Estimated time to first token.
    pub ttft_ms: f64,
    /// Wall clock plus connection overhead.
    pub total_latency_ms: u64,
    /// True when served from the response cache.
    pub cached: bool,
    /// True when the accelerated tier handled the request.
    pub accelerated: bool,
    pub provider: String,
    pub cluster: String,
    /// Caller-supplied throughput hint, passed through.
    pub throughput: f64,
}

/// A structured request from the backend to invoke a declared tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

/// The value handed back to callers of `resolve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    pub text: String,
    pub metrics: InferenceMetrics,
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
    /// Estimated monetary cost in the route's currency unit.
    pub cost: f64,
    /// Display label of the route that produced the text.
    pub model_used: String,
}

impl InferenceResult {
    /// Typed view of the tool calls this result carries. Unknown or malformed
    /// calls are skipped.
    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.tool_calls
            .iter()
            .filter_map(ToolInvocation::parse)
            .collect()
    }

    pub fn is_fallback(&self) -> bool {
        self.model_used == FALLBACK_MODEL
    }
}

/// Simulation control events accepted by `triggerSimulationEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimulationEvent {
    FailDistrict,
    SwitchTransit,
    Reset,
}

impl SimulationEvent {
    pub const ALL: [SimulationEvent; 3] = [
        SimulationEvent::FailDistrict,
        SimulationEvent::SwitchTransit,
        SimulationEvent::Reset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationEvent::FailDistrict => "FAIL_DISTRICT",
            SimulationEvent::SwitchTransit => "SWITCH_TRANSIT",
            SimulationEvent::Reset => "RESET",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

/// A tool call decoded against the fixed capability manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInvocation {
    NavigateToSection {
        section_id: String,
    },
    TriggerSimulationEvent {
        event_type: SimulationEvent,
        target_id: Option<String>,
    },
    ToggleGpu {
        active: bool,
    },
    CreateMaintenanceTask {
        text: String,
    },
}

impl ToolInvocation {
    /// Decode a raw tool call. Returns `None` for unknown tool names or
    /// missing/mistyped required arguments.
    pub fn parse(call: &ToolCall) -> Option<Self> {
        let str_arg = |key: &str| call.args.get(key).and_then(Value::as_str).map(str::to_string);

        match call.name.as_str() {
            "navigateToSection" => Some(ToolInvocation::NavigateToSection {
                section_id: str_arg("sectionId")?,
            }),
            "triggerSimulationEvent" => Some(ToolInvocation::TriggerSimulationEvent {
                event_type: SimulationEvent::parse(&str_arg("eventType")?)?,
                target_id: str_arg("targetId"),
            }),
            "toggleGPU" => Some(ToolInvocation::ToggleGpu {
                active: call.args.get("active").and_then(Value::as_bool)?,
            }),
            "createMaintenanceTask" => Some(ToolInvocation::CreateMaintenanceTask {
                text: str_arg("text")?,
            }),
            _ => None,
        }
    }
}
