// Routing matrix: tiers, sub-routes and their static descriptors

use serde::Serialize;
use std::fmt;

/// Immutable descriptor of a backing model route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: &'static str,
    pub provider: &'static str,
    pub label: &'static str,
    pub cost_per_1k: f64,
    pub backing_model: &'static str,
    pub latency_base_ms: u64,
}

/// Top-level grouping of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Accelerated,
    Edge,
}

/// Every route in the matrix, keyed by tier and sub-route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    AcceleratedReasoning,
    AcceleratedCreative,
    EdgeFast,
    /// Defined in the matrix but never chosen by route selection.
    EdgeFallback,
}

const ACCELERATED_REASONING: Route = Route {
    id: "claude-3-5-sonnet",
    provider: "Anthropic",
    label: "Claude 3.5 Sonnet",
    cost_per_1k: 0.015,
    backing_model: "gemini-3-pro-preview",
    latency_base_ms: 850,
};

const ACCELERATED_CREATIVE: Route = Route {
    id: "gpt-4o",
    provider: "OpenAI",
    label: "GPT-4o",
    cost_per_1k: 0.010,
    backing_model: "gemini-3-pro-preview",
    latency_base_ms: 720,
};

const EDGE_FAST: Route = Route {
    id: "gemini-flash",
    provider: "Google",
    label: "Gemini 3 Flash",
    cost_per_1k: 0.0001,
    backing_model: "gemini-3-flash-preview",
    latency_base_ms: 120,
};

const EDGE_FALLBACK: Route = Route {
    id: "gpt-4o-mini",
    provider: "OpenAI",
    label: "GPT-4o Mini",
    cost_per_1k: 0.0001,
    backing_model: "gemini-3-flash-preview",
    latency_base_ms: 140,
};

impl RouteKind {
    pub const ALL: [RouteKind; 4] = [
        RouteKind::AcceleratedReasoning,
        RouteKind::AcceleratedCreative,
        RouteKind::EdgeFast,
        RouteKind::EdgeFallback,
    ];

    /// Look up the static descriptor for this route.
    pub const fn route(self) -> &'static Route {
        match self {
            RouteKind::AcceleratedReasoning => &ACCELERATED_REASONING,
            RouteKind::AcceleratedCreative => &ACCELERATED_CREATIVE,
            RouteKind::EdgeFast => &EDGE_FAST,
            RouteKind::EdgeFallback => &EDGE_FALLBACK,
        }
    }

    pub const fn tier(self) -> Tier {
        match self {
            RouteKind::AcceleratedReasoning | RouteKind::AcceleratedCreative => Tier::Accelerated,
            RouteKind::EdgeFast | RouteKind::EdgeFallback => Tier::Edge,
        }
    }

    pub fn id(self) -> &'static str {
        self.route().id
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Serializable view of one matrix row, for the `/v1/routes` listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    pub kind: RouteKind,
    pub tier: Tier,
    #[serde(flatten)]
    pub route: Route,
}

/// The full routing matrix in declaration order.
pub fn routing_matrix() -> Vec<RouteEntry> {
    RouteKind::ALL
        .iter()
        .map(|&kind| RouteEntry {
            kind,
            tier: kind.tier(),
            route: *kind.route(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(RouteKind::AcceleratedReasoning.tier(), Tier::Accelerated);
        assert_eq!(RouteKind::AcceleratedCreative.tier(), Tier::Accelerated);
        assert_eq!(RouteKind::EdgeFast.tier(), Tier::Edge);
        assert_eq!(RouteKind::EdgeFallback.tier(), Tier::Edge);
    }

    #[test]
    fn test_route_ids_are_unique() {
        let mut ids: Vec<_> = RouteKind::ALL.iter().map(|k| k.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), RouteKind::ALL.len());
    }

    #[test]
    fn test_matrix_serialization() {
        let json = serde_json::to_value(routing_matrix()).unwrap();
        assert_eq!(json[0]["kind"], "accelerated_reasoning");
        assert_eq!(json[0]["tier"], "accelerated");
        assert_eq!(json[0]["id"], "claude-3-5-sonnet");
        assert_eq!(json[2]["backingModel"], "gemini-3-flash-preview");
        assert_eq!(json[3]["latencyBaseMs"], 140);
    }
}
