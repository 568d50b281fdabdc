// Complexity classification and route selection

use crate::config::RouterConfig;
use crate::models::RouteKind;

/// Coarse difficulty estimate of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Simple,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Complex => "complex",
        }
    }
}

/// Length/keyword heuristic. This is a proxy for task difficulty, not a
/// judgement of it: long chit-chat counts as complex, a short hard question
/// without a keyword counts as simple.
#[derive(Debug, Clone)]
pub struct Classifier {
    threshold: usize,
    keywords: Vec<String>,
}

impl Classifier {
    pub fn new(config: &RouterConfig) -> Self {
        Self {
            threshold: config.complexity_threshold,
            keywords: config
                .analysis_keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Classify an already trimmed message.
    pub fn classify(&self, message: &str) -> Complexity {
        if message.chars().count() > self.threshold {
            return Complexity::Complex;
        }

        let lowered = message.to_lowercase();
        if self.keywords.iter().any(|k| lowered.contains(k.as_str())) {
            Complexity::Complex
        } else {
            Complexity::Simple
        }
    }
}

/// Pick a route. Unboosted traffic always goes to the fast edge route;
/// `EdgeFallback` is never selected here.
pub fn select_route(complexity: Complexity, boosted: bool) -> RouteKind {
    match (boosted, complexity) {
        (true, Complexity::Complex) => RouteKind::AcceleratedReasoning,
        (true, Complexity::Simple) => RouteKind::AcceleratedCreative,
        (false, _) => RouteKind::EdgeFast,
    }
}
