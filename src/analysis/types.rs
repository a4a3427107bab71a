// src/analysis/types.rs
use serde::{Deserialize, Serialize};

/// Networking suggestions produced for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisResult {
    pub connections: Vec<Connection>,
    pub communication_starters: Vec<CommunicationStarter>,
    pub interest_expansions: Vec<InterestExpansion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub title: String,
    pub subtitle: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunicationStarter {
    pub prompt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestExpansion {
    pub topic: String,
    pub why: String,
}

impl AnalysisResult {
    /// Plain-text rendering of the three suggestion cards.
    pub fn to_plain_text(&self) -> String {
        let connections = self
            .connections
            .iter()
            .map(|c| format!("{}\n{}", c.title, c.subtitle))
            .collect::<Vec<_>>()
            .join("\n\n");

        let starters = self
            .communication_starters
            .iter()
            .map(|s| s.prompt.clone())
            .collect::<Vec<_>>()
            .join("\n\n");

        let expansions = self
            .interest_expansions
            .iter()
            .map(|e| format!("{}\n{}", e.topic, e.why))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "Connections\n\n{}\n\nConversation starters\n\n{}\n\nInterest expansions\n\n{}\n",
            connections, starters, expansions
        )
    }
}
