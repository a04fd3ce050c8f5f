use super::Policy;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Flat summary of one game, for whoever collects results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub size: usize,
    pub max_x: usize,
    pub max_y: usize,
    pub min_x: usize,
    pub min_y: usize,
    pub max_policy: Policy,
    pub min_policy: Policy,
    pub depth: Depth,
    /// Whether Max moved first.
    pub max_first: bool,
    pub plies: usize,
    /// `None` while the game is still running.
    pub winner: Option<Player>,
}

impl Record {
    /// The record as a flat key/value map.
    pub fn fields(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}
