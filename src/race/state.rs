//! Race snapshot pushed by the server
//!
//! The server owns every rule. These types only mirror what it sends; nothing
//! here validates or adjusts scores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Where the race is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RacePhase {
    /// Waiting for players to join
    #[default]
    Setup,
    /// Countdown before the start
    CountingDown,
    /// Robots are racing
    Playing,
    /// A robot reached the winning score
    Finished,
}

impl RacePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RacePhase::Setup => "setup",
            RacePhase::CountingDown => "counting_down",
            RacePhase::Playing => "playing",
            RacePhase::Finished => "finished",
        }
    }
}

/// One robot on the track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RobotEntry {
    #[serde(default)]
    pub id: Option<String>,
    /// Display label, may be empty
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    /// `0 <= score <= winning_score`, guaranteed by the server
    pub score: u32,
}

impl RobotEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            ..Default::default()
        }
    }
}

/// Authoritative race snapshot, replaced wholesale on every update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameState {
    #[serde(default)]
    pub id: Option<String>,
    /// Score that ends the race; sets the vertical scale of the track
    #[serde(alias = "winningScore")]
    pub winning_score: u32,
    /// Slot order, left to right. Also decides colours.
    #[serde(default)]
    pub robots: Vec<RobotEntry>,
    #[serde(default, rename = "state")]
    pub phase: RacePhase,
    /// Seconds left while counting down
    #[serde(default)]
    pub countdown: u32,
    /// Wins per robot id from earlier races in this lobby
    #[serde(default)]
    pub previous_wins: HashMap<String, u32>,
}

impl GameState {
    /// The empty race a freshly mounted track starts with
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(winning_score: u32, robots: Vec<RobotEntry>) -> Self {
        Self {
            winning_score,
            robots,
            ..Default::default()
        }
    }

    /// Whether there is anything to lay out
    pub fn is_drawable(&self) -> bool {
        !self.robots.is_empty() && self.winning_score > 0
    }

    /// Robot with the highest score. The leftmost one wins ties.
    pub fn leader(&self) -> Option<&RobotEntry> {
        self.robots
            .iter()
            .reduce(|best, robot| if robot.score > best.score { robot } else { best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_payload() {
        let json = r#"{"winning_score": 10, "robots": [{"name": "A", "score": 3}]}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.winning_score, 10);
        assert_eq!(state.robots, vec![RobotEntry::new("A", 3)]);
        assert_eq!(state.phase, RacePhase::Setup);
    }

    #[test]
    fn test_decode_full_server_payload() {
        let json = r#"{
            "id": "g_ab12C",
            "winning_score": 25,
            "num_robots": 2,
            "countdown": 3,
            "config": {"winning_score": 25},
            "state": "counting_down",
            "previous_wins": {"r_x": 2},
            "robots": [
                {"id": "r_x", "name": "Xena", "role": "admin", "score": 0},
                {"id": "r_y", "name": "Yuri", "role": "guest", "score": 0}
            ]
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.phase, RacePhase::CountingDown);
        assert_eq!(state.countdown, 3);
        assert_eq!(state.previous_wins.get("r_x"), Some(&2));
        assert_eq!(state.robots[1].role.as_deref(), Some("guest"));
    }

    #[test]
    fn test_camel_case_winning_score_accepted() {
        let state: GameState = serde_json::from_str(r#"{"winningScore": 7, "robots": []}"#).unwrap();
        assert_eq!(state.winning_score, 7);
    }

    #[test]
    fn test_empty_is_not_drawable() {
        assert!(!GameState::empty().is_drawable());
        assert!(!GameState::new(0, vec![RobotEntry::new("A", 0)]).is_drawable());
        assert!(!GameState::new(5, vec![]).is_drawable());
        assert!(GameState::new(5, vec![RobotEntry::new("A", 0)]).is_drawable());
    }

    #[test]
    fn test_leader_prefers_leftmost_on_tie() {
        let state = GameState::new(
            10,
            vec![
                RobotEntry::new("A", 4),
                RobotEntry::new("B", 9),
                RobotEntry::new("C", 9),
            ],
        );
        assert_eq!(state.leader().map(|r| r.name.as_str()), Some("B"));
        assert!(GameState::empty().leader().is_none());
    }
}
