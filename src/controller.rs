//! Race track controller
//!
//! Owns the latest snapshot, turns input into scoring intents and redraws the
//! stage whenever the snapshot or the viewport changes. A track only exists
//! while mounted: constructing one is the mount, dropping it the unmount.

use serde_json::Value;

use crate::error::{ProtocolError, RenderError};
use crate::protocol::{Inbound, Outbound, ScoreIntent, Transport};
use crate::race::{GameState, compute_boxes};
use crate::renderer::{Stage, draw_track};
use crate::settings::Settings;

/// A mounted race track
pub struct RaceTrack<T: Transport, St: Stage> {
    state: GameState,
    transport: T,
    stage: St,
    settings: Settings,
    passes: u64,
}

impl<T: Transport, St: Stage> RaceTrack<T, St> {
    /// Mount on `stage` and tell the server we are listening
    pub fn mount(transport: T, stage: St, settings: Settings) -> Self {
        let mut track = Self {
            state: GameState::empty(),
            transport,
            stage,
            settings,
            passes: 0,
        };
        track.send(Outbound::Ready);
        log::info!("Race track mounted");
        track
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stage(&self) -> &St {
        &self.stage
    }

    /// Completed render passes since mount
    pub fn passes(&self) -> u64 {
        self.passes
    }

    fn send(&mut self, message: Outbound) {
        let event = message.event_name(&self.settings).to_string();
        log::debug!("Pushing {}", event);
        self.transport.push(&event, message.payload());
    }

    /// A key was pressed anywhere on the page
    pub fn key_pressed(&mut self, key: &str, code: &str) {
        self.send(Outbound::ScorePoint(ScoreIntent::Keyboard {
            key: key.to_string(),
            code: code.to_string(),
        }));
    }

    /// A touch started anywhere on the page
    pub fn touch_started(&mut self) {
        self.send(Outbound::ScorePoint(ScoreIntent::Touch));
    }

    /// Decode a raw push from the host and apply it.
    ///
    /// Rejected messages leave the current snapshot untouched.
    pub fn handle_push(&mut self, event: &str, payload: Value) -> Result<(), ProtocolError> {
        let message = Inbound::decode(event, payload, &self.settings)?;
        self.receive(message);
        Ok(())
    }

    /// Apply a decoded push
    pub fn receive(&mut self, message: Inbound) {
        match message {
            Inbound::GameUpdated(state) => {
                self.replace_state(state);
                if let Err(e) = self.render() {
                    log::error!("Render failed: {}", e);
                }
            }
        }
    }

    fn replace_state(&mut self, state: GameState) {
        if state.phase != self.state.phase {
            log::info!(
                "Race {} -> {}",
                self.state.phase.as_str(),
                state.phase.as_str()
            );
        }
        self.state = state;
    }

    /// The container changed size; lay out the last snapshot again
    pub fn resized(&mut self) -> Result<bool, RenderError> {
        self.render()
    }

    /// One full render pass.
    ///
    /// Returns `Ok(false)` when the snapshot has nothing to lay out yet (no
    /// robots or a zero winning score); the cleared stage is left empty.
    pub fn render(&mut self) -> Result<bool, RenderError> {
        let viewport = self.stage.fit_to_container();
        let Some(boxes) = compute_boxes(&self.state, viewport) else {
            log::debug!("Nothing to draw yet");
            return Ok(false);
        };

        let surface = self.stage.surface()?;
        draw_track(&self.state, &boxes, viewport, &self.settings, surface);

        self.passes += 1;
        log::debug!(
            "Drew {} robots at {}x{}",
            boxes.len(),
            viewport.width,
            viewport.height
        );
        Ok(true)
    }
}

impl<T: Transport, St: Stage> Drop for RaceTrack<T, St> {
    fn drop(&mut self) {
        log::info!("Race track unmounted after {} passes", self.passes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::{RobotEntry, Viewport, compute_boxes};
    use crate::renderer::recording::{DrawCommand, RecordingStage};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared log of pushed messages
    #[derive(Clone, Default)]
    struct MemoryTransport(Rc<RefCell<Vec<(String, Value)>>>);

    impl Transport for MemoryTransport {
        fn push(&mut self, event: &str, payload: Value) {
            self.0.borrow_mut().push((event.to_string(), payload));
        }
    }

    fn mounted(viewport: Viewport) -> (RaceTrack<MemoryTransport, RecordingStage>, MemoryTransport) {
        let transport = MemoryTransport::default();
        let track = RaceTrack::mount(transport.clone(), RecordingStage::new(viewport), Settings::default());
        (track, transport)
    }

    fn two_robots() -> Value {
        json!({
            "winning_score": 10,
            "robots": [{"name": "A", "score": 0}, {"name": "B", "score": 10}]
        })
    }

    #[test]
    fn test_mount_sends_ready_once() {
        let (track, transport) = mounted(Viewport::new(200.0, 110.0));
        assert_eq!(*transport.0.borrow(), vec![("ready".to_string(), json!({}))]);
        assert_eq!(track.state(), &GameState::empty());
        assert_eq!(track.passes(), 0);
    }

    #[test]
    fn test_touch_sends_single_intent_without_key() {
        let (mut track, transport) = mounted(Viewport::new(200.0, 110.0));
        track.touch_started();

        let sent = transport.0.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1], ("score_point".to_string(), json!({"source": "touch"})));
        assert!(sent[1].1.get("key").is_none());
    }

    #[test]
    fn test_key_press_sends_key_and_code() {
        let (mut track, transport) = mounted(Viewport::new(200.0, 110.0));
        track.key_pressed("a", "KeyA");
        assert_eq!(
            transport.0.borrow()[1],
            (
                "score_point".to_string(),
                json!({"source": "keyboard", "key": "a", "code": "KeyA"})
            )
        );
    }

    #[test]
    fn test_update_replaces_state_and_draws() {
        let (mut track, _) = mounted(Viewport::new(200.0, 110.0));
        track.handle_push("game_updated", two_robots()).unwrap();

        assert_eq!(track.state().robots.len(), 2);
        assert_eq!(track.passes(), 1);
        let texts: Vec<_> = track.stage().commands().iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.clone()),
            _ => None,
        }).collect();
        assert_eq!(texts, vec!["A".to_string(), "B".to_string()]);
        assert!(track.stage().commands().contains(&DrawCommand::FillColor("cyan".into())));
        assert!(track.stage().commands().contains(&DrawCommand::FillColor("magenta".into())));
    }

    #[test]
    fn test_update_is_wholesale() {
        let (mut track, _) = mounted(Viewport::new(200.0, 110.0));
        track.handle_push("game_updated", two_robots()).unwrap();
        track
            .handle_push("game_updated", json!({"winning_score": 3, "robots": [{"name": "C", "score": 1}]}))
            .unwrap();
        assert_eq!(track.state(), &GameState::new(3, vec![RobotEntry::new("C", 1)]));
    }

    #[test]
    fn test_empty_race_skips_drawing() {
        let (mut track, _) = mounted(Viewport::new(200.0, 110.0));
        assert_eq!(track.render(), Ok(false));
        track
            .handle_push("game_updated", json!({"winning_score": 0, "robots": [{"name": "A", "score": 0}]}))
            .unwrap();
        assert_eq!(track.passes(), 0);
        assert!(track.stage().commands().is_empty());
    }

    #[test]
    fn test_rejected_push_keeps_state() {
        let (mut track, _) = mounted(Viewport::new(200.0, 110.0));
        track.handle_push("game_updated", two_robots()).unwrap();
        assert!(track.handle_push("game_updated", json!({"robots": 7})).is_err());
        assert!(track.handle_push("something_else", two_robots()).is_err());
        assert_eq!(track.state().robots.len(), 2);
    }

    #[test]
    fn test_resize_relays_out_last_state() {
        let (mut track, transport) = mounted(Viewport::new(200.0, 110.0));
        track.handle_push("game_updated", two_robots()).unwrap();

        let resized = Viewport::new(640.0, 480.0);
        track.stage.viewport = resized;
        assert_eq!(track.resized(), Ok(true));

        // Only the ready message went out; resizing never asks the server.
        assert_eq!(transport.0.borrow().len(), 1);

        let expected = compute_boxes(track.state(), resized).unwrap();
        let body_rects: Vec<_> = track
            .stage()
            .surface
            .as_ref()
            .unwrap()
            .rects()
            .into_iter()
            .filter(|(_, size)| size.x == expected[0].side)
            .collect();
        assert_eq!(body_rects.len(), 8);
        assert_eq!(body_rects[0].0, expected[0].origin());
        assert_eq!(body_rects[4].0, expected[1].origin());
    }

    #[test]
    fn test_same_input_draws_same_commands() {
        let (mut track, _) = mounted(Viewport::new(300.0, 200.0));
        track.handle_push("game_updated", two_robots()).unwrap();
        let first = track.stage().commands().to_vec();
        track.resized().unwrap();
        assert_eq!(track.stage().commands(), first.as_slice());
    }

    #[test]
    fn test_missing_context_is_an_error() {
        let transport = MemoryTransport::default();
        let mut track = RaceTrack::mount(
            transport,
            RecordingStage::without_context(Viewport::new(200.0, 110.0)),
            Settings::default(),
        );
        track.handle_push("game_updated", two_robots()).unwrap();
        assert_eq!(track.render(), Err(RenderError::NoContext));
        assert_eq!(track.passes(), 0);
    }

    #[test]
    fn test_configured_event_names() {
        let transport = MemoryTransport::default();
        let settings = Settings {
            ready_event: "race_track_mounted".into(),
            update_event: "game".into(),
            ..Settings::default()
        };
        let mut track = RaceTrack::mount(transport.clone(), RecordingStage::new(Viewport::new(200.0, 110.0)), settings);
        assert_eq!(transport.0.borrow()[0].0, "race_track_mounted");
        assert!(track.handle_push("game", two_robots()).is_ok());
        assert!(track.handle_push("game_updated", two_robots()).is_err());
    }
}
