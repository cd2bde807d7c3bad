//! Status line above the track
//!
//! Shows the countdown while the race is about to start and the leader once
//! it has finished. Purely a reflection of the snapshot.

use glam::DVec2;

use super::surface::{Surface, TextAlign};
use crate::consts::{BANNER_FONT_DIVISOR, GLOW_COLOR, NAME_GLOW, TEXT_COLOR};
use crate::race::{GameState, RacePhase, Viewport};

/// Text to show for this snapshot, if any
pub fn banner_text(state: &GameState) -> Option<String> {
    match state.phase {
        RacePhase::CountingDown if state.countdown > 0 => Some(state.countdown.to_string()),
        RacePhase::CountingDown => Some("Go".to_string()),
        RacePhase::Finished => state.leader().map(|robot| format!("{} wins!", robot.name)),
        RacePhase::Setup | RacePhase::Playing => None,
    }
}

/// Draw the status line centred at the top of the viewport
pub fn render_banner<S: Surface + ?Sized>(
    state: &GameState,
    viewport: Viewport,
    font_family: &str,
    surface: &mut S,
) {
    let Some(text) = banner_text(state) else {
        return;
    };

    let font_size = viewport.robot_side() * 2.0 / BANNER_FONT_DIVISOR;
    surface.set_fill_color(TEXT_COLOR);
    surface.set_shadow(GLOW_COLOR, NAME_GLOW);
    surface.set_text_align(TextAlign::Center);
    surface.set_font(&format!("{}px {}", font_size, font_family));
    surface.fill_text(&text, DVec2::new(viewport.width / 2.0, font_size * 1.5));
    surface.set_shadow(GLOW_COLOR, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::RobotEntry;
    use crate::renderer::recording::RecordingSurface;

    fn race(phase: RacePhase, countdown: u32) -> GameState {
        GameState {
            phase,
            countdown,
            ..GameState::new(5, vec![RobotEntry::new("Ada", 5), RobotEntry::new("Bo", 2)])
        }
    }

    #[test]
    fn test_countdown_text() {
        assert_eq!(banner_text(&race(RacePhase::CountingDown, 3)).as_deref(), Some("3"));
        assert_eq!(banner_text(&race(RacePhase::CountingDown, 0)).as_deref(), Some("Go"));
    }

    #[test]
    fn test_finished_names_leader() {
        assert_eq!(banner_text(&race(RacePhase::Finished, 0)).as_deref(), Some("Ada wins!"));
    }

    #[test]
    fn test_quiet_while_playing() {
        assert!(banner_text(&race(RacePhase::Playing, 0)).is_none());
        assert!(banner_text(&race(RacePhase::Setup, 0)).is_none());

        let mut surface = RecordingSurface::new();
        render_banner(&race(RacePhase::Playing, 0), Viewport::new(400.0, 300.0), "serif", &mut surface);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_banner_is_centred() {
        let mut surface = RecordingSurface::new();
        render_banner(&race(RacePhase::CountingDown, 2), Viewport::new(400.0, 300.0), "serif", &mut surface);
        let texts = surface.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].0, "2");
        assert_eq!(texts[0].1.x, 200.0);
    }
}
