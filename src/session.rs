//! Play session: the engine plus the game-over score screen.
//!
//! When the stack overflows the engine resets itself within the same frame.
//! The session holds on to the final score and shows it on the panel until
//! the player restarts; the engine is paused meanwhile.

use tracing::info;

use crate::core::{FrameBuffer, GameState};
use crate::term::{brightness_frame, frame_for_number, PanelStatus};
use crate::types::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    GameOver { score: u32 },
}

pub struct Session {
    game: GameState,
    screen: Screen,
    /// Brightness levels currently on the panel
    levels: FrameBuffer,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self::from_game(GameState::new(seed))
    }

    pub fn from_game(game: GameState) -> Self {
        let levels = brightness_frame(game.render());
        Self {
            game,
            screen: Screen::Playing,
            levels,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn levels(&self) -> &FrameBuffer {
        &self.levels
    }

    pub fn status(&self) -> PanelStatus {
        let (score, game_over) = match self.screen {
            Screen::Playing => (self.game.score(), false),
            Screen::GameOver { score } => (score, true),
        };
        PanelStatus {
            score,
            frame: self.game.frame(),
            episode: self.game.episode_id(),
            game_over,
        }
    }

    /// Advance one frame with the resolved player action.
    ///
    /// `Quit` is left to the host; here it is an idle frame.
    pub fn advance(&mut self, action: Action) {
        match (self.screen, action) {
            (Screen::GameOver { .. }, Action::Restart) => {
                // The engine already reset on overflow.
                info!(episode = self.game.episode_id(), "new game");
                self.screen = Screen::Playing;
                self.game.step(Action::None);
            }
            (Screen::GameOver { .. }, _) => {}
            (Screen::Playing, action) => {
                let outcome = self.game.step(action);
                if outcome.done {
                    info!(score = outcome.score, "game over");
                    self.screen = Screen::GameOver {
                        score: outcome.score,
                    };
                }
            }
        }

        self.levels = match self.screen {
            Screen::Playing => brightness_frame(self.game.render()),
            Screen::GameOver { score } => frame_for_number(score as u64),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_BRIGHTNESS;

    fn overflowing_session() -> Session {
        let mut game = GameState::new(3);
        // A settled cell in the top visible row ends the game on the next frame.
        game.board_mut().fill_row_except(4, &[5, 6, 7, 8, 9]);
        Session::from_game(game)
    }

    #[test]
    fn playing_frames_show_brightness_levels() {
        let mut session = Session::new(7);
        session.advance(Action::None);
        assert_eq!(session.screen(), Screen::Playing);
        assert!(session.levels().cells().iter().all(|&v| v == 0 || v >= 9));
    }

    #[test]
    fn overflow_switches_to_score_screen_until_restart() {
        let mut session = overflowing_session();
        session.advance(Action::None);
        assert_eq!(session.screen(), Screen::GameOver { score: 0 });
        assert!(session.status().game_over);
        assert_eq!(session.levels(), &frame_for_number(0));

        let frame = session.game().frame();
        session.advance(Action::Left);
        session.advance(Action::Down);
        assert_eq!(session.game().frame(), frame);
        assert!(session.levels().cells().iter().all(|&v| v == 0 || v == MAX_BRIGHTNESS));

        session.advance(Action::Restart);
        assert_eq!(session.screen(), Screen::Playing);
        assert_eq!(session.game().score(), 0);
        assert_eq!(session.game().frame(), 1);
    }

    #[test]
    fn restart_while_playing_resets_engine() {
        let mut session = Session::new(11);
        session.advance(Action::None);
        let episode = session.game().episode_id();
        session.advance(Action::Restart);
        assert_eq!(session.game().episode_id(), episode + 1);
        assert_eq!(session.screen(), Screen::Playing);
    }
}
