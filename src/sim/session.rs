//! Session state machine
//!
//! ```text
//! Menu --Start--> Playing <--pause--> Paused
//!  |  <--back--  Controls
//!  +--Controls--> Controls
//! Playing --bigger enemy--> GameOver
//! any --restart--> Menu (full reset)
//! ```
//!
//! Exit and quit never terminate the process from here; they set
//! `quit_requested` and the host acts on it.

use super::input::TickInput;
use super::state::{GameEvent, GamePhase, GameState, MenuItem};

impl GameState {
    /// Apply the one-shot actions of `input` to the session
    pub fn handle_actions(&mut self, input: &TickInput) {
        if input.restart {
            self.reset_game();
            return;
        }

        match self.phase {
            GamePhase::Menu => {
                if input.quit {
                    self.request_quit();
                    return;
                }
                if input.menu_up {
                    self.menu_prev();
                }
                if input.menu_down {
                    self.menu_next();
                }
                if input.confirm {
                    self.select_menu_item();
                }
            }
            GamePhase::Controls => {
                if input.back || input.quit {
                    self.phase = GamePhase::Menu;
                }
            }
            GamePhase::Playing | GamePhase::Paused => {
                if input.quit {
                    self.request_quit();
                    return;
                }
                if input.pause {
                    self.toggle_pause();
                }
                if input.toggle_mode {
                    self.input_mode = self.input_mode.toggled();
                    log::debug!("Input mode: {}", self.input_mode.as_str());
                }
            }
            GamePhase::GameOver => {
                if input.quit {
                    self.request_quit();
                }
            }
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MenuItem::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        let n = MenuItem::ALL.len();
        self.menu_index = (self.menu_index + n - 1) % n;
    }

    /// Activate the highlighted menu entry
    pub fn select_menu_item(&mut self) {
        match self.selected_menu_item() {
            MenuItem::Start => {
                self.phase = GamePhase::Playing;
                self.push_event(GameEvent::Started);
                log::info!("Game started");
            }
            MenuItem::Controls => {
                self.phase = GamePhase::Controls;
            }
            MenuItem::Exit => self.request_quit(),
        }
    }

    /// Playing <-> Paused. No-op in any other phase.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                self.push_event(GameEvent::Paused);
                log::info!("Paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                self.push_event(GameEvent::Resumed);
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    /// Player touched something bigger
    pub fn enter_game_over(&mut self) {
        self.lives = 0;
        self.phase = GamePhase::GameOver;
        self.push_event(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over: score {}, level {}, mass {:.2}",
            self.score,
            self.level,
            self.player.mass
        );
    }

    fn request_quit(&mut self) {
        if !self.quit_requested {
            self.quit_requested = true;
            self.push_event(GameEvent::QuitRequested);
            log::info!("Quit requested");
        }
    }
}
