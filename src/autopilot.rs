//! Demo autopilot
//!
//! Plays the game without a human so the headless host has something to do.
//! It only produces [`TickInput`]s; the rules are untouched.

use glam::{Vec2, Vec3};

use crate::sim::{Contact, GamePhase, GameState, InputMode, TickInput, classify};

/// Dangerous enemies closer than this (beyond contact) trigger a retreat
const THREAT_MARGIN: f32 = 4.0;

/// Choose this tick's input from the current state
pub fn steer(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    match state.phase {
        GamePhase::Menu => {
            if state.menu_index != 0 {
                input.menu_up = true;
            } else {
                input.confirm = true;
            }
            return input;
        }
        GamePhase::Controls => {
            input.back = true;
            return input;
        }
        GamePhase::Paused => {
            input.pause = true;
            return input;
        }
        GamePhase::GameOver => return input,
        GamePhase::Playing => {}
    }

    if state.input_mode != InputMode::Keys {
        input.toggle_mode = true;
    }

    let player = &state.player;
    let radius = player.radius();

    let threat = state
        .enemies
        .iter()
        .filter(|e| classify(radius, e.radius) == Contact::Die)
        .map(|e| (e, horizontal(e.pos - player.pos)))
        .filter(|(e, offset)| offset.length() < radius + e.radius + THREAT_MARGIN)
        .min_by(|a, b| a.1.length().total_cmp(&b.1.length()));

    let heading = if let Some((_, offset)) = threat {
        input.dash = true;
        -offset
    } else {
        let food = state.pellets.iter().map(|p| horizontal(p.pos - player.pos));
        let prey = state
            .enemies
            .iter()
            .filter(|e| classify(radius, e.radius) == Contact::Eat)
            .map(|e| horizontal(e.pos - player.pos));
        food.chain(prey)
            .min_by(|a, b| a.length().total_cmp(&b.length()))
            .unwrap_or(Vec2::ZERO)
    };

    press_toward(&mut input, heading);
    input
}

fn horizontal(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Map a heading onto the four direction keys
fn press_toward(input: &mut TickInput, heading: Vec2) {
    const SLACK: f32 = 0.25;
    let Some(dir) = heading.try_normalize() else {
        return;
    };
    input.right = dir.x > SLACK;
    input.left = dir.x < -SLACK;
    input.down = dir.y > SLACK;
    input.up = dir.y < -SLACK;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Enemy;

    fn playing() -> GameState {
        let mut state = GameState::new(21);
        state.phase = GamePhase::Playing;
        state.input_mode = InputMode::Keys;
        for pellet in &mut state.pellets {
            pellet.pos = Vec3::new(-20.0, PELLET_Y, 20.0);
        }
        for enemy in &mut state.enemies {
            enemy.pos = Vec3::new(20.0, ENEMY_Y, -20.0);
            enemy.radius = 0.6;
        }
        state
    }

    #[test]
    fn starts_from_menu() {
        let mut state = GameState::new(1);
        assert!(steer(&state).confirm);
        state.menu_index = 2;
        let input = steer(&state);
        assert!(input.menu_up && !input.confirm);
    }

    #[test]
    fn switches_to_keys() {
        let mut state = playing();
        state.input_mode = InputMode::Pointer;
        assert!(steer(&state).toggle_mode);
    }

    #[test]
    fn heads_for_nearest_pellet() {
        let state = playing();
        let input = steer(&state);
        assert!(input.left && input.down);
        assert!(!input.right && !input.up && !input.dash);
    }

    #[test]
    fn flees_bigger_enemy() {
        let mut state = playing();
        state.enemies[0] = Enemy {
            pos: Vec3::new(3.0, ENEMY_Y, 0.0),
            vel: Vec2::ZERO,
            radius: 2.0,
            rotation: 0.0,
        };
        let input = steer(&state);
        assert!(input.left && input.dash);
        assert!(!input.right);
    }
}
