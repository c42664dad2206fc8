//! Simulation tick
//!
//! One call to [`advance`] applies the tick's actions to the session and, if
//! the game is in play, runs one simulation step.

use glam::Vec2;

use super::arena::{move_and_bounce, respawn_inside};
use super::collision::{Contact, classify, enemy_mass, enemy_points, overlaps, push_apart};
use super::input::TickInput;
use super::particles::{BurstKind, update_particles};
use super::spawn::{make_enemy, random_ground_point};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the game by one tick of `dt` seconds
pub fn advance(state: &mut GameState, input: &TickInput, dt: f32) {
    let phase_before = state.phase;
    state.handle_actions(input);

    // Phase changes land this tick, play resumes next tick
    if phase_before != GamePhase::Playing || state.phase != GamePhase::Playing {
        return;
    }

    let dt = dt.clamp(0.0, MAX_DT);
    step(state, input, dt);
}

/// Run one simulation step. Callers gate on [`GamePhase::Playing`].
fn step(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    move_player(state, input, dt);

    for enemy in &mut state.enemies {
        move_and_bounce(&mut enemy.pos, &mut enemy.vel, dt);
        enemy.rotation += ENEMY_SPIN * dt;
    }
    for pellet in &mut state.pellets {
        pellet.rotation += PELLET_SPIN * dt;
    }

    // Size is fixed for the whole collision pass, growth shows next tick
    let player_radius = state.player.radius();
    eat_pellets(state, player_radius);
    resolve_enemy_contacts(state, player_radius);

    update_particles(&mut state.particles, dt);
}

fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let player = &mut state.player;
    player.dash_cooldown = (player.dash_cooldown - dt).max(0.0);

    let dir = input.direction(state.input_mode);
    let steering = dir != Vec2::ZERO;
    if steering {
        player.yaw = dir.x.atan2(-dir.y).to_degrees();
    }

    let mut max_speed = player.current_max_speed();
    let mut dash_origin = None;
    if input.dash && steering && player.dash_cooldown <= 0.0 {
        max_speed *= DASH_SPEED_MULTIPLIER;
        player.dash_cooldown = DASH_COOLDOWN;
        dash_origin = Some(player.pos);
    }

    if steering {
        let target = dir * max_speed;
        player.vel = player.vel * (1.0 - ACCELERATION) + target * ACCELERATION;
    } else {
        player.vel *= DECELERATION;
    }

    if player.vel.x.abs() < VELOCITY_SNAP {
        player.vel.x = 0.0;
    }
    if player.vel.y.abs() < VELOCITY_SNAP {
        player.vel.y = 0.0;
    }

    player.pos.x += player.vel.x * dt;
    player.pos.z += player.vel.y * dt;
    respawn_inside(&mut player.pos);

    if let Some(origin) = dash_origin {
        state.emit_burst(origin, DASH_PARTICLES, BurstKind::Dash);
        state.push_event(GameEvent::Dashed);
        log::debug!("Dash at ({:.1}, {:.1})", origin.x, origin.z);
    }
}

fn eat_pellets(state: &mut GameState, player_radius: f32) {
    for i in 0..state.pellets.len() {
        let pellet = &state.pellets[i];
        if !overlaps(state.player.pos, player_radius, pellet.pos, pellet.radius) {
            continue;
        }

        let eaten_at = pellet.pos;
        state.player.mass += PELLET_MASS;
        state.emit_burst(eaten_at, PELLET_PARTICLES, BurstKind::Eat);
        state.pellets[i].pos = random_ground_point(&mut state.rng, PELLET_Y);
        state.push_event(GameEvent::PelletEaten { position: eaten_at });
        log::debug!("Pellet eaten, mass {:.2}", state.player.mass);
        state.score += PELLET_SCORE;
        if state.score % POINTS_PER_LEVEL == 0 {
            next_level(state);
        }
    }
}

fn resolve_enemy_contacts(state: &mut GameState, player_radius: f32) {
    for i in 0..state.enemies.len() {
        let enemy = &state.enemies[i];
        if !overlaps(state.player.pos, player_radius, enemy.pos, enemy.radius) {
            continue;
        }

        match classify(player_radius, enemy.radius) {
            Contact::Eat => {
                let (position, radius) = (enemy.pos, enemy.radius);
                let points = enemy_points(radius);
                state.player.mass += enemy_mass(radius);
                state.emit_burst(position, ENEMY_PARTICLES, BurstKind::Eat);
                state.enemies[i] = make_enemy(&mut state.rng);
                state.push_event(GameEvent::EnemyEaten {
                    position,
                    radius,
                    points,
                });
                log::debug!("Enemy r={:.2} eaten for {} points", radius, points);
                state.score += points;
            }
            Contact::Die => {
                state.enter_game_over();
                break;
            }
            Contact::Push => {
                let from = enemy.pos;
                push_apart(&mut state.player.pos, from);
                respawn_inside(&mut state.player.pos);
                state.push_event(GameEvent::Pushed);
            }
        }
    }
}

/// Only pellets level up: enemy points can skip past a multiple of [`POINTS_PER_LEVEL`]
fn next_level(state: &mut GameState) {
    state.level += 1;
    state.spawn_enemies(ENEMIES_PER_LEVEL);
    state.push_event(GameEvent::LevelUp { level: state.level });
    log::info!("Level {} ({} enemies)", state.level, state.enemies.len());
}
