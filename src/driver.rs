//! Frame driver
//!
//! Sits between the host loop and the simulation: measures wall-clock time
//! between frames, clamps it, runs exactly one tick and clears one-shot input.

use std::time::{Duration, Instant};

use crate::Settings;
use crate::sim::{GameState, TickInput, advance};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

const FPS_WINDOW: usize = 60;

pub struct FrameDriver {
    cadence: Duration,
    max_dt: f32,
    last_frame: Option<Instant>,
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FrameDriver {
    pub fn new(settings: &Settings) -> Self {
        let hz = settings.frame_rate_hz.max(1);
        Self {
            cadence: Duration::from_secs_f64(1.0 / f64::from(hz)),
            max_dt: settings.max_frame_dt,
            last_frame: None,
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Target time between frames
    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Frames per second over the last [`FPS_WINDOW`] frames
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Seconds since the previous frame, clamped. The first frame counts as one cadence.
    pub fn frame_dt(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => self.cadence.as_secs_f32(),
        };
        self.last_frame = Some(now);
        dt.min(self.max_dt)
    }

    /// Run one tick for the frame at `now`
    pub fn run_frame(
        &mut self,
        state: &mut GameState,
        input: &mut TickInput,
        now: Instant,
    ) -> FrameOutcome {
        let dt = self.frame_dt(now);
        advance(state, input, dt);
        input.clear_one_shots();
        self.track_fps(now);

        if state.quit_requested {
            FrameOutcome::Quit
        } else {
            FrameOutcome::Continue
        }
    }

    fn track_fps(&mut self, now: Instant) {
        // Oldest entry is the one about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        if let Some(oldest) = oldest {
            let elapsed = now.saturating_duration_since(oldest).as_secs_f64();
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 / elapsed).round() as u32;
            }
        }
    }
}
