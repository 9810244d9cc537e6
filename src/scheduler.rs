//! Scheduler - turns wall-clock time into engine actions
//!
//! The engine has no clocks, so this layer owns two timers: gravity,
//! armed while the game runs, and the achievement auto-acknowledge
//! countdown, armed while toasts are pending. [`Scheduler::sync`]
//! re-derives both from the observable state every frame; a disarmed
//! timer cannot fire late.

use arrayvec::ArrayVec;

use crate::core::scoring::gravity_interval_ms;
use crate::types::{Action, Status, ACHIEVEMENT_ACK_MS};

/// Ticks owed by a stalled frame are capped; the rest of the backlog
/// is dropped rather than replayed in a burst.
const MAX_TICKS_PER_ADVANCE: usize = 7;

#[derive(Debug, Clone, Copy)]
struct GravityTimer {
    level: u32,
    interval_ms: u32,
    elapsed_ms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    gravity: Option<GravityTimer>,
    ack_remaining_ms: Option<u32>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive timer state. Gravity re-arms from zero whenever the
    /// game enters running or the level changes; the acknowledge
    /// countdown arms when toasts appear and drops when they clear.
    pub fn sync(&mut self, status: Status, level: u32, pending_achievements: bool) {
        match (status, self.gravity) {
            (Status::Running, Some(timer)) if timer.level == level => {}
            (Status::Running, _) => {
                self.gravity = Some(GravityTimer {
                    level,
                    interval_ms: gravity_interval_ms(level),
                    elapsed_ms: 0,
                });
            }
            _ => self.gravity = None,
        }
        match (pending_achievements, self.ack_remaining_ms) {
            (true, None) => self.ack_remaining_ms = Some(ACHIEVEMENT_ACK_MS),
            (false, _) => self.ack_remaining_ms = None,
            _ => {}
        }
    }

    /// Account `elapsed_ms` of real time and collect the actions that
    /// came due, in order.
    pub fn advance(&mut self, elapsed_ms: u32) -> ArrayVec<Action, 8> {
        let mut due = ArrayVec::new();
        if let Some(timer) = &mut self.gravity {
            timer.elapsed_ms += elapsed_ms;
            while timer.elapsed_ms >= timer.interval_ms {
                if due.len() == MAX_TICKS_PER_ADVANCE {
                    timer.elapsed_ms = 0;
                    break;
                }
                timer.elapsed_ms -= timer.interval_ms;
                due.push(Action::Tick);
            }
        }
        if let Some(remaining) = &mut self.ack_remaining_ms {
            if *remaining <= elapsed_ms {
                self.ack_remaining_ms = None;
                due.push(Action::AckAchievements);
            } else {
                *remaining -= elapsed_ms;
            }
        }
        due
    }
}
