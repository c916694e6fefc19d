//! A model's step sizes bound to its live state.

use tracing::debug;

use super::gear_table::{CRUISE_SPEED, MAX_SPEED};
use super::policy::{Direction, next_gear_rpm};
use super::registry::Model;
use super::state::MotorcycleState;

/// Per-tick speed change in km/h.
///
/// Acceleration and braking are kept separate even though every stock model
/// uses the same value for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSizes {
    pub accelerate: u32,
    pub brake: u32,
}

impl StepSizes {
    pub const fn symmetric(step: u32) -> Self {
        Self {
            accelerate: step,
            brake: step,
        }
    }
}

/// The active motorcycle: which model it is, how it moves, and where it is now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    model: Model,
    steps: StepSizes,
    state: MotorcycleState,
}

impl Variant {
    /// Fresh variant at rest using the model's stock step sizes.
    pub fn new(model: Model) -> Self {
        Self::with_step_sizes(model, model.step_sizes())
    }

    /// Fresh variant at rest with custom step sizes.
    pub fn with_step_sizes(model: Model, steps: StepSizes) -> Self {
        Self {
            model,
            steps,
            state: MotorcycleState::default(),
        }
    }

    /// Replace the live state wholesale, capping speed at what this variant can reach.
    pub fn restore(mut self, state: MotorcycleState) -> Self {
        self.state = state;
        self.state.cap_speed(self.speed_ceiling());
        self
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn step_sizes(&self) -> StepSizes {
        self.steps
    }

    pub fn state(&self) -> MotorcycleState {
        self.state
    }

    pub fn speed(&self) -> u32 {
        self.state.speed()
    }

    pub fn rpm(&self) -> u32 {
        self.state.rpm()
    }

    pub fn gear(&self) -> u8 {
        self.state.gear()
    }

    /// Highest speed `accelerate` can produce.
    ///
    /// The top-speed guard checks the speed before the step is added, so the
    /// last step taken below [`MAX_SPEED`] may overshoot it.
    pub fn speed_ceiling(&self) -> u32 {
        MAX_SPEED.max((MAX_SPEED - 1).saturating_add(self.steps.accelerate))
    }

    /// One acceleration tick. No-op once speed has reached [`MAX_SPEED`].
    pub fn accelerate(&mut self) {
        if self.state.speed() >= MAX_SPEED {
            return;
        }
        self.state
            .set_speed(self.state.speed().saturating_add(self.steps.accelerate));
        self.apply_policy(Direction::Accelerating);
    }

    /// One braking tick. Speed bottoms out at zero.
    pub fn brake(&mut self) {
        self.state
            .set_speed(self.state.speed().saturating_sub(self.steps.brake));
        self.apply_policy(Direction::Braking);
    }

    /// Force speed to [`CRUISE_SPEED`] and resynchronise gear and RPM once.
    pub fn cruise_control(&mut self) {
        self.state.set_speed(CRUISE_SPEED);
        self.apply_policy(Direction::Accelerating);
    }

    fn apply_policy(&mut self, direction: Direction) {
        let next = next_gear_rpm(&self.state, direction);
        if next.gear != self.state.gear() {
            debug!(
                model = %self.model,
                from = self.state.gear(),
                to = next.gear,
                speed = self.state.speed(),
                "gear change"
            );
        }
        self.state.set_gear_rpm(next.gear, next.rpm);
    }
}
