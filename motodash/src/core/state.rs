//! Live instrument readings for one motorcycle.

use super::gear_table::{GEAR_COUNT, MAX_RPM, MIN_RPM};

/// Speed, RPM, and gear of one vehicle.
///
/// Fields are private: readings change only through [`crate::core::variant::Variant`]
/// operations or by replacing the whole state on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorcycleState {
    speed: u32,
    rpm: u32,
    gear: u8,
}

impl Default for MotorcycleState {
    fn default() -> Self {
        Self {
            speed: 0,
            rpm: MIN_RPM,
            gear: 1,
        }
    }
}

impl MotorcycleState {
    /// Build a state from raw readings, clamping rpm and gear into range.
    pub fn new(speed: u32, rpm: u32, gear: u8) -> Self {
        Self {
            speed,
            rpm: rpm.clamp(MIN_RPM, MAX_RPM),
            gear: gear.clamp(1, GEAR_COUNT),
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn rpm(&self) -> u32 {
        self.rpm
    }

    pub fn gear(&self) -> u8 {
        self.gear
    }

    pub(crate) fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }

    pub(crate) fn set_gear_rpm(&mut self, gear: u8, rpm: u32) {
        self.gear = gear;
        self.rpm = rpm;
    }

    pub(crate) fn cap_speed(&mut self, ceiling: u32) {
        self.speed = self.speed.min(ceiling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_at_rest_in_first_gear() {
        let state = MotorcycleState::default();
        assert_eq!((state.speed(), state.rpm(), state.gear()), (0, 1000, 1));
    }

    #[test]
    fn new_clamps_rpm_and_gear() {
        let low = MotorcycleState::new(10, 0, 0);
        assert_eq!((low.rpm(), low.gear()), (MIN_RPM, 1));

        let high = MotorcycleState::new(10, 20_000, 9);
        assert_eq!((high.rpm(), high.gear()), (MAX_RPM, GEAR_COUNT));
        assert_eq!(high.speed(), 10);
    }
}
