//! Gear and RPM recomputation after a speed change.
//!
//! The policy never touches speed. Callers update speed first, then ask the
//! policy for the gear/RPM pair that follows from it.

use super::gear_table::{GEAR_COUNT, MAX_RPM, MIN_RPM, RPM_STEP, band, shift_start_rpm};
use super::state::MotorcycleState;

/// Direction of the speed change that preceded the update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Accelerating,
    Braking,
}

/// Gear and RPM produced by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearRpm {
    pub gear: u8,
    pub rpm: u32,
}

/// Compute the next gear/RPM pair for `state`.
pub fn next_gear_rpm(state: &MotorcycleState, direction: Direction) -> GearRpm {
    match direction {
        Direction::Accelerating => on_accelerate(state),
        Direction::Braking => on_brake(state),
    }
}

fn on_accelerate(state: &MotorcycleState) -> GearRpm {
    let current = GearRpm {
        gear: state.gear(),
        rpm: state.rpm(),
    };
    let band_exceeded = band(state.gear()).is_some_and(|band| state.speed() >= band.high);

    if band_exceeded {
        // Top gear: the band check still wins, so rpm holds instead of climbing.
        upshift(current)
    } else if state.rpm() < MAX_RPM {
        GearRpm {
            rpm: state.rpm() + RPM_STEP,
            ..current
        }
    } else {
        upshift(current)
    }
}

fn on_brake(state: &MotorcycleState) -> GearRpm {
    let current = GearRpm {
        gear: state.gear(),
        rpm: state.rpm(),
    };
    let below_band =
        state.gear() > 1 && band(state.gear()).is_some_and(|band| state.speed() < band.low);

    if below_band {
        GearRpm {
            gear: state.gear() - 1,
            rpm: MAX_RPM,
        }
    } else if state.rpm() > MIN_RPM {
        GearRpm {
            rpm: state.rpm() - RPM_STEP,
            ..current
        }
    } else {
        current
    }
}

fn upshift(current: GearRpm) -> GearRpm {
    if current.gear >= GEAR_COUNT {
        return current;
    }
    let gear = current.gear + 1;
    GearRpm {
        gear,
        rpm: shift_start_rpm(gear),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accel(speed: u32, rpm: u32, gear: u8) -> GearRpm {
        next_gear_rpm(&MotorcycleState::new(speed, rpm, gear), Direction::Accelerating)
    }

    fn brake(speed: u32, rpm: u32, gear: u8) -> GearRpm {
        next_gear_rpm(&MotorcycleState::new(speed, rpm, gear), Direction::Braking)
    }

    #[test]
    fn acceleration_within_band_adds_rpm_step() {
        assert_eq!(accel(30, 1500, 1), GearRpm { gear: 1, rpm: 1600 });
    }

    #[test]
    fn reaching_band_top_upshifts_to_shift_start_rpm() {
        assert_eq!(accel(60, 1600, 1), GearRpm { gear: 2, rpm: 5000 });
        assert_eq!(accel(95, 8000, 2), GearRpm { gear: 3, rpm: 5000 });
    }

    #[test]
    fn redline_forces_upshift_below_band_top() {
        assert_eq!(accel(40, MAX_RPM, 1), GearRpm { gear: 2, rpm: 5000 });
    }

    #[test]
    fn top_gear_holds_gear_and_rpm_at_band_top() {
        assert_eq!(accel(170, 7200, 6), GearRpm { gear: 6, rpm: 7200 });
        assert_eq!(accel(175, MAX_RPM, 6), GearRpm { gear: 6, rpm: MAX_RPM });
    }

    #[test]
    fn top_gear_rpm_saturates_at_redline() {
        assert_eq!(accel(160, 8900, 6), GearRpm { gear: 6, rpm: MAX_RPM });
        assert_eq!(accel(160, MAX_RPM, 6), GearRpm { gear: 6, rpm: MAX_RPM });
    }

    #[test]
    fn braking_below_band_downshifts_with_engine_braking_kick() {
        assert_eq!(brake(58, 5200, 3), GearRpm { gear: 2, rpm: MAX_RPM });
    }

    #[test]
    fn braking_downshifts_one_gear_at_a_time() {
        assert_eq!(brake(0, 5000, 6), GearRpm { gear: 5, rpm: MAX_RPM });
    }

    #[test]
    fn braking_within_band_drops_rpm_step() {
        assert_eq!(brake(70, 6000, 2), GearRpm { gear: 2, rpm: 5900 });
        assert_eq!(brake(20, 1100, 1), GearRpm { gear: 1, rpm: 1000 });
    }

    #[test]
    fn braking_at_idle_in_first_gear_changes_nothing() {
        assert_eq!(brake(0, MIN_RPM, 1), GearRpm { gear: 1, rpm: MIN_RPM });
    }
}
