//! Static gearbox configuration shared by every model.

/// Nominal top speed in km/h. Acceleration is refused once this is reached.
pub const MAX_SPEED: u32 = 170;
/// Idle RPM; braking never drops the engine below this.
pub const MIN_RPM: u32 = 1000;
/// Redline.
pub const MAX_RPM: u32 = 9000;
/// RPM change applied per tick when no shift happens.
pub const RPM_STEP: u32 = 100;
/// Number of forward gears.
pub const GEAR_COUNT: u8 = 6;
/// Speed forced by cruise control.
pub const CRUISE_SPEED: u32 = 50;

/// Speed range in which a gear is engaged: `low` inclusive, `high` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearBand {
    pub low: u32,
    pub high: u32,
}

impl GearBand {
    const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, speed: u32) -> bool {
        self.low <= speed && speed < self.high
    }
}

const GEAR_BANDS: [GearBand; GEAR_COUNT as usize] = [
    GearBand::new(0, 60),
    GearBand::new(60, 90),
    GearBand::new(90, 110),
    GearBand::new(110, 130),
    GearBand::new(130, 150),
    GearBand::new(150, 170),
];

const SHIFT_START_RPM: [u32; GEAR_COUNT as usize] = [1000, 5000, 5000, 5000, 5000, 5000];

/// Band for a 1-indexed gear, `None` outside `1..=GEAR_COUNT`.
pub fn band(gear: u8) -> Option<GearBand> {
    let index = usize::from(gear).checked_sub(1)?;
    GEAR_BANDS.get(index).copied()
}

/// RPM a freshly engaged gear starts at. Out-of-range gears fall back to idle.
pub fn shift_start_rpm(gear: u8) -> u32 {
    usize::from(gear)
        .checked_sub(1)
        .and_then(|index| SHIFT_START_RPM.get(index).copied())
        .unwrap_or(MIN_RPM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_contiguous_and_end_at_max_speed() {
        let mut expected_low = 0;
        for gear in 1..=GEAR_COUNT {
            let band = band(gear).expect("band in range");
            assert_eq!(band.low, expected_low, "gear {gear}");
            assert!(band.high > band.low);
            expected_low = band.high;
        }
        assert_eq!(expected_low, MAX_SPEED);
    }

    #[test]
    fn band_rejects_gears_outside_gearbox() {
        assert_eq!(band(0), None);
        assert_eq!(band(GEAR_COUNT + 1), None);
    }

    #[test]
    fn band_upper_bound_is_exclusive() {
        let first = band(1).expect("first gear");
        assert!(first.contains(0));
        assert!(first.contains(59));
        assert!(!first.contains(60));
    }

    #[test]
    fn only_first_gear_starts_at_idle() {
        assert_eq!(shift_start_rpm(1), MIN_RPM);
        for gear in 2..=GEAR_COUNT {
            assert_eq!(shift_start_rpm(gear), 5000);
        }
    }
}
