//! Front-end facing state for one dashboard session.
//!
//! A front end drives the session through four events: a control is pressed
//! ([`Dashboard::on_press_start`]), the repeat timer fires ([`Dashboard::on_tick`]),
//! the control is released ([`Dashboard::on_press_end`]), and the user asks to
//! save ([`Dashboard::on_save`]). Everything shown on screen comes from
//! [`Dashboard::readout`].

use std::fmt;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::registry::{Model, create_variant};
use crate::core::variant::Variant;
use crate::io::state_store::save_state;

/// Selector label shown when no vehicle is active.
pub const NO_MODEL_LABEL: &str = "Choose a motorcycle";

/// A control that repeats while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Accelerate,
    Brake,
}

impl Control {
    fn apply(self, variant: &mut Variant) {
        match self {
            Control::Accelerate => variant.accelerate(),
            Control::Brake => variant.brake(),
        }
    }
}

/// Result of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    NoVehicle,
}

impl SaveOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SaveOutcome::Saved => "Motorcycle state saved successfully!",
            SaveOutcome::NoVehicle => "No motorcycle selected; nothing saved.",
        }
    }
}

/// The one live vehicle (if any) and the control currently held.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    variant: Option<Variant>,
    held: Option<Control>,
}

impl Dashboard {
    pub fn new(variant: Option<Variant>) -> Self {
        Self {
            variant,
            held: None,
        }
    }

    pub fn variant(&self) -> Option<&Variant> {
        self.variant.as_ref()
    }

    pub fn held(&self) -> Option<Control> {
        self.held
    }

    /// Replace the active vehicle with a fresh one for `name`.
    ///
    /// Unknown names clear the selection. Returns whether a vehicle is now active.
    pub fn select_model(&mut self, name: &str) -> bool {
        self.held = None;
        self.variant = create_variant(name);
        match &self.variant {
            Some(bike) => info!(model = %bike.model(), "model selected"),
            None => info!(name, "unknown model; selection cleared"),
        }
        self.variant.is_some()
    }

    /// Start holding `control`, applying it once immediately.
    ///
    /// Ignored (returns false) with no vehicle or while another press is active.
    pub fn on_press_start(&mut self, control: Control) -> bool {
        if self.held.is_some() {
            return false;
        }
        let Some(bike) = self.variant.as_mut() else {
            return false;
        };
        control.apply(bike);
        self.held = Some(control);
        debug!(?control, speed = bike.speed(), "press start");
        true
    }

    /// Repeat the held control. Returns false when nothing is held.
    pub fn on_tick(&mut self) -> bool {
        let (Some(control), Some(bike)) = (self.held, self.variant.as_mut()) else {
            return false;
        };
        control.apply(bike);
        true
    }

    pub fn on_press_end(&mut self) {
        if let Some(control) = self.held.take() {
            debug!(?control, "press end");
        }
    }

    /// One-shot cruise control. Returns false with no vehicle.
    pub fn toggle_cruise_control(&mut self) -> bool {
        match self.variant.as_mut() {
            Some(bike) => {
                bike.cruise_control();
                true
            }
            None => false,
        }
    }

    /// Persist the active vehicle to `path`, overwriting any previous save.
    pub fn on_save(&self, path: &Path) -> Result<SaveOutcome> {
        let Some(bike) = &self.variant else {
            return Ok(SaveOutcome::NoVehicle);
        };
        save_state(path, bike)?;
        info!(path = %path.display(), model = %bike.model(), "state saved");
        Ok(SaveOutcome::Saved)
    }

    pub fn readout(&self) -> Readout {
        Readout {
            model: self.variant.as_ref().map(Variant::model),
            reading: self.variant.as_ref().map(|bike| Reading {
                speed: bike.speed(),
                rpm: bike.rpm(),
                gear: bike.gear(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub speed: u32,
    pub rpm: u32,
    pub gear: u8,
}

/// What the cluster displays. `None` renders as placeholders, never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    pub model: Option<Model>,
    pub reading: Option<Reading>,
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.model {
            Some(model) => writeln!(f, "Model: {model}")?,
            None => writeln!(f, "Model: {NO_MODEL_LABEL}")?,
        }
        match self.reading {
            Some(reading) => {
                writeln!(f, "Speed: {} km/h", reading.speed)?;
                writeln!(f, "RPM: {}", reading.rpm)?;
                write!(f, "Gear: {}", reading.gear)
            }
            None => {
                writeln!(f, "Speed: -- km/h")?;
                writeln!(f, "RPM: --")?;
                write!(f, "Gear: --")
            }
        }
    }
}
