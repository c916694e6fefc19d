//! Fixed catalogue of supported motorcycle models.

use std::fmt;

use super::variant::{StepSizes, Variant};

/// Supported models. The set is closed; per-model behaviour is data, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    SuzukiGsx,
    HondaHornet,
    HondaCbr,
}

impl Model {
    /// Every model, in selector order.
    pub const ALL: [Model; 3] = [Model::SuzukiGsx, Model::HondaHornet, Model::HondaCbr];

    /// Name shown in the selector and written to saved state.
    pub fn display_name(self) -> &'static str {
        match self {
            Model::SuzukiGsx => "Suzuki GSX",
            Model::HondaHornet => "Honda Hornet",
            Model::HondaCbr => "Honda CBR",
        }
    }

    /// Compact alias found in state files written by older builds.
    fn legacy_name(self) -> &'static str {
        match self {
            Model::SuzukiGsx => "SuzukiGSX",
            Model::HondaHornet => "HondaHornet",
            Model::HondaCbr => "HondaCBR",
        }
    }

    pub fn step_sizes(self) -> StepSizes {
        match self {
            Model::SuzukiGsx => StepSizes::symmetric(5),
            Model::HondaHornet => StepSizes::symmetric(3),
            Model::HondaCbr => StepSizes::symmetric(7),
        }
    }

    /// Resolve a display name (or legacy alias). Matching is exact.
    pub fn from_name(name: &str) -> Option<Model> {
        Model::ALL
            .into_iter()
            .find(|model| model.display_name() == name || model.legacy_name() == name)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Build a fresh variant at rest for `name`. Unknown names yield `None`.
pub fn create_variant(name: &str) -> Option<Variant> {
    Model::from_name(name).map(Variant::new)
}
