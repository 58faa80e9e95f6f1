use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::catalog::DiseaseCatalog;
use crate::error::DetectionError;
use crate::result::DetectionResult;

/// Animal categories the detection service supports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Chicken,
    Cow,
}

impl Species {
    /// Lower-cases once, then matches the known keys exactly.
    pub fn parse(key: &str) -> Result<Self, DetectionError> {
        Species::from_str(&key.to_lowercase()).map_err(|_| DetectionError::InvalidSpecies(key.to_string()))
    }

    pub fn key(&self) -> &'static str {
        (*self).into()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Chicken => "Chicken",
            Species::Cow => "Cow",
        }
    }

    /// Path segment of the prediction service.
    ///
    /// Cats are served by the `goats` model. That is what the service exposes,
    /// so it is kept as is.
    pub fn route_segment(&self) -> &'static str {
        match self {
            Species::Dog => "dogs",
            Species::Cat => "goats",
            Species::Chicken => "poultry",
            Species::Cow => "cattle",
        }
    }

    pub fn image_asset(&self) -> &'static str {
        match self {
            Species::Dog => "/assets/dog.jpg",
            Species::Cat => "/assets/cat.jpg",
            Species::Chicken => "/assets/chicken.jpg",
            Species::Cow => "/assets/cow.jpg",
        }
    }

    pub fn all() -> Vec<Species> {
        Species::iter().collect()
    }
}

/// Everything the upload page needs to know about the chosen animal.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesRoute {
    pub species: Species,
    pub segment: &'static str,
    pub display_name: &'static str,
    pub fallback: Option<DetectionResult>,
}

pub fn resolve_species(key: &str, catalog: &dyn DiseaseCatalog) -> Result<SpeciesRoute, DetectionError> {
    let species = Species::parse(key)?;
    Ok(SpeciesRoute {
        species,
        segment: species.route_segment(),
        display_name: species.display_name(),
        fallback: catalog.lookup(species),
    })
}
