//! Bodies known to the simulation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::elements::OrbitalElements;

/// What sort of object a body is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    /// Deep-sky or stellar catalog entry with a fixed direction and distance.
    CatalogObject,
}

/// How a body's position is obtained.
#[derive(Clone, Debug, PartialEq)]
pub enum Placement {
    /// Fixed at its parent's position (or the origin for a root body).
    Stationary,
    /// Keplerian orbit around the parent.
    Orbit(OrbitalElements),
    /// Fixed unit vector and distance from the origin, in AU.
    Fixed { direction: DVec3, distance_au: f64 },
}

/// A single entry of the body catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    pub placement: Placement,
    /// Name of the body this one orbits. `None` means the origin.
    pub parent: Option<String>,
    /// Mean radius in km; used for visual sizing only.
    pub radius_km: f64,
    /// Mass in kg; zero when unknown or irrelevant.
    pub mass_kg: f64,
}

impl Body {
    /// Orbital elements, if the body orbits something.
    pub fn elements(&self) -> Option<&OrbitalElements> {
        match &self.placement {
            Placement::Orbit(elements) => Some(elements),
            _ => None,
        }
    }

    /// Whether this body moves with simulation time.
    pub fn is_moving(&self) -> bool {
        self.elements().is_some_and(OrbitalElements::is_periodic)
    }

    /// Whether the body pulls on the solar-system barycenter.
    pub fn contributes_to_barycenter(&self) -> bool {
        self.mass_kg > 0.0 && !matches!(self.kind, BodyKind::Star | BodyKind::CatalogObject)
    }
}
