//! Body catalog: static tables loaded once at startup.
//!
//! Tables are RON files in human units (degrees, days, AU / km / light-years).
//! Loading converts them into [`Body`] values and validates every entry, so
//! a bad table row surfaces as a [`CatalogError`] at startup instead of a
//! silently wrong orbit later.

use std::path::Path;

use glam::DVec3;
use orrery_math::SimTime;
use orrery_math::units::{SECONDS_PER_DAY, km_to_au, light_years_to_au, parsecs_to_au};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyKind, Placement};
use crate::elements::{ElementsError, OrbitalElements};

/// Deepest parent chain accepted (Sun → planet → moon needs 2).
pub const MAX_PARENT_DEPTH: usize = 8;

const BUILTIN_SOLAR_SYSTEM: &str = include_str!("../data/solar_system.ron");

/// Errors raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the table from disk.
    #[error("failed to read catalog: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse catalog: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Two entries share a name.
    #[error("duplicate body `{0}`")]
    DuplicateBody(String),

    /// An entry names a parent that does not exist.
    #[error("body `{body}` orbits unknown parent `{parent}`")]
    UnknownParent { body: String, parent: String },

    /// Following parents from this body never reaches a root.
    #[error("parent chain of `{0}` is cyclic or deeper than {MAX_PARENT_DEPTH}")]
    ParentChain(String),

    /// Orbital elements failed validation.
    #[error("invalid elements for `{body}`: {source}")]
    InvalidElements {
        body: String,
        #[source]
        source: ElementsError,
    },

    /// A fixed placement with an unusable direction or distance.
    #[error("invalid fixed placement for `{0}`")]
    InvalidPlacement(String),
}

/// A distance as written in a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Distance {
    Au(f64),
    Km(f64),
    LightYears(f64),
    Parsecs(f64),
}

impl Distance {
    /// The distance in astronomical units.
    pub fn to_au(self) -> f64 {
        match self {
            Distance::Au(au) => au,
            Distance::Km(km) => km_to_au(km),
            Distance::LightYears(ly) => light_years_to_au(ly),
            Distance::Parsecs(pc) => parsecs_to_au(pc),
        }
    }
}

/// Where the anomaly of a table row is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnomalyRecord {
    /// Argument of periapsis ω and mean anomaly M.
    Periapsis {
        argument_deg: f64,
        mean_anomaly_deg: f64,
    },
    /// Longitude of perihelion ϖ and mean longitude L.
    Perihelion {
        longitude_deg: f64,
        mean_longitude_deg: f64,
    },
}

/// One row of orbital elements in table units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub semi_major_axis: Distance,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub ascending_node_deg: f64,
    pub anomaly: AnomalyRecord,
    pub period_days: f64,
    /// Epoch of the anomaly, days from J2000.0.
    #[serde(default)]
    pub epoch_days_since_j2000: f64,
}

impl ElementRecord {
    /// Convert to radians / seconds / AU.
    pub fn to_elements(&self) -> OrbitalElements {
        let a = self.semi_major_axis.to_au();
        let i = self.inclination_deg.to_radians();
        let node = self.ascending_node_deg.to_radians();
        let epoch = SimTime::from_days_since_j2000(self.epoch_days_since_j2000);
        let period = self.period_days * SECONDS_PER_DAY;
        match self.anomaly {
            AnomalyRecord::Periapsis {
                argument_deg,
                mean_anomaly_deg,
            } => OrbitalElements {
                semi_major_axis: a,
                eccentricity: self.eccentricity,
                inclination: i,
                longitude_ascending: node,
                argument_periapsis: argument_deg.to_radians(),
                mean_anomaly_epoch: orrery_math::normalize_angle(mean_anomaly_deg.to_radians()),
                epoch,
                orbital_period: period,
            },
            AnomalyRecord::Perihelion {
                longitude_deg,
                mean_longitude_deg,
            } => OrbitalElements::from_mean_longitude(
                a,
                self.eccentricity,
                i,
                node,
                longitude_deg.to_radians(),
                mean_longitude_deg.to_radians(),
                epoch,
                period,
            ),
        }
    }
}

/// Placement as written in a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum PlacementRecord {
    #[default]
    Stationary,
    Orbit(ElementRecord),
    Fixed {
        direction: (f64, f64, f64),
        distance: Distance,
    },
}

/// One body as written in a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    pub kind: BodyKind,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub radius_km: f64,
    #[serde(default)]
    pub mass_kg: f64,
    #[serde(default)]
    pub placement: PlacementRecord,
}

impl BodyRecord {
    fn into_body(self) -> Result<Body, CatalogError> {
        let placement = match self.placement {
            PlacementRecord::Stationary => Placement::Stationary,
            PlacementRecord::Orbit(record) => Placement::Orbit(record.to_elements()),
            PlacementRecord::Fixed {
                direction: (x, y, z),
                distance,
            } => {
                let direction = DVec3::new(x, y, z).try_normalize();
                let distance_au = distance.to_au();
                match direction {
                    Some(direction) if distance_au.is_finite() && distance_au >= 0.0 => {
                        Placement::Fixed {
                            direction,
                            distance_au,
                        }
                    }
                    _ => return Err(CatalogError::InvalidPlacement(self.name)),
                }
            }
        };
        Ok(Body {
            name: self.name,
            kind: self.kind,
            placement,
            parent: self.parent,
            radius_km: self.radius_km,
            mass_kg: self.mass_kg,
        })
    }
}

/// File layout of a catalog table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub bodies: Vec<BodyRecord>,
}

/// Immutable, validated set of bodies keyed by name.
#[derive(Debug, Clone)]
pub struct BodyCatalog {
    bodies: Vec<Body>,
    index: FxHashMap<String, usize>,
}

impl BodyCatalog {
    /// Validate and index a list of bodies.
    pub fn from_bodies(bodies: Vec<Body>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        for (i, body) in bodies.iter().enumerate() {
            if index.insert(body.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateBody(body.name.clone()));
            }
        }

        let catalog = Self { bodies, index };
        for body in &catalog.bodies {
            catalog.validate_body(body)?;
        }
        Ok(catalog)
    }

    /// Parse and validate a RON table.
    pub fn from_ron_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = ron::from_str(contents).map_err(CatalogError::ParseError)?;
        let bodies = file
            .bodies
            .into_iter()
            .map(BodyRecord::into_body)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_bodies(bodies)
    }

    /// Load a RON table from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(CatalogError::ReadError)?;
        let catalog = Self::from_ron_str(&contents)?;
        tracing::info!(
            "Loaded {} bodies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The built-in table: Sun, planets, Pluto, major moons, two catalog objects.
    pub fn solar_system() -> Result<Self, CatalogError> {
        Self::from_ron_str(BUILTIN_SOLAR_SYSTEM)
    }

    fn validate_body(&self, body: &Body) -> Result<(), CatalogError> {
        if let Placement::Orbit(elements) = &body.placement {
            elements
                .validate()
                .map_err(|source| CatalogError::InvalidElements {
                    body: body.name.clone(),
                    source,
                })?;
        }

        let mut current = body;
        for _ in 0..=MAX_PARENT_DEPTH {
            let Some(parent) = &current.parent else {
                return Ok(());
            };
            current = self.get(parent).ok_or_else(|| CatalogError::UnknownParent {
                body: current.name.clone(),
                parent: parent.clone(),
            })?;
        }
        Err(CatalogError::ParentChain(body.name.clone()))
    }

    /// Look a body up by name.
    pub fn get(&self, name: &str) -> Option<&Body> {
        self.index.get(name).map(|&i| &self.bodies[i])
    }

    /// Whether a body with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All bodies, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies of one kind.
    pub fn of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(move |b| b.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_loads() {
        let catalog = BodyCatalog::solar_system().unwrap();
        assert_eq!(catalog.of_kind(BodyKind::Planet).count(), 8);
        assert_eq!(catalog.of_kind(BodyKind::Star).count(), 1);
        assert!(catalog.contains("Pluto"));
        assert_eq!(catalog.get("Moon").unwrap().parent.as_deref(), Some("Earth"));
    }

    #[test]
    fn test_builtin_moon_distance_in_au() {
        let catalog = BodyCatalog::solar_system().unwrap();
        let moon = catalog.get("Moon").unwrap().elements().unwrap();
        assert!((moon.semi_major_axis - 0.002_569_5).abs() < 1e-6);
    }

    #[test]
    fn test_mean_longitude_conversion() {
        let catalog = BodyCatalog::solar_system().unwrap();
        let earth = catalog.get("Earth").unwrap().elements().unwrap();
        // M = L - ϖ = 100.46457166 - 102.93768193 = -2.47311027°
        let expected = orrery_math::normalize_angle((-2.473_110_27_f64).to_radians());
        assert!((earth.mean_anomaly_epoch - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_direction_is_normalized() {
        let catalog = BodyCatalog::solar_system().unwrap();
        match &catalog.get("Proxima Centauri").unwrap().placement {
            Placement::Fixed {
                direction,
                distance_au,
            } => {
                assert!((direction.length() - 1.0).abs() < 1e-12);
                assert!((distance_au - light_years_to_au(4.2465)).abs() < 1e-6);
            }
            other => panic!("unexpected placement {other:?}"),
        }
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let ron = r#"(bodies: [(name: "Phobos", kind: Moon, parent: Some("Mars"))])"#;
        let err = BodyCatalog::from_ron_str(ron).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownParent { .. }), "{err}");
    }

    #[test]
    fn test_duplicate_rejected() {
        let ron = r#"(bodies: [(name: "Sun", kind: Star), (name: "Sun", kind: Star)])"#;
        let err = BodyCatalog::from_ron_str(ron).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBody(ref n) if n == "Sun"));
    }

    #[test]
    fn test_parent_cycle_rejected() {
        let ron = r#"(bodies: [
            (name: "A", kind: Moon, parent: Some("B")),
            (name: "B", kind: Moon, parent: Some("A")),
        ])"#;
        let err = BodyCatalog::from_ron_str(ron).unwrap_err();
        assert!(matches!(err, CatalogError::ParentChain(_)), "{err}");
    }

    fn chain_ron(hops: usize) -> String {
        let rows: Vec<String> = (0..=hops)
            .map(|i| match i {
                0 => r#"(name: "B0", kind: Star)"#.to_string(),
                _ => format!(r#"(name: "B{i}", kind: Moon, parent: Some("B{}"))"#, i - 1),
            })
            .collect();
        format!("(bodies: [{}])", rows.join(", "))
    }

    #[test]
    fn test_parent_chain_depth_limit() {
        let catalog = BodyCatalog::from_ron_str(&chain_ron(MAX_PARENT_DEPTH)).unwrap();
        assert_eq!(catalog.len(), MAX_PARENT_DEPTH + 1);

        let too_deep = format!("B{}", MAX_PARENT_DEPTH + 1);
        let err = BodyCatalog::from_ron_str(&chain_ron(MAX_PARENT_DEPTH + 1)).unwrap_err();
        assert!(matches!(err, CatalogError::ParentChain(ref n) if *n == too_deep), "{err}");
    }

    #[test]
    fn test_hyperbolic_row_rejected() {
        let ron = r#"(bodies: [(
            name: "Oumuamua",
            kind: CatalogObject,
            placement: Orbit((
                semi_major_axis: Au(1.27),
                eccentricity: 1.2,
                inclination_deg: 122.7,
                ascending_node_deg: 24.6,
                anomaly: Periapsis(argument_deg: 241.8, mean_anomaly_deg: 0.0),
                period_days: 365.0,
            )),
        )])"#;
        let err = BodyCatalog::from_ron_str(ron).unwrap_err();
        match err {
            CatalogError::InvalidElements { body, source } => {
                assert_eq!(body, "Oumuamua");
                assert_eq!(source, ElementsError::Eccentricity(1.2));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_zero_direction_rejected() {
        let ron = r#"(bodies: [(
            name: "Nowhere",
            kind: CatalogObject,
            placement: Fixed(direction: (0.0, 0.0, 0.0), distance: Au(1.0)),
        )])"#;
        let err = BodyCatalog::from_ron_str(ron).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPlacement(_)));
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let err = BodyCatalog::from_ron_str("{{not valid}}").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
    }
}
