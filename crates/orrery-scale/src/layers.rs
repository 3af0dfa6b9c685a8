//! Zoom-dependent layer activation and the scale HUD line.

use orrery_math::units::{format_view_distance, light_years_to_au};

use crate::mapping::ScaleConfig;

/// Background layers that fade in as the camera pulls back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    KuiperBelt,
    Heliosphere,
    OortCloud,
    NgcIc,
    MilkyWay,
    TwoMrs,
    DensityField,
    CosmicWeb,
    SdssLocal,
    AbellClusters,
    ObservableUniverse,
}

impl Layer {
    /// All layers in activation order.
    pub const ALL: [Layer; 11] = [
        Layer::KuiperBelt,
        Layer::Heliosphere,
        Layer::OortCloud,
        Layer::NgcIc,
        Layer::MilkyWay,
        Layer::TwoMrs,
        Layer::DensityField,
        Layer::CosmicWeb,
        Layer::SdssLocal,
        Layer::AbellClusters,
        Layer::ObservableUniverse,
    ];

    /// View distance (AU) at which the layer becomes visible.
    pub fn threshold_au(self) -> f64 {
        match self {
            Layer::KuiperBelt => 20.0,
            Layer::Heliosphere => 150.0,
            Layer::OortCloud => 1_000.0,
            Layer::NgcIc => light_years_to_au(50_000.0),
            Layer::MilkyWay => light_years_to_au(100_000.0),
            Layer::TwoMrs => light_years_to_au(500_000.0),
            Layer::DensityField => light_years_to_au(700_000.0),
            Layer::CosmicWeb => light_years_to_au(1_000_000.0),
            Layer::SdssLocal => light_years_to_au(1_500_000.0),
            Layer::AbellClusters => light_years_to_au(2_000_000.0),
            Layer::ObservableUniverse => light_years_to_au(5_000_000_000.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layer::KuiperBelt => "Kuiper Belt",
            Layer::Heliosphere => "Heliosphere",
            Layer::OortCloud => "Oort Cloud",
            Layer::NgcIc => "NGC/IC",
            Layer::MilkyWay => "Milky Way",
            Layer::TwoMrs => "2MRS",
            Layer::DensityField => "Density Field",
            Layer::CosmicWeb => "Cosmic Web",
            Layer::SdssLocal => "SDSS",
            Layer::AbellClusters => "Abell",
            Layer::ObservableUniverse => "Observable Universe",
        }
    }

    pub fn is_active(self, view_distance_au: f64) -> bool {
        view_distance_au >= self.threshold_au()
    }
}

/// Layers visible at a physical view distance, in activation order.
pub fn active_layers(view_distance_au: f64) -> impl Iterator<Item = Layer> {
    Layer::ALL
        .into_iter()
        .filter(move |layer| layer.is_active(view_distance_au))
}

/// Layers visible from a camera sitting `camera_distance` scene units out.
pub fn active_layers_for_camera(scale: &ScaleConfig, camera_distance: f64) -> Vec<Layer> {
    active_layers(scale.physical_distance(camera_distance)).collect()
}

/// One-line HUD text: view distance plus the visible layers.
pub fn hud_label(scale: &ScaleConfig, camera_distance: f64) -> String {
    let view_au = scale.physical_distance(camera_distance);
    let layers: Vec<&str> = active_layers(view_au).map(Layer::label).collect();
    if layers.is_empty() {
        format!("View: {}", format_view_distance(view_au))
    } else {
        format!("View: {} | {}", format_view_distance(view_au), layers.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_ascending() {
        for pair in Layer::ALL.windows(2) {
            assert!(
                pair[0].threshold_au() < pair[1].threshold_au(),
                "{:?} should activate before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_inner_system_shows_nothing() {
        assert_eq!(active_layers(5.0).count(), 0);
    }

    #[test]
    fn test_kuiper_threshold_inclusive() {
        assert!(Layer::KuiperBelt.is_active(20.0));
        assert!(!Layer::KuiperBelt.is_active(19.99));
    }

    #[test]
    fn test_galactic_view() {
        let layers: Vec<Layer> = active_layers(light_years_to_au(120_000.0)).collect();
        assert_eq!(
            layers,
            vec![
                Layer::KuiperBelt,
                Layer::Heliosphere,
                Layer::OortCloud,
                Layer::NgcIc,
                Layer::MilkyWay
            ]
        );
    }

    #[test]
    fn test_camera_max_reaches_every_layer() {
        let scale = ScaleConfig::default();
        let layers = active_layers_for_camera(&scale, scale.max_camera_distance);
        assert_eq!(layers.len(), Layer::ALL.len());
    }

    #[test]
    fn test_hud_label() {
        let scale = ScaleConfig::default();
        assert_eq!(hud_label(&scale, 250.0), "View: 10.00 AU");
        assert_eq!(hud_label(&scale, 1_250.0), "View: 50.00 AU | Kuiper Belt");
    }
}
