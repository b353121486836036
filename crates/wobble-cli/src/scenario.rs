//! Scenario files: which mesh to build, how long to run, where to poke it.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use wobble_mesh::generators::{quad_grid, split_cube, uv_sphere};
use wobble_mesh::TriangleMesh;
use wobble_solver::{InteractionEvent, SimulationConfig};
use wobble_types::{WobbleError, WobbleResult};

/// Procedural mesh selection, tagged by `kind` in TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeshSpec {
    UvSphere {
        radius: f32,
        stacks: usize,
        slices: usize,
    },
    QuadGrid {
        cols: usize,
        rows: usize,
        width: f32,
        height: f32,
    },
    SplitCube {
        size: f32,
    },
}

impl MeshSpec {
    pub fn name(&self) -> &'static str {
        match self {
            MeshSpec::UvSphere { .. } => "uv_sphere",
            MeshSpec::QuadGrid { .. } => "quad_grid",
            MeshSpec::SplitCube { .. } => "split_cube",
        }
    }

    pub fn validate(&self) -> WobbleResult<()> {
        let ok = match *self {
            MeshSpec::UvSphere {
                radius,
                stacks,
                slices,
            } => radius.is_finite() && radius > 0.0 && stacks >= 2 && slices >= 3,
            MeshSpec::QuadGrid {
                cols,
                rows,
                width,
                height,
            } => cols > 0 && rows > 0 && width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            MeshSpec::SplitCube { size } => size.is_finite() && size > 0.0,
        };
        if ok {
            Ok(())
        } else {
            Err(WobbleError::InvalidConfig(format!(
                "Invalid {} parameters: {:?}",
                self.name(),
                self
            )))
        }
    }

    pub fn build(&self) -> WobbleResult<TriangleMesh> {
        self.validate()?;
        let mesh = match *self {
            MeshSpec::UvSphere {
                radius,
                stacks,
                slices,
            } => uv_sphere(radius, stacks, slices),
            MeshSpec::QuadGrid {
                cols,
                rows,
                width,
                height,
            } => quad_grid(cols, rows, width, height),
            MeshSpec::SplitCube { size } => split_cube(size),
        };
        Ok(mesh)
    }
}

/// A pointer pick injected before the given step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poke {
    pub step: u64,
    pub point: Vec3,
}

fn default_steps() -> u64 {
    120
}

/// Top-level scenario file for `wobble simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub mesh: MeshSpec,
    #[serde(default = "default_steps")]
    pub steps: u64,
    #[serde(default)]
    pub pokes: Vec<Poke>,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl ScenarioConfig {
    pub fn from_toml(content: &str) -> WobbleResult<Self> {
        let scenario: Self = toml::from_str(content)
            .map_err(|e| WobbleError::InvalidConfig(format!("Scenario parse failed: {e}")))?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &str) -> WobbleResult<Self> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> WobbleResult<()> {
        self.mesh.validate()?;
        self.simulation.validate()?;
        for poke in &self.pokes {
            if !poke.point.is_finite() {
                return Err(WobbleError::InvalidConfig(format!(
                    "Poke at step {} has a non-finite point",
                    poke.step
                )));
            }
            if poke.step >= self.steps {
                tracing::warn!(step = poke.step, steps = self.steps, "poke scheduled after the last step");
            }
        }
        Ok(())
    }

    /// Interaction events to feed into `step`.
    pub fn events_at(&self, step: u64) -> Vec<InteractionEvent> {
        self.pokes
            .iter()
            .filter(|p| p.step == step)
            .map(|p| InteractionEvent::PointerPick { point: p.point })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPHERE: &str = r#"
steps = 30

[mesh]
kind = "uv_sphere"
radius = 1.0
stacks = 8
slices = 16

[[pokes]]
step = 0
point = [0.0, 0.0, 1.5]

[[pokes]]
step = 10
point = [1.5, 0.0, 0.0]

[simulation]
stiffness = 0.8
"#;

    #[test]
    fn parses_full_scenario() {
        let scenario = ScenarioConfig::from_toml(SPHERE).unwrap();
        assert_eq!(scenario.steps, 30);
        assert_eq!(scenario.mesh.name(), "uv_sphere");
        assert_eq!(scenario.pokes.len(), 2);
        assert_eq!(scenario.pokes[1].point, Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(scenario.simulation.stiffness, 0.8);
        assert_eq!(scenario.simulation.damping, 0.20);
    }

    #[test]
    fn defaults_apply() {
        let scenario = ScenarioConfig::from_toml("[mesh]\nkind = \"split_cube\"\nsize = 1.0\n").unwrap();
        assert_eq!(scenario.steps, 120);
        assert!(scenario.pokes.is_empty());
        assert_eq!(scenario.simulation, SimulationConfig::default());
        assert_eq!(scenario.mesh.build().unwrap().vertex_count(), 24);
    }

    #[test]
    fn events_are_scheduled_by_step() {
        let scenario = ScenarioConfig::from_toml(SPHERE).unwrap();
        assert_eq!(scenario.events_at(0).len(), 1);
        assert!(scenario.events_at(5).is_empty());
        assert_eq!(
            scenario.events_at(10),
            vec![InteractionEvent::PointerPick {
                point: Vec3::new(1.5, 0.0, 0.0)
            }]
        );
    }

    #[test]
    fn rejects_bad_mesh_parameters() {
        let bad = "[mesh]\nkind = \"uv_sphere\"\nradius = 1.0\nstacks = 1\nslices = 8\n";
        assert!(matches!(
            ScenarioConfig::from_toml(bad),
            Err(WobbleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_unknown_mesh_kind() {
        assert!(ScenarioConfig::from_toml("[mesh]\nkind = \"teapot\"\n").is_err());
    }

    #[test]
    fn rejects_bad_simulation_table() {
        let bad = "[mesh]\nkind = \"split_cube\"\nsize = 1.0\n[simulation]\ndamping = -1.0\n";
        assert!(ScenarioConfig::from_toml(bad).is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let scenario = ScenarioConfig::from_toml(SPHERE).unwrap();
        let text = toml::to_string(&scenario).unwrap();
        assert_eq!(ScenarioConfig::from_toml(&text).unwrap(), scenario);
    }
}
