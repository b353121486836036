//! The simulation object. Owns welded groups, springs and state, and
//! advances them one host frame at a time.

use std::time::Instant;

use glam::Vec3;
use wobble_mesh::TriangleMesh;
use wobble_types::{WobbleError, WobbleResult};

use crate::config::SimulationConfig;
use crate::host::MeshHost;
use crate::integrator;
use crate::interaction::{self, InteractionEvent, Nudge};
use crate::spring::SpringNetwork;
use crate::state::SimulationState;
use crate::weld::PointGroups;

/// Result of a simulation step.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Index of the step just completed (0-indexed).
    pub step: u64,
    /// Timestep that was applied (seconds).
    pub dt: f32,
    /// Nudges applied before integration, in event order.
    pub nudges: Vec<Nudge>,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// A soft-body simulation over one mesh.
///
/// ```text
/// let mut sim = Simulation::initialize(&mesh, config)?;
/// loop {
///     sim.step(dt, &events, &mut mesh)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    groups: PointGroups,
    springs: SpringNetwork,
    state: SimulationState,
    /// Upload buffer, sized once in `initialize`.
    upload: Vec<Vec3>,
    step_count: u64,
    sim_time: f64,
}

impl Simulation {
    /// Welds the mesh vertices, builds the spring network from its
    /// triangles, and starts at rest.
    pub fn initialize(mesh: &TriangleMesh, config: SimulationConfig) -> WobbleResult<Self> {
        config.validate()?;
        mesh.validate()?;
        if mesh.vertex_count() == 0 {
            return Err(WobbleError::InvalidMesh("Mesh has no vertices".into()));
        }

        let positions = mesh.positions();
        let groups = PointGroups::weld(&positions);
        let triangles = groups.canonicalize_triangles(&mesh.indices)?;
        let springs =
            SpringNetwork::build_with(&triangles, &positions, config.stiffness, config.damping);
        let state = SimulationState::from_positions(&positions);
        let upload = Vec::with_capacity(positions.len());

        tracing::info!(
            vertices = groups.vertex_count(),
            points = groups.point_count(),
            springs = springs.len(),
            "simulation initialized"
        );

        Ok(Self {
            config,
            groups,
            springs,
            state,
            upload,
            step_count: 0,
            sim_time: 0.0,
        })
    }

    /// Advances the simulation by `dt`.
    ///
    /// Order within the step:
    /// 1. every event point nudges its nearest vertex group,
    /// 2. spring forces are accumulated from the nudged positions,
    /// 3. points are integrated,
    /// 4. positions are uploaded to `host`, which then recomputes bounds
    ///    and normals.
    ///
    /// The timestep, the host size and every event point are checked
    /// before anything is mutated, so an `Err` leaves the state untouched.
    pub fn step<H: MeshHost + ?Sized>(
        &mut self,
        dt: f32,
        events: &[InteractionEvent],
        host: &mut H,
    ) -> WobbleResult<StepReport> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(WobbleError::InvalidTimestep(dt));
        }
        self.check_host(&*host)?;
        for point in events.iter().flat_map(InteractionEvent::points) {
            if !point.is_finite() {
                return Err(WobbleError::InvalidConfig(format!(
                    "Interaction point must be finite, got {point}"
                )));
            }
        }
        let start = Instant::now();

        // Only allocates when an event actually lands.
        let mut nudges = Vec::new();
        for event in events {
            for &point in event.points() {
                nudges.extend(self.nudge_unchecked(point, &*host));
            }
        }

        integrator::step(&mut self.state, &self.groups, &self.springs, dt);

        self.state.positions_into(&mut self.upload);
        host.upload_positions(&self.upload)?;
        host.recalculate_bounds();
        host.recalculate_normals();

        let step = self.step_count;
        self.step_count += 1;
        self.sim_time += dt as f64;

        Ok(StepReport {
            step,
            dt,
            nudges,
            wall_time: start.elapsed().as_secs_f64(),
        })
    }

    /// Nudges the group nearest to `point` along the host's normal,
    /// outside of any step.
    ///
    /// `Ok(None)` when there is no target, e.g. for a non-finite point.
    pub fn nudge<H: MeshHost + ?Sized>(
        &mut self,
        point: Vec3,
        host: &H,
    ) -> WobbleResult<Option<Nudge>> {
        self.check_host(host)?;
        Ok(self.nudge_unchecked(point, host))
    }

    fn nudge_unchecked<H: MeshHost + ?Sized>(&mut self, point: Vec3, host: &H) -> Option<Nudge> {
        interaction::nudge_nearest(
            &mut self.state,
            &self.groups,
            host,
            point,
            self.config.nudge_distance,
        )
    }

    fn check_host<H: MeshHost + ?Sized>(&self, host: &H) -> WobbleResult<()> {
        if host.vertex_count() != self.state.vertex_count {
            return Err(WobbleError::InvalidMesh(format!(
                "Host has {} vertices, simulation has {}",
                host.vertex_count(),
                self.state.vertex_count
            )));
        }
        Ok(())
    }

    /// Current position of every raw vertex.
    pub fn positions(&self) -> Vec<Vec3> {
        self.state.positions()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn groups(&self) -> &PointGroups {
        &self.groups
    }

    pub fn springs(&self) -> &SpringNetwork {
        &self.springs
    }

    /// Spring access for retuning coefficients. Membership cannot change.
    pub fn springs_mut(&mut self) -> &mut SpringNetwork {
        &mut self.springs
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of completed steps.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Sum of all applied timesteps (seconds).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Kinetic energy of the canonical points, multiplicity as mass.
    pub fn kinetic_energy(&self) -> f64 {
        self.state.kinetic_energy(
            self.groups
                .canonicals()
                .iter()
                .map(|&k| (k, self.groups.multiplicity(k))),
        )
    }

    /// Elastic energy stored in all springs.
    pub fn potential_energy(&self) -> f64 {
        self.springs
            .iter()
            .map(|s| {
                s.potential_energy(self.state.position(s.a()), self.state.position(s.b())) as f64
            })
            .sum()
    }
}
