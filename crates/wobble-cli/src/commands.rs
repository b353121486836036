//! CLI command implementations.

use wobble_debug::snapshot::StateSnapshot;
use wobble_mesh::TriangleMesh;
use wobble_solver::{PointGroups, Simulation, SpringNetwork};
use wobble_telemetry::events::{EventKind, SimulationEvent};
use wobble_telemetry::sinks::TracingSink;
use wobble_telemetry::EventBus;

use crate::scenario::ScenarioConfig;

/// Run a scenario file and optionally write the final state snapshot.
pub fn simulate(config_path: &str, snapshot_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Wobble Simulation");
    println!("─────────────────");
    println!("Config: {config_path}");
    println!();

    let scenario = ScenarioConfig::load(config_path)?;
    let mut mesh = scenario.mesh.build()?;
    let mut sim = Simulation::initialize(&mesh, scenario.simulation.clone())?;

    println!(
        "Mesh:     {} ({} verts, {} tris)",
        scenario.mesh.name(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    println!("Points:   {}", sim.groups().point_count());
    println!("Springs:  {}", sim.springs().len());
    println!("Steps:    {} (dt = {:.5}s)", scenario.steps, sim.config().dt);
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let dt = sim.config().dt;
    let mut total_wall = 0.0;
    let mut nudge_count = 0usize;

    for step in 0..scenario.steps {
        let events = scenario.events_at(step);
        bus.emit(SimulationEvent::new(
            step,
            EventKind::StepBegin {
                sim_time: sim.sim_time(),
                dt,
            },
        ));

        let report = sim.step(dt, &events, &mut mesh)?;
        total_wall += report.wall_time;
        nudge_count += report.nudges.len();

        for nudge in &report.nudges {
            bus.emit(SimulationEvent::new(
                report.step,
                EventKind::Nudge {
                    vertex: nudge.vertex,
                    canonical: nudge.canonical,
                    moved: nudge.moved,
                },
            ));
        }
        bus.emit(SimulationEvent::new(
            report.step,
            EventKind::Energy {
                kinetic: sim.kinetic_energy(),
                potential: sim.potential_energy(),
            },
        ));
        bus.emit(SimulationEvent::new(
            report.step,
            EventKind::StepEnd {
                wall_time: report.wall_time,
            },
        ));
        bus.flush();
    }
    bus.finish();

    let steps = scenario.steps.max(1) as f64;
    println!("  Wall time:   {:.3}s", total_wall);
    println!("  Avg step:    {:.3}ms", total_wall / steps * 1000.0);
    println!("  Nudges:      {nudge_count}");
    println!("  Final KE:    {:.6e}", sim.kinetic_energy());
    println!("  Final PE:    {:.6e}", sim.potential_energy());

    if let Some(path) = snapshot_path {
        StateSnapshot::of_simulation(&sim).write_to(path)?;
        println!();
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Wobble Snapshot Inspector");
    println!("─────────────────────────");
    println!();

    let snapshot = StateSnapshot::read_from(path)?;

    println!("Step:         {}", snapshot.step);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Vertices:     {}", snapshot.vertex_count);

    if snapshot.vertex_count > 0 {
        let bounds = snapshot.bounds();
        let max_speed = (0..snapshot.vertex_count)
            .map(|i| snapshot.velocity(i).length())
            .fold(0.0, f32::max);
        println!("Bounds min:   {:?}", bounds.min.to_array());
        println!("Bounds max:   {:?}", bounds.max.to_array());
        println!("Max speed:    {:.6}", max_speed);
    }

    Ok(())
}

/// Validate a scenario (`.toml`) or a mesh (`.json`).
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Wobble Validator");
    println!("────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating scenario: {path}");
        let scenario = ScenarioConfig::load(path)?;
        let mesh = scenario.mesh.build()?;
        let sim = Simulation::initialize(&mesh, scenario.simulation.clone())?;
        println!(
            "✅ Scenario is valid ({} points, {} springs, {} steps, {} pokes).",
            sim.groups().point_count(),
            sim.springs().len(),
            scenario.steps,
            scenario.pokes.len()
        );
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let content = std::fs::read_to_string(path)?;
        let mesh: TriangleMesh = serde_json::from_str(&content)?;
        mesh.validate()?;
        report_topology(&mesh)?;
    } else {
        return Err("Unsupported file format. Use .toml (scenario) or .json (mesh).".into());
    }

    Ok(())
}

fn report_topology(mesh: &TriangleMesh) -> Result<(), Box<dyn std::error::Error>> {
    let positions = mesh.positions();
    let groups = PointGroups::weld(&positions);
    let triangles = groups.canonicalize_triangles(&mesh.indices)?;
    let springs = SpringNetwork::build(&triangles, &positions);

    println!(
        "✅ Mesh is valid ({} verts, {} tris).",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    println!("  Distinct points:     {}", groups.point_count());
    println!("  Springs:             {}", springs.len());
    println!("  Degenerate edges:    {}", springs.skipped_degenerate());
    println!("  Degenerate tris:     {}", mesh.degenerate_triangle_count());
    Ok(())
}
