//! xsmall — smallest demo for the gridnav workspace.
//!
//! Lays a node grid over a 20 × 20 plane, scatters a handful of agents,
//! sends each to a random point, and steps frames at 30 Hz until everyone
//! has arrived.  Pass a JSON `NavConfig` path as the first argument to
//! override grid size or movement speed.

use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gn_core::{AgentId, NavConfig, PlaneBounds, Vec3};
use gn_mobility::MobilityEngine;
use gn_spatial::{AStar, GridBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 8;
const SEED:        u64   = 42;
const PLANE_SIZE:  f32   = 20.0;
const FRAME_SECS:  f32   = 1.0 / 30.0;
const MAX_FRAMES:  u32   = 30 * 60; // one simulated minute

fn load_config() -> Result<NavConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => NavConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn random_point(rng: &mut SmallRng) -> Vec3 {
    let half = PLANE_SIZE * 0.5;
    Vec3::new(rng.gen_range(-half..half), 0.0, rng.gen_range(-half..half))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = load_config()?;

    println!("=== xsmall — gridnav ===");
    println!("Agents: {AGENT_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Build the grid over the plane.
    let plane = PlaneBounds::new(Vec3::ZERO, PLANE_SIZE, PLANE_SIZE);
    let grid = GridBuilder::from_config(&config.grid, plane).build()?;
    println!(
        "Grid: {} x {} nodes ({} total)",
        grid.width(),
        grid.height(),
        grid.node_count()
    );

    // 2. One long query to show how little of the grid a search touches.
    let mut astar = AStar::for_grid(&grid);
    let corner_a = grid.closest_node(plane.bottom_left());
    let corner_b = grid.closest_node(plane.center);
    if let Some(route) = astar.find_path(&grid, corner_a, corner_b)? {
        println!(
            "Corner → centre: {} steps, cost {:.3}, {} nodes touched",
            route.len(),
            route.cost,
            astar.last_touched()
        );
    }
    println!();

    // 3. Place agents and hand out destinations.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut engine = MobilityEngine::new(astar, AGENT_COUNT, config.movement.clone());
    let mut requests = Vec::with_capacity(AGENT_COUNT);
    for i in 0..AGENT_COUNT {
        let agent = AgentId(i as u32);
        engine.place(agent, random_point(&mut rng))?;
        requests.push((agent, random_point(&mut rng)));
    }
    let found = engine.set_destinations(&grid, &requests)?;
    for ((agent, dest), ok) in requests.iter().zip(&found) {
        println!(
            "{agent}: {} → {dest}  ({})",
            engine.position(*agent).unwrap_or_default(),
            if *ok { format!("{} waypoints", engine.remaining(*agent).len()) } else { "no route".into() },
        );
    }
    println!();

    // 4. Step frames until every agent has arrived.
    let t0 = Instant::now();
    let mut arrived = 0;
    let mut frame = 0;
    while arrived < AGENT_COUNT && frame < MAX_FRAMES {
        frame += 1;
        for agent in engine.step(&grid, FRAME_SECS) {
            arrived += 1;
            println!(
                "frame {frame:>5} ({:>6.2} s): {agent} arrived at {}",
                frame as f32 * FRAME_SECS,
                engine.position(agent).unwrap_or_default()
            );
        }
    }
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!();
    println!(
        "{arrived}/{AGENT_COUNT} agents arrived in {frame} frames ({:.3} ms wall clock)",
        elapsed.as_secs_f64() * 1_000.0
    );

    Ok(())
}
