//! voxgrid headless demo
//!
//! Seeds a terrain world, extracts meshes for every chunk, then runs a
//! scripted sequence of pick/edit clicks and reports the refreshed meshes.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p voxgrid-demo -- [OPTIONS]
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod params;
mod session;

use glam::Vec3;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voxgrid_core::{ChunkPos, Ray};
use voxgrid_world::{TerrainConfig, TerrainGenerator, VoxelWorld};

use crate::params::DemoParams;
use crate::session::{EditorState, Session};

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let params = DemoParams::from_args();
    info!(?params, "starting demo");

    let mut world = VoxelWorld::new(params.world_config()?)?;
    let generator = TerrainGenerator::new(TerrainConfig {
        seed: params.seed,
        ..Default::default()
    });
    let (min, max) = if params.bounded {
        (ChunkPos::new(0, 0, 0), ChunkPos::new(0, 0, 0))
    } else {
        (
            ChunkPos::new(-params.radius, 0, -params.radius),
            ChunkPos::new(params.radius, params.vertical - 1, params.radius),
        )
    };
    generator.generate_region(&mut world, min, max);

    let mut session = Session::new(world, EditorState { selected: params.selected });
    session.rebuild_all();
    let stats = session.stats();
    info!(
        chunks = stats.chunks,
        quads = stats.quads,
        vertices = stats.vertices,
        "initial meshes built"
    );

    run_edits(&mut session, &params, min, max);

    if let Some(mesh) = session.mesh(ChunkPos::new(0, 0, 0)) {
        info!(
            quads = mesh.quad_count(),
            uvs = mesh.has_uvs(),
            "origin chunk mesh"
        );
    }

    let stats = session.stats();
    info!(
        chunks = stats.chunks,
        quads = stats.quads,
        vertices = stats.vertices,
        "final meshes"
    );
    Ok(())
}

/// Click straight down on a deterministic set of columns, alternating
/// between placing the selected material and removing.
fn run_edits(session: &mut Session, params: &DemoParams, min: ChunkPos, max: ChunkPos) {
    let chunk_size = session.world().chunk_size();
    let Some(lo) = min.origin(chunk_size) else {
        warn!(?min, "edit region lies outside the voxel range");
        return;
    };
    let size = chunk_size.get() as i32;
    let span_x = (max.x - min.x + 1) * size;
    let span_z = (max.z - min.z + 1) * size;
    let top = ((max.y + 1) * size + 1) as f32;
    let bottom = (min.y * size - 1) as f32;

    for i in 0..params.edits as i32 {
        let x = lo.x + i.wrapping_mul(7919).rem_euclid(span_x);
        let z = lo.z + i.wrapping_mul(104_729).rem_euclid(span_z);
        let column = Vec3::new(x as f32 + 0.5, 0.0, z as f32 + 0.5);
        let ray = Ray::new(column.with_y(top), column.with_y(bottom));

        let remove = i % 2 == 1;
        match session.click(&ray, remove) {
            Some(outcome) => info!(
                pos = ?outcome.pos,
                previous = ?outcome.previous,
                voxel = ?outcome.voxel,
                rebuilt = outcome.affected.len(),
                "edit applied"
            ),
            None => warn!(x, z, "click hit nothing"),
        }
    }
}

fn print_help() {
    eprintln!(
        "voxgrid headless demo

USAGE:
    cargo run -p voxgrid-demo -- [OPTIONS]

WORLD OPTIONS:
    --chunk-size <N>        Chunk edge length in voxels (default: 32)
    --bounded               Single pre-allocated chunk; writes outside are dropped
    --radius <N>            Horizontal chunk radius to seed (default: 1)
    --vertical <N>          Vertical chunk count to seed (default: 1)
    --seed <N>              Terrain seed (default: 42)

MESH OPTIONS:
    --tile-size <N>         Atlas tile size in pixels (default: 16)
    --atlas-size <WxH>      Atlas dimensions in pixels (default: 256x64)
    --no-uvs                Skip texture coordinate generation

EDIT OPTIONS:
    --edits <N>             Scripted clicks to perform (default: 8)
    --voxel <N>             Material placed by clicks (default: 4)

OTHER:
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
