//! Demo parameters parsed from the command line.

use voxgrid_core::constants::DEFAULT_CHUNK_SIZE;
use voxgrid_core::VoxelType;
use voxgrid_mesh::AtlasLayout;
use voxgrid_world::{WorldConfig, WorldShape};

/// Configuration for the demo run (from CLI or defaults).
#[derive(Debug, Clone)]
pub struct DemoParams {
    pub chunk_size: u32,
    /// Horizontal chunk radius seeded around the origin.
    pub radius: i32,
    /// Vertical chunk count seeded from y = 0 upward.
    pub vertical: i32,
    pub seed: u64,
    pub atlas: Option<AtlasLayout>,
    pub bounded: bool,
    /// Number of scripted pick/edit rounds.
    pub edits: u32,
    /// Material placed by the scripted editor.
    pub selected: VoxelType,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            radius: 1,
            vertical: 1,
            seed: 42,
            atlas: Some(AtlasLayout::default()),
            bounded: false,
            edits: 8,
            selected: VoxelType(4),
        }
    }
}

impl DemoParams {
    /// Parse demo parameters from command line arguments.
    pub fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse demo parameters from an argument list (program name excluded).
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut params = Self::default();
        let args: Vec<String> = args.into_iter().collect();

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1).map(String::as_str);
            let mut consumed = true;
            match (args[i].as_str(), value) {
                ("--chunk-size", Some(v)) => set(&mut params.chunk_size, v),
                ("--radius", Some(v)) => set(&mut params.radius, v),
                ("--vertical", Some(v)) => set(&mut params.vertical, v),
                ("--seed", Some(v)) => set(&mut params.seed, v),
                ("--edits", Some(v)) => set(&mut params.edits, v),
                ("--voxel", Some(v)) => set(&mut params.selected.0, v),
                ("--tile-size", Some(v)) => {
                    if let Some(atlas) = params.atlas.as_mut() {
                        set(&mut atlas.tile_size, v);
                    }
                }
                ("--atlas-size", Some(v)) => {
                    if let (Some(atlas), Some((w, h))) =
                        (params.atlas.as_mut(), v.split_once('x'))
                    {
                        set(&mut atlas.width, w);
                        set(&mut atlas.height, h);
                    }
                }
                ("--no-uvs", _) => {
                    params.atlas = None;
                    consumed = false;
                }
                ("--bounded", _) => {
                    params.bounded = true;
                    consumed = false;
                }
                _ => consumed = false,
            }
            i += if consumed { 2 } else { 1 };
        }

        params
    }

    /// Build the world configuration described by these parameters.
    pub fn world_config(&self) -> voxgrid_core::Result<WorldConfig> {
        let mut config = WorldConfig::new(self.chunk_size)?;
        if let Some(atlas) = self.atlas {
            config = config.with_atlas(atlas);
        }
        if self.bounded {
            config = config.with_shape(WorldShape::Bounded);
        }
        Ok(config)
    }
}

fn set<T: std::str::FromStr>(target: &mut T, value: &str) {
    if let Ok(v) = value.parse() {
        *target = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> DemoParams {
        DemoParams::parse(args.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn defaults_without_args() {
        let params = parse(&[]);
        assert_eq!(params.chunk_size, 32);
        assert!(params.atlas.is_some());
        assert!(!params.bounded);
    }

    #[test]
    fn flags_and_values() {
        let params = parse(&[
            "--chunk-size",
            "16",
            "--bounded",
            "--seed",
            "7",
            "--atlas-size",
            "512x128",
            "--voxel",
            "9",
        ]);
        assert_eq!(params.chunk_size, 16);
        assert!(params.bounded);
        assert_eq!(params.seed, 7);
        assert_eq!(params.atlas.map(|a| (a.width, a.height)), Some((512, 128)));
        assert_eq!(params.selected, VoxelType(9));
        assert_eq!(params.world_config().unwrap().shape, WorldShape::Bounded);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let params = parse(&["--radius", "far", "--no-uvs"]);
        assert_eq!(params.radius, 1);
        assert!(params.atlas.is_none());
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(parse(&["--chunk-size", "0"]).world_config().is_err());
    }
}
