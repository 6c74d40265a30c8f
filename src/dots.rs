//! Procedural point sampler.
//!
//! Samples a raster mask's alpha channel to scatter points over a unit
//! sphere: latitude bands get a point count proportional to their
//! circumference, each candidate keeps its spot only where the mask is fully
//! opaque. Runs once at scene setup; the output is immutable.

use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

use crate::constants::{ALPHA_SATURATION, DEFAULT_DOT_ROWS, DOT_DENSITY_DIVISOR, GLOBE_RADIUS};

/// Decoded mask: one alpha byte per pixel, row-major.
#[derive(Clone, Debug)]
pub struct MaskImage {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl MaskImage {
    pub fn new(width: u32, height: u32, alpha: Vec<u8>) -> anyhow::Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "mask must be non-empty");
        anyhow::ensure!(
            alpha.len() == (width * height) as usize,
            "alpha buffer is {} bytes, expected {}",
            alpha.len(),
            width * height
        );
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Extract the alpha channel from interleaved RGBA pixel data.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> anyhow::Result<Self> {
        anyhow::ensure!(
            rgba.len() == (width * height * 4) as usize,
            "rgba buffer is {} bytes, expected {}",
            rgba.len(),
            width * height * 4
        );
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Self::new(width, height, alpha)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn alpha_at(&self, x: u32, y: u32) -> u8 {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.alpha[(self.width * y + x) as usize]
    }
}

/// Map (lat, lon) in degrees onto the mask and test for full opacity.
fn is_visible(lat: f32, lon: f32, mask: &MaskImage) -> bool {
    let x = (((lon + 180.0) / 360.0) * mask.width() as f32).floor() as u32;
    let y = (((lat + 90.0) / 180.0) * mask.height() as f32).floor() as u32;
    mask.alpha_at(x, y) >= ALPHA_SATURATION
}

/// Standard spherical-to-Cartesian conversion for a unit sphere.
fn pos_from_lat_lon(lat: f32, lon: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    Vec3::new(
        -theta.cos() * phi.sin(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
}

#[derive(Clone, Copy, Debug)]
pub struct DotFieldConfig {
    /// Latitude bands between the poles.
    pub rows: u32,
    pub radius: f32,
}

impl Default for DotFieldConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DOT_ROWS,
            radius: GLOBE_RADIUS,
        }
    }
}

/// Immutable sphere-surface point set produced by the sampler.
pub struct DotField {
    positions: Vec<Vec3>,
}

impl DotField {
    /// Sample the mask. Two passes with the same jitter stream: the first
    /// counts kept points, the second fills an exact-size buffer, so the
    /// output length always equals the number of kept candidates.
    pub fn generate(mask: &MaskImage, config: &DotFieldConfig, seed: u64) -> Self {
        let rows = config.rows.max(1);
        let count = Self::walk(mask, config, seed, rows, None);

        let mut positions = Vec::with_capacity(count);
        Self::walk(mask, config, seed, rows, Some(&mut positions));
        debug_assert_eq!(positions.len(), count);

        log::debug!(
            "dot field: {} points from {}x{} mask, {} rows",
            positions.len(),
            mask.width(),
            mask.height(),
            rows
        );
        Self { positions }
    }

    /// Shared lat/lon walk. Returns the kept-point count; when `out` is
    /// given, also appends each kept position scaled to the globe radius.
    fn walk(
        mask: &MaskImage,
        config: &DotFieldConfig,
        seed: u64,
        rows: u32,
        mut out: Option<&mut Vec<Vec3>>,
    ) -> usize {
        let mut rng = StdRng::seed_from_u64(seed);
        let density = rows as f32 / DOT_DENSITY_DIVISOR;
        let lat_step = 180.0 / rows as f32;
        let mut kept = 0;

        for row in 0..=rows {
            let lat = -90.0 + row as f32 * lat_step;
            let band_radius = lat.abs().to_radians().cos() * config.radius;
            let circumference = band_radius * TAU;
            let dots_for_lat =
                (circumference * density).floor() as u32 + rng.gen_range(1..=2u32);

            for i in 0..dots_for_lat {
                let lon = -180.0 + (i as f32 * 360.0) / dots_for_lat as f32;
                if !is_visible(lat, lon, mask) {
                    continue;
                }
                kept += 1;
                if let Some(out) = out.as_mut() {
                    out.push(pos_from_lat_lon(lat, lon) * config.radius);
                }
            }
        }
        kept
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Raw byte view of the position buffer for renderer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}
