//! Planet catalog and sun parameters.
//!
//! Distances and sizes are scene units chosen for readability, not to
//! scale. Order is fixed: every per-planet array in the simulation is
//! indexed by position in `PLANETS`.

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

/// Static description of one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDescriptor {
    pub name: &'static str,
    /// Display color, `0xRRGGBB`.
    pub color: u32,
    /// Distance from the sun in scene units.
    pub orbit_radius: f32,
    /// Visual sphere radius.
    pub size: f32,
    /// Initial angular speed (scaled by `ORBIT_RATE_SCALE` per second).
    pub base_speed: f32,
}

pub const PLANETS: [BodyDescriptor; PLANET_COUNT] = [
    BodyDescriptor { name: "Mercury", color: 0xb1b1b1, orbit_radius: 12.0, size: 1.0, base_speed: 0.020 },
    BodyDescriptor { name: "Venus", color: 0xfdc07f, orbit_radius: 18.0, size: 1.7, base_speed: 0.015 },
    BodyDescriptor { name: "Earth", color: 0x3996ec, orbit_radius: 25.0, size: 1.9, base_speed: 0.012 },
    BodyDescriptor { name: "Mars", color: 0xd14f22, orbit_radius: 32.0, size: 1.35, base_speed: 0.009 },
    BodyDescriptor { name: "Jupiter", color: 0xe1c193, orbit_radius: 40.0, size: 4.5, base_speed: 0.006 },
    BodyDescriptor { name: "Saturn", color: 0xe1d8b9, orbit_radius: 49.0, size: 4.0, base_speed: 0.005 },
    BodyDescriptor { name: "Uranus", color: 0x95edfd, orbit_radius: 58.0, size: 3.0, base_speed: 0.0032 },
    BodyDescriptor { name: "Neptune", color: 0x2d45fc, orbit_radius: 66.0, size: 2.8, base_speed: 0.002 },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 5.7;
pub const SUN_COLOR: u32 = 0xffd45d;
pub const SUN_WIDTH_SEGMENTS: u32 = 40;
pub const SUN_HEIGHT_SEGMENTS: u32 = 36;

// ── Planet surfaces ──────────────────────────────────────────────────

pub const PLANET_WIDTH_SEGMENTS: u32 = 32;
pub const PLANET_HEIGHT_SEGMENTS: u32 = 24;
pub const PLANET_ROUGHNESS: f32 = 0.49;
pub const PLANET_METALNESS: f32 = 0.25;
