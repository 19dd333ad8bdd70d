#![no_std]

use defmt::Format;

#[cfg(feature = "std")]
extern crate std;

pub mod gas;
pub mod series;

use crate::series::DepthRange;

/// Default breathing rate (Atemminutenvolumen) in litres per minute.
pub const DEFAULT_AMV: f32 = 30.0;

/// Cylinder volumes in litres, one chart line each.
pub const DEFAULT_CYLINDERS: [u32; 6] = [10, 12, 15, 18, 20, 24];

#[derive(Debug, Format, Copy, Clone)]
pub struct MingasParameters {
    pub amv: f32,           // litres per minute at surface pressure
    pub max_depth: f32,     // m, start of the depth sweep
    pub min_depth: f32,     // m, end of the depth sweep (exclusive)
    pub depth_step: f32,    // m
}

impl MingasParameters {
    pub fn new(amv: f32) -> Self {
        MingasParameters {
            amv,
            ..Default::default()
        }
    }

    pub fn depth_range(&self) -> DepthRange {
        DepthRange {
            start: self.max_depth,
            end: self.min_depth,
            step: self.depth_step,
        }
    }
}

impl Default for MingasParameters {
    fn default() -> Self {
        MingasParameters {
            amv: DEFAULT_AMV,
            max_depth: 60.0,
            min_depth: 0.0,
            depth_step: 5.0,
        }
    }
}

#[derive(Debug, Format, PartialEq, Eq, Clone, Copy)]
pub enum MingasError {
    /// Depth step was zero, negative or NaN; iterating would never terminate.
    InvalidDepthStep,
}

#[test]
fn test_default_parameters_cover_recreational_range() {
    let params = MingasParameters::default();
    assert_eq!(params.max_depth, 60.0);
    assert_eq!(params.min_depth, 0.0);
    assert_eq!(params.depth_step, 5.0);
    assert_eq!(params.amv, DEFAULT_AMV);
}

#[test]
fn test_new_overrides_amv_only() {
    let params = MingasParameters::new(18.0);
    assert_eq!(params.amv, 18.0);
    assert_eq!(params.max_depth, MingasParameters::default().max_depth);
}
