#[cfg(feature = "std")]
use std::vec::Vec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use defmt::{Format, Formatter};

use crate::MingasError;
use crate::gas::required_gas;

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthPoint {
    pub depth: f32,     // m
    pub min_gas: f32,   // bar equivalent, reserve litres / cylinder litres
}

#[cfg(not(feature = "serde"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthPoint {
    pub depth: f32,     // m
    pub min_gas: f32,   // bar equivalent, reserve litres / cylinder litres
}

impl Format for DepthPoint {
    fn format(&self, f: Formatter) {
        defmt::write!(f, "DepthPoint {{ depth: {:?}, min_gas: {:?} }}", self.depth, self.min_gas);
    }
}

/// Depth sweep from `start` down to, but not including, `end`.
#[derive(Debug, Format, Clone, Copy, PartialEq)]
pub struct DepthRange {
    pub start: f32,     // m
    pub end: f32,       // m
    pub step: f32,      // m
}

impl DepthRange {
    pub fn new(start: f32, end: f32, step: f32) -> Self {
        DepthRange { start, end, step }
    }

    /// Deepest bound first, whichever order the bounds were given in.
    pub fn normalized(self) -> Self {
        if self.start < self.end {
            DepthRange {
                start: self.end,
                end: self.start,
                step: self.step,
            }
        } else {
            self
        }
    }
}

/// Chart line for one cylinder volume.
#[cfg(all(feature = "std", feature = "serde"))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderSeries {
    pub volume: u32,
    pub points: Vec<DepthPoint>,
}

#[cfg(all(feature = "std", not(feature = "serde")))]
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderSeries {
    pub volume: u32,
    pub points: Vec<DepthPoint>,
}

/// Sweep the depth range once per cylinder and price the reserve against
/// the cylinder volume, so each point reads as bars of fill pressure.
///
/// Cylinders come back in the order they were given; the chart legend
/// relies on that. A reversed range is normalized, a non-positive (or
/// NaN) step is rejected before any point is produced.
#[cfg(feature = "std")]
pub fn build_series(
    range: DepthRange,
    amv: f32,
    cylinders: &[u32],
) -> Result<Vec<CylinderSeries>, MingasError> {
    if !(range.step > 0.0) {
        return Err(MingasError::InvalidDepthStep);
    }

    let range = range.normalized();
    let mut series = Vec::with_capacity(cylinders.len());

    for &volume in cylinders {
        let mut points = Vec::new();
        let mut depth = range.start;

        while depth > range.end {
            points.push(DepthPoint {
                depth,
                min_gas: required_gas(depth, amv) / volume as f32,
            });
            depth -= range.step;
        }

        series.push(CylinderSeries { volume, points });
    }

    Ok(series)
}

#[test]
fn test_normalized_swaps_reversed_bounds() {
    let range = DepthRange::new(0.0, 60.0, 5.0).normalized();
    assert_eq!(range.start, 60.0);
    assert_eq!(range.end, 0.0);
}

#[cfg(feature = "std")]
#[test]
fn test_build_series_rejects_zero_step() {
    let result = build_series(DepthRange::new(60.0, 0.0, 0.0), 30.0, &[12]);
    assert_eq!(result, Err(MingasError::InvalidDepthStep));
}

#[cfg(feature = "std")]
#[test]
fn test_build_series_rejects_nan_step() {
    let result = build_series(DepthRange::new(60.0, 0.0, f32::NAN), 30.0, &[12]);
    assert_eq!(result, Err(MingasError::InvalidDepthStep));
}

#[cfg(all(feature = "std", feature = "serde"))]
#[test]
fn test_series_serializes_to_json() {
    let series = build_series(DepthRange::new(10.0, 0.0, 5.0), 30.0, &[12]).unwrap();
    let json = serde_json::to_string(&series).unwrap();
    let back: Vec<CylinderSeries> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, series);
}
