//! Cropping widget state as an immutable value.
//!
//! The widget reports pan offset, zoom and, once the user stops dragging,
//! the selected region in source pixels. Each report produces a new
//! `CropState`; the previous value is never modified.

use serde::{Deserialize, Serialize};

use crate::transform::CropRegion;

/// Smallest zoom the widget allows.
pub const MIN_ZOOM: f64 = 1.0;
/// Largest zoom the widget allows.
pub const MAX_ZOOM: f64 = 3.0;

/// Pan offset of the image inside the crop frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Snapshot of the cropping widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropState {
    crop: Point,
    zoom: f64,
    completed_region: Option<CropRegion>,
}

impl Default for CropState {
    fn default() -> Self {
        Self {
            crop: Point::default(),
            zoom: MIN_ZOOM,
            completed_region: None,
        }
    }
}

impl CropState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crop(&self) -> Point {
        self.crop
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn completed_region(&self) -> Option<CropRegion> {
        self.completed_region
    }

    /// New state with a different pan offset. Non-finite values keep the
    /// current offset.
    #[must_use]
    pub fn with_crop(self, x: f64, y: f64) -> Self {
        if !x.is_finite() || !y.is_finite() {
            return self;
        }
        Self {
            crop: Point { x, y },
            ..self
        }
    }

    /// New state with zoom clamped to `[MIN_ZOOM, MAX_ZOOM]`. NaN keeps
    /// the current zoom.
    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        if zoom.is_nan() {
            return self;
        }
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            ..self
        }
    }

    /// New state recording the region the widget settled on.
    #[must_use]
    pub fn with_completed_region(self, region: CropRegion) -> Self {
        Self {
            completed_region: Some(region),
            ..self
        }
    }

    /// Whether saving would get past region validation.
    pub fn is_ready(&self) -> bool {
        self.completed_region
            .is_some_and(|region| region.to_pixel_rect().is_ok())
    }
}
