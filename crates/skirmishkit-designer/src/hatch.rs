//! # Hatch
//!
//! Square base plate with a round lid on top and a handle groove cut into
//! the lid. Used on its own or as the roof's hatch template.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use skirmishkit_core::geometry::{cuboid, cylinder, slot};
use skirmishkit_core::{ConfigError, Result, Shape, Solid, DEFAULT_SEGMENTS};
use tracing::debug;

use crate::dimensions::{ensure_fits, ensure_positive};
use crate::part::{Assembly, AssemblyPlan, Feature, Part, PartBuilder};

/// Handle groove length relative to the lid radius
pub const HANDLE_LENGTH_RATIO: f64 = 1.4;

/// Handle groove width relative to the lid radius
pub const HANDLE_WIDTH_RATIO: f64 = 0.25;

/// Clearance the groove cutter extends above the lid
const GROOVE_CLEARANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HatchParams {
    pub length: f64,
    pub width: f64,
    /// Total height: the plate takes a third, the lid the rest
    pub height: f64,
    pub hatch_radius: f64,
    pub handle_groove: bool,
    pub segments: usize,
}

impl Default for HatchParams {
    fn default() -> Self {
        Self {
            length: 25.0,
            width: 25.0,
            height: 6.0,
            hatch_radius: 10.5,
            handle_groove: true,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl HatchParams {
    pub fn plate_height(&self) -> f64 {
        self.height / 3.0
    }

    pub fn lid_height(&self) -> f64 {
        self.height - self.plate_height()
    }

    pub fn groove_depth(&self) -> f64 {
        self.lid_height() / 2.0
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        ensure_positive("hatch length", self.length)?;
        ensure_positive("hatch width", self.width)?;
        ensure_positive("hatch height", self.height)?;
        ensure_positive("hatch_radius", self.hatch_radius)?;
        ensure_fits(
            "hatch_radius * 2",
            self.hatch_radius * 2.0,
            "hatch plate",
            self.length.min(self.width),
        )?;
        Ok(())
    }
}

/// Sub-solids of a hatch
#[derive(Debug, Clone)]
pub struct HatchFeatures {
    pub plate: Shape,
    pub lid: Shape,
    pub groove: Option<Shape>,
}

#[derive(Debug)]
pub struct HatchBuilder;

pub type Hatch = Part<HatchBuilder>;

impl PartBuilder for HatchBuilder {
    type Params = HatchParams;
    type Cache = HatchFeatures;
    const NAME: &'static str = "Hatch";

    fn make(params: &HatchParams) -> Result<HatchFeatures> {
        params.validate()?;

        let bottom = -params.height / 2.0;
        let plate_h = params.plate_height();
        let lid_h = params.lid_height();

        let plate = cuboid(params.length, params.width, plate_h)?
            .translated(Vector3::new(0.0, 0.0, bottom + plate_h / 2.0));
        let lid = cylinder(params.hatch_radius, lid_h, params.segments)?
            .translated(Vector3::new(0.0, 0.0, bottom + plate_h + lid_h / 2.0));

        let groove = if params.handle_groove {
            let depth = params.groove_depth();
            debug!("hatch: handle groove {:.3} deep", depth);
            Some(
                slot(
                    params.hatch_radius * HANDLE_LENGTH_RATIO,
                    params.hatch_radius * HANDLE_WIDTH_RATIO,
                    depth + GROOVE_CLEARANCE,
                    params.segments,
                )?
                .translated(Vector3::new(0.0, 0.0, params.height / 2.0 - depth)),
            )
        } else {
            None
        };

        Ok(HatchFeatures { plate, lid, groove })
    }

    fn assemble(_params: &HatchParams, cache: &HatchFeatures) -> (Shape, AssemblyPlan) {
        let mut assembly = Assembly::new(cache.plate.clone()).fuse(Feature::Lid, &cache.lid);
        if let Some(groove) = &cache.groove {
            assembly = assembly.cut(Feature::HandleGroove, groove);
        }
        assembly.finish()
    }

    fn dimensions(params: &HatchParams) -> (f64, f64, f64) {
        (params.length, params.width, params.height)
    }
}
