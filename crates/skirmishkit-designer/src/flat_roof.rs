//! # Flat Roof
//!
//! Roof slab with optional tile field, hatches, hatch cut-outs underneath
//! and magnet/peg holes in the corners.
//!
//! Assembly order is fixed:
//!
//! ```text
//! body -> tiles (cut or union) -> hatch cuts (cut) -> hatches (union) -> holes (cut)
//! ```

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use skirmishkit_core::geometry::{chamfered_cuboid, cuboid, cylinder, filleted_cuboid};
use skirmishkit_core::{fuse_all, ConfigError, Result, Shape, Solid, DEFAULT_SEGMENTS};
use tracing::debug;

use crate::dimensions::{
    corner_offset, ensure_fits, ensure_non_negative, ensure_positive, flush_offset,
    instance_count, quadrant_points, recessed_offset, usable_span,
};
use crate::grid::{make_grid, GridParams};
use crate::hatch::{Hatch, HatchParams};
use crate::part::{Assembly, AssemblyPlan, Feature, Part, PartBuilder};
use crate::profiles::{hatch_cut, roof_tile};
use crate::series::{Edge, KeepList, Scene, SeriesLayout, SeriesParams};

/// Below this `tile_z_offset`, [`TileMode::Auto`] recesses the tiles
pub const AUTO_RECESS_THRESHOLD: f64 = -1.0;

/// Whether the tile field is added on top of the slab or cut into it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileMode {
    /// Recessed when `tile_z_offset` is below [`AUTO_RECESS_THRESHOLD`]
    #[default]
    Auto,
    Raised,
    Recessed,
}

impl TileMode {
    pub fn is_recessed(&self, tile_z_offset: f64) -> bool {
        match self {
            TileMode::Auto => tile_z_offset < AUTO_RECESS_THRESHOLD,
            TileMode::Raised => false,
            TileMode::Recessed => true,
        }
    }
}

/// Treatment of the slab's top edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTreatment {
    Chamfer,
    Fillet,
}

impl EdgeTreatment {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeTreatment::Chamfer => "chamfer",
            EdgeTreatment::Fillet => "fillet",
        }
    }
}

impl fmt::Display for EdgeTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EdgeTreatment {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chamfer" => Ok(EdgeTreatment::Chamfer),
            "fillet" => Ok(EdgeTreatment::Fillet),
            _ => Err(ConfigError::UnknownEdgeTreatment {
                mode: s.to_string(),
            }),
        }
    }
}

/// Interior dimensions of the structure a roof sits on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteriorSpan {
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatRoofParams {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Shrinks the slab on every side
    pub inset: f64,
    /// Wall thickness of the structure below, deepens the hatch cuts
    pub wall_width: f64,
    /// Pitch element shared with the wall panels below
    pub panel_length: f64,
    pub panel_padding: f64,
    /// When set, hatches follow these interior dimensions
    pub interior: Option<InteriorSpan>,

    pub roof_chamfer: f64,
    /// `chamfer` or `fillet`
    pub roof_operation: String,

    pub render_tiles: bool,
    pub tile_size: f64,
    pub tile_padding: f64,
    pub tile_height: f64,
    pub tile_z_offset: f64,
    pub tile_mode: TileMode,

    pub render_hatches: bool,
    pub render_hatch_cuts: bool,
    /// Hatch slots to keep; empty keeps all
    pub hatch_panels: KeepList,
    pub hatch_length: f64,
    pub hatch_width: f64,
    pub hatch_radius: f64,
    pub hatch_height: f64,
    pub hatch_cut_inset: f64,
    /// Chamfer on the vertical edges of the hatch cuts
    pub hatch_cut_chamfer: f64,
    /// Chamfer on the top and bottom edges of the hatch cuts
    pub hatch_cut_face_chamfer: f64,

    pub cut_holes: bool,
    pub hole_inset: f64,
    pub hole_depth: f64,
    pub hole_radius: f64,

    pub segments: usize,
}

impl Default for FlatRoofParams {
    fn default() -> Self {
        Self {
            length: 160.0,
            width: 150.0,
            height: 25.0,
            inset: 0.0,
            wall_width: 0.0,
            panel_length: 0.0,
            panel_padding: 0.0,
            interior: None,
            roof_chamfer: 0.0,
            roof_operation: EdgeTreatment::Chamfer.as_str().to_string(),
            render_tiles: false,
            tile_size: 21.0,
            tile_padding: 2.0,
            tile_height: 1.5,
            tile_z_offset: -1.0,
            tile_mode: TileMode::Auto,
            render_hatches: false,
            render_hatch_cuts: false,
            hatch_panels: KeepList::all(),
            hatch_length: 25.0,
            hatch_width: 25.0,
            hatch_radius: 10.5,
            hatch_height: 6.0,
            hatch_cut_inset: 2.0,
            hatch_cut_chamfer: 2.0,
            hatch_cut_face_chamfer: 3.0,
            cut_holes: false,
            hole_inset: 1.5,
            hole_depth: 1.0,
            hole_radius: 1.0,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl FlatRoofParams {
    pub fn final_length(&self) -> f64 {
        usable_span(self.length, self.inset, 0.0)
    }

    pub fn final_width(&self) -> f64 {
        usable_span(self.width, self.inset, 0.0)
    }

    pub fn tile_space_length(&self) -> f64 {
        usable_span(self.length, self.inset, self.roof_chamfer)
    }

    pub fn tile_space_width(&self) -> f64 {
        usable_span(self.width, self.inset, self.roof_chamfer)
    }

    pub fn tile_pitch(&self) -> f64 {
        self.tile_size + self.tile_padding
    }

    pub fn cut_tiles(&self) -> bool {
        self.tile_mode.is_recessed(self.tile_z_offset)
    }

    pub fn tile_z_translate(&self) -> f64 {
        if self.cut_tiles() {
            recessed_offset(self.height, self.tile_height)
        } else {
            flush_offset(self.height, self.tile_height)
        }
    }

    /// Tile rows (along X) and columns (along Y)
    pub fn tile_grid(&self) -> GridParams {
        let pitch = self.tile_pitch();
        GridParams::square(
            instance_count(self.tile_space_length(), pitch),
            instance_count(self.tile_space_width(), pitch),
            pitch,
        )
    }

    /// Span the hatches are distributed over
    pub fn hatch_span(&self) -> (f64, f64) {
        match self.interior {
            Some(interior) => (interior.length, interior.width),
            None => (
                usable_span(self.length, self.inset, self.roof_chamfer),
                usable_span(self.width, self.inset, self.roof_chamfer),
            ),
        }
    }

    pub fn hatch_length_offset(&self) -> f64 {
        self.panel_length - self.hatch_length + self.panel_padding * 2.0
    }

    pub fn hatch_z_translate(&self) -> f64 {
        flush_offset(self.height, self.hatch_height)
    }

    pub fn hatch_cut_length(&self) -> f64 {
        self.hatch_length - self.hatch_cut_inset
    }

    pub fn hatch_cut_width(&self) -> f64 {
        self.hatch_width - self.hatch_cut_inset
    }

    /// Cuts reach through the wall top and the tile layer
    pub fn hatch_cut_height(&self) -> f64 {
        self.wall_width + self.tile_height
    }

    pub fn hatch_cut_length_offset(&self) -> f64 {
        self.panel_length - self.hatch_cut_length() + self.panel_padding * 2.0
    }

    pub fn hole_x_translate(&self) -> f64 {
        corner_offset(self.length, self.inset, self.hole_radius, self.hole_inset)
    }

    pub fn hole_y_translate(&self) -> f64 {
        corner_offset(self.width, self.inset, self.hole_radius, self.hole_inset)
    }

    pub fn hole_z_translate(&self) -> f64 {
        -(self.height / 2.0 - self.hole_depth / 2.0)
    }

    /// Edge treatment applied when `roof_chamfer` is non-zero
    pub fn edge_treatment(&self) -> std::result::Result<EdgeTreatment, ConfigError> {
        self.roof_operation.parse()
    }

    /// Layout of the hatches on top of the slab
    pub fn hatch_series(&self) -> SeriesParams {
        let (int_length, int_width) = self.hatch_span();
        SeriesParams {
            outer_length: int_length,
            outer_width: int_width,
            component_length: self.panel_length,
            padding: self.panel_padding,
            length_offset: self.hatch_length_offset(),
            width_offset: None,
            x_translate: int_length / 2.0 - self.hatch_width / 2.0,
            y_translate: int_width / 2.0 - self.hatch_width / 2.0,
            z_translate: self.hatch_z_translate(),
            edges: Edge::ALL.to_vec(),
            keep: self.hatch_panels.clone(),
        }
    }

    /// Layout of the cut-outs under the hatches
    pub fn hatch_cut_series(&self) -> SeriesParams {
        let (int_length, int_width) = self.hatch_span();
        let cut_width = self.hatch_cut_width();
        SeriesParams {
            length_offset: self.hatch_cut_length_offset(),
            x_translate: int_length / 2.0 - cut_width / 2.0,
            y_translate: int_width / 2.0 - cut_width / 2.0,
            z_translate: 0.0,
            ..self.hatch_series()
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimensions(format!(
                    "roof {name} must be positive, got {value}"
                )));
            }
        }
        ensure_non_negative("inset", self.inset)?;
        ensure_non_negative("wall_width", self.wall_width)?;
        ensure_non_negative("roof_chamfer", self.roof_chamfer)?;
        if self.final_length() <= 0.0 || self.final_width() <= 0.0 {
            return Err(ConfigError::InvalidDimensions(format!(
                "inset {} leaves no roof ({} x {})",
                self.inset,
                self.final_length(),
                self.final_width()
            )));
        }

        if self.roof_chamfer > 0.0 {
            ensure_fits("roof_chamfer", self.roof_chamfer, "roof height", self.height)?;
            ensure_fits(
                "roof_chamfer * 2",
                self.roof_chamfer * 2.0,
                "roof footprint",
                self.final_length().min(self.final_width()),
            )?;
            self.edge_treatment()?;
        }

        if self.render_tiles {
            ensure_positive("tile_size", self.tile_size)?;
            ensure_positive("tile_height", self.tile_height)?;
            ensure_non_negative("tile_padding", self.tile_padding)?;
            ensure_fits("tile_height", self.tile_height, "roof height", self.height)?;
        }

        if self.render_hatches || self.render_hatch_cuts {
            if let Some(interior) = self.interior {
                ensure_positive("interior length", interior.length)?;
                ensure_positive("interior width", interior.width)?;
            }
        }

        if self.render_hatches {
            self.hatch_params().validate()?;
        }

        if self.render_hatch_cuts {
            ensure_non_negative("hatch_cut_inset", self.hatch_cut_inset)?;
            ensure_positive("hatch cut length", self.hatch_cut_length())?;
            ensure_positive("hatch cut width", self.hatch_cut_width())?;
            ensure_positive("hatch cut height", self.hatch_cut_height())?;
            ensure_fits(
                "hatch cut height",
                self.hatch_cut_height(),
                "roof height",
                self.height,
            )?;
            ensure_fits(
                "hatch_cut_chamfer * 2",
                self.hatch_cut_chamfer * 2.0,
                "hatch cut footprint",
                self.hatch_cut_length().min(self.hatch_cut_width()),
            )?;
            ensure_fits(
                "hatch_cut_face_chamfer * 2",
                self.hatch_cut_face_chamfer * 2.0,
                "hatch cut height",
                self.hatch_cut_height(),
            )?;
        }

        if self.cut_holes {
            ensure_positive("hole_radius", self.hole_radius)?;
            ensure_positive("hole_depth", self.hole_depth)?;
            ensure_fits("hole_depth", self.hole_depth, "roof height", self.height)?;
        }

        Ok(())
    }

    /// Parameters of the hatch template placed on this roof
    pub fn hatch_params(&self) -> HatchParams {
        HatchParams {
            length: self.hatch_length,
            width: self.hatch_width,
            height: self.hatch_height,
            hatch_radius: self.hatch_radius,
            segments: self.segments,
            ..HatchParams::default()
        }
    }
}

/// Sub-solids of a roof, as cached by `make`
#[derive(Debug, Clone)]
pub struct RoofFeatures {
    pub body: Shape,
    pub tiles: Option<Shape>,
    pub cut_tiles: bool,
    pub hatches: Option<Scene<Shape>>,
    pub hatch_cuts: Option<Scene<Shape>>,
    pub holes: Option<Shape>,
}

#[derive(Debug)]
pub struct FlatRoofBuilder;

pub type FlatRoof = Part<FlatRoofBuilder>;

impl FlatRoofBuilder {
    fn body(params: &FlatRoofParams) -> Result<Shape> {
        let (l, w, h) = (params.final_length(), params.final_width(), params.height);
        if params.roof_chamfer == 0.0 {
            return Ok(cuboid(l, w, h)?);
        }
        let body = match params.edge_treatment()? {
            EdgeTreatment::Chamfer => chamfered_cuboid(l, w, h, params.roof_chamfer)?,
            EdgeTreatment::Fillet => {
                filleted_cuboid(l, w, h, params.roof_chamfer, params.segments)?
            }
        };
        Ok(body)
    }

    fn tiles(params: &FlatRoofParams) -> Result<Shape> {
        let tile = roof_tile(params.tile_size, params.tile_height, params.segments)?;
        let grid = params.tile_grid();
        debug!(
            "roof tiles: {} x {} at pitch {:.3}, recessed: {}",
            grid.rows,
            grid.columns,
            params.tile_pitch(),
            params.cut_tiles()
        );
        Ok(make_grid(&tile, &grid)?.translated(Vector3::new(0.0, 0.0, params.tile_z_translate())))
    }

    fn hatches(params: &FlatRoofParams) -> Result<Scene<Shape>> {
        let mut hatch = Hatch::new(params.hatch_params());
        hatch.make()?;
        let template = hatch.build()?;
        let layout = SeriesLayout::new(params.hatch_series())?;
        Ok(layout.scene(template))
    }

    fn hatch_cuts(params: &FlatRoofParams) -> Result<Scene<Shape>> {
        let template = hatch_cut(
            params.hatch_cut_length(),
            params.hatch_cut_width(),
            params.hatch_cut_height(),
            params.hatch_cut_chamfer,
            params.hatch_cut_face_chamfer,
        )?
        .translated(Vector3::new(0.0, 0.0, -params.height / 2.0));
        let layout = SeriesLayout::new(params.hatch_cut_series())?;
        Ok(layout.scene(&template))
    }

    fn holes(params: &FlatRoofParams) -> Result<Shape> {
        let hole = cylinder(params.hole_radius, params.hole_depth, params.segments)?;
        let z = params.hole_z_translate();
        let holes: Vec<Shape> =
            quadrant_points(params.hole_x_translate(), params.hole_y_translate())
                .iter()
                .map(|&(x, y)| hole.translated(Vector3::new(x, y, z)))
                .collect();
        Ok(fuse_all(&holes))
    }
}

impl PartBuilder for FlatRoofBuilder {
    type Params = FlatRoofParams;
    type Cache = RoofFeatures;
    const NAME: &'static str = "FlatRoof";

    fn make(params: &FlatRoofParams) -> Result<RoofFeatures> {
        params.validate()?;

        let body = Self::body(params)?;
        let tiles = if params.render_tiles {
            Some(Self::tiles(params)?)
        } else {
            None
        };
        let hatches = if params.render_hatches {
            Some(Self::hatches(params)?)
        } else {
            None
        };
        let hatch_cuts = if params.render_hatch_cuts {
            Some(Self::hatch_cuts(params)?)
        } else {
            None
        };
        let holes = if params.cut_holes {
            Some(Self::holes(params)?)
        } else {
            None
        };

        Ok(RoofFeatures {
            body,
            tiles,
            cut_tiles: params.cut_tiles(),
            hatches,
            hatch_cuts,
            holes,
        })
    }

    fn assemble(_params: &FlatRoofParams, cache: &RoofFeatures) -> (Shape, AssemblyPlan) {
        let mut assembly = Assembly::new(cache.body.clone());
        if let Some(tiles) = &cache.tiles {
            assembly = assembly.fuse_or_cut(Feature::Tiles, tiles, cache.cut_tiles);
        }
        if let Some(cuts) = &cache.hatch_cuts {
            assembly = assembly.cut(Feature::HatchCuts, cuts.solid());
        }
        if let Some(hatches) = &cache.hatches {
            assembly = assembly.fuse(Feature::Hatches, hatches.solid());
        }
        if let Some(holes) = &cache.holes {
            assembly = assembly.cut(Feature::Holes, holes);
        }
        assembly.finish()
    }

    fn dimensions(params: &FlatRoofParams) -> (f64, f64, f64) {
        (params.length, params.width, params.height)
    }
}
