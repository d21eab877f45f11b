//! # Bunker
//!
//! Walled bunker body with sloped outer walls, a hollow interior above the
//! floor, and optional wall panels: recesses cut into the walls, then
//! arch-decorated panels set into them. Both panel series are distributed
//! along all four walls, each with its own keep-list.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use skirmishkit_core::geometry::{loft, primitives::rect_section};
use skirmishkit_core::{ConfigError, Result, Shape, Solid, DEFAULT_SEGMENTS};
use tracing::debug;

use crate::dimensions::{ensure_fits, ensure_non_negative, ensure_positive};
use crate::flat_roof::{FlatRoofParams, InteriorSpan};
use crate::part::{Assembly, AssemblyPlan, Feature, Part, PartBuilder};
use crate::profiles::{arch_panel, cut_panel, PanelProfile};
use crate::series::{Edge, KeepList, Scene, SeriesLayout, SeriesParams};

/// Height the interior cavity extends above the wall tops
const CAVITY_CLEARANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BunkerParams {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal wall thickness
    pub wall_width: f64,
    pub floor_height: f64,
    /// How far the wall tops are pulled in on every side
    pub inset: f64,

    pub render_cut_panels: bool,
    pub render_panel_details: bool,
    pub panel_length: f64,
    /// Panel depth into the wall
    pub panel_width: f64,
    pub panel_padding: f64,
    pub arch_padding_top: f64,
    pub arch_padding_sides: f64,
    pub arch_inner_height: f64,
    pub inner_arch_top: f64,
    pub inner_arch_sides: f64,
    /// Recess slots to keep; empty keeps all
    pub cut_panel_keep: KeepList,
    /// Decorated panel slots to keep; empty keeps all
    pub detail_panel_keep: KeepList,

    pub segments: usize,
}

impl Default for BunkerParams {
    fn default() -> Self {
        Self {
            length: 150.0,
            width: 140.0,
            height: 75.0,
            wall_width: 5.0,
            floor_height: 3.0,
            inset: 5.0,
            render_cut_panels: true,
            render_panel_details: true,
            panel_length: 28.0,
            panel_width: 6.0,
            panel_padding: 4.0,
            arch_padding_top: 3.0,
            arch_padding_sides: 3.0,
            arch_inner_height: 6.0,
            inner_arch_top: 5.0,
            inner_arch_sides: 4.0,
            cut_panel_keep: KeepList::all(),
            detail_panel_keep: KeepList::all(),
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl BunkerParams {
    /// Angle between the outer walls and the ground, in degrees
    pub fn wall_angle(&self) -> f64 {
        self.height.atan2(self.inset).to_degrees()
    }

    /// Inward lean of the wall panels, in degrees
    pub fn panel_tilt(&self) -> f64 {
        90.0 - self.wall_angle()
    }

    pub fn panel_height(&self) -> f64 {
        self.height - self.panel_padding
    }

    /// Room left inside the wall tops, where a roof's hatches go
    pub fn interior_span(&self) -> InteriorSpan {
        let shrink = 2.0 * (self.inset + self.wall_width);
        InteriorSpan {
            length: self.length - shrink,
            width: self.width - shrink,
        }
    }

    pub fn panel_profile(&self) -> PanelProfile {
        PanelProfile {
            length: self.panel_length,
            width: self.panel_width,
            height: self.panel_height(),
            arch_padding_top: self.arch_padding_top,
            arch_padding_sides: self.arch_padding_sides,
            arch_inner_height: self.arch_inner_height,
            inner_arch_top: self.inner_arch_top,
            inner_arch_sides: self.inner_arch_sides,
            segments: self.segments,
        }
    }

    /// Panel layout along the walls, filtered by `keep`
    pub fn panel_series(&self, keep: &KeepList) -> SeriesParams {
        SeriesParams {
            outer_length: self.length,
            outer_width: self.width,
            component_length: self.panel_length,
            padding: self.panel_padding,
            length_offset: self.panel_padding * 2.0,
            width_offset: None,
            x_translate: self.length / 2.0,
            y_translate: self.width / 2.0,
            z_translate: 0.0,
            edges: Edge::ALL.to_vec(),
            keep: keep.clone(),
        }
    }

    /// Roof parameters matching this bunker's footprint and walls
    pub fn matching_roof(&self) -> FlatRoofParams {
        FlatRoofParams {
            length: self.length,
            width: self.width,
            inset: self.inset,
            wall_width: self.wall_width,
            panel_length: self.panel_length,
            panel_padding: self.panel_padding,
            interior: Some(self.interior_span()),
            ..FlatRoofParams::default()
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
                    "bunker {name} must be positive, got {value}"
                )));
            }
        }
        ensure_positive("wall_width", self.wall_width)?;
        ensure_non_negative("floor_height", self.floor_height)?;
        ensure_non_negative("inset", self.inset)?;
        ensure_fits("floor_height", self.floor_height, "bunker height", self.height)?;

        let interior = self.interior_span();
        if interior.length <= 0.0 || interior.width <= 0.0 {
            return Err(ConfigError::InvalidDimensions(format!(
                "walls leave no interior ({} x {})",
                interior.length, interior.width
            )));
        }

        if self.render_cut_panels || self.render_panel_details {
            ensure_positive("panel_length", self.panel_length)?;
            ensure_positive("panel_width", self.panel_width)?;
            ensure_non_negative("panel_padding", self.panel_padding)?;
            ensure_fits("panel_padding", self.panel_padding, "bunker height", self.height)?;
        }

        if self.render_panel_details {
            ensure_fits(
                "inner_arch_sides",
                self.inner_arch_sides,
                "panel_length",
                self.panel_length,
            )?;
            ensure_fits(
                "inner_arch_top",
                self.inner_arch_top,
                "panel height",
                self.panel_height(),
            )?;
        }

        Ok(())
    }
}

/// Sub-solids of a bunker, as cached by `make`
#[derive(Debug, Clone)]
pub struct BunkerFeatures {
    pub body: Shape,
    pub panel_cuts: Option<Scene<Shape>>,
    pub panels: Option<Scene<Shape>>,
}

#[derive(Debug)]
pub struct BunkerBuilder;

pub type Bunker = Part<BunkerBuilder>;

impl Part<BunkerBuilder> {
    /// Room left inside the wall tops
    pub fn interior_span(&self) -> InteriorSpan {
        self.params().interior_span()
    }
}

impl BunkerBuilder {
    /// Sloped shell minus the cavity above the floor
    fn body(params: &BunkerParams) -> Result<Shape> {
        let (hl, hw, h) = (params.length / 2.0, params.width / 2.0, params.height);
        let bottom = -h / 2.0;
        // Horizontal pull-in of the outer wall face at height `z`
        let pull = |z: f64| params.inset * (z - bottom) / h;

        let shell = loft(&[
            rect_section(hl, hw, bottom),
            rect_section(hl - params.inset, hw - params.inset, h / 2.0),
        ])?;

        let floor = bottom + params.floor_height;
        let top = h / 2.0 + CAVITY_CLEARANCE;
        let ww = params.wall_width;
        let cavity = loft(&[
            rect_section(hl - pull(floor) - ww, hw - pull(floor) - ww, floor),
            rect_section(hl - pull(top) - ww, hw - pull(top) - ww, top),
        ])?;

        Ok(shell.cut(&cavity))
    }

    /// Stand a panel template on the wall base and lean it with the wall
    fn stand(template: Shape, params: &BunkerParams) -> Shape {
        template
            .rotated_about(Vector3::x(), Point3::origin(), params.panel_tilt())
            .translated(Vector3::new(0.0, 0.0, -params.height / 2.0))
    }

    fn panel_cuts(params: &BunkerParams) -> Result<Scene<Shape>> {
        let profile = params.panel_profile();
        let template = cut_panel(&profile)?.translated(Vector3::new(
            0.0,
            -profile.width / 2.0,
            profile.height / 2.0,
        ));
        let template = Self::stand(template, params);
        let layout = SeriesLayout::new(params.panel_series(&params.cut_panel_keep))?;
        Ok(layout.scene(&template))
    }

    fn panels(params: &BunkerParams) -> Result<Scene<Shape>> {
        let profile = params.panel_profile();
        // Relief faces local -Y; turn it to face out of the wall.
        let template = arch_panel(&profile)?
            .translated(Vector3::new(0.0, profile.width / 2.0, profile.height / 2.0))
            .rotated_about(Vector3::z(), Point3::origin(), 180.0);
        let template = Self::stand(template, params);
        let layout = SeriesLayout::new(params.panel_series(&params.detail_panel_keep))?;
        Ok(layout.scene(&template))
    }
}

impl PartBuilder for BunkerBuilder {
    type Params = BunkerParams;
    type Cache = BunkerFeatures;
    const NAME: &'static str = "Bunker";

    fn make(params: &BunkerParams) -> Result<BunkerFeatures> {
        params.validate()?;
        debug!(
            "bunker: wall angle {:.2} deg, interior {:?}",
            params.wall_angle(),
            params.interior_span()
        );

        let body = Self::body(params)?;
        let panel_cuts = if params.render_cut_panels {
            Some(Self::panel_cuts(params)?)
        } else {
            None
        };
        let panels = if params.render_panel_details {
            Some(Self::panels(params)?)
        } else {
            None
        };

        Ok(BunkerFeatures {
            body,
            panel_cuts,
            panels,
        })
    }

    fn assemble(_params: &BunkerParams, cache: &BunkerFeatures) -> (Shape, AssemblyPlan) {
        let mut assembly = Assembly::new(cache.body.clone());
        if let Some(cuts) = &cache.panel_cuts {
            assembly = assembly.cut(Feature::PanelCuts, cuts.solid());
        }
        if let Some(panels) = &cache.panels {
            assembly = assembly.fuse(Feature::Panels, panels.solid());
        }
        assembly.finish()
    }

    fn dimensions(params: &BunkerParams) -> (f64, f64, f64) {
        (params.length, params.width, params.height)
    }
}
