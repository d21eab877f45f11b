//! # SkirmishKit Designer
//!
//! Parametric terrain parts built from CSG primitives. Every repeated
//! feature (roof hatches, hatch cut-outs, wall panels) goes through the same
//! perimeter layout: count how many components fit along each edge of a
//! span, center them, filter them through a keep-list and merge the
//! survivors into one compound.
//!
//! ## Components
//!
//! - **Dimensions**: pure span and offset arithmetic
//! - **Series**: the perimeter layout engine
//! - **Grid**: centered rectangular tiling
//! - **Profiles**: single templates (tiles, hatch cut-outs, arch panels)
//! - **Parts**: [`FlatRoof`], [`Bunker`] and [`Hatch`], all driven through
//!   the [`Part`] make/build protocol
//!
//! ## Architecture
//!
//! ```text
//! Part (make -> build)
//!   ├── Dimensions (spans, offsets)
//!   ├── Profiles (templates)
//!   │     └── Series / Grid (placement, filtering, merge)
//!   └── Assembly (fixed boolean order, recorded as a plan)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skirmishkit_designer::{FlatRoof, FlatRoofParams};
//!
//! let mut roof = FlatRoof::new(FlatRoofParams {
//!     render_tiles: true,
//!     ..FlatRoofParams::default()
//! });
//! roof.make()?;
//! let shape = roof.build()?;
//! ```

pub mod bunker;
pub mod dimensions;
pub mod flat_roof;
pub mod grid;
pub mod hatch;
pub mod part;
pub mod profiles;
pub mod series;

pub use bunker::{Bunker, BunkerBuilder, BunkerFeatures, BunkerParams};
pub use flat_roof::{
    EdgeTreatment, FlatRoof, FlatRoofBuilder, FlatRoofParams, InteriorSpan, RoofFeatures,
    TileMode,
};
pub use grid::{make_grid, GridParams};
pub use hatch::{Hatch, HatchBuilder, HatchFeatures, HatchParams};
pub use part::{Assembly, AssemblyPlan, Feature, Operation, Part, PartBuilder};
pub use profiles::PanelProfile;
pub use series::{Edge, KeepList, PlacementSlot, Scene, SeriesLayout, SeriesParams, SlotId};
