//! # Part Lifecycle
//!
//! Every part goes through the same two-phase protocol:
//!
//! 1. [`Part::make`] validates the parameters and builds every sub-solid
//!    (body, feature scenes), caching them.
//! 2. [`Part::build`] combines the cached sub-solids in a fixed order and
//!    records the steps as an [`AssemblyPlan`].
//!
//! Any access through [`Part::params_mut`] drops the part back to
//! *unbuilt*, so geometry cached for old parameters is never combined.

use std::fmt;

use skirmishkit_core::{BuildError, Result, Shape, Solid};
use tracing::{debug, info};

/// Boolean step applied while assembling a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// First solid of the assembly
    Base,
    /// Add material
    Union,
    /// Remove material
    Cut,
}

/// Sub-solid taking part in an assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Body,
    Tiles,
    HatchCuts,
    Hatches,
    Holes,
    PanelCuts,
    Panels,
    Lid,
    HandleGroove,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feature::Body => "body",
            Feature::Tiles => "tiles",
            Feature::HatchCuts => "hatch cuts",
            Feature::Hatches => "hatches",
            Feature::Holes => "holes",
            Feature::PanelCuts => "panel cuts",
            Feature::Panels => "panels",
            Feature::Lid => "lid",
            Feature::HandleGroove => "handle groove",
        };
        write!(f, "{name}")
    }
}

/// Ordered record of the boolean steps that produced a result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyPlan {
    steps: Vec<(Operation, Feature)>,
}

impl AssemblyPlan {
    pub fn steps(&self) -> &[(Operation, Feature)] {
        &self.steps
    }

    /// Features in the order they were applied
    pub fn features(&self) -> Vec<Feature> {
        self.steps.iter().map(|(_, feature)| *feature).collect()
    }

    /// Step index of `feature`, if it was applied
    pub fn position(&self, feature: Feature) -> Option<usize> {
        self.steps.iter().position(|(_, f)| *f == feature)
    }

    /// Operation applied for `feature`, if it was applied
    pub fn operation(&self, feature: Feature) -> Option<Operation> {
        self.steps
            .iter()
            .find(|(_, f)| *f == feature)
            .map(|(op, _)| *op)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Running boolean composition that records its own plan
///
/// Empty operands are skipped and not recorded.
#[derive(Debug, Clone)]
pub struct Assembly<S> {
    result: S,
    plan: AssemblyPlan,
}

impl<S: Solid> Assembly<S> {
    pub fn new(body: S) -> Self {
        Self {
            result: body,
            plan: AssemblyPlan {
                steps: vec![(Operation::Base, Feature::Body)],
            },
        }
    }

    pub fn fuse(self, feature: Feature, solid: &S) -> Self {
        self.fuse_or_cut(feature, solid, false)
    }

    pub fn cut(self, feature: Feature, solid: &S) -> Self {
        self.fuse_or_cut(feature, solid, true)
    }

    /// Fuse or cut depending on `cut`
    pub fn fuse_or_cut(mut self, feature: Feature, solid: &S, cut: bool) -> Self {
        let operation = if cut { Operation::Cut } else { Operation::Union };
        if solid.is_empty() {
            debug!("assembly: {} is empty, skipping {:?}", feature, operation);
            return self;
        }
        self.result = if cut {
            self.result.cut(solid)
        } else {
            self.result.fuse(solid)
        };
        self.plan.steps.push((operation, feature));
        self
    }

    pub fn finish(self) -> (S, AssemblyPlan) {
        (self.result, self.plan)
    }
}

/// Geometry recipe behind a [`Part`]
pub trait PartBuilder {
    /// Parameter set, validated once per `make`
    type Params: Clone + Default + fmt::Debug;
    /// Sub-solids produced by `make`
    type Cache: fmt::Debug;

    /// Name used in logs and errors
    const NAME: &'static str;

    /// Validate `params` and build every sub-solid
    fn make(params: &Self::Params) -> Result<Self::Cache>;

    /// Combine the cached sub-solids into the final compound
    fn assemble(params: &Self::Params, cache: &Self::Cache) -> (Shape, AssemblyPlan);

    /// Nominal `(length, width, height)`
    fn dimensions(params: &Self::Params) -> (f64, f64, f64);
}

#[derive(Debug)]
enum PartState<C> {
    Unbuilt,
    Prepared(C),
    Built(C, Shape, AssemblyPlan),
}

/// A part under construction
#[derive(Debug)]
pub struct Part<B: PartBuilder> {
    params: B::Params,
    state: PartState<B::Cache>,
}

impl<B: PartBuilder> Default for Part<B> {
    fn default() -> Self {
        Self::new(B::Params::default())
    }
}

impl<B: PartBuilder> Part<B> {
    pub fn new(params: B::Params) -> Self {
        Self {
            params,
            state: PartState::Unbuilt,
        }
    }

    pub fn params(&self) -> &B::Params {
        &self.params
    }

    /// Mutable access to the parameters; discards any cached geometry
    pub fn params_mut(&mut self) -> &mut B::Params {
        if !matches!(self.state, PartState::Unbuilt) {
            debug!("{}: parameters changed, dropping cached geometry", B::NAME);
        }
        self.state = PartState::Unbuilt;
        &mut self.params
    }

    /// Validate the parameters and build every sub-solid
    ///
    /// Always recomputes from scratch. On failure the part is left unbuilt.
    pub fn make(&mut self) -> Result<()> {
        info!("{}: make", B::NAME);
        self.state = PartState::Unbuilt;
        let cache = B::make(&self.params)?;
        self.state = PartState::Prepared(cache);
        Ok(())
    }

    /// Combine the cached sub-solids into the final compound
    ///
    /// Fails with [`BuildError::NotPrepared`] unless `make` ran since the
    /// last parameter change. Building twice returns the same result.
    pub fn build(&mut self) -> Result<&Shape> {
        let state = std::mem::replace(&mut self.state, PartState::Unbuilt);
        self.state = match state {
            PartState::Unbuilt => {
                return Err(BuildError::NotPrepared {
                    part: B::NAME.to_string(),
                }
                .into())
            }
            PartState::Prepared(cache) => {
                info!("{}: build", B::NAME);
                let (result, plan) = B::assemble(&self.params, &cache);
                debug!("{}: assembled in {} step(s)", B::NAME, plan.len());
                PartState::Built(cache, result, plan)
            }
            built @ PartState::Built(..) => built,
        };
        match &self.state {
            PartState::Built(_, result, _) => Ok(result),
            _ => Err(BuildError::NotPrepared {
                part: B::NAME.to_string(),
            }
            .into()),
        }
    }

    /// The built compound, if `build` has run
    pub fn result(&self) -> Option<&Shape> {
        match &self.state {
            PartState::Built(_, result, _) => Some(result),
            _ => None,
        }
    }

    /// Steps that produced the built compound
    pub fn plan(&self) -> Option<&AssemblyPlan> {
        match &self.state {
            PartState::Built(_, _, plan) => Some(plan),
            _ => None,
        }
    }

    /// Sub-solids cached by `make`
    pub fn cache(&self) -> Option<&B::Cache> {
        match &self.state {
            PartState::Prepared(cache) | PartState::Built(cache, ..) => Some(cache),
            PartState::Unbuilt => None,
        }
    }

    pub fn is_prepared(&self) -> bool {
        !matches!(self.state, PartState::Unbuilt)
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, PartState::Built(..))
    }

    /// Nominal `(length, width, height)`
    pub fn dimensions(&self) -> (f64, f64, f64) {
        B::dimensions(&self.params)
    }

    pub fn name(&self) -> &'static str {
        B::NAME
    }
}
