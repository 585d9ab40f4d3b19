//! View surface trait and the frame handed to views

use std::sync::Arc;

use super::plan::{RenderOp, ViewKind};
use crate::resolver::Resolver;
use crate::selection::SelectionState;

/// Numeric readouts next to the year slider
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readouts {
    pub year: Option<i32>,
    pub temperature: Option<f64>,
    pub calcite: Option<f64>,
}

impl Readouts {
    pub fn compute(selection: &SelectionState, resolver: &Resolver) -> Self {
        let (Some(region), Some(year)) = (selection.region.as_deref(), selection.year) else {
            return Self::default();
        };

        Self {
            year: Some(year),
            temperature: resolver.temperature_at(region, year),
            calcite: resolver.calcite_at(region, selection.level, year),
        }
    }
}

/// Everything a view needs to update itself for one event
#[derive(Debug, Clone)]
pub struct ViewFrame {
    pub selection: SelectionState,
    pub resolver: Arc<Resolver>,
    pub readouts: Readouts,
}

impl ViewFrame {
    pub fn new(selection: SelectionState, resolver: Arc<Resolver>) -> Self {
        let readouts = Readouts::compute(&selection, &resolver);
        Self { selection, resolver, readouts }
    }
}

/// Trait for views driven by the synchronizer
pub trait ViewSurface: Send + Sync {
    /// Which view this is
    fn kind(&self) -> ViewKind;

    /// Called for every plan entry addressed to this view kind
    fn on_selection_changed(&self, op: RenderOp, frame: &ViewFrame);
}
