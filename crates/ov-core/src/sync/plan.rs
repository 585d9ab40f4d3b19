//! Render plans: which view does what, in which order

/// The view surfaces driven by the synchronizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Map,
    TemperatureChart,
    CalciteChart,
    Readouts,
}

/// What a view has to do for one selection event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderOp {
    /// Rebuild from the filtered series, recomputing axis domains
    Redraw,
    /// Reposition the year marker inside the existing domains
    UpdateMarker,
    /// Refresh text only
    Refresh,
}

/// A state transition of the synchronizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    DatasetsLoaded,
    RegionSelected,
    /// `year_moved` is set when the level fell back to another year
    LevelChanged { year_moved: bool },
    YearChanged,
}

/// Build the ordered render plan for an event. Every `Redraw` comes before
/// any marker placement so markers are never positioned on stale domains.
/// Calcite markers are skipped when the region has no rows at the level.
pub fn render_plan(event: SelectionEvent, calcite_available: bool) -> Vec<(ViewKind, RenderOp)> {
    let mut plan = Vec::with_capacity(5);

    match event {
        SelectionEvent::DatasetsLoaded => {
            plan.push((ViewKind::Map, RenderOp::Redraw));
            return plan;
        }
        SelectionEvent::RegionSelected => {
            plan.push((ViewKind::TemperatureChart, RenderOp::Redraw));
            plan.push((ViewKind::CalciteChart, RenderOp::Redraw));
            plan.push((ViewKind::TemperatureChart, RenderOp::UpdateMarker));
        }
        SelectionEvent::LevelChanged { year_moved } => {
            plan.push((ViewKind::CalciteChart, RenderOp::Redraw));
            if year_moved {
                plan.push((ViewKind::TemperatureChart, RenderOp::UpdateMarker));
            }
        }
        SelectionEvent::YearChanged => {
            plan.push((ViewKind::TemperatureChart, RenderOp::UpdateMarker));
        }
    }

    if calcite_available {
        plan.push((ViewKind::CalciteChart, RenderOp::UpdateMarker));
    }
    plan.push((ViewKind::Readouts, RenderOp::Refresh));
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_redraws_first(plan: &[(ViewKind, RenderOp)]) {
        let last_redraw = plan.iter().rposition(|(_, op)| *op == RenderOp::Redraw);
        let first_update = plan.iter().position(|(_, op)| *op != RenderOp::Redraw);
        if let (Some(r), Some(u)) = (last_redraw, first_update) {
            assert!(r < u, "redraw after update in {:?}", plan);
        }
    }

    #[test]
    fn test_loaded_draws_map_only() {
        assert_eq!(
            render_plan(SelectionEvent::DatasetsLoaded, true),
            vec![(ViewKind::Map, RenderOp::Redraw)]
        );
    }

    #[test]
    fn test_region_redraws_both_charts() {
        let plan = render_plan(SelectionEvent::RegionSelected, true);
        assert_eq!(
            plan,
            vec![
                (ViewKind::TemperatureChart, RenderOp::Redraw),
                (ViewKind::CalciteChart, RenderOp::Redraw),
                (ViewKind::TemperatureChart, RenderOp::UpdateMarker),
                (ViewKind::CalciteChart, RenderOp::UpdateMarker),
                (ViewKind::Readouts, RenderOp::Refresh),
            ]
        );
        assert!(!plan.iter().any(|(kind, _)| *kind == ViewKind::Map));
    }

    #[test]
    fn test_level_touches_calcite_only() {
        let plan = render_plan(SelectionEvent::LevelChanged { year_moved: false }, true);
        assert!(plan.iter().all(|(kind, _)| matches!(kind, ViewKind::CalciteChart | ViewKind::Readouts)));
    }

    #[test]
    fn test_level_fallback_moves_temperature_marker() {
        let plan = render_plan(SelectionEvent::LevelChanged { year_moved: true }, true);
        assert_eq!(
            plan,
            vec![
                (ViewKind::CalciteChart, RenderOp::Redraw),
                (ViewKind::TemperatureChart, RenderOp::UpdateMarker),
                (ViewKind::CalciteChart, RenderOp::UpdateMarker),
                (ViewKind::Readouts, RenderOp::Refresh),
            ]
        );
    }

    #[test]
    fn test_year_never_redraws() {
        for available in [true, false] {
            let plan = render_plan(SelectionEvent::YearChanged, available);
            assert!(plan.iter().all(|(_, op)| *op != RenderOp::Redraw));
        }
    }

    #[test]
    fn test_missing_calcite_skips_marker() {
        let plan = render_plan(SelectionEvent::YearChanged, false);
        assert_eq!(
            plan,
            vec![
                (ViewKind::TemperatureChart, RenderOp::UpdateMarker),
                (ViewKind::Readouts, RenderOp::Refresh),
            ]
        );
    }

    #[test]
    fn test_every_plan_orders_redraws_first() {
        for event in [
            SelectionEvent::DatasetsLoaded,
            SelectionEvent::RegionSelected,
            SelectionEvent::LevelChanged { year_moved: false },
            SelectionEvent::LevelChanged { year_moved: true },
            SelectionEvent::YearChanged,
        ] {
            assert_redraws_first(&render_plan(event, true));
            assert_redraws_first(&render_plan(event, false));
        }
    }
}
