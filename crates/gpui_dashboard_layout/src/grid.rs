use std::num::NonZeroU16;

use serde::{Deserialize, Serialize};

use crate::{Breakpoints, LayoutError, LayoutSlot, SlotId, SlotSpan};

/// Widths at or below this are treated as mobile, matching `(max-width: 425px)`.
pub const MOBILE_MAX_WIDTH: f32 = 425.;

const EPSILON: f32 = 1e-4;

const DEFAULT_COLUMNS: NonZeroU16 = NonZeroU16::new(12).unwrap();

/// Column grid that slots are placed on. Always has at least one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: NonZeroU16,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl Grid {
    pub fn new(columns: u16) -> Result<Self, LayoutError> {
        NonZeroU16::new(columns)
            .map(|columns| Self { columns })
            .ok_or(LayoutError::EmptyGrid)
    }

    fn width(&self) -> f32 {
        self.columns.get() as f32
    }

    pub fn full_span(&self) -> SlotSpan {
        SlotSpan::Columns(self.width())
    }

    /// Whether the numeric spans add up to more than the grid's columns.
    pub fn row_overflows<'a>(&self, spans: impl IntoIterator<Item = &'a SlotSpan>) -> bool {
        let total: f32 = spans.into_iter().filter_map(SlotSpan::columns).sum();
        total > self.width() + EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    Wrap,
    NoWrap,
}

impl WrapMode {
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::NoWrap => "nowrap",
        }
    }
}

/// Mobile viewports stack their sibling sections, wider ones keep them on one row.
pub fn resolve_wrap_mode(is_mobile: bool) -> WrapMode {
    if is_mobile {
        WrapMode::Wrap
    } else {
        WrapMode::NoWrap
    }
}

pub fn is_mobile(width_px: f32) -> bool {
    width_px <= MOBILE_MAX_WIDTH
}

/// What to do when a slot's layout can't be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return the error to the caller.
    Strict,
    /// Log it and give the slot the full grid width.
    Degrade,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Degrade
        }
    }
}

/// A slot positioned on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub slot: SlotId,
    pub span: SlotSpan,
    pub row: usize,
    pub column_start: f32,
    /// Columns taken for flow purposes; content-sized cells take none.
    pub columns: f32,
}

impl Cell {
    /// Share of the row's width, `columns / grid.columns`.
    pub fn fraction(&self, grid: Grid) -> f32 {
        self.columns / grid.width()
    }
}

/// Result of one classification and resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub width_px: f32,
    pub breakpoint: String,
    pub wrap: WrapMode,
    pub grid: Grid,
    pub cells: Vec<Cell>,
}

impl Placement {
    pub fn rows(&self) -> usize {
        self.cells.last().map_or(0, |cell| cell.row + 1)
    }

    pub fn cell(&self, slot: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.slot.as_str() == slot)
    }
}

/// Classifies viewports and places slots on a [`Grid`].
#[derive(Debug, Clone, Default)]
pub struct LayoutComposer {
    pub breakpoints: Breakpoints,
    pub grid: Grid,
    pub policy: FailurePolicy,
}

impl LayoutComposer {
    pub fn new(breakpoints: Breakpoints, grid: Grid, policy: FailurePolicy) -> Self {
        Self {
            breakpoints,
            grid,
            policy,
        }
    }

    pub fn classify(&self, width_px: f32) -> &str {
        self.breakpoints.classify(width_px)
    }

    pub fn resolve_spans(
        &self,
        slots: &[LayoutSlot],
        active: &str,
    ) -> Result<Vec<(SlotId, SlotSpan)>, LayoutError> {
        slots
            .iter()
            .map(|slot| Ok((slot.id.clone(), self.resolve_span(slot, active)?)))
            .collect()
    }

    fn resolve_span(&self, slot: &LayoutSlot, active: &str) -> Result<SlotSpan, LayoutError> {
        match slot.resolve_span(&self.breakpoints, active, self.grid) {
            Ok(span) => Ok(span),
            Err(err) if self.policy == FailurePolicy::Degrade => {
                tracing::warn!(slot = %slot.id, breakpoint = active, "using full width: {err}");
                Ok(self.grid.full_span())
            }
            Err(err) => Err(err),
        }
    }

    /// Classifies `width_px` and flows the slots, sorted by their order, into rows.
    pub fn compose(&self, slots: &[LayoutSlot], width_px: f32) -> Result<Placement, LayoutError> {
        let breakpoint = self.classify(width_px);

        let mut resolved = slots
            .iter()
            .map(|slot| {
                let span = self.resolve_span(slot, breakpoint)?;
                let order = slot.resolve_order(&self.breakpoints, breakpoint);
                Ok((order, slot.id.clone(), span))
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        // Stable, so equal orders keep declaration order.
        resolved.sort_by_key(|(order, _, _)| *order);

        let cells = self.flow(resolved.into_iter().map(|(_, slot, span)| (slot, span)));

        tracing::debug!(
            width_px,
            breakpoint,
            rows = cells.last().map_or(0, |cell| cell.row + 1),
            "composed layout"
        );

        Ok(Placement {
            width_px,
            breakpoint: breakpoint.to_owned(),
            wrap: resolve_wrap_mode(is_mobile(width_px)),
            grid: self.grid,
            cells,
        })
    }

    fn flow(&self, spans: impl Iterator<Item = (SlotId, SlotSpan)>) -> Vec<Cell> {
        let total = self.grid.width();
        let mut cells = Vec::new();
        let mut row = 0;
        let mut column = 0.;

        for (slot, span) in spans {
            let mut columns = match span {
                SlotSpan::Columns(columns) => columns.min(total),
                SlotSpan::Auto => total - column,
                SlotSpan::Content => 0.,
            };

            // An auto cell on a full row wraps instead of collapsing to nothing.
            let row_is_full = span == SlotSpan::Auto && columns <= EPSILON;
            if column > 0. && (column + columns > total + EPSILON || row_is_full) {
                row += 1;
                column = 0.;
                if span == SlotSpan::Auto {
                    columns = total;
                }
            }

            cells.push(Cell {
                slot,
                span,
                row,
                column_start: column,
                columns,
            });
            column += columns;
        }

        cells
    }
}

pub fn resolve_spans(
    slots: &[LayoutSlot],
    active: &str,
    breakpoints: &Breakpoints,
) -> Result<Vec<(SlotId, SlotSpan)>, LayoutError> {
    let composer = LayoutComposer {
        breakpoints: breakpoints.clone(),
        grid: Grid::default(),
        policy: FailurePolicy::Strict,
    };
    composer.resolve_spans(slots, active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BASE, Breakpoint};

    fn breakpoints() -> Breakpoints {
        Breakpoints::new([
            Breakpoint::new("sm", 576.),
            Breakpoint::new("md", 768.),
            Breakpoint::new("lg", 992.),
        ])
        .unwrap()
    }

    fn composer(policy: FailurePolicy) -> LayoutComposer {
        LayoutComposer::new(breakpoints(), Grid::default(), policy)
    }

    fn columns() -> Vec<LayoutSlot> {
        vec![
            LayoutSlot::new("main").span("sm", 6.).span("md", 5.5).span("lg", 6.5),
            LayoutSlot::new("aside").span("sm", 6.).span("md", 6.5).span("lg", 5.5),
        ]
    }

    #[test]
    fn test_wrap_mode() {
        assert_eq!(resolve_wrap_mode(true), WrapMode::Wrap);
        assert_eq!(resolve_wrap_mode(false), WrapMode::NoWrap);
        assert_eq!(WrapMode::NoWrap.css_value(), "nowrap");
    }

    #[test]
    fn test_is_mobile_threshold() {
        assert!(is_mobile(320.));
        assert!(is_mobile(425.));
        assert!(!is_mobile(425.5));
        assert!(!is_mobile(f32::NAN));
    }

    #[test]
    fn test_resolve_spans_keeps_slot_order() {
        let spans = resolve_spans(&columns(), "md", &breakpoints()).unwrap();
        assert_eq!(
            spans,
            vec![
                (SlotId::new("main"), SlotSpan::Columns(5.5)),
                (SlotId::new("aside"), SlotSpan::Columns(6.5)),
            ]
        );
    }

    #[test]
    fn test_resolve_spans_fails_strictly() {
        let mut slots = columns();
        slots.push(LayoutSlot::new("orphan"));
        let err = resolve_spans(&slots, "lg", &breakpoints()).unwrap_err();
        assert!(matches!(err, LayoutError::UnresolvedSpan { slot } if slot.as_str() == "orphan"));
    }

    #[test]
    fn test_degraded_spans_use_full_width() {
        let slots = vec![LayoutSlot::new("orphan")];
        let spans = composer(FailurePolicy::Degrade)
            .resolve_spans(&slots, "lg")
            .unwrap();
        assert_eq!(spans[0].1, SlotSpan::Columns(12.));
    }

    #[test]
    fn test_columns_share_a_row_from_sm() {
        let composer = composer(FailurePolicy::Strict);

        for width in [600., 800., 1280.] {
            let placement = composer.compose(&columns(), width).unwrap();
            assert_eq!(placement.rows(), 1, "width {width}");
            let aside = placement.cell("aside").unwrap();
            let main = placement.cell("main").unwrap();
            assert_eq!(aside.column_start, main.columns);
        }

        let placement = composer.compose(&columns(), 1280.).unwrap();
        assert_eq!(placement.breakpoint, "lg");
        assert_eq!(placement.wrap, WrapMode::NoWrap);
        let main = placement.cell("main").unwrap();
        assert!((main.fraction(placement.grid) - 6.5 / 12.).abs() < 1e-6);
    }

    #[test]
    fn test_columns_stack_at_base() {
        let placement = composer(FailurePolicy::Strict)
            .compose(&columns(), 400.)
            .unwrap();
        assert_eq!(placement.breakpoint, BASE);
        assert_eq!(placement.wrap, WrapMode::Wrap);
        assert_eq!(placement.rows(), 2);
        assert!(placement.cells.iter().all(|cell| cell.column_start == 0.));
        assert!(placement.cells.iter().all(|cell| cell.columns == 12.));
    }

    #[test]
    fn test_order_rearranges_cells() {
        let slots = vec![
            LayoutSlot::new("a").span(BASE, 4.),
            LayoutSlot::new("b").span(BASE, 4.).order("md", -1),
            LayoutSlot::new("c").span(BASE, 4.),
        ];
        let composer = composer(FailurePolicy::Strict);

        let ids = |width| {
            composer
                .compose(&slots, width)
                .unwrap()
                .cells
                .into_iter()
                .map(|cell| cell.slot.to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(600.), ["a", "b", "c"]);
        assert_eq!(ids(800.), ["b", "a", "c"]);
    }

    #[test]
    fn test_overflowing_spans_wrap_to_next_row() {
        let slots = vec![
            LayoutSlot::new("a").span(BASE, 8.),
            LayoutSlot::new("b").span(BASE, 6.),
            LayoutSlot::new("c").span_kind(BASE, SlotSpan::Auto),
            LayoutSlot::new("d").span_kind(BASE, SlotSpan::Auto),
        ];
        let placement = composer(FailurePolicy::Strict).compose(&slots, 0.).unwrap();

        let rows: Vec<_> = placement.cells.iter().map(|cell| cell.row).collect();
        assert_eq!(rows, [0, 1, 1, 2]);
        assert_eq!(placement.cell("c").unwrap().columns, 6.);
        assert_eq!(placement.cell("d").unwrap().columns, 12.);
    }

    #[test]
    fn test_content_cells_take_no_columns() {
        let slots = vec![
            LayoutSlot::new("logo").span_kind(BASE, SlotSpan::Content),
            LayoutSlot::new("menu").span(BASE, 12.),
        ];
        let placement = composer(FailurePolicy::Strict).compose(&slots, 0.).unwrap();
        assert_eq!(placement.rows(), 1);
        assert_eq!(placement.cell("menu").unwrap().column_start, 0.);
    }

    #[test]
    fn test_grid_needs_a_column() {
        assert_eq!(Grid::new(0), Err(LayoutError::EmptyGrid));
        assert_eq!(Grid::new(12), Ok(Grid::default()));
        assert!(serde_json::from_str::<Grid>(r#"{ "columns": 0 }"#).is_err());

        let grid: Grid = serde_json::from_str(r#"{ "columns": 24 }"#).unwrap();
        assert_eq!(grid.full_span(), SlotSpan::Columns(24.));
    }

    #[test]
    fn test_row_overflow_property() {
        let grid = Grid::default();
        let fits = [SlotSpan::Columns(5.5), SlotSpan::Columns(6.5)];
        let overflows = [SlotSpan::Columns(6.5), SlotSpan::Columns(6.5)];
        assert!(!grid.row_overflows(&fits));
        assert!(grid.row_overflows(&overflows));
        assert!(!grid.row_overflows(&[SlotSpan::Auto, SlotSpan::Columns(12.)]));
    }

    #[test]
    fn test_dashboard_columns_fit_at_every_breakpoint() {
        let grid = Grid::default();
        let breakpoints = breakpoints();
        for active in ["sm", "md", "lg"] {
            let spans: Vec<_> = resolve_spans(&columns(), active, &breakpoints)
                .unwrap()
                .into_iter()
                .map(|(_, span)| span)
                .collect();
            assert!(!grid.row_overflows(&spans), "{active}");
        }
    }

    #[test]
    fn test_compose_is_repeatable() {
        let composer = composer(FailurePolicy::Strict);
        assert_eq!(
            composer.compose(&columns(), 900.).unwrap(),
            composer.compose(&columns(), 900.).unwrap()
        );
    }
}
