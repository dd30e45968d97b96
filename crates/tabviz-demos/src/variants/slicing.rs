//! Slicing-category variants: label/position selection, the two-phase
//! conditional row filter, and column subset selection.

use tabviz_core::{
    CellValue, ColumnMeta, DemoEvent, EventLog, Generation, Millis, RowId, RowRecord,
    TableSnapshot,
};

// ---------------------------------------------------------------------------
// Label/position selection (loc_iloc)
// ---------------------------------------------------------------------------

/// Fixed 4x3 value grid for the selection demo.
pub const SELECTION_GRID: [[i64; 3]; 4] = [
    [15, 42, 88],
    [73, 29, 56],
    [91, 34, 67],
    [28, 55, 19],
];

/// Row labels: identical to the row positions, which is the point the demo
/// makes (a default integer index).
pub const SELECTION_ROW_LABELS: [u32; 4] = [0, 1, 2, 3];

/// Column labels: letters, so position and label visibly differ.
pub const SELECTION_COL_LABELS: [char; 3] = ['A', 'B', 'C'];

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverTarget {
    #[default]
    None,
    Row(usize),
    Col(usize),
    Cell { row: usize, col: usize },
}

/// A pair of equivalent selection expressions: one position-based, one
/// label-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionPair {
    pub position: String,
    pub label: String,
}

/// Pure pointer-driven exploration: hovering a row, column, or cell derives
/// the equivalent `iloc`/`loc` expressions. Nothing is ever mutated.
#[derive(Debug, Default)]
pub struct LabelPosition {
    hover: HoverTarget,
}

impl LabelPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self) -> HoverTarget {
        self.hover
    }

    pub fn grid(&self) -> &'static [[i64; 3]; 4] {
        &SELECTION_GRID
    }

    pub fn value_at(&self, row: usize, col: usize) -> Option<i64> {
        SELECTION_GRID.get(row)?.get(col).copied()
    }

    /// Hover a row index. Out-of-range indices are ignored.
    pub fn hover_row(&mut self, row: usize) {
        if row < SELECTION_GRID.len() {
            self.hover = HoverTarget::Row(row);
        }
    }

    /// Hover a column index. Out-of-range indices are ignored.
    pub fn hover_col(&mut self, col: usize) {
        if col < SELECTION_COL_LABELS.len() {
            self.hover = HoverTarget::Col(col);
        }
    }

    /// Hover a single cell. Out-of-range indices are ignored.
    pub fn hover_cell(&mut self, row: usize, col: usize) {
        if row < SELECTION_GRID.len() && col < SELECTION_COL_LABELS.len() {
            self.hover = HoverTarget::Cell { row, col };
        }
    }

    /// Pointer left the table; back to no selection.
    pub fn clear_hover(&mut self) {
        self.hover = HoverTarget::None;
    }

    pub fn reset(&mut self) {
        self.clear_hover();
    }

    /// The equivalent position/label expressions for the current hover
    /// target, or `None` when nothing is hovered.
    pub fn expression(&self) -> Option<ExpressionPair> {
        match self.hover {
            HoverTarget::None => None,
            HoverTarget::Row(row) => Some(ExpressionPair {
                position: format!("df.iloc[{row}]"),
                label: format!("df.loc[{}]", SELECTION_ROW_LABELS[row]),
            }),
            HoverTarget::Col(col) => Some(ExpressionPair {
                position: format!("df.iloc[:, {col}]"),
                label: format!("df.loc[:, '{}']", SELECTION_COL_LABELS[col]),
            }),
            HoverTarget::Cell { row, col } => Some(ExpressionPair {
                position: format!("df.iloc[{row}, {col}]"),
                label: format!(
                    "df.loc[{}, '{}']",
                    SELECTION_ROW_LABELS[row], SELECTION_COL_LABELS[col]
                ),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Conditional row filter (query) -- two-phase timed transition
// ---------------------------------------------------------------------------

/// Deterministic fixture values for the filter demo.
pub const QUERY_VALUES: [i64; 8] = [10, 60, 20, 80, 90, 15, 55, 5];

/// The fixed predicate threshold: a row passes when `value > 50`.
pub const QUERY_THRESHOLD: i64 = 50;

/// Delay between phase 1 (marking) and phase 2 (removal).
pub const PHASE_TWO_DELAY_MS: Millis = 500;

/// Fixture for the filter demo; row ids are the original positions.
pub fn query_fixture() -> TableSnapshot {
    TableSnapshot::from_rows(
        QUERY_VALUES
            .iter()
            .enumerate()
            .map(|(i, &v)| RowRecord::new(RowId(i as u32), v))
            .collect(),
    )
}

/// Filter phase. `Idle -> Marked -> Filtered`, and back to `Idle` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    /// Phase 1: every row judged pass/fail, nothing removed yet.
    Marked,
    /// Phase 2: failing rows removed.
    Filtered,
}

/// Pass/fail coloring of one row under the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMark {
    Neutral,
    Pass,
    Fail,
}

/// The two-phase conditional row filter.
///
/// `trigger` marks rows synchronously and hands back a generation token;
/// the caller schedules [`QueryFilter::apply_phase_two`] with that token
/// [`PHASE_TWO_DELAY_MS`] later. Reset bumps the generation, so a pending
/// phase-2 task that fires afterwards fails the token check and is a
/// silent no-op -- phase 2 can never land on a snapshot that was reset or
/// replaced in the meantime.
#[derive(Debug)]
pub struct QueryFilter {
    table: TableSnapshot,
    phase: QueryPhase,
    generation: Generation,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self {
            table: query_fixture(),
            phase: QueryPhase::Idle,
            generation: 0,
        }
    }

    pub fn table(&self) -> &TableSnapshot {
        &self.table
    }

    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether a value passes the fixed predicate.
    pub fn passes(value: &CellValue) -> bool {
        value.as_int().is_some_and(|v| v > QUERY_THRESHOLD)
    }

    /// Phase 1: judge every row against the predicate. Valid only from
    /// `Idle`; returns the generation token to schedule phase 2 with, or
    /// `None` if the filter is already triggered.
    pub fn trigger(&mut self, events: &mut EventLog) -> Option<Generation> {
        if self.phase != QueryPhase::Idle {
            return None;
        }
        self.phase = QueryPhase::Marked;
        events.push(DemoEvent::QueryPhaseAdvanced { phase: 1 });
        Some(self.generation)
    }

    /// Phase 2: remove failing rows. A stale token (the filter was reset
    /// since the task was scheduled) or a wrong phase makes this a silent
    /// no-op; returns whether the phase was applied.
    pub fn apply_phase_two(&mut self, token: Generation, events: &mut EventLog) -> bool {
        if token != self.generation || self.phase != QueryPhase::Marked {
            return false;
        }
        self.table.retain_rows(|r| Self::passes(&r.value));
        self.phase = QueryPhase::Filtered;
        events.push(DemoEvent::QueryPhaseAdvanced { phase: 2 });
        true
    }

    /// Back to `Idle` with the full fixture. Bumping the generation stales
    /// any phase-2 task still in flight.
    pub fn reset(&mut self) {
        self.table = query_fixture();
        self.phase = QueryPhase::Idle;
        self.generation += 1;
    }

    /// Pass/fail coloring for every current row. Neutral while idle.
    pub fn marks(&self) -> Vec<(RowId, RowMark)> {
        self.table
            .rows()
            .iter()
            .map(|r| {
                let mark = match self.phase {
                    QueryPhase::Idle => RowMark::Neutral,
                    _ if Self::passes(&r.value) => RowMark::Pass,
                    _ => RowMark::Fail,
                };
                (r.id, mark)
            })
            .collect()
    }

    /// The integer values still present, in row order.
    pub fn surviving_values(&self) -> Vec<i64> {
        self.table
            .rows()
            .iter()
            .filter_map(|r| r.value.as_int())
            .collect()
    }
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Column subset (subset)
// ---------------------------------------------------------------------------

/// Fixture columns: three kept, one not.
pub fn subset_columns() -> Vec<ColumnMeta> {
    vec![
        ColumnMeta::new("Name", true),
        ColumnMeta::new("Age", true),
        ColumnMeta::new("Garbage", false),
        ColumnMeta::new("Score", true),
    ]
}

/// Reversible toggle: while selected, only `keep` columns render; toggling
/// off restores all columns in their original order.
#[derive(Debug)]
pub struct ColumnSubset {
    columns: Vec<ColumnMeta>,
    selected: bool,
}

impl ColumnSubset {
    pub fn new() -> Self {
        Self {
            columns: subset_columns(),
            selected: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Toggle the subset selection. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    /// Every fixture column, regardless of selection.
    pub fn all_columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    /// The columns currently rendered, in original order.
    pub fn visible_columns(&self) -> Vec<&ColumnMeta> {
        self.columns
            .iter()
            .filter(|c| !self.selected || c.keep)
            .collect()
    }

    pub fn reset(&mut self) {
        self.selected = false;
    }
}

impl Default for ColumnSubset {
    fn default() -> Self {
        Self::new()
    }
}
