//! Cleaning-category variants: materialization, duplicate removal, null
//! handling, coercion, casting, array conversion, and label extraction.
//!
//! Each variant is a self-contained state machine over its own fixture.
//! Fixtures are constants (or constructors over constants); a transition
//! only ever touches the instance's snapshot. Dropping the instance and
//! rebuilding it from the fixture is a full reset -- that is what the
//! manager does on every operation switch.

use tabviz_core::{
    CellValue, DemoEvent, EventLog, RowId, RowRecord, RowStatus, TableSnapshot,
};

// ---------------------------------------------------------------------------
// Read-load (read_csv)
// ---------------------------------------------------------------------------

/// One row of the read-load fixture. This variant demonstrates
/// materialization, not transformation, so it keeps the source's multi-field
/// shape instead of the single-value [`RowRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvRow {
    pub id: u32,
    pub name: &'static str,
    pub score: u32,
}

pub const READ_CSV_SOURCE: &str = "data.csv";
pub const READ_CSV_COLUMNS: [&str; 3] = ["ID", "Name", "Score"];
pub const READ_CSV_ROWS: [CsvRow; 3] = [
    CsvRow { id: 1, name: "Alice", score: 95 },
    CsvRow { id: 2, name: "Bob", score: 87 },
    CsvRow { id: 3, name: "Charlie", score: 92 },
];

/// `Collapsed <-> Expanded` state machine. Expanding materializes the fixed
/// CSV fixture into the rendered table; no data is ever mutated.
#[derive(Debug, Default)]
pub struct ReadLoad {
    expanded: bool,
}

impl ReadLoad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// `Collapsed -> Expanded`. Emits [`DemoEvent::FixtureLoaded`], which
    /// drives the transient success banner. Re-expanding is a no-op.
    pub fn expand(&mut self, events: &mut EventLog) -> bool {
        if self.expanded {
            return false;
        }
        self.expanded = true;
        events.push(DemoEvent::FixtureLoaded {
            rows: READ_CSV_ROWS.len(),
        });
        true
    }

    /// `Expanded -> Collapsed`.
    pub fn reset(&mut self) {
        self.expanded = false;
    }

    /// The materialized rows. Only rendered while expanded.
    pub fn rows(&self) -> &'static [CsvRow] {
        &READ_CSV_ROWS
    }
}

// ---------------------------------------------------------------------------
// Remove duplicate rows (drop_duplicates)
// ---------------------------------------------------------------------------

/// Row id 3 duplicates row id 1's value in the fixture.
pub const DUPLICATE_ROW: RowId = RowId(3);

/// Fixture: four rows, one duplicating an earlier value.
pub fn duplicate_fixture() -> TableSnapshot {
    TableSnapshot::from_rows(vec![
        RowRecord::new(RowId(1), "Alice"),
        RowRecord::new(RowId(2), "Bob"),
        RowRecord::new(RowId(3), "Alice").with_status(RowStatus::Duplicate),
        RowRecord::new(RowId(4), "Charlie"),
    ])
}

/// Removes rows whose values duplicate earlier rows. Irreversible within
/// the variant; a fresh instance restores the fixture.
#[derive(Debug)]
pub struct DropDuplicates {
    initial: TableSnapshot,
    table: TableSnapshot,
}

impl DropDuplicates {
    pub fn new() -> Self {
        Self::from_table(duplicate_fixture())
    }

    /// Build over an arbitrary initial snapshot (used by property tests).
    pub fn from_table(table: TableSnapshot) -> Self {
        Self {
            initial: table.clone(),
            table,
        }
    }

    pub fn table(&self) -> &TableSnapshot {
        &self.table
    }

    /// Remove every later-duplicate row, keeping first occurrences in
    /// order. Re-invoking on an already-deduplicated table is a no-op.
    /// Returns how many rows this call removed.
    pub fn execute(&mut self, events: &mut EventLog) -> usize {
        let removed = self.table.remove_duplicate_values();
        for id in &removed {
            events.push(DemoEvent::RowRemoved { id: *id });
        }
        removed.len()
    }

    /// Restore the initial snapshot.
    pub fn reset(&mut self) {
        self.table = self.initial.clone();
    }
}

impl Default for DropDuplicates {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Null handling (isnull / fillna / dropna)
// ---------------------------------------------------------------------------

/// Shared fixture for the null-handling variants: four rows, two null.
pub fn null_fixture() -> TableSnapshot {
    TableSnapshot::from_rows(vec![
        RowRecord::new(RowId(1), 100),
        RowRecord::null(RowId(2)),
        RowRecord::new(RowId(3), 300),
        RowRecord::null(RowId(4)),
    ])
}

/// Detection toggle: labels every row TRUE/FALSE by nullness without
/// mutating anything.
#[derive(Debug)]
pub struct DetectNull {
    table: TableSnapshot,
    show_detection: bool,
}

impl DetectNull {
    pub fn new() -> Self {
        Self {
            table: null_fixture(),
            show_detection: false,
        }
    }

    pub fn table(&self) -> &TableSnapshot {
        &self.table
    }

    pub fn detection_active(&self) -> bool {
        self.show_detection
    }

    /// Toggle detection. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.show_detection = !self.show_detection;
        self.show_detection
    }

    /// Per-row TRUE/FALSE verdicts, present only while detection is active.
    pub fn verdicts(&self) -> Option<Vec<(RowId, bool)>> {
        self.show_detection.then(|| {
            self.table
                .rows()
                .iter()
                .map(|r| (r.id, r.is_null()))
                .collect()
        })
    }

    /// Number of null rows found (reported while detection is active).
    pub fn null_count(&self) -> usize {
        self.table.null_count()
    }

    pub fn reset(&mut self) {
        self.show_detection = false;
    }
}

impl Default for DetectNull {
    fn default() -> Self {
        Self::new()
    }
}

/// The value written into filled rows.
pub const FILL_VALUE: i64 = 0;

/// Fill transition: every null row becomes `0` and is tagged `filled`.
/// Disabled once no null rows remain.
#[derive(Debug)]
pub struct FillNull {
    initial: TableSnapshot,
    table: TableSnapshot,
}

impl FillNull {
    pub fn new() -> Self {
        Self::from_table(null_fixture())
    }

    pub fn from_table(table: TableSnapshot) -> Self {
        Self {
            initial: table.clone(),
            table,
        }
    }

    pub fn table(&self) -> &TableSnapshot {
        &self.table
    }

    /// Whether the execute transition is enabled.
    pub fn can_execute(&self) -> bool {
        self.table.null_count() > 0
    }

    /// Fill every null row. No-op (returns false) when already filled.
    pub fn execute(&mut self, events: &mut EventLog) -> bool {
        let count = self.table.null_count();
        if count == 0 {
            return false;
        }
        self.table.for_each_row_mut(|row| {
            if row.is_null() {
                row.value = CellValue::Int(FILL_VALUE);
                row.filled = true;
            }
        });
        events.push(DemoEvent::NullsFilled { count });
        true
    }

    /// Rows written by the fill transition.
    pub fn filled_count(&self) -> usize {
        self.table.rows().iter().filter(|r| r.filled).count()
    }

    pub fn reset(&mut self) {
        self.table = self.initial.clone();
    }
}

impl Default for FillNull {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop transition: removes every null row, once. Survivor order is
/// preserved; a second execute is a no-op.
#[derive(Debug)]
pub struct DropNullRows {
    initial: TableSnapshot,
    table: TableSnapshot,
}

impl DropNullRows {
    pub fn new() -> Self {
        Self::from_table(null_fixture())
    }

    pub fn from_table(table: TableSnapshot) -> Self {
        Self {
            initial: table.clone(),
            table,
        }
    }

    pub fn table(&self) -> &TableSnapshot {
        &self.table
    }

    pub fn can_execute(&self) -> bool {
        self.table.null_count() > 0
    }

    /// Remove null rows. Returns how many rows were dropped (0 on repeat).
    pub fn execute(&mut self, events: &mut EventLog) -> usize {
        let count = self.table.null_count();
        if count == 0 {
            return 0;
        }
        self.table.retain_rows(|r| !r.is_null());
        events.push(DemoEvent::RowsDropped { count });
        count
    }

    /// Rows dropped so far, relative to the initial snapshot.
    pub fn dropped_count(&self) -> usize {
        self.initial.row_count() - self.table.row_count()
    }

    pub fn reset(&mut self) {
        self.table = self.initial.clone();
    }
}

impl Default for DropNullRows {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Coerce to number (to_numeric)
// ---------------------------------------------------------------------------

/// Display marker written over unparseable values.
pub const NAN_MARKER: &str = "NaN";

/// Fixture: `"123"`, `"abc"` (flagged as the coercion error), `"456"`.
pub fn numeric_fixture() -> TableSnapshot {
    TableSnapshot::from_rows(vec![
        RowRecord::new(RowId(1), "123"),
        RowRecord::new(RowId(2), "abc").with_error(),
        RowRecord::new(RowId(3), "456"),
    ])
}

/// Coercion: error rows' display values become the literal `NaN`; numeric
/// rows are untouched. Idempotent.
#[derive(Debug)]
pub struct ToNumeric {
    initial: TableSnapshot,
    table: TableSnapshot,
}

impl ToNumeric {
    pub fn new() -> Self {
        let table = numeric_fixture();
        Self {
            initial: table.clone(),
            table,
        }
    }

    pub fn table(&self) -> &TableSnapshot {
        &self.table
    }

    /// Apply coercion. Returns how many rows changed this call (0 on
    /// repeat, making re-invocation a no-op).
    pub fn execute(&mut self, events: &mut EventLog) -> usize {
        let mut changed = 0;
        self.table.for_each_row_mut(|row| {
            if row.is_error && row.value != CellValue::from(NAN_MARKER) {
                row.value = CellValue::from(NAN_MARKER);
                changed += 1;
            }
        });
        if changed > 0 {
            events.push(DemoEvent::CoercionApplied { errors: changed });
        }
        changed
    }

    /// Whether every error row already displays `NaN`.
    pub fn is_coerced(&self) -> bool {
        self.table
            .rows()
            .iter()
            .filter(|r| r.is_error)
            .all(|r| r.value == CellValue::from(NAN_MARKER))
    }

    pub fn reset(&mut self) {
        self.table = self.initial.clone();
    }
}

impl Default for ToNumeric {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Cast type (astype)
// ---------------------------------------------------------------------------

pub const CAST_VALUES: [f64; 3] = [12.99, 45.50, 7.01];

/// Numeric dtype the cast-type demo toggles between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericDtype {
    Float64,
    Int64,
}

impl NumericDtype {
    pub fn label(self) -> &'static str {
        match self {
            NumericDtype::Float64 => "float64",
            NumericDtype::Int64 => "int64",
        }
    }
}

/// Reversible display-mode toggle over three fixed decimals. Int-like mode
/// truncates toward zero; the constants themselves never change.
#[derive(Debug, Default)]
pub struct CastType {
    converted: bool,
}

impl CastType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dtype(&self) -> NumericDtype {
        if self.converted {
            NumericDtype::Int64
        } else {
            NumericDtype::Float64
        }
    }

    /// Flip between float-like and int-like display. Returns the new dtype.
    pub fn toggle(&mut self) -> NumericDtype {
        self.converted = !self.converted;
        self.dtype()
    }

    /// The three values as rendered under the current dtype.
    pub fn display_values(&self) -> Vec<String> {
        CAST_VALUES
            .iter()
            .map(|v| match self.dtype() {
                NumericDtype::Float64 => format!("{v:.2}"),
                NumericDtype::Int64 => format!("{}", v.trunc() as i64),
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.converted = false;
    }
}

// ---------------------------------------------------------------------------
// Fixed-array conversion (np_array)
// ---------------------------------------------------------------------------

pub const ARRAY_ELEMENTS: [i64; 3] = [1, 2, 3];

/// Structural layout of the fixed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceLayout {
    /// Stacked, independently boxed elements.
    #[default]
    List,
    /// Contiguous, bordered cells.
    Array,
}

/// Reversible toggle between the two layouts of the same three elements.
#[derive(Debug, Default)]
pub struct FixedArray {
    layout: SequenceLayout,
}

impl FixedArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> SequenceLayout {
        self.layout
    }

    pub fn toggle(&mut self) -> SequenceLayout {
        self.layout = match self.layout {
            SequenceLayout::List => SequenceLayout::Array,
            SequenceLayout::Array => SequenceLayout::List,
        };
        self.layout
    }

    pub fn elements(&self) -> &'static [i64] {
        &ARRAY_ELEMENTS
    }

    pub fn reset(&mut self) {
        self.layout = SequenceLayout::List;
    }
}

// ---------------------------------------------------------------------------
// Column-labels extraction (columns)
// ---------------------------------------------------------------------------

pub const FRAME_COLUMNS: [&str; 3] = ["Name", "Age", "City"];

/// Reversible overlay of the derived label index. While active, the
/// underlying table recedes (non-interactive) but is not destroyed.
#[derive(Debug, Default)]
pub struct ColumnLabels {
    show_columns: bool,
}

impl ColumnLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extraction_active(&self) -> bool {
        self.show_columns
    }

    pub fn toggle(&mut self) -> bool {
        self.show_columns = !self.show_columns;
        self.show_columns
    }

    /// The derived read-only label sequence, present only while active.
    pub fn extracted(&self) -> Option<&'static [&'static str]> {
        self.show_columns.then_some(&FRAME_COLUMNS[..])
    }

    /// The pandas-style repr of the extracted index.
    pub fn index_repr(&self) -> String {
        let quoted: Vec<String> = FRAME_COLUMNS.iter().map(|c| format!("'{c}'")).collect();
        format!("Index([{}], dtype='object')", quoted.join(", "))
    }

    pub fn reset(&mut self) {
        self.show_columns = false;
    }
}
