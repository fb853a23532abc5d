use serde::Serialize;

// ---------------------------------------------------------------------------
// Chart metadata handed to the charting collaborator
// ---------------------------------------------------------------------------

/// How a view wants to be drawn. Rendering itself lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Scatter,
    Bar,
    HorizontalBar,
    Histogram,
    Box,
}

/// Axis bindings and styling hints for one view.
///
/// Titles are the base titles; the UI layer appends its own qualifiers
/// (e.g. the current gender selection) when labelling a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Column the charting layer should color series by, if any.
    pub color_by: Option<&'static str>,
}
