//! Row and color assignment.
//!
//! Both mappings are pure functions of the *set* of identifiers in a
//! timeline: record order, duplicates and frequency do not matter, so the
//! same schedule always produces the same chart.

use std::collections::{BTreeMap, HashMap};

use gantt_plot_protocol::Color;
use serde::Serialize;

use crate::model::{IDLE_IDENTIFIER, Timeline};
use crate::palette::{Colormap, Viridis};

/// Fill used for idle intervals.
pub const IDLE_COLOR: Color = Color::GREY;
/// Fill used when an identifier has no assigned color.
pub const FALLBACK_COLOR: Color = Color::BLACK;

/// Distinct identifiers of a timeline in ascending order.
///
/// Position in this set is the identifier's row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentifierSet {
    ids: Vec<i64>,
}

impl IdentifierSet {
    pub fn from_timeline(timeline: &Timeline) -> Self {
        Self::from_identifiers(timeline.records().iter().map(|r| r.identifier))
    }

    pub fn from_identifiers(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut ids: Vec<i64> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains_idle(&self) -> bool {
        self.ids.binary_search(&IDLE_IDENTIFIER).is_ok()
    }

    /// Identifiers that get a palette color, i.e. everything except idle.
    pub fn non_idle(&self) -> impl Iterator<Item = i64> + '_ {
        self.iter().filter(|&id| id != IDLE_IDENTIFIER)
    }
}

/// Direct identifier -> row index lookup, built once from an [`IdentifierSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAssignment {
    rows: HashMap<i64, usize>,
}

impl RowAssignment {
    pub fn new(identifiers: &IdentifierSet) -> Self {
        let rows = identifiers
            .iter()
            .enumerate()
            .map(|(row, id)| (id, row))
            .collect();
        Self { rows }
    }

    pub fn row(&self, identifier: i64) -> Option<usize> {
        self.rows.get(&identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Identifier -> fill color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorAssignment {
    colors: BTreeMap<i64, Color>,
}

impl ColorAssignment {
    /// Idle gets [`IDLE_COLOR`]; the `k` remaining identifiers take
    /// `max(1, k)` evenly spaced viridis samples in ascending order.
    pub fn new(identifiers: &IdentifierSet) -> Self {
        Self::with_colormap(identifiers, &Viridis)
    }

    pub fn with_colormap(identifiers: &IdentifierSet, colormap: &impl Colormap) -> Self {
        let non_idle = identifiers.non_idle().count();
        let palette = colormap.sample(non_idle.max(1));

        let mut colors: BTreeMap<i64, Color> =
            identifiers.non_idle().zip(palette).collect();
        if identifiers.contains_idle() {
            colors.insert(IDLE_IDENTIFIER, IDLE_COLOR);
        }

        Self { colors }
    }

    pub fn get(&self, identifier: i64) -> Option<Color> {
        self.colors.get(&identifier).copied()
    }

    /// Assigned color, or [`FALLBACK_COLOR`] for an unknown identifier.
    pub fn color(&self, identifier: i64) -> Color {
        self.get(identifier).unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Rows and colors for one timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifiers: IdentifierSet,
    pub rows: RowAssignment,
    pub colors: ColorAssignment,
}

impl Assignment {
    pub fn new(timeline: &Timeline) -> Self {
        let identifiers = IdentifierSet::from_timeline(timeline);
        let rows = RowAssignment::new(&identifiers);
        let colors = ColorAssignment::new(&identifiers);
        tracing::debug!(
            identifiers = identifiers.len(),
            idle = identifiers.contains_idle(),
            "assigned rows and colors"
        );
        Self {
            identifiers,
            rows,
            colors,
        }
    }
}
