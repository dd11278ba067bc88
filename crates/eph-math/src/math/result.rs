//! Result records for an ephemerality computation.

use serde::{Deserialize, Serialize};

use super::core_length::CoreVariant;
use super::diagnostic::Diagnostic;

/// Core length and score for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreMeasure {
    /// Bins in the core. 0 only for an empty activity vector.
    pub length: usize,
    /// Ephemerality in [0, 1].
    pub score: f64,
}

/// Per-variant measures. Variants that were not requested are `None` and are
/// left out of the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<CoreMeasure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<CoreMeasure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<CoreMeasure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorted: Option<CoreMeasure>,
}

impl ResultSet {
    pub fn get(&self, variant: CoreVariant) -> Option<&CoreMeasure> {
        self.slot(variant).as_ref()
    }

    pub fn insert(&mut self, variant: CoreVariant, measure: CoreMeasure) {
        *self.slot_mut(variant) = Some(measure);
    }

    /// Present entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CoreVariant, &CoreMeasure)> + '_ {
        CoreVariant::ALL
            .into_iter()
            .filter_map(move |v| self.get(v).map(|m| (v, m)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, variant: CoreVariant) -> &Option<CoreMeasure> {
        match variant {
            CoreVariant::Left => &self.left,
            CoreVariant::Middle => &self.middle,
            CoreVariant::Right => &self.right,
            CoreVariant::Sorted => &self.sorted,
        }
    }

    fn slot_mut(&mut self, variant: CoreVariant) -> &mut Option<CoreMeasure> {
        match variant {
            CoreVariant::Left => &mut self.left,
            CoreVariant::Middle => &mut self.middle,
            CoreVariant::Right => &mut self.right,
            CoreVariant::Sorted => &mut self.sorted,
        }
    }
}

/// Results plus any diagnostics raised while computing them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EphemeralityReport {
    #[serde(flatten)]
    pub results: ResultSet,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl EphemeralityReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
