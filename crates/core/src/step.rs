// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checklist rows and progress values

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Status of a single checklist row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepStatus {
    /// Not started yet
    Pending,
    /// Being performed right now
    Current,
    /// Already finished
    Completed,
}

impl StepStatus {
    /// Status of checklist row `row` while the task is at `current`
    pub fn for_row(row: usize, current: usize) -> Self {
        match row.cmp(&current) {
            Ordering::Less => StepStatus::Completed,
            Ordering::Equal => StepStatus::Current,
            Ordering::Greater => StepStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }

    pub fn is_current(&self) -> bool {
        matches!(self, StepStatus::Current)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Pending => write!(f, "pending"),
            StepStatus::Current => write!(f, "current"),
            StepStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One displayed step of an in-progress task
///
/// The terminal "done" label never becomes a row. Fields are read-only so
/// the connector style always agrees with the row status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRow {
    label: String,
    status: StepStatus,
    has_connector: bool,
}

impl ChecklistRow {
    pub fn new(label: impl Into<String>, status: StepStatus, has_connector: bool) -> Self {
        Self {
            label: label.into(),
            status,
            has_connector,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn status(&self) -> StepStatus {
        self.status
    }

    /// Whether a connector is drawn below this row (false for the last row)
    pub fn has_connector(&self) -> bool {
        self.has_connector
    }

    /// Connector is drawn in the completed style
    pub fn connector_active(&self) -> bool {
        self.has_connector && self.status.is_completed()
    }
}

impl Serialize for ChecklistRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ChecklistRow", 4)?;
        s.serialize_field("label", &self.label)?;
        s.serialize_field("status", &self.status)?;
        s.serialize_field("hasConnector", &self.has_connector)?;
        s.serialize_field("connectorActive", &self.connector_active())?;
        s.end()
    }
}

/// Exact completion ratio `(current + 1) / total`
///
/// Kept as a fraction so that comparisons and equality are exact;
/// `1/3` and `2/6` compare equal.
#[derive(Debug, Clone, Copy, Eq)]
pub struct ProgressFraction {
    numerator: usize,
    denominator: usize,
}

impl ProgressFraction {
    /// Progress of a task at `current_step_index` out of `total_steps`.
    ///
    /// Returns `None` for a zero denominator or a numerator above it.
    pub fn new(current_step_index: usize, total_steps: usize) -> Option<Self> {
        let numerator = current_step_index.checked_add(1)?;
        if total_steps == 0 || numerator > total_steps {
            return None;
        }
        Some(Self {
            numerator,
            denominator: total_steps,
        })
    }

    pub fn numerator(&self) -> usize {
        self.numerator
    }

    pub fn denominator(&self) -> usize {
        self.denominator
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Whole percentage, rounded half up
    pub fn percent(&self) -> u32 {
        self.scaled(100) as u32
    }

    /// `self * width`, rounded half up (used for bar cells)
    pub fn scaled(&self, width: usize) -> usize {
        let num = self.numerator as u128 * width as u128;
        let den = self.denominator as u128;
        ((2 * num + den) / (2 * den)) as usize
    }
}

impl PartialEq for ProgressFraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for ProgressFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProgressFraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for ProgressFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Serialize for ProgressFraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ProgressFraction", 3)?;
        s.serialize_field("numerator", &self.numerator)?;
        s.serialize_field("denominator", &self.denominator)?;
        s.serialize_field("value", &self.as_f64())?;
        s.end()
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
