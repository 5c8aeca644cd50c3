use std::fmt;

use super::engine::QvModelParams;
use super::error::{ModelError, Result};

/// Length of the full parameter vector.
pub const NUM_PARAMS: usize = 14;

/// Scoring terms of the full parameter vector, by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamIndex {
    Match = 0,
    Mismatch,
    MismatchS,
    Branch,
    BranchS,
    DeletionN,
    DeletionWithTag,
    DeletionWithTagS,
    Nce,
    NceS,
    Merge,
    MergeS,
    Burst,
    BurstS,
}

impl ParamIndex {
    pub const ALL: [ParamIndex; NUM_PARAMS] = [
        ParamIndex::Match,
        ParamIndex::Mismatch,
        ParamIndex::MismatchS,
        ParamIndex::Branch,
        ParamIndex::BranchS,
        ParamIndex::DeletionN,
        ParamIndex::DeletionWithTag,
        ParamIndex::DeletionWithTagS,
        ParamIndex::Nce,
        ParamIndex::NceS,
        ParamIndex::Merge,
        ParamIndex::MergeS,
        ParamIndex::Burst,
        ParamIndex::BurstS,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParamIndex::Match => "Match",
            ParamIndex::Mismatch => "Mismatch",
            ParamIndex::MismatchS => "MismatchS",
            ParamIndex::Branch => "Branch",
            ParamIndex::BranchS => "BranchS",
            ParamIndex::DeletionN => "DeletionN",
            ParamIndex::DeletionWithTag => "DeletionWithTag",
            ParamIndex::DeletionWithTagS => "DeletionWithTagS",
            ParamIndex::Nce => "Nce",
            ParamIndex::NceS => "NceS",
            ParamIndex::Merge => "Merge",
            ParamIndex::MergeS => "MergeS",
            ParamIndex::Burst => "Burst",
            ParamIndex::BurstS => "BurstS",
        }
    }
}

impl fmt::Display for ParamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Projects a free-parameter vector onto the full parameter vector.
///
/// Free values are first scattered into a zero vector at `free_idx`; every
/// position is then taken from `full_start` where `fixed_mask` is set and from
/// the scattered vector otherwise. The result is narrowed to `f32`.
///
/// ```
/// use qvmodel::libs::params::{realize, NUM_PARAMS};
///
/// let mut mask = [true; NUM_PARAMS];
/// mask[3] = false;
/// let start = [1.0; NUM_PARAMS];
///
/// let full = realize(&[-2.5], &[3], &mask, &start).unwrap();
/// assert_eq!(full.as_array()[3], -2.5);
/// assert_eq!(full.as_array()[0], 1.0);
/// ```
pub fn realize(
    free_values: &[f64],
    free_idx: &[usize],
    fixed_mask: &[bool; NUM_PARAMS],
    full_start: &[f64; NUM_PARAMS],
) -> Result<QvModelParams> {
    if free_values.len() != free_idx.len() {
        return Err(ModelError::ParamCount {
            model: "free parameter list",
            expected: free_idx.len(),
            got: free_values.len(),
        });
    }

    let mut scattered = [0.0f64; NUM_PARAMS];
    for (&idx, &value) in free_idx.iter().zip(free_values) {
        if idx >= NUM_PARAMS {
            return Err(ModelError::ParamIndex(idx));
        }
        scattered[idx] = value;
    }

    let mut full = [0.0f32; NUM_PARAMS];
    for i in 0..NUM_PARAMS {
        let value = if fixed_mask[i] {
            full_start[i]
        } else {
            scattered[i]
        };
        full[i] = value as f32;
    }

    Ok(QvModelParams::from_array(full))
}
