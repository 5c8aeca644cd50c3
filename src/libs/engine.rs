//! Value types handed to the consensus scoring engine.
//!
//! The banded scorer itself lives outside this crate; these are the shapes it
//! accepts: the 14-term parameter vector, the scorer configuration, the
//! per-read feature bundle and the mapped read.

use super::params::{ParamIndex, NUM_PARAMS};

/// The full parameter vector, one single-precision weight per scoring term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QvModelParams([f32; NUM_PARAMS]);

impl QvModelParams {
    pub fn from_array(values: [f32; NUM_PARAMS]) -> Self {
        QvModelParams(values)
    }

    pub fn as_array(&self) -> &[f32; NUM_PARAMS] {
        &self.0
    }

    pub fn get(&self, idx: ParamIndex) -> f32 {
        self.0[idx as usize]
    }

    pub fn match_score(&self) -> f32 {
        self.get(ParamIndex::Match)
    }

    pub fn mismatch(&self) -> f32 {
        self.get(ParamIndex::Mismatch)
    }

    pub fn merge(&self) -> f32 {
        self.get(ParamIndex::Merge)
    }
}

/// Which DP moves the scorer may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveSet {
    Basic,
    #[default]
    AllMoves,
}

/// Band geometry for the banded recursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandingOptions {
    /// Diagonal width the band always keeps
    pub diagonal_cross: i32,
    /// Score drop below the column maximum at which the band is cut
    pub score_diff: i32,
}

impl BandingOptions {
    pub fn new(diagonal_cross: i32, score_diff: i32) -> Self {
        Self {
            diagonal_cross,
            score_diff,
        }
    }
}

impl Default for BandingOptions {
    fn default() -> Self {
        Self::new(4, 5)
    }
}

/// Scorer configuration: parameters, move set, banding and the fast-score cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuiverConfig {
    pub params: QvModelParams,
    pub moves: MoveSet,
    pub banding: BandingOptions,
    pub fast_score_threshold: f32,
}

impl QuiverConfig {
    pub fn new(
        params: QvModelParams,
        moves: MoveSet,
        banding: BandingOptions,
        fast_score_threshold: f32,
    ) -> Self {
        Self {
            params,
            moves,
            banding,
            fast_score_threshold,
        }
    }
}

/// Ungapped read bases plus the five positional QV arrays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QvSequenceFeatures {
    pub sequence: Vec<u8>,
    pub ins_qv: Vec<f32>,
    pub subs_qv: Vec<f32>,
    pub del_qv: Vec<f32>,
    pub del_tag: Vec<f32>,
    pub merge_qv: Vec<f32>,
}

impl QvSequenceFeatures {
    pub fn new(
        sequence: Vec<u8>,
        ins_qv: Vec<f32>,
        subs_qv: Vec<f32>,
        del_qv: Vec<f32>,
        del_tag: Vec<f32>,
        merge_qv: Vec<f32>,
    ) -> Self {
        Self {
            sequence,
            ins_qv,
            subs_qv,
            del_qv,
            del_tag,
            merge_qv,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The QV arrays in positional order.
    pub fn arrays(&self) -> [&[f32]; 5] {
        [
            &self.ins_qv,
            &self.subs_qv,
            &self.del_qv,
            &self.del_tag,
            &self.merge_qv,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl From<bool> for Strand {
    /// `true` means the read aligns to the reverse complement of the reference.
    fn from(rc: bool) -> Self {
        if rc {
            Strand::Reverse
        } else {
            Strand::Forward
        }
    }
}

/// A read placed on the template, in window-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedRead {
    pub features: QvSequenceFeatures,
    pub strand: Strand,
    pub template_start: i64,
    pub template_end: i64,
}

impl MappedRead {
    pub fn new(
        features: QvSequenceFeatures,
        strand: Strand,
        template_start: i64,
        template_end: i64,
    ) -> Self {
        Self {
            features,
            strand,
            template_start,
            template_end,
        }
    }
}
