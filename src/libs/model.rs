//! QV scoring models.
//!
//! A model fixes which pulse-feature channels the scorer consumes and which
//! of the 14 scoring terms are tunable. The three variants differ only in
//! data, held in a [`ModelData`] table built once on first use.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use rayon::prelude::*;

use super::channel::{ChannelSet, QvChannel};
use super::engine::{BandingOptions, MappedRead, MoveSet, QuiverConfig, QvSequenceFeatures};
use super::error::{ModelError, Result};
use super::features::{self, AlignmentRecord, PulseSource};
use super::parameter_set::ParameterSet;
use super::params::{self, NUM_PARAMS};

/// Banding used by every fitted preset.
pub const PRESET_BANDING: (i32, i32) = (4, 5);

/// Fast-score cutoff used by every fitted preset.
pub const PRESET_FAST_SCORE_THRESHOLD: f32 = -12.5;

/// C2 chemistry fit (ref000001:10000-40000 @ 11x, logsigmoid objective).
/// Starting point for both QV-aware models.
const C2_FULL_START: [f64; NUM_PARAMS] = [
    0.2627555, -1.09688872, //
    -0.01637988, -0.60275947, //
    -0.02682689, -1.00012494, //
    0.06000148, -0.02579358, //
    -0.15864559, -0.04403654, //
    -1.02398814, -0.12135255, //
    0.0, 0.0,
];

/// Merge rate raised for the extra merging in the 'C' channel of XL-C2.
const ALL_QVS_XL_C2_BETA: [f64; 12] = [
    0.2627555,
    -1.09688872,
    -0.01637988,
    -0.60275947,
    -0.02682689,
    -1.00012494,
    0.06000148,
    -0.02579358,
    -0.15864559,
    -0.04403654,
    0.5,
    -0.12135255,
];

const NO_MERGE_QV_C2: [f64; 11] = [
    -0.032017275750000004,
    -0.9773427825000001,
    -0.01119015225,
    -0.630141005,
    -0.0347192135,
    -0.7697154425,
    -0.0003786080875,
    -0.02546157775,
    -0.21589032625,
    -0.04661514775,
    -1.0336790425,
];

const NO_QVS_C2: [f64; 5] = [
    -1.217303224,
    -0.37135539825,
    -0.2502089765,
    -0.25037076225,
    -0.37135539825,
];

/// Per-model data: channels, free/fixed split and the full start vector.
#[derive(Debug, Clone)]
pub struct ModelData {
    pub required: ChannelSet,
    pub free_idx: Vec<usize>,
    pub fixed_idx: Vec<usize>,
    pub fixed_mask: [bool; NUM_PARAMS],
    pub full_start: [f64; NUM_PARAMS],
    /// `full_start` restricted to the free indices; the training origin
    pub start: Vec<f64>,
}

impl ModelData {
    /// Derives the fixed indices, mask and training start from the free list.
    fn new(required: ChannelSet, free_idx: Vec<usize>, full_start: [f64; NUM_PARAMS]) -> Self {
        let mut fixed_mask = [true; NUM_PARAMS];
        for &i in &free_idx {
            fixed_mask[i] = false;
        }
        let fixed_idx = (0..NUM_PARAMS).filter(|&i| fixed_mask[i]).collect();
        let start = free_idx.iter().map(|&i| full_start[i]).collect();

        Self {
            required,
            free_idx,
            fixed_idx,
            fixed_mask,
            full_start,
            start,
        }
    }
}

lazy_static! {
    static ref ALL_QVS: ModelData = ModelData::new(
        ChannelSet::all(),
        // everything but the burst terms
        (0..12).collect(),
        C2_FULL_START,
    );
    static ref NO_MERGE_QV: ModelData = ModelData::new(
        [
            QvChannel::InsertionQV,
            QvChannel::SubstitutionQV,
            QvChannel::DeletionQV,
            QvChannel::DeletionTag,
        ]
        .into_iter()
        .collect(),
        // Match ..= Merge
        (0..=10).collect(),
        C2_FULL_START,
    );
    static ref NO_QVS: ModelData = {
        // Mismatch, Branch, DeletionN, Nce, Merge
        let free_idx = vec![1, 3, 5, 8, 10];
        let mut full_start = [0.0; NUM_PARAMS];
        for &i in &free_idx {
            full_start[i] = -10.0;
        }
        ModelData::new(ChannelSet::empty(), free_idx, full_start)
    };
}

/// A QV scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// Uses all five QV channels.
    AllQVs,
    /// For sources whose pulse data lack MergeQV.
    NoMergeQV,
    /// Base calls only; compatible with every source.
    NoQVs,
}

impl Model {
    /// Models in order of preference, richest first.
    pub const ALL: [Model; 3] = [Model::AllQVs, Model::NoMergeQV, Model::NoQVs];

    pub fn data(&self) -> &'static ModelData {
        match self {
            Model::AllQVs => &*ALL_QVS,
            Model::NoMergeQV => &*NO_MERGE_QV,
            Model::NoQVs => &*NO_QVS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Model::AllQVs => "AllQVsModel",
            Model::NoMergeQV => "NoMergeQVModel",
            Model::NoQVs => "NoQVsModel",
        }
    }

    pub fn required_features(&self) -> &'static ChannelSet {
        &self.data().required
    }

    pub fn free_param_idx(&self) -> &'static [usize] {
        &self.data().free_idx
    }

    pub fn fixed_param_idx(&self) -> &'static [usize] {
        &self.data().fixed_idx
    }

    pub fn fixed_param_mask(&self) -> &'static [bool; NUM_PARAMS] {
        &self.data().fixed_mask
    }

    pub fn num_free_params(&self) -> usize {
        self.data().free_idx.len()
    }

    pub fn full_start(&self) -> &'static [f64; NUM_PARAMS] {
        &self.data().full_start
    }

    pub fn start(&self) -> &'static [f64] {
        &self.data().start
    }

    /// Whether `source` carries every channel this model reads.
    pub fn is_compatible_with<S: PulseSource + ?Sized>(&self, source: &S) -> bool {
        self.required_features()
            .iter()
            .all(|c| source.has_pulse_feature(c))
    }

    pub fn extract_features<A>(&self, aln: &A) -> Result<QvSequenceFeatures>
    where
        A: AlignmentRecord + ?Sized,
    {
        features::extract_features(aln, self.required_features())
    }

    /// Places a clipped alignment in template space, counted from `window_start`.
    pub fn extract_mapped_read<A>(&self, aln: &A, window_start: i64) -> Result<MappedRead>
    where
        A: AlignmentRecord + ?Sized,
    {
        features::extract_mapped_read(aln, self.required_features(), window_start)
    }

    /// [`extract_mapped_read`](Self::extract_mapped_read) over a batch of
    /// records, in parallel. Output order follows `alns`.
    pub fn extract_mapped_reads<A>(&self, alns: &[A], window_start: i64) -> Result<Vec<MappedRead>>
    where
        A: AlignmentRecord + Sync,
    {
        alns.par_iter()
            .map(|aln| {
                self.extract_mapped_read(aln, window_start).inspect_err(|e| {
                    log::warn!("{}: {}", self.name(), e);
                })
            })
            .collect()
    }

    /// Projects `free` onto the full vector and wraps it as a scorer config.
    pub fn params_from_array(
        &self,
        free: &[f64],
        banding: BandingOptions,
        fast_score_threshold: f32,
    ) -> Result<ParameterSet> {
        if free.len() != self.num_free_params() {
            return Err(ModelError::ParamCount {
                model: self.name(),
                expected: self.num_free_params(),
                got: free.len(),
            });
        }

        let data = self.data();
        let qv_params = params::realize(free, &data.free_idx, &data.fixed_mask, &data.full_start)?;
        log::debug!("{}: realized {:?}", self.name(), qv_params.as_array());

        Ok(ParameterSet::new(
            *self,
            QuiverConfig::new(qv_params, MoveSet::AllMoves, banding, fast_score_threshold),
        ))
    }

    fn preset(&self, free: &[f64]) -> Result<ParameterSet> {
        let (diagonal_cross, score_diff) = PRESET_BANDING;
        self.params_from_array(
            free,
            BandingOptions::new(diagonal_cross, score_diff),
            PRESET_FAST_SCORE_THRESHOLD,
        )
    }

    /// The model's canonical fitted parameter set.
    pub fn c2(&self) -> Result<ParameterSet> {
        match self {
            Model::AllQVs => self.preset(self.start()),
            Model::NoMergeQV => self.preset(&NO_MERGE_QV_C2),
            Model::NoQVs => self.preset(&NO_QVS_C2),
        }
    }

    /// The training starting point, packaged with preset banding.
    pub fn start_preset(&self) -> Result<ParameterSet> {
        self.preset(self.start())
    }
}

/// XL-C2 chemistry adjustment of the [`Model::AllQVs`] C2 fit.
pub fn all_qvs_xl_c2_beta() -> Result<ParameterSet> {
    Model::AllQVs.preset(&ALL_QVS_XL_C2_BETA)
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Model {
    type Err = anyhow::Error;

    /// Accepts `AllQVs` as well as `AllQVsModel`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.strip_suffix("Model").unwrap_or(s);
        match name {
            "AllQVs" => Ok(Model::AllQVs),
            "NoMergeQV" => Ok(Model::NoMergeQV),
            "NoQVs" => Ok(Model::NoQVs),
            _ => Err(anyhow::anyhow!("Unrecognized model: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::features::AlnRecord;
    use approx::assert_relative_eq;

    #[test]
    fn test_free_and_fixed_partition() {
        for model in Model::ALL {
            let free = model.free_param_idx();
            let fixed = model.fixed_param_idx();
            assert_eq!(free.len() + fixed.len(), NUM_PARAMS, "{}", model);

            let mask = model.fixed_param_mask();
            for i in 0..NUM_PARAMS {
                assert_eq!(mask[i], !free.contains(&i), "{} idx {}", model, i);
                assert_eq!(mask[i], fixed.contains(&i), "{} idx {}", model, i);
            }
        }
    }

    #[test]
    fn test_free_counts() {
        assert_eq!(Model::AllQVs.num_free_params(), 12);
        assert_eq!(Model::NoMergeQV.num_free_params(), 11);
        assert_eq!(Model::NoQVs.num_free_params(), 5);
        assert_eq!(Model::AllQVs.fixed_param_idx(), &[12, 13]);
        assert_eq!(Model::NoQVs.free_param_idx(), &[1, 3, 5, 8, 10]);
    }

    #[test]
    fn test_no_qvs_full_start() {
        let full = Model::NoQVs.full_start();
        for i in 0..NUM_PARAMS {
            let expected = if [1, 3, 5, 8, 10].contains(&i) {
                -10.0
            } else {
                0.0
            };
            assert_eq!(full[i], expected);
        }
        assert_eq!(Model::NoQVs.start(), &[-10.0; 5]);
    }

    #[test]
    fn test_round_trip_from_start() {
        for model in Model::ALL {
            let ps = model.start_preset().unwrap();
            let arr = ps.config.params.as_array();
            for i in 0..NUM_PARAMS {
                assert_relative_eq!(arr[i], model.full_start()[i] as f32);
            }
        }
    }

    #[test]
    fn test_free_values_land_on_free_indices() {
        let model = Model::NoQVs;
        let ps = model
            .params_from_array(&[1.0, 2.0, 3.0, 4.0, 5.0], BandingOptions::default(), -1.0)
            .unwrap();
        let arr = ps.config.params.as_array();
        assert_eq!(arr[1], 1.0);
        assert_eq!(arr[3], 2.0);
        assert_eq!(arr[5], 3.0);
        assert_eq!(arr[8], 4.0);
        assert_eq!(arr[10], 5.0);
        for &i in model.fixed_param_idx() {
            assert_eq!(arr[i], 0.0);
        }
        assert_eq!(ps.config.fast_score_threshold, -1.0);
        assert_eq!(ps.config.moves, MoveSet::AllMoves);
    }

    #[test]
    fn test_wrong_length_rejected() {
        for model in Model::ALL {
            let n = model.num_free_params();
            for len in [0, n - 1, n + 1] {
                let res = model.params_from_array(&vec![0.0; len], BandingOptions::default(), -12.5);
                assert_eq!(
                    res.unwrap_err(),
                    ModelError::ParamCount {
                        model: model.name(),
                        expected: n,
                        got: len,
                    }
                );
            }
        }
    }

    #[test]
    fn test_presets() {
        let c2 = Model::AllQVs.c2().unwrap();
        assert_eq!(c2.model, Model::AllQVs);
        assert_eq!(c2.config.banding, BandingOptions::new(4, 5));
        assert_eq!(c2.config.fast_score_threshold, -12.5);
        assert_relative_eq!(c2.config.params.match_score(), 0.2627555);
        assert_relative_eq!(c2.config.params.merge(), -1.02398814);

        let xl = all_qvs_xl_c2_beta().unwrap();
        assert_eq!(xl.model, Model::AllQVs);
        assert_eq!(xl.config.params.merge(), 0.5);
        assert_eq!(xl.config.params.match_score(), c2.config.params.match_score());

        let nm = Model::NoMergeQV.c2().unwrap();
        assert_relative_eq!(nm.config.params.merge(), -1.0336790425);
        // MergeS is fixed for NoMergeQV and comes from the full start
        assert_relative_eq!(nm.config.params.as_array()[11], -0.12135255);

        let nq = Model::NoQVs.c2().unwrap();
        assert_relative_eq!(nq.config.params.mismatch(), -1.217303224);
        assert_eq!(nq.config.params.match_score(), 0.0);
    }

    #[test]
    fn test_compatibility() {
        let all = ChannelSet::all();
        let no_merge = ChannelSet::parse_list("InsertionQV,SubstitutionQV,DeletionQV,DeletionTag")
            .unwrap();
        let merge_only = ChannelSet::parse_list("MergeQV").unwrap();

        assert!(Model::AllQVs.is_compatible_with(&all));
        assert!(!Model::AllQVs.is_compatible_with(&no_merge));
        assert!(Model::NoMergeQV.is_compatible_with(&all));
        assert!(Model::NoMergeQV.is_compatible_with(&no_merge));
        assert!(!Model::NoMergeQV.is_compatible_with(&merge_only));
        for source in [all, no_merge, merge_only, ChannelSet::empty()] {
            assert!(Model::NoQVs.is_compatible_with(&source));
        }
    }

    #[test]
    fn test_model_extracts_its_channels() {
        let aln = AlnRecord::new(b"AC-GT", 10, 14)
            .with_feature(QvChannel::InsertionQV, &[1, 2, 0, 3, 4])
            .with_feature(QvChannel::SubstitutionQV, &[5, 6, 0, 7, 8])
            .with_feature(QvChannel::DeletionQV, &[9, 9, 0, 9, 9])
            .with_feature(QvChannel::DeletionTag, b"AA-AA");

        let feats = Model::NoMergeQV.extract_features(&aln).unwrap();
        assert_eq!(feats.ins_qv, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(feats.merge_qv, vec![0.0; 5]);

        // AllQVs needs MergeQV, which this record lacks
        assert!(Model::AllQVs.extract_features(&aln).is_err());

        let feats = Model::NoQVs.extract_features(&aln).unwrap();
        assert_eq!(feats.sequence, b"ACGT".to_vec());
        assert_eq!(feats.ins_qv, vec![0.0; 5]);
    }

    #[test]
    fn test_extract_mapped_reads_batch() {
        let alns: Vec<AlnRecord> = (0..50)
            .map(|i| AlnRecord::new(b"ACGT", 100 + i, 104 + i))
            .collect();
        let reads = Model::NoQVs.extract_mapped_reads(&alns, 100).unwrap();
        assert_eq!(reads.len(), 50);
        for (i, read) in reads.iter().enumerate() {
            assert_eq!(read.template_start, i as i64);
            assert_eq!(read.template_end, i as i64 + 4);
        }

        let mut bad = alns.clone();
        bad[7].reference_end = bad[7].reference_start;
        assert_eq!(
            Model::NoQVs.extract_mapped_reads(&bad, 100).unwrap_err(),
            ModelError::NonPositiveSpan {
                start: 107,
                end: 107,
            }
        );
    }

    #[test]
    fn test_model_names() {
        for model in Model::ALL {
            assert_eq!(model.name().parse::<Model>().unwrap(), model);
        }
        assert_eq!("NoQVs".parse::<Model>().unwrap(), Model::NoQVs);
        assert!("SomeQVs".parse::<Model>().is_err());
    }
}
