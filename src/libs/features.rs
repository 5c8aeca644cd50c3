//! Per-read feature extraction.
//!
//! An aligned read may carry gap symbols (`-`) where the reference has bases
//! the read lacks. The engine wants the read as sequenced, so gapped columns
//! are dropped from the bases and from every pulse-feature array with the same
//! mask, keeping the arrays position-aligned with the ungapped bases.

use std::collections::BTreeMap;

use super::channel::{ChannelSet, QvChannel};
use super::engine::{MappedRead, QvSequenceFeatures, Strand};
use super::error::{ModelError, Result};

pub const GAP: u8 = b'-';

/// Source-level view of an alignment store.
pub trait PulseSource {
    fn has_pulse_feature(&self, channel: QvChannel) -> bool;
}

impl PulseSource for ChannelSet {
    fn has_pulse_feature(&self, channel: QvChannel) -> bool {
        self.contains(channel)
    }
}

/// One alignment record of an alignment store.
pub trait AlignmentRecord {
    /// Aligned read bases; may contain [`GAP`].
    fn read(&self) -> &[u8];

    /// Pulse-feature values for `channel`, aligned to [`read`](Self::read).
    fn pulse_feature(&self, channel: QvChannel) -> Option<&[u8]>;

    fn read_length(&self) -> usize;

    /// `true` when the read aligns to the reverse strand of the reference.
    fn rc_ref_strand(&self) -> bool;

    fn reference_start(&self) -> i64;

    fn reference_end(&self) -> i64;

    fn reference_span(&self) -> i64 {
        self.reference_end() - self.reference_start()
    }
}

/// An in-memory alignment record.
#[derive(Debug, Clone, Default)]
pub struct AlnRecord {
    pub read: Vec<u8>,
    pub features: BTreeMap<QvChannel, Vec<u8>>,
    pub read_length: usize,
    pub rc: bool,
    pub reference_start: i64,
    pub reference_end: i64,
}

impl AlnRecord {
    /// A forward-strand record with no pulse features; `read_length` is the
    /// length of the aligned read.
    pub fn new(read: &[u8], reference_start: i64, reference_end: i64) -> Self {
        Self {
            read: read.to_vec(),
            features: BTreeMap::new(),
            read_length: read.len(),
            rc: false,
            reference_start,
            reference_end,
        }
    }

    pub fn with_feature(mut self, channel: QvChannel, values: &[u8]) -> Self {
        self.features.insert(channel, values.to_vec());
        self
    }

    pub fn reverse(mut self) -> Self {
        self.rc = true;
        self
    }

    /// The channels this record carries.
    pub fn channels(&self) -> ChannelSet {
        self.features.keys().copied().collect()
    }
}

impl AlignmentRecord for AlnRecord {
    fn read(&self) -> &[u8] {
        &self.read
    }

    fn pulse_feature(&self, channel: QvChannel) -> Option<&[u8]> {
        self.features.get(&channel).map(|v| v.as_slice())
    }

    fn read_length(&self) -> usize {
        self.read_length
    }

    fn rc_ref_strand(&self) -> bool {
        self.rc
    }

    fn reference_start(&self) -> i64 {
        self.reference_start
    }

    fn reference_end(&self) -> i64 {
        self.reference_end
    }
}

/// `true` at gapped columns of an aligned read.
pub fn gap_mask(read: &[u8]) -> Vec<bool> {
    read.iter().map(|&b| b == GAP).collect()
}

fn ungapped_feature(values: &[u8], mask: &[bool]) -> Vec<f32> {
    values
        .iter()
        .zip(mask)
        .filter(|&(_, &gapped)| !gapped)
        .map(|(&v, _)| v as f32)
        .collect()
}

/// Builds the engine's feature bundle for one record.
///
/// Channels in `required` are read from the record with gaps removed. The
/// others are zero-filled to `read_length()`, which may differ from the
/// ungapped length; the engine never reads them.
pub fn extract_features<A>(aln: &A, required: &ChannelSet) -> Result<QvSequenceFeatures>
where
    A: AlignmentRecord + ?Sized,
{
    let read = aln.read();
    let mask = gap_mask(read);
    let sequence: Vec<u8> = read
        .iter()
        .zip(&mask)
        .filter(|&(_, &gapped)| !gapped)
        .map(|(&b, _)| b)
        .collect();

    let channel_values = |channel: QvChannel| -> Result<Vec<f32>> {
        if !required.contains(channel) {
            return Ok(vec![0.0; aln.read_length()]);
        }
        let values = aln
            .pulse_feature(channel)
            .ok_or(ModelError::MissingFeature(channel))?;
        if values.len() != read.len() {
            return Err(ModelError::FeatureLength {
                channel,
                expected: read.len(),
                got: values.len(),
            });
        }
        Ok(ungapped_feature(values, &mask))
    };

    // positional, in bundle order
    Ok(QvSequenceFeatures::new(
        sequence,
        channel_values(QvChannel::InsertionQV)?,
        channel_values(QvChannel::SubstitutionQV)?,
        channel_values(QvChannel::DeletionQV)?,
        channel_values(QvChannel::DeletionTag)?,
        channel_values(QvChannel::MergeQV)?,
    ))
}

/// Wraps the record's features as a read placed relative to `window_start`.
pub fn extract_mapped_read<A>(
    aln: &A,
    required: &ChannelSet,
    window_start: i64,
) -> Result<MappedRead>
where
    A: AlignmentRecord + ?Sized,
{
    if aln.reference_span() <= 0 {
        return Err(ModelError::NonPositiveSpan {
            start: aln.reference_start(),
            end: aln.reference_end(),
        });
    }

    let features = extract_features(aln, required)?;
    Ok(MappedRead::new(
        features,
        Strand::from(aln.rc_ref_strand()),
        aln.reference_start() - window_start,
        aln.reference_end() - window_start,
    ))
}
