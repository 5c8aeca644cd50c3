use std::fmt;
use std::str::FromStr;

use super::error::ModelError;

/// The per-base quality channels a pulse source may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QvChannel {
    InsertionQV,
    SubstitutionQV,
    DeletionQV,
    DeletionTag,
    MergeQV,
}

impl QvChannel {
    /// All channels, in the positional order of the engine's feature bundle.
    pub const ALL: [QvChannel; 5] = [
        QvChannel::InsertionQV,
        QvChannel::SubstitutionQV,
        QvChannel::DeletionQV,
        QvChannel::DeletionTag,
        QvChannel::MergeQV,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QvChannel::InsertionQV => "InsertionQV",
            QvChannel::SubstitutionQV => "SubstitutionQV",
            QvChannel::DeletionQV => "DeletionQV",
            QvChannel::DeletionTag => "DeletionTag",
            QvChannel::MergeQV => "MergeQV",
        }
    }

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl fmt::Display for QvChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QvChannel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QvChannel::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownChannel(s.to_string()))
    }
}

/// A small set of [`QvChannel`]s, stored as a bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChannelSet(u8);

impl ChannelSet {
    pub const fn empty() -> Self {
        ChannelSet(0)
    }

    pub fn all() -> Self {
        QvChannel::ALL.iter().copied().collect()
    }

    pub fn insert(&mut self, channel: QvChannel) {
        self.0 |= channel.bit();
    }

    pub fn contains(&self, channel: QvChannel) -> bool {
        self.0 & channel.bit() != 0
    }

    pub fn is_subset(&self, other: &ChannelSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Channels in the set, in bundle order.
    pub fn iter(&self) -> impl Iterator<Item = QvChannel> + '_ {
        QvChannel::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Parses a comma-separated channel list; an empty string is the empty set.
    pub fn parse_list(s: &str) -> Result<Self, ModelError> {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(QvChannel::from_str)
            .collect()
    }
}

impl FromIterator<QvChannel> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = QvChannel>>(iter: I) -> Self {
        let mut set = ChannelSet::empty();
        for channel in iter {
            set.insert(channel);
        }
        set
    }
}

impl fmt::Display for ChannelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|c| c.name()).collect();
        write!(f, "{}", names.join(","))
    }
}
