use std::fmt;
use std::str::FromStr;

use super::engine::QuiverConfig;
use super::error::{ModelError, Result};
use super::features::PulseSource;
use super::model::{self, Model};

/// A model together with a fully realized scorer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub model: Model,
    pub config: QuiverConfig,
}

/// The named, fitted parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetName {
    NoQVsC2,
    AllQVsC2,
    AllQVsXlC2Beta,
    NoMergeQVC2,
}

impl PresetName {
    pub const ALL: [PresetName; 4] = [
        PresetName::NoQVsC2,
        PresetName::AllQVsC2,
        PresetName::AllQVsXlC2Beta,
        PresetName::NoMergeQVC2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PresetName::NoQVsC2 => "NoQVsModel.C2",
            PresetName::AllQVsC2 => "AllQVsModel.C2",
            PresetName::AllQVsXlC2Beta => "AllQVsModel.XL_C2_Beta",
            PresetName::NoMergeQVC2 => "NoMergeQVModel.C2",
        }
    }

    pub fn model(&self) -> Model {
        match self {
            PresetName::NoQVsC2 => Model::NoQVs,
            PresetName::AllQVsC2 | PresetName::AllQVsXlC2Beta => Model::AllQVs,
            PresetName::NoMergeQVC2 => Model::NoMergeQV,
        }
    }

    /// The canonical C2 preset of `model`.
    pub fn c2_of(model: Model) -> Self {
        match model {
            Model::AllQVs => PresetName::AllQVsC2,
            Model::NoMergeQV => PresetName::NoMergeQVC2,
            Model::NoQVs => PresetName::NoQVsC2,
        }
    }

    pub fn build(&self) -> Result<ParameterSet> {
        match self {
            PresetName::NoQVsC2 => Model::NoQVs.c2(),
            PresetName::AllQVsC2 => Model::AllQVs.c2(),
            PresetName::AllQVsXlC2Beta => model::all_qvs_xl_c2_beta(),
            PresetName::NoMergeQVC2 => Model::NoMergeQV.c2(),
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PresetName {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "NoQVsModel.C2" => Ok(PresetName::NoQVsC2),
            "AllQVsModel.C2" => Ok(PresetName::AllQVsC2),
            "AllQVsModel.XL_C2_Beta" => Ok(PresetName::AllQVsXlC2Beta),
            "NoMergeQVModel.C2" => Ok(PresetName::NoMergeQVC2),
            _ => Err(ModelError::UnknownParameterSet(s.to_string())),
        }
    }
}

impl ParameterSet {
    pub fn new(model: Model, config: QuiverConfig) -> Self {
        Self { model, config }
    }

    /// Looks up a named preset, e.g. `AllQVsModel.C2`.
    ///
    /// ```
    /// use qvmodel::libs::{Model, ParameterSet};
    ///
    /// let params = ParameterSet::from_name("NoQVsModel.C2").unwrap();
    /// assert_eq!(params.model, Model::NoQVs);
    /// assert!(ParameterSet::from_name("bogus").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<PresetName>()?.build()
    }

    /// Picks the C2 preset of the richest model `source` can feed.
    ///
    /// Models are tried as AllQVs, NoMergeQV, NoQVs; the last needs no
    /// channels, so a model is always found.
    pub fn best_available<S: PulseSource + ?Sized>(source: &S) -> Result<Self> {
        let model = Self::best_model(source);
        log::info!("Selected {} for the pulse source", PresetName::c2_of(model));
        model.c2()
    }

    pub fn best_model<S: PulseSource + ?Sized>(source: &S) -> Model {
        Model::ALL
            .into_iter()
            .find(|m| m.is_compatible_with(source))
            .unwrap_or(Model::NoQVs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::channel::{ChannelSet, QvChannel};

    #[test]
    fn test_best_available() {
        let cases = [
            ("InsertionQV,SubstitutionQV,DeletionQV,DeletionTag,MergeQV", Model::AllQVs),
            ("InsertionQV,SubstitutionQV,DeletionQV,DeletionTag", Model::NoMergeQV),
            ("", Model::NoQVs),
            ("MergeQV", Model::NoQVs),
            ("InsertionQV,SubstitutionQV,DeletionQV,MergeQV", Model::NoQVs),
        ];
        for (channels, expected) in cases {
            let source = ChannelSet::parse_list(channels).unwrap();
            let ps = ParameterSet::best_available(&source).unwrap();
            assert_eq!(ps.model, expected, "{}", channels);
            assert_eq!(ps, expected.c2().unwrap(), "{}", channels);
        }
    }

    #[test]
    fn test_best_available_custom_source() {
        struct NoMerge;
        impl PulseSource for NoMerge {
            fn has_pulse_feature(&self, channel: QvChannel) -> bool {
                channel != QvChannel::MergeQV
            }
        }
        assert_eq!(ParameterSet::best_model(&NoMerge), Model::NoMergeQV);
    }

    #[test]
    fn test_from_name() {
        for preset in PresetName::ALL {
            let ps = ParameterSet::from_name(preset.name()).unwrap();
            assert_eq!(ps.model, preset.model());
            assert_eq!(preset.to_string().parse::<PresetName>().unwrap(), preset);
        }

        let ps = ParameterSet::from_name("NoQVsModel.C2").unwrap();
        assert_eq!(ps.model, Model::NoQVs);

        let xl = ParameterSet::from_name("AllQVsModel.XL_C2_Beta").unwrap();
        assert_eq!(xl.config.params.merge(), 0.5);
    }

    #[test]
    fn test_from_name_unknown() {
        for name in ["bogus", "NoQVs.C2", "allqvsmodel.c2", "AllQVsModel.C3", ""] {
            assert_eq!(
                ParameterSet::from_name(name),
                Err(ModelError::UnknownParameterSet(name.to_string()))
            );
        }
    }
}
