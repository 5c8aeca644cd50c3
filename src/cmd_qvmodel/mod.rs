//! Subcommand modules for the `qvmodel` binary.

pub mod list;
pub mod model;
pub mod realize;
pub mod select;
pub mod show;

use qvmodel::libs::{ParamIndex, ParameterSet};
use std::io::Write;

/// Writes a parameter set as a header block and one row per scoring term.
pub fn write_parameter_set(
    writer: &mut dyn Write,
    name: &str,
    params: &ParameterSet,
) -> anyhow::Result<()> {
    let config = &params.config;
    let mask = params.model.fixed_param_mask();

    writer.write_fmt(format_args!("#name\t{}\n", name))?;
    writer.write_fmt(format_args!("#model\t{}\n", params.model))?;
    writer.write_fmt(format_args!(
        "#banding\t{},{}\n",
        config.banding.diagonal_cross, config.banding.score_diff
    ))?;
    writer.write_fmt(format_args!(
        "#fast_score_threshold\t{}\n",
        config.fast_score_threshold
    ))?;

    for (i, term) in ParamIndex::ALL.iter().enumerate() {
        writer.write_fmt(format_args!(
            "{}\t{}\t{}\t{}\n",
            i,
            term,
            config.params.get(*term),
            if mask[i] { "fixed" } else { "free" }
        ))?;
    }

    Ok(())
}
