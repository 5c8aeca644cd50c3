use clap::*;
use itertools::Itertools;
use qvmodel::libs::{Model, ParamIndex};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("model")
        .about("Describes a model variant")
        .after_help(
            r###"
Output (tab-separated key/value lines):
* required - QV channels the model reads
* free     - Free term indices, i.e. the order of `realize` values
* fixed    - Fixed term indices
* start    - Full start vector

Examples:
1. Describe the merge-free model:
   qvmodel model NoMergeQV

"###,
        )
        .arg(
            Arg::new("model")
                .required(true)
                .index(1)
                .value_parser(["AllQVs", "NoMergeQV", "NoQVs"])
                .help("Model variant"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let model: Model = args.get_one::<String>("model").unwrap().parse()?;
    let mut writer = qvmodel::writer(args.get_one::<String>("outfile").unwrap())?;

    let terms = |idx: &[usize]| {
        idx.iter()
            .map(|&i| format!("{}:{}", i, ParamIndex::ALL[i]))
            .join(",")
    };

    writer.write_fmt(format_args!("name\t{}\n", model))?;
    writer.write_fmt(format_args!("required\t{}\n", model.required_features()))?;
    writer.write_fmt(format_args!("free\t{}\n", terms(model.free_param_idx())))?;
    writer.write_fmt(format_args!("fixed\t{}\n", terms(model.fixed_param_idx())))?;
    writer.write_fmt(format_args!(
        "start\t{}\n",
        model.full_start().iter().join(",")
    ))?;

    Ok(())
}
