use clap::*;
use qvmodel::libs::{ChannelSet, ParameterSet, PresetName};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("select")
        .about("Selects the best parameter set for the available QV channels")
        .after_help(
            r###"
Models are tried in order AllQVs, NoMergeQV, NoQVs; the first one whose required
channels are all available wins. NoQVs needs no channels, so a set is always selected.

Channels: InsertionQV, SubstitutionQV, DeletionQV, DeletionTag, MergeQV

Examples:
1. All channels present:
   qvmodel select --features InsertionQV,SubstitutionQV,DeletionQV,DeletionTag,MergeQV

2. Base calls only:
   qvmodel select

3. Print the whole parameter vector of the selection:
   qvmodel select --features InsertionQV,SubstitutionQV,DeletionQV,DeletionTag --full

"###,
        )
        .arg(
            Arg::new("features")
                .long("features")
                .short('f')
                .num_args(1)
                .default_value("")
                .help("Comma-separated list of available QV channels"),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .action(ArgAction::SetTrue)
                .help("Print the full parameter set instead of its name"),
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
    let source = ChannelSet::parse_list(args.get_one::<String>("features").unwrap())?;
    let mut writer = qvmodel::writer(args.get_one::<String>("outfile").unwrap())?;

    let params = ParameterSet::best_available(&source)?;
    let name = PresetName::c2_of(params.model);

    if args.get_flag("full") {
        super::write_parameter_set(&mut writer, name.name(), &params)?;
    } else {
        writer.write_fmt(format_args!("{}\n", name))?;
    }

    Ok(())
}
