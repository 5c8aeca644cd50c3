use clap::*;
use qvmodel::libs::ParameterSet;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("show")
        .about("Shows the full parameter vector of a named parameter set")
        .after_help(
            r###"
Output:
* Header lines (#name, #model, #banding, #fast_score_threshold)
* One row per scoring term: index, term, value, free|fixed

Recognized names (see `qvmodel list`):
* NoQVsModel.C2
* AllQVsModel.C2
* AllQVsModel.XL_C2_Beta
* NoMergeQVModel.C2

Examples:
1. Show the C2 parameters of the all-QV model:
   qvmodel show AllQVsModel.C2

"###,
        )
        .arg(
            Arg::new("name")
                .required(true)
                .index(1)
                .help("Parameter set name"),
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
    let name = args.get_one::<String>("name").unwrap();
    let mut writer = qvmodel::writer(args.get_one::<String>("outfile").unwrap())?;

    let params = ParameterSet::from_name(name)?;
    super::write_parameter_set(&mut writer, name, &params)?;

    Ok(())
}
