use clap::*;
use qvmodel::libs::PresetName;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("list")
        .about("Lists the named parameter sets")
        .after_help(
            r###"
Prints the names accepted by `qvmodel show`, one per line, followed by the model each belongs to.

Examples:
1. List all presets:
   qvmodel list

"###,
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
    let mut writer = qvmodel::writer(args.get_one::<String>("outfile").unwrap())?;

    for preset in PresetName::ALL {
        writer.write_fmt(format_args!("{}\t{}\n", preset, preset.model()))?;
    }

    Ok(())
}
