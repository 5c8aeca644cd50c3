use clap::*;
use qvmodel::libs::{BandingOptions, Model};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("realize")
        .about("Projects free parameters onto the full parameter vector")
        .after_help(
            r###"
Scatters the free values onto the model's free terms; fixed terms keep the model's
start values. Without values, the model's training start is used.

The number of values must equal the model's free parameter count
(AllQVs: 12, NoMergeQV: 11, NoQVs: 5).

Examples:
1. Training start of the NoQVs model:
   qvmodel realize --model NoQVs

2. Custom values with a wider band:
   qvmodel realize --model NoQVs -1.2 -0.37 -0.25 -0.25 -0.37 --diagonal-cross 8

"###,
        )
        .arg(
            Arg::new("model")
                .long("model")
                .short('m')
                .required(true)
                .num_args(1)
                .value_parser(["AllQVs", "NoMergeQV", "NoQVs"])
                .help("Model variant"),
        )
        .arg(
            Arg::new("values")
                .index(1)
                .num_args(0..)
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Free parameter values, in the model's free-index order"),
        )
        .arg(
            Arg::new("diagonal_cross")
                .long("diagonal-cross")
                .num_args(1)
                .value_parser(value_parser!(i32))
                .default_value("4")
                .help("Band diagonal width"),
        )
        .arg(
            Arg::new("score_diff")
                .long("score-diff")
                .num_args(1)
                .value_parser(value_parser!(i32))
                .default_value("5")
                .help("Band score drop"),
        )
        .arg(
            Arg::new("fast_score_threshold")
                .long("fast-score-threshold")
                .num_args(1)
                .value_parser(value_parser!(f32))
                .default_value("-12.5")
                .allow_negative_numbers(true)
                .help("Fast-score cutoff"),
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
    //----------------------------
    // Args
    //----------------------------
    let model: Model = args.get_one::<String>("model").unwrap().parse()?;
    let values: Vec<f64> = match args.get_many::<f64>("values") {
        Some(vals) => vals.copied().collect(),
        None => model.start().to_vec(),
    };
    let banding = BandingOptions::new(
        *args.get_one::<i32>("diagonal_cross").unwrap(),
        *args.get_one::<i32>("score_diff").unwrap(),
    );
    let threshold = *args.get_one::<f32>("fast_score_threshold").unwrap();
    let mut writer = qvmodel::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Ops
    //----------------------------
    let params = model.params_from_array(&values, banding, threshold)?;
    super::write_parameter_set(&mut writer, &format!("{}.custom", model), &params)?;

    Ok(())
}
