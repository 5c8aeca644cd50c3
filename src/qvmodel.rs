extern crate clap;
use clap::*;

mod cmd_qvmodel;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let app = Command::new("qvmodel")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`qvmodel` - QV scoring models for quiver-style consensus")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_qvmodel::list::make_subcommand())
        .subcommand(cmd_qvmodel::show::make_subcommand())
        .subcommand(cmd_qvmodel::select::make_subcommand())
        .subcommand(cmd_qvmodel::realize::make_subcommand())
        .subcommand(cmd_qvmodel::model::make_subcommand())
        .after_help(
            r###"Subcommands:

* Presets:
    * list    - Names of the fitted parameter sets
    * show    - Full parameter vector of a named set
    * select  - Best parameter set for the QV channels at hand

* Models:
    * model   - Channels, free/fixed terms and start vector of a model
    * realize - Project free parameters onto the full vector

Set RUST_LOG=info (or debug) for diagnostics on stderr.

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("list", sub_matches)) => cmd_qvmodel::list::execute(sub_matches),
        Some(("show", sub_matches)) => cmd_qvmodel::show::execute(sub_matches),
        Some(("select", sub_matches)) => cmd_qvmodel::select::execute(sub_matches),
        Some(("realize", sub_matches)) => cmd_qvmodel::realize::execute(sub_matches),
        Some(("model", sub_matches)) => cmd_qvmodel::model::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
