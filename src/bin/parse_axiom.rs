use axiom_concordance::cli::{ExtractArgs, run_extract};
use axiom_concordance::error::Result;
use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};

fn try_main(args: &ExtractArgs) -> Result<()> {
    run_extract(&args.input, &args.output)?;
    Ok(())
}

fn main() -> miette::Result<()> {
    let args = ExtractArgs::parse();
    try_main(&args)
        .into_diagnostic()
        .wrap_err_with(|| format!("error processing {}", args.input.display()))
}
