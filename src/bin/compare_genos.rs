use axiom_concordance::cli::{ConcordanceArgs, run_concordance};
use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};

fn main() -> miette::Result<()> {
    let args = ConcordanceArgs::parse();
    run_concordance(&args.input, &args.output)
        .into_diagnostic()
        .wrap_err_with(|| format!("error comparing genotypes in {}", args.input.display()))
}
