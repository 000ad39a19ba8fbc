use clap::Parser;

mod args;
mod run;
mod schema_file;

fn main() -> anyhow::Result<()> {
    run::init_logging();
    let args = args::Args::parse();
    run::run(args)
}
