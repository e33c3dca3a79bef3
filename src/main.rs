use clap::Parser;
use factory_registry::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Catalogs => cli::catalogs::run(),
        Command::Create(args) => cli::create::run(args),
        Command::Form(args) => cli::form::run(args),
    }
}
