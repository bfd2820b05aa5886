use clap::Parser;
use passvault::cli::{validate_vault_name, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Validate the vault name early to catch typos.
    if let Err(e) = validate_vault_name(&cli.vault) {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref title,
            ref username,
            ref password,
            random,
        } => passvault::cli::commands::add::execute(
            &cli,
            title.as_deref(),
            username.as_deref(),
            password.as_deref(),
            random,
        ),
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Show { index } => passvault::cli::commands::show::execute(&cli, index),
        Commands::Copy { index } => passvault::cli::commands::copy::execute(&cli, index),
        Commands::Delete { index, force } => {
            passvault::cli::commands::delete::execute(&cli, index, force)
        }
        Commands::Generate {
            ref site,
            ref username,
            length,
            no_save,
            copy,
        } => passvault::cli::commands::generate::execute(&cli, site, username, length, no_save, copy),
        Commands::Regen {
            ref site,
            ref username,
            copy,
        } => passvault::cli::commands::regen::execute(&cli, site, username, copy),
        Commands::Profiles => passvault::cli::commands::profiles::execute(&cli),
        Commands::Fingerprint { ref path } => {
            passvault::cli::commands::fingerprint::execute(path)
        }
        Commands::Completions { ref shell } => {
            passvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
