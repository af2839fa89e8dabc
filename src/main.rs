use clap::Parser;
use pwmvault::cli::commands::edit::FieldUpdates;
use pwmvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => pwmvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref name,
            ref username,
            ref password,
            generate,
            ref url,
            ref tags,
            ref notes,
        } => pwmvault::cli::commands::add::execute(
            &cli,
            name,
            username,
            password.as_deref(),
            generate,
            url,
            tags,
            notes,
        ),
        Commands::List { ref tag, ref query } => {
            pwmvault::cli::commands::list::execute(&cli, tag, query.as_deref())
        }
        Commands::Show { ref entry, reveal } => {
            pwmvault::cli::commands::show::execute(&cli, entry, reveal)
        }
        Commands::Copy { ref entry } => pwmvault::cli::commands::copy::execute(&cli, entry),
        Commands::Edit {
            ref entry,
            ref name,
            ref username,
            ref password,
            clear_password,
            ref url,
            ref tags,
            ref notes,
        } => pwmvault::cli::commands::edit::execute(
            &cli,
            entry,
            &FieldUpdates {
                name: name.as_deref(),
                username: username.as_deref(),
                password: password.as_deref(),
                clear_password,
                url: url.as_deref(),
                tags: tags.as_deref(),
                notes: notes.as_deref(),
            },
        ),
        Commands::Delete { ref entry, force } => {
            pwmvault::cli::commands::delete::execute(&cli, entry, force)
        }
        Commands::Rotate => pwmvault::cli::commands::rotate::execute(&cli),
        Commands::Export {
            ref format,
            ref output,
        } => pwmvault::cli::commands::export::execute(&cli, format, output.as_deref()),
        Commands::Import { ref file } => pwmvault::cli::commands::import_cmd::execute(&cli, file),
        Commands::Generate {
            length,
            no_upper,
            no_lower,
            no_digits,
            no_symbols,
        } => pwmvault::cli::commands::generate_cmd::execute(
            length, no_upper, no_lower, no_digits, no_symbols,
        ),
        Commands::Tags { ref action } => pwmvault::cli::commands::tags_cmd::execute(action),
        Commands::Path => pwmvault::cli::commands::path_cmd::execute(&cli),
        Commands::Completions { ref shell } => pwmvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        pwmvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
