use clap::{Arg, ArgAction, Command};
use musicat::configuration::{create_config, AppFolder};
use musicat::startup::run;
use musicat::Request;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Command::new("musicat")
        .about("🎵 Index local album folders into a browsable music catalog 🎵")
        .subcommand(
            Command::new("add")
                .about("➕ Register an album folder (prompts when no path is given)")
                .arg(Arg::new("path").required(false)),
        )
        .subcommand(
            Command::new("remove")
                .about("➖ Unregister an album folder")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(Command::new("paths").about("📂 List registered album folders"))
        .subcommand(Command::new("build").about("🚀 Rebuild the catalog from every registered folder"))
        .subcommand(Command::new("show").about("📖 Print the stored catalog, building it if missing"))
        .subcommand(
            Command::new("validate")
                .about("🔎 Check that a folder holds cover.jpg and at least one song")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(
            Command::new("config")
                .about("🛠️ Create the configuration file")
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Overwrite an existing configuration file")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    let folder = AppFolder::new()?;

    let request = match args.subcommand() {
        Some(("add", sub)) => match sub.get_one::<String>("path") {
            Some(path) => Request::AddPath(path.clone()),
            None => Request::SelectAndAddPath,
        },
        Some(("remove", sub)) => Request::RemovePath(path_arg(sub)),
        Some(("paths", _)) => Request::ListPaths,
        Some(("build", _)) => Request::BuildCatalog,
        Some(("show", _)) => Request::ReadCatalog,
        Some(("validate", sub)) => Request::ValidateFolder(path_arg(sub).into()),
        Some(("config", sub)) => {
            if create_config(&folder, sub.get_flag("force"))? {
                println!("\x1b[32mConfiguration file created at:");
                println!("  -> {}\x1b[0m", folder.config_file.display());
            } else {
                println!("\x1b[33mConfiguration file already exists, use --force to overwrite.\x1b[0m");
            }
            return Ok(());
        }
        _ => {
            print_usage();
            return Ok(());
        }
    };

    run(folder, request).await
}

fn path_arg(matches: &clap::ArgMatches) -> String {
    matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_default()
}

fn print_usage() {
    println!("\x1b[1m\x1b[31mInvalid command!\x1b[0m\n");
    println!("📖 Available Commands:");
    println!("  \x1b[1m\x1b[32mmusicat add [PATH]\x1b[0m      - ➕ Register an album folder");
    println!("  \x1b[1m\x1b[32mmusicat remove PATH\x1b[0m     - ➖ Unregister an album folder");
    println!("  \x1b[1m\x1b[32mmusicat paths\x1b[0m           - 📂 List registered folders");
    println!("  \x1b[1m\x1b[32mmusicat build\x1b[0m           - 🚀 Rebuild the catalog");
    println!("  \x1b[1m\x1b[32mmusicat show\x1b[0m            - 📖 Print the catalog");
    println!("  \x1b[1m\x1b[32mmusicat validate PATH\x1b[0m   - 🔎 Check an album folder");
    println!("  \x1b[1m\x1b[32mmusicat config\x1b[0m          - 🛠️  Create the configuration file\n");
}
