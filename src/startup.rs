//! Command-line driver: loads settings, installs logging, then runs one
//! request against the library and prints the response.

use crate::configuration::{self, AppFolder, Settings};
use crate::process::Validation;
use crate::requests::{FolderPicker, Library, Request, Response};
use async_trait::async_trait;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

pub async fn run(folder: AppFolder, request: Request) -> anyhow::Result<()> {
    let settings = configuration::get_configuration(&folder)?;
    init_tracing(&settings);

    let mut library = Library::open(&folder, settings.library).with_picker(Box::new(PromptPicker));

    let spinner = matches!(request, Request::BuildCatalog | Request::ReadCatalog).then(|| {
        let bar = ProgressBar::new_spinner();
        bar.set_message("Indexing library...");
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    });

    let response = library.handle(request).await;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    print_response(&response?)
}

/// `RUST_LOG` wins over `logging.level`; an unusable directive falls back to `info`.
pub fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_response(response: &Response) -> anyhow::Result<()> {
    match response {
        Response::Paths(paths) if paths.is_empty() => {
            println!("\x1b[33mNo library paths registered.\x1b[0m");
        }
        Response::Paths(paths) => {
            for path in paths {
                println!("{path}");
            }
        }
        Response::Catalog(library) => {
            println!("{}", serde_json::to_string_pretty(library)?);
        }
        Response::Validation(Validation::Valid) => {
            println!("\x1b[32mValid album folder.\x1b[0m");
        }
        Response::Validation(Validation::Invalid(reason)) => {
            println!("\x1b[31mInvalid album folder: {reason}\x1b[0m");
        }
        Response::Added(true) => println!("\x1b[32mLibrary path registered.\x1b[0m"),
        Response::Added(false) => println!("\x1b[33mOperation cancelled.\x1b[0m"),
        Response::Removed(true) => println!("\x1b[32mLibrary path removed.\x1b[0m"),
        Response::Removed(false) => println!("\x1b[33mPath was not registered.\x1b[0m"),
    }
    Ok(())
}

/// Reads a folder path from stdin; an empty line cancels.
struct PromptPicker;

#[async_trait]
impl FolderPicker for PromptPicker {
    async fn pick(&self) -> Option<PathBuf> {
        println!("Enter the album folder to register (empty to cancel):");

        let mut input = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut input)
            .await
            .ok()?;

        let input = input.trim();
        (!input.is_empty()).then(|| PathBuf::from(input))
    }
}
