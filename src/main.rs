use anyhow::Context;
use clap::Parser;
use contact_book::config::toml_config::TomlConfig;
use contact_book::utils::logger;
use contact_book::{CliConfig, FileStorage, Repl, Session, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = cli
        .config
        .as_deref()
        .map(TomlConfig::from_file)
        .transpose()
        .context("failed to load settings file")?;

    let settings = match Settings::resolve(file_config.as_ref(), cli.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    tracing::info!("Starting contact-book");
    tracing::debug!("Resolved settings: {:?}", settings);

    let storage = FileStorage::new(settings.file_path());
    let session = Session::open(storage)
        .with_context(|| format!("failed to open address book {}", settings.file))?
        .page_size(settings.page_size)
        .birthday_window(settings.birthday_window);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Repl::new(session)
        .run(stdin.lock(), stdout.lock())
        .context("console I/O failed")?;

    Ok(())
}
