use clap::Parser;
use shelf::api::FileApi;
use shelf::config::ShelfConfig;
use shelf::error::Result;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::actions::registry;
use cli::args::Cli;
use cli::console::Console;
use cli::menu::Menu;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let cwd = std::env::current_dir()?;
    let config = ShelfConfig::load(&cwd)?;
    let mut api = FileApi::open_files(&config, &cwd)?;
    let menu = Menu::new(registry());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut console = Console::new(&mut input, &mut output);

    menu.run(&mut api, &mut console)
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
