use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(version)]
#[command(about = "Console catalogue for a home library", long_about = None)]
pub struct Cli {}
