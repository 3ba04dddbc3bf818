use clap::Parser;
use snipnote::{Cli, Command, Config};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::new(cli.notes.as_deref(), cli.json);

    match cli.command {
        Command::Search { text, tags } => cmd::search::run(&config, text, tags),
        Command::Tags { unused, all_tags } => cmd::tag::run(&config, unused, all_tags),
        Command::Encode { text } => cmd::encode::run(&config, text),
        Command::Decode { html } => cmd::decode::run(&config, html),
        Command::Copy { html, values } => cmd::copy::run(&config, html, values),
        Command::Vars { text } => cmd::vars::run(&config, text),
        Command::Check => cmd::check::run(&config),
    }
}

mod cmd {
    pub mod check;
    pub mod copy;
    pub mod decode;
    pub mod encode;
    pub mod input;
    pub mod search;
    pub mod tag;
    pub mod vars;
}
