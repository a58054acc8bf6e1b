// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::{self, Flags};
use iced_compare::config;
use iced_compare::logging;
use iced_compare::media::probe::ImageProber;
use std::path::PathBuf;
use std::sync::Arc;

const HELP: &str = "\
Usage: iced_compare [OPTIONS] <BEFORE> <AFTER>

Arguments:
  <BEFORE>  Image shown left of the divider (path, file:// or http(s):// URL)
  <AFTER>   Image shown right of the divider

Options:
  --lang <ID>         UI language (e.g. en-US, fr)
  --log <FILTER>      Log filter (e.g. debug, iced_compare=trace)
  --config-dir <DIR>  Directory holding settings.toml
  -h, --help          Print help
";

struct Cli {
    lang: Option<String>,
    log: Option<String>,
    config_dir: Option<PathBuf>,
    before: String,
    after: String,
}

fn parse_args() -> Result<Cli, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Cli {
        lang: args.opt_value_from_str("--lang")?,
        log: args.opt_value_from_str("--log")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        before: args.free_from_str()?,
        after: args.free_from_str()?,
    })
}

fn main() -> iced::Result {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let (config, warning) = config::load_with_override(cli.config_dir);
    logging::init(cli.log.as_deref().or(config.logging.level.as_deref()));
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let prober = match ImageProber::new(&config.probe) {
        Ok(prober) => prober,
        Err(err) => {
            tracing::error!(%err, "cannot initialize image prober");
            std::process::exit(1);
        }
    };

    app::run(Flags {
        lang: cli.lang,
        before: cli.before,
        after: cli.after,
        config,
        prober: Arc::new(prober),
    })
}
