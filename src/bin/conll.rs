//! Command line tool for inspecting CoNLL dataset configs

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::anyhow;
use conll_datasets::{
    cli::{Command, Format, Settings},
    datasets::{
        conll::ConllDatasetBuilder,
        conll2002::{self, Conll2002},
        Dataset,
    },
    download::{DownloadManager, LocalMirror},
};
use log::debug;
use pico_args::Arguments;

const HELP: &str = "\
Usage: conll COMMAND DATASET [OPTIONS]

Arguments:
  COMMAND              One of 'configs', 'info', 'urls' or 'resolve'
  DATASET              The dataset to use (e.g., 'conll2002')

Options:
  -h, --help           Print help
  -c, --config         The builder config to use (e.g., 'es')
  -d, --data-dir       The path to the top-level data directory (defaults to 'data')
  -f, --format         Output format, 'json' or 'yaml' (defaults to 'json')
  -s, --settings       A JSON settings file providing defaults for the options above
";

#[derive(Debug)]
struct Args {
    command: String,
    dataset: String,
    config: Option<String>,
    data_dir: Option<String>,
    format: Option<String>,
    settings: Option<PathBuf>,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            config: pargs.opt_value_from_str(["-c", "--config"])?,
            data_dir: pargs.opt_value_from_str(["-d", "--data-dir"])?,
            format: pargs.opt_value_from_str(["-f", "--format"])?,
            settings: pargs.opt_value_from_str(["-s", "--settings"])?,
            command: pargs.free_from_str().map_err(|e| match e {
                pico_args::Error::MissingArgument => anyhow!("Missing required argument: COMMAND"),
                _ => anyhow!("{}", e),
            })?,
            dataset: pargs.free_from_str().map_err(|e| match e {
                pico_args::Error::MissingArgument => anyhow!("Missing required argument: DATASET"),
                _ => anyhow!("{}", e),
            })?,
        };

        Ok(Some(args))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };
    debug!("cli args\n{:#?}", args);

    let command = Command::try_from(args.command.as_str())?;
    let dataset = Dataset::try_from(args.dataset.as_str())?;

    let mut settings = Settings::load_or_default(args.settings.as_deref())?;
    if let Some(data_dir) = &args.data_dir {
        settings.data_dir = data_dir.to_string();
    }
    if let Some(format) = &args.format {
        settings.format = Format::try_from(format.as_str())?;
    }

    let config = args
        .config
        .clone()
        .unwrap_or_else(|| dataset.default_config().to_string());

    let output = match dataset {
        Dataset::Conll2002 => handle_conll2002(command, &config, &settings).await?,
    };

    println!("{}", output);

    Ok(())
}

async fn handle_conll2002(
    command: Command,
    config: &str,
    settings: &Settings,
) -> anyhow::Result<String> {
    let format = settings.format;

    let output = match command {
        Command::Configs => {
            let configs: BTreeMap<&str, &str> = conll2002::CONFIG_NAME_TO_FILE_NAME
                .iter()
                .copied()
                .collect();

            format.render(&configs)?
        }
        Command::Info => format.render(&Conll2002::new(config)?.info()?)?,
        Command::Urls => format.render(&Conll2002::new(config)?.urls()?)?,
        Command::Resolve => {
            let urls = Conll2002::new(config)?.urls()?;
            let mirror = LocalMirror::for_dataset(&settings.data_dir, conll2002::DATASET);

            format.render(&mirror.download(&urls).await?)?
        }
    };

    Ok(output)
}
