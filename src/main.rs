use anyhow::Result;
use clap::Parser;
use voxbridge::app::{
    run_batch_command, run_extract_corpus_command, run_languages_command, run_translate_command,
};
use voxbridge::cli::{Cli, Commands};
use voxbridge::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None => {
            run_batch_command(
                config,
                cli.in_dir,
                cli.out_dir,
                cli.model,
                cli.target_lang,
                cli.num_ex,
                cli.ref_trans,
            )
            .await?;
        }
        Some(Commands::Translate {
            audio,
            target_lang,
            out,
            model,
        }) => {
            run_translate_command(config, audio, target_lang, out, model).await?;
        }
        Some(Commands::ExtractCorpus {
            manifest,
            out_dir,
            target_secs,
        }) => {
            run_extract_corpus_command(manifest, out_dir, target_secs).await?;
        }
        Some(Commands::Languages) => {
            run_languages_command();
        }
    }

    Ok(())
}

/// Load configuration from the custom path or the default location.
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };
    Ok(config)
}
