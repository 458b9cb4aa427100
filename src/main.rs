use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobthumb::Settings;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobthumb", version, about = "Job-ad thumbnail compositor")]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a thumbnail card to a PNG file
    Render {
        /// Job title
        #[arg(long)]
        title: String,
        /// Output PNG path
        #[arg(long, short)]
        out: PathBuf,
        /// Asset directory (overrides settings)
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Site name for the attribution line (overrides settings)
        #[arg(long)]
        site: Option<String>,
    },
    /// Post a message to the configured channel
    #[cfg(feature = "telegram")]
    Notify {
        message: String,
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        chat_id: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Settings::default(),
    };

    match cli.command {
        Command::Render { title, out, assets, site } => {
            if let Some(assets) = assets {
                settings.thumbnails_base_folder = assets;
            }
            if let Some(site) = site {
                settings.website_name = site;
            }
            let request = settings.thumbnail_request(title);
            let thumb = jobthumb::render(&request).context("rendering thumbnail")?;
            let png = thumb.encode_png()?;
            std::fs::write(&out, &png).with_context(|| format!("writing {}", out.display()))?;
            log::info!("Wrote {} ({} bytes)", out.display(), png.len());
        }
        #[cfg(feature = "telegram")]
        Command::Notify { message, token, chat_id } => {
            if token.is_some() {
                settings.telegram_token = token;
            }
            if chat_id.is_some() {
                settings.telegram_chat_id = chat_id;
            }
            jobthumb::notify::post_channel_message(&settings.telegram(), &message)
                .map_err(jobthumb::Error::from)?;
            log::info!("Message posted");
        }
    }
    Ok(())
}
