//! BizCard CLI
//!
//! Thin wrapper around bizcard-core for scripting and inspection.
//!
//! ## Usage
//!
//! ```bash
//! # Build a QR payload and the image URL
//! bizcard qr url --url https://example.com --size 400
//!
//! # Wi-Fi QR, saved as PNG
//! bizcard qr wifi --ssid Office --password secret --download ./office.png
//!
//! # Show stored preferences (same store as the desktop app)
//! bizcard prefs show
//!
//! # Switch the UI to English
//! bizcard prefs set-language en
//!
//! # List card templates
//! bizcard templates
//!
//! # Check a card file and export it as a vCard
//! bizcard card validate card.json
//! bizcard card vcard card.json
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use bizcard_core::card::{to_vcard, validate_draft, vcard_file_name};
use bizcard_core::config::default_data_dir;
use bizcard_core::qr::{download_png, download_target, ErrorCorrection, QrField, QrForm, QrKind};
use bizcard_core::{
    AppConfig, CardDraft, ColorMode, Customizer, Language, QrOptions, RedbStore, TemplateId,
    ThemeName, Translator,
};
use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;

/// BizCard - digital business cards
#[derive(Parser)]
#[command(name = "bizcard")]
#[command(version = "0.1.0")]
#[command(about = "BizCard - digital business cards")]
#[command(
    long_about = "Command-line companion to the BizCard desktop app: QR payloads, stored preferences and card files."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory, shared with the desktop app (default: <platform data dir>/bizcard)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a QR payload and its image URL
    Qr {
        /// Content type: url, text, email, phone, sms, wifi, location
        kind: String,

        #[command(flatten)]
        fields: QrFieldArgs,

        #[command(flatten)]
        image: QrImageArgs,

        /// Save the rendered PNG to this file or directory
        #[arg(long)]
        download: Option<PathBuf>,
    },

    /// Inspect or change stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// List card templates
    Templates,

    /// Card file commands
    Card {
        #[command(subcommand)]
        action: CardAction,
    },
}

#[derive(Args, Default)]
struct QrFieldArgs {
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    body: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    message: Option<String>,
    #[arg(long)]
    ssid: Option<String>,
    #[arg(long)]
    password: Option<String>,
    /// WPA, WEP or nopass
    #[arg(long)]
    security: Option<String>,
    #[arg(long)]
    latitude: Option<String>,
    #[arg(long)]
    longitude: Option<String>,
}

impl QrFieldArgs {
    fn pairs(self) -> Vec<(QrField, String)> {
        [
            (QrField::Url, self.url),
            (QrField::Text, self.text),
            (QrField::Email, self.email),
            (QrField::Subject, self.subject),
            (QrField::Body, self.body),
            (QrField::Phone, self.phone),
            (QrField::Message, self.message),
            (QrField::Ssid, self.ssid),
            (QrField::Password, self.password),
            (QrField::Security, self.security),
            (QrField::Latitude, self.latitude),
            (QrField::Longitude, self.longitude),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[derive(Args)]
struct QrImageArgs {
    /// Image size in pixels (200-800, step 50)
    #[arg(long, default_value_t = 300)]
    size: u32,
    /// Error correction: L, M, Q, H
    #[arg(long, default_value = "M")]
    ecc: String,
    /// Foreground color
    #[arg(long, default_value = "#000000")]
    fg: String,
    /// Background color
    #[arg(long, default_value = "#FFFFFF")]
    bg: String,
    /// Quiet-zone margin (0-20)
    #[arg(long, default_value_t = 4)]
    margin: u32,
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print every preference
    Show,
    /// ar or en (direction follows)
    SetLanguage { language: String },
    /// light or dark
    SetMode { mode: String },
    /// BLUE_THEME, AQUA_THEME, PURPLE_THEME, GREEN_THEME, CYAN_THEME, ORANGE_THEME
    SetTheme { theme: String },
    /// Corner radius, clamped to 4-24
    SetRadius { radius: i64 },
    /// Clear every stored preference
    Reset,
}

#[derive(Subcommand)]
enum CardAction {
    /// Validate a card JSON file
    Validate {
        /// Path to the card JSON
        file: PathBuf,
    },
    /// Export a card JSON file as vCard 3.0
    Vcard {
        /// Path to the card JSON
        file: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn open_customizer(data_dir: &Path) -> Result<Customizer> {
    let store = RedbStore::open_in(data_dir)
        .with_context(|| format!("Failed to open preferences in {}", data_dir.display()))?;
    Ok(Customizer::load(Arc::new(store)))
}

fn read_card(path: &Path) -> Result<CardDraft> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    CardDraft::from_json(&json).with_context(|| format!("Invalid card file {}", path.display()))
}

fn print_prefs(c: &Customizer) {
    println!("Preferences:");
    println!("  language: {}", c.language);
    println!("  direction: {}", c.direction);
    println!("  mode: {}", c.mode.as_str());
    println!("  theme: {}", c.theme);
    println!("  layout: {}", c.layout.as_str());
    println!("  collapsed sidebar: {}", c.is_collapse);
    println!("  horizontal: {}", c.is_horizontal);
    println!("  card shadow: {}", c.is_card_shadow);
    println!("  border radius: {}", c.border_radius);
}

async fn handle_qr(
    config: &AppConfig,
    kind: &str,
    fields: QrFieldArgs,
    image: QrImageArgs,
    download: Option<PathBuf>,
) -> Result<()> {
    let kind: QrKind = kind.parse()?;
    let mut form = QrForm::new(kind);
    for (field, value) in fields.pairs() {
        if !kind.fields().contains(&field) {
            tracing::warn!(%kind, ?field, "Ignoring field not used by this QR type");
            continue;
        }
        form.set(field, value)?;
    }

    let payload = form
        .renderable_payload()
        .ok_or_else(|| anyhow::anyhow!("Nothing to encode: fill in the {} fields", kind))?;

    let mut options = QrOptions {
        error_correction: image.ecc.parse::<ErrorCorrection>()?,
        foreground: image.fg,
        background: image.bg,
        ..QrOptions::default()
    };
    options.set_size(image.size);
    options.set_margin(image.margin);
    let url = options.render_url(&config.qr_endpoint, &payload);

    println!("Payload: {}", payload);
    println!("Image URL: {}", url);

    if let Some(path) = download {
        let target = download_target(&path);
        let token = CancellationToken::new();
        let ctrl_c = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                ctrl_c.cancel();
            }
        });
        let written = download_png(&url, &target, &token).await?;
        println!("Saved: {}", written.display());
    }
    Ok(())
}

fn handle_prefs(data_dir: &Path, action: PrefsAction) -> Result<()> {
    let mut customizer = open_customizer(data_dir)?;
    match action {
        PrefsAction::Show => {}
        PrefsAction::SetLanguage { language } => {
            let language: Language = language.parse()?;
            customizer.set_language(language);
        }
        PrefsAction::SetMode { mode } => {
            let mode: ColorMode = mode.parse()?;
            customizer.set_mode(mode);
        }
        PrefsAction::SetTheme { theme } => {
            let theme: ThemeName = theme.parse()?;
            customizer.set_theme(theme);
        }
        PrefsAction::SetRadius { radius } => {
            let applied = customizer.set_border_radius(radius);
            if applied as i64 != radius {
                println!("Radius clamped to {}", applied);
            }
        }
        PrefsAction::Reset => {
            customizer.reset();
            println!("Preferences reset.");
        }
    }
    print_prefs(&customizer);
    Ok(())
}

fn handle_templates(data_dir: &Path) -> Result<()> {
    let language = open_customizer(data_dir)
        .map(|c| c.language)
        .unwrap_or_default();
    let t = Translator::new(language);

    println!("Templates:");
    for template in TemplateId::all() {
        let premium = if template.is_premium() { " [premium]" } else { "" };
        println!(
            "  {:<13} {} ({}, {} uses){}",
            template.as_str(),
            t.t(template.name_key()),
            t.t(template.category().label_key()),
            template.uses(),
            premium
        );
    }
    Ok(())
}

fn handle_card(action: CardAction) -> Result<()> {
    match action {
        CardAction::Validate { file } => {
            let draft = read_card(&file)?;
            let issues = validate_draft(&draft);
            if issues.is_empty() {
                println!("OK: {}", draft.full_name());
                return Ok(());
            }
            let t = Translator::new(Language::En);
            println!("Found {} issue(s):", issues.len());
            for issue in &issues {
                println!("  {}: {}", issue.field, t.t(issue.message_key));
            }
            anyhow::bail!("{} has {} invalid field(s)", file.display(), issues.len());
        }
        CardAction::Vcard { file, output } => {
            let draft = read_card(&file)?;
            let vcard = to_vcard(&draft);
            match output {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(vcard_file_name(&draft))
                    } else {
                        path
                    };
                    std::fs::write(&target, vcard)
                        .with_context(|| format!("Failed to write {}", target.display()))?;
                    println!("Saved: {}", target.display());
                }
                None => print!("{}", vcard),
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    match cli.command {
        Commands::Qr {
            kind,
            fields,
            image,
            download,
        } => {
            let config = match AppConfig::load_or_create(AppConfig::path_in(&data_dir)) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Using default config: {}", e);
                    AppConfig::default()
                }
            };
            handle_qr(&config, &kind, fields, image, download).await?;
        }
        Commands::Prefs { action } => handle_prefs(&data_dir, action)?,
        Commands::Templates => handle_templates(&data_dir)?,
        Commands::Card { action } => handle_card(action)?,
    }

    Ok(())
}
