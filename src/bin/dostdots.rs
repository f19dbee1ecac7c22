use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use chrono::{NaiveDateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use dostdots::config::{decode_query, query_of, render_link};
use dostdots::endpoint::needs_quote;
use dostdots::persist::{HttpConfigStore, SaveConfigRequest, save_quietly};
use dostdots::quote::resolve_quote;
use dostdots::render::{CpuBackend, Profile, Viewport, render_png, resolve_font};
use dostdots::{
    Configuration, DotShape, ExportSize, GeminiProvider, Mode, QuoteKind, RenderService, Settings,
};

#[derive(Parser, Debug)]
#[command(name = "dostdots", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one wallpaper as a PNG.
    Render(RenderArgs),
    /// Print the shareable render link for a configuration.
    Link(LinkArgs),
    /// List the theme catalog.
    Themes,
    /// Serve render links over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Render URL or bare query string; explicit flags below override its values.
    #[arg(long)]
    url: Option<String>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Theme index into the catalog.
    #[arg(long)]
    theme: Option<i64>,

    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,

    /// Birth date as YYYY-MM-DD.
    #[arg(long)]
    birth_date: Option<String>,

    #[arg(long, value_enum)]
    quote_type: Option<QuoteArg>,

    #[arg(long)]
    quote_tag: Option<String>,

    #[arg(long)]
    quote_text: Option<String>,

    #[arg(long)]
    phone_model: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output PNG path.
    #[arg(short, long)]
    out: PathBuf,

    /// Use the compact preview profile instead of the export profile.
    #[arg(long)]
    preview: bool,

    /// Local time to render, as YYYY-MM-DDTHH:MM[:SS]. Defaults to now.
    #[arg(long)]
    now: Option<String>,

    /// TTF/OTF used for text; falls back to a system font.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Export width in device pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Export height in device pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Device pixels per layout pixel.
    #[arg(long)]
    scale: Option<f64>,

    /// Never call the quote provider.
    #[arg(long)]
    offline: bool,
}

#[derive(Parser, Debug)]
struct LinkArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Base URL the render link is appended to.
    #[arg(long, default_value = "http://localhost:8080/")]
    base: String,

    /// Leave the quote text out so each render fetches a fresh one.
    #[arg(long)]
    daily: bool,

    /// Save the configuration for this user id.
    #[arg(long)]
    user: Option<String>,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen address; overrides DOSTDOTS_BIND.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// TTF/OTF used for text; falls back to a system font.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Life,
    Year,
    Hard75,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Life => Mode::Life,
            ModeArg::Year => Mode::Year,
            ModeArg::Hard75 => Mode::Hard75,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Square,
    Circle,
    Rounded,
    Star,
    Fire,
    Dollar,
    Check,
    Cross,
}

impl From<ShapeArg> for DotShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Square => DotShape::Square,
            ShapeArg::Circle => DotShape::Circle,
            ShapeArg::Rounded => DotShape::Rounded,
            ShapeArg::Star => DotShape::Star,
            ShapeArg::Fire => DotShape::Fire,
            ShapeArg::Dollar => DotShape::Dollar,
            ShapeArg::Check => DotShape::Check,
            ShapeArg::Cross => DotShape::Cross,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QuoteArg {
    None,
    Quote,
    Quran,
}

impl From<QuoteArg> for QuoteKind {
    fn from(q: QuoteArg) -> Self {
        match q {
            QuoteArg::None => QuoteKind::None,
            QuoteArg::Quote => QuoteKind::Quote,
            QuoteArg::Quran => QuoteKind::Quran,
        }
    }
}

impl ConfigArgs {
    fn build(&self) -> Configuration {
        let mut c = self
            .url
            .as_deref()
            .map(|u| decode_query(query_of(u)))
            .unwrap_or_default();
        if let Some(m) = self.mode {
            c.mode = m.into();
        }
        if let Some(t) = self.theme {
            c.theme_id = t;
        }
        if let Some(s) = self.shape {
            c.shape = s.into();
        }
        if let Some(b) = &self.birth_date {
            c.birth_date = b.clone();
        }
        if let Some(q) = self.quote_type {
            c.quote_type = q.into();
        }
        if let Some(t) = &self.quote_tag {
            c.quote_tag = t.clone();
        }
        if let Some(t) = &self.quote_text {
            c.quote_text = t.clone();
        }
        if let Some(p) = &self.phone_model {
            c.phone_model = p.clone();
        }
        c
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    match cli.cmd {
        Command::Render(args) => cmd_render(args, &settings).await,
        Command::Link(args) => cmd_link(args, &settings).await,
        Command::Themes => {
            cmd_themes();
            Ok(())
        }
        Command::Serve(args) => cmd_serve(args, &settings).await,
    }
}

fn parse_now(raw: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    let Some(raw) = raw else {
        return Ok(chrono::Local::now().naive_local());
    };
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .with_context(|| format!("parse --now '{raw}' (expected YYYY-MM-DDTHH:MM[:SS])"))
}

async fn cmd_render(args: RenderArgs, settings: &Settings) -> anyhow::Result<()> {
    let mut config = args.config.build();
    let now = parse_now(args.now.as_deref())?;

    if !args.offline && needs_quote(&config) {
        let provider = GeminiProvider::from_settings(settings).context("build quote client")?;
        let tag = config.quote_tag.trim().to_string();
        config.quote_text = resolve_quote(&provider, config.quote_type, &tag).await;
    }

    let font_path = args.font.as_deref().or(settings.font_path.as_deref());
    let font = resolve_font(font_path)?;

    let (profile, viewport) = if args.preview {
        let mut v = Viewport::preview();
        if let Some(s) = args.scale.filter(|s| s.is_finite() && *s > 0.0) {
            v.scale = s;
        }
        (Profile::Preview, v)
    } else {
        let export = ExportSize {
            width: args.width.unwrap_or(settings.export.width),
            height: args.height.unwrap_or(settings.export.height),
            scale: args.scale.unwrap_or(settings.export.scale),
        };
        (Profile::Standalone, Viewport::export(export))
    };

    let mut backend = CpuBackend::new(font);
    let png = render_png(&mut backend, &config, profile, viewport, now)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

async fn cmd_link(args: LinkArgs, settings: &Settings) -> anyhow::Result<()> {
    let config = args.config.build();
    let url = render_link(&args.base, &config, args.daily);
    println!("{url}");

    if let Some(user) = args.user {
        let store = HttpConfigStore::new(settings.save_config_url.clone())
            .context("build persistence client")?;
        let request = SaveConfigRequest::new(&user, &config, Utc::now());
        if !save_quietly(&store, &request).await {
            eprintln!("warning: configuration was not saved to {}", store.url());
        }
    }
    Ok(())
}

fn cmd_themes() {
    for (i, t) in dostdots::theme::THEMES.iter().enumerate() {
        println!(
            "{i:>2}  {:<16} bg {}  dots {}  accent {}  current {}",
            t.name,
            t.bg.to_hex(),
            t.dots.to_hex(),
            t.accent.to_hex(),
            t.current.to_hex()
        );
    }
}

async fn cmd_serve(args: ServeArgs, settings: &Settings) -> anyhow::Result<()> {
    let provider = GeminiProvider::from_settings(settings).context("build quote client")?;
    if !provider.has_api_key() {
        tracing::warn!("no API key set; quotes will use the fallback text");
    }

    let font_path = args.font.as_deref().or(settings.font_path.as_deref());
    let font = resolve_font(font_path)?;

    let bind = args.bind.unwrap_or(settings.bind);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("bind {bind}"))?;
    eprintln!("listening on http://{bind}/?render=true");

    let service = Arc::new(RenderService::new(provider, settings.export, font));
    dostdots::endpoint::serve(listener, service).await?;
    Ok(())
}
