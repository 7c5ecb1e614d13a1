use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use badgereel::{
    CarouselKind, GeneratorConfig, Motion, RepoCatalog, RepoNode, RepoRef, RepoSummary,
    TrophyStats, preview, render_static_card, repo_carousel, select_repos, trophy_carousel,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "badgereel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animated repo carousel.
    Repos(ReposArgs),
    /// Render the animated trophy carousel.
    Trophies(TrophiesArgs),
    /// Render a single static repo card.
    Card(CardArgs),
    /// Render a carousel frozen at one instant as a PNG.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input records (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional generator config (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SelectArgs {
    /// Comma-separated `owner/name` or `name` list; overrides pinned/top selection.
    #[arg(long, env = "REPOS")]
    repos: Option<String>,

    /// Owner assumed for bare names in `--repos`.
    #[arg(long, env = "GH_USER")]
    owner: Option<String>,
}

#[derive(Parser, Debug)]
struct ReposArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    select: SelectArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Seconds each page is on screen.
    #[arg(long, env = "REPO_PAGE_SEC")]
    page_secs: Option<f64>,

    /// Parse the written SVG and print diagnostics.
    #[arg(long)]
    check: bool,
}

#[derive(Parser, Debug)]
struct TrophiesArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Seconds each page is on screen.
    #[arg(long, env = "TROPHIES_PAGE_SEC")]
    page_secs: Option<f64>,

    /// Parse the written SVG and print diagnostics.
    #[arg(long)]
    check: bool,
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Input repository record (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Avatar image link (URL or data URI).
    #[arg(long)]
    avatar: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Repos,
    Trophies,
}

impl From<KindChoice> for CarouselKind {
    fn from(k: KindChoice) -> Self {
        match k {
            KindChoice::Repos => CarouselKind::Repos,
            KindChoice::Trophies => CarouselKind::Trophies,
        }
    }
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Which carousel the input describes.
    #[arg(long, value_enum)]
    kind: KindChoice,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    select: SelectArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Instant to capture, in seconds from the start of the cycle.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Raster scale factor.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Seconds each page is on screen; defaults to the kind's `*_PAGE_SEC` variable.
    #[arg(long)]
    page_secs: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match cli.cmd {
        Command::Repos(args) => cmd_repos(args),
        Command::Trophies(args) => cmd_trophies(args),
        Command::Card(args) => cmd_card(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    let v = serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))?;
    Ok(v)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    match path {
        Some(p) => Ok(GeneratorConfig::load(p)?),
        None => Ok(GeneratorConfig::default()),
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn check_svg(svg: &str) -> anyhow::Result<()> {
    let stats = preview::inspect(svg)?;
    eprintln!("svg diagnostics:");
    eprintln!("  size:       {}x{}", stats.width, stats.height);
    eprintln!("  text_nodes: {}", stats.text_nodes);
    Ok(())
}

fn env_page_secs(kind: CarouselKind) -> anyhow::Result<Option<f64>> {
    let key = kind.page_secs_env();
    match std::env::var(key) {
        Ok(raw) => {
            let secs = raw
                .trim()
                .parse()
                .with_context(|| format!("parse {key}='{raw}'"))?;
            Ok(Some(secs))
        }
        Err(_) => Ok(None),
    }
}

fn load_repos(
    input: &InputArgs,
    select: &SelectArgs,
    cfg: &GeneratorConfig,
) -> anyhow::Result<Vec<RepoSummary>> {
    let catalog: RepoCatalog = read_json(&input.in_path, "repo catalog")?;
    let owner = select.owner.as_deref().unwrap_or(cfg.owner());
    let explicit = select
        .repos
        .as_deref()
        .map(|raw| RepoRef::parse_list(raw, owner))
        .unwrap_or_default();
    Ok(select_repos(&catalog, &explicit, cfg.max_repos())?)
}

fn cmd_repos(args: ReposArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.input.config.as_deref())?;
    let opts = cfg.carousel_opts(CarouselKind::Repos, args.page_secs)?;
    let repos = load_repos(&args.input, &args.select, &cfg)?;

    let svg = repo_carousel(&repos, &opts, Motion::Animated)?;
    write_output(&args.out, svg.as_bytes())?;
    if args.check {
        check_svg(&svg)?;
    }
    Ok(())
}

fn cmd_trophies(args: TrophiesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.input.config.as_deref())?;
    let opts = cfg.carousel_opts(CarouselKind::Trophies, args.page_secs)?;
    let stats: TrophyStats = read_json(&args.input.in_path, "trophy stats")?;

    let svg = trophy_carousel(&stats.trophies(), &opts, Motion::Animated)?;
    write_output(&args.out, svg.as_bytes())?;
    if args.check {
        check_svg(&svg)?;
    }
    Ok(())
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let node: RepoNode = read_json(&args.in_path, "repository")?;
    let svg = render_static_card(&RepoSummary::from_node(&node), args.avatar.as_deref());
    write_output(&args.out, svg.as_bytes())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.input.config.as_deref())?;
    let kind = CarouselKind::from(args.kind);
    let page_secs = match args.page_secs {
        Some(secs) => Some(secs),
        None => env_page_secs(kind)?,
    };
    let opts = cfg.carousel_opts(kind, page_secs)?;
    let motion = Motion::Frozen { at_secs: args.at };

    let svg = match kind {
        CarouselKind::Repos => {
            let repos = load_repos(&args.input, &args.select, &cfg)?;
            repo_carousel(&repos, &opts, motion)?
        }
        CarouselKind::Trophies => {
            let stats: TrophyStats = read_json(&args.input.in_path, "trophy stats")?;
            trophy_carousel(&stats.trophies(), &opts, motion)?
        }
    };

    let img = preview::rasterize(&svg, args.scale)?;
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
