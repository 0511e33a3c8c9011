use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use md2h_config::Config;
use md2h_engine::{Language, SiteBuilder, SiteOptions, highlight};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Markdown to annotated HTML converter.
#[derive(Debug, Parser)]
#[command(name = "md2h", version, about, arg_required_else_help = true)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert every markdown document under DIR into an HTML site
    Build {
        /// Source directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Config file; defaults to DIR/md2h.toml, then ~/.config/md2h/config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output directory name, overriding the config
        #[arg(short, long)]
        out: Option<String>,
        /// Grammar for code fences, overriding the config
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Write a default config file to DIR/md2h.toml
    Init {
        /// Source directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Write ~/.config/md2h/config.toml instead
        #[arg(long)]
        user: bool,
        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print highlighted markup for a source file
    Highlight {
        /// Source file, or `-` for stdin
        file: PathBuf,
        /// Grammar name or alias (csharp, html, css, javascript, typescript)
        #[arg(short, long)]
        lang: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Command::Build {
            dir,
            config,
            out,
            lang,
        } => run_build(&dir, config.as_deref(), out, lang.as_deref()),
        Command::Init { dir, user, force } => {
            let target = run_init(&dir, user, force)?;
            log::info!("wrote {}", target.display());
            Ok(())
        }
        Command::Highlight { file, lang } => {
            let html = run_highlight(&file, &lang)?;
            println!("{html}");
            Ok(())
        }
    }
}

fn run_build(
    dir: &Path,
    config_path: Option<&Path>,
    out: Option<String>,
    lang: Option<&str>,
) -> Result<()> {
    let config = Config::resolve(config_path, dir)?;
    let options = site_options(config, out, lang)?;
    log::debug!("site options: {options:?}");

    let report = SiteBuilder::new(dir, options)
        .build()
        .with_context(|| format!("building site from {}", dir.display()))?;

    log::info!(
        "converted {} documents, copied {} images",
        report.pages.len(),
        report.images_copied
    );
    Ok(())
}

/// Command-line overrides win over the loaded config.
fn site_options(config: Config, out: Option<String>, lang: Option<&str>) -> Result<SiteOptions> {
    let lang = lang.unwrap_or(&config.code_language);
    let code_language: Language = lang
        .parse()
        .with_context(|| format!("selecting code language {lang:?}"))?;

    Ok(SiteOptions {
        output_dir: out.unwrap_or(config.output_dir),
        excluded_dirs: config.excluded_dirs,
        skip_files: config.skip_files,
        image_patterns: config.image_patterns,
        code_language,
    })
}

fn run_init(dir: &Path, user: bool, force: bool) -> Result<PathBuf> {
    let target = if user {
        Config::config_path()
    } else {
        Config::project_path(dir)
    };
    if target.exists() && !force {
        anyhow::bail!("{} already exists; pass --force to replace it", target.display());
    }
    if user {
        Config::default().save()?;
    } else {
        Config::default().save_to_path(&target)?;
    }
    Ok(target)
}

fn run_highlight(file: &Path, lang: &str) -> Result<String> {
    let language: Language = lang.parse()?;
    let source = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?
    };
    Ok(highlight(&source, language))
}
