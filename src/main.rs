use clap::{Args, Parser, Subcommand};
use cover_gen::config::{self, CoverConfig};
use cover_gen::cover::{self, CoverOptions};
use cover_gen::raster::{ChromeRasterizer, DEFAULT_WINDOW, HtmlOnly, Rasterizer};
use cover_gen::templates::TemplateRegistry;
use cover_gen::types::FormatSelection;
use cover_gen::{batch, export, output};
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cover-gen")]
#[command(about = "Cover image generator for blog articles")]
#[command(long_about = "\
Cover image generator for blog articles

Every article is a directory with an index.md. Its front matter and its
place in the content tree pick a category; the category picks colors and
an icon; a template lays out the title, category and footer.

Content structure:

  content/posts/
  ├── kafka/                       # Series directory (selects the category)
  │   ├── 01-intro/
  │   │   └── index.md             # ---\\ntitle: ...\\ntags: [...]\\n---
  │   └── 02-producers/
  │       └── index.md
  └── testing/
      └── 01-playwright/
          └── index.md

Category resolution (first match wins):
  1. Series directory after /posts/ in the article path
  2. First tag naming a known category
  3. Title keyword table
  4. First categories: entry naming a known category
  5. default

Output: <output>/<article>-linkedin.png (1200x627), <article>-blog.png (1280x720).
PNG output needs a local Chrome or Chromium; --html-only writes the HTML instead.

Run 'cover-gen gen-config' to generate a documented cover.toml.")]
#[command(version)]
struct Cli {
    /// Config file [default: ./cover.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress and category decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Flags shared by commands that write covers.
#[derive(Args, Clone)]
struct CoverArgs {
    /// Template id (see 'cover-gen templates') [default: from config]
    #[arg(short, long)]
    template: Option<String>,

    /// Formats to produce [default: from config]
    #[arg(short, long, value_enum)]
    format: Option<FormatSelection>,

    /// Output directory [default: from config]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write HTML documents instead of PNGs (no browser needed)
    #[arg(long)]
    html_only: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the cover of one article
    Generate {
        /// Article directory containing index.md
        article_dir: PathBuf,
        #[command(flatten)]
        cover: CoverArgs,
    },
    /// Generate covers for every article of a series
    Batch {
        /// Series directory name; lists series when omitted
        series: Option<String>,
        #[command(flatten)]
        cover: CoverArgs,
    },
    /// Render every template with sample data, plus a gallery page
    Export {
        /// Output directory
        #[arg(short, long, default_value = "template-previews")]
        output: PathBuf,

        /// Skip PNG previews (no browser needed)
        #[arg(long)]
        html_only: bool,
    },
    /// List available templates
    Templates,
    /// Print a stock cover.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let registry = TemplateRegistry::builtin();

    match cli.command {
        Command::Generate { article_dir, cover } => {
            let config = load_config(cli.config.as_deref())?;
            let options = cover_options(&cover, &config);
            registry.get(&options.template)?;
            let mut rasterizer = rasterizer(cover.html_only)?;
            let report = cover::generate_cover(
                &article_dir,
                &options,
                &config,
                &registry,
                rasterizer.as_mut(),
            )?;
            output::print_cover_report(&report);
        }
        Command::Batch { series, cover } => {
            let config = load_config(cli.config.as_deref())?;
            let content_dir = PathBuf::from(&config.defaults.content_dir);
            let Some(series) = series else {
                let available = batch::list_series(&content_dir)?;
                output::print_series_list(&available, &content_dir);
                return Ok(());
            };
            let options = cover_options(&cover, &config);
            registry.get(&options.template)?;
            let mut rasterizer = rasterizer(cover.html_only)?;

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_batch_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = batch::run_batch(
                &content_dir,
                &series,
                &options,
                &config,
                &registry,
                rasterizer.as_mut(),
                Some(tx),
            );
            printer.join().unwrap();
            let report = result?;
            output::print_batch_summary(&report);
            if !report.all_succeeded() {
                std::process::exit(1);
            }
        }
        Command::Export { output: dir, html_only } => {
            let config = load_config(cli.config.as_deref())?;
            let data = export::sample_data(&config);
            let mut previews = if html_only {
                None
            } else {
                Some(ChromeRasterizer::launch(DEFAULT_WINDOW)?)
            };
            let report = export::export_templates(
                &registry,
                &data,
                &dir,
                previews.as_mut().map(|r| r as &mut dyn Rasterizer),
            )?;
            output::print_export_report(&report);
        }
        Command::Templates => {
            output::print_template_list(&registry);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Warnings by default, debug with `--verbose`. `RUST_LOG` overrides both.
fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .try_init()
}

fn load_config(path: Option<&Path>) -> Result<CoverConfig, config::ConfigError> {
    match path {
        Some(path) => config::load_config_file(path),
        None => config::load_config(Path::new(".")),
    }
}

/// CLI flags over the config's `[defaults]`.
fn cover_options(args: &CoverArgs, config: &CoverConfig) -> CoverOptions {
    let mut options = CoverOptions::from_config(config);
    if let Some(template) = &args.template {
        options.template = template.clone();
    }
    if let Some(format) = args.format {
        options.format = format;
    }
    if let Some(dir) = &args.output {
        options.output_dir = dir.clone();
    }
    options
}

fn rasterizer(html_only: bool) -> Result<Box<dyn Rasterizer>, cover_gen::raster::RasterError> {
    if html_only {
        Ok(Box::new(HtmlOnly))
    } else {
        Ok(Box::new(ChromeRasterizer::launch(DEFAULT_WINDOW)?))
    }
}
