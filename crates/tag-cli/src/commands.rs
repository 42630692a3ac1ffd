use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info, info_span};

use tag_catalog::{CatalogCache, CatalogStatus, load_catalog};
use tag_ingest::SAMPLE_CSV;
use tag_model::{CatalogEntry, LabelView};
use tag_render::{Rasterizer, SvgRasterizer, write_preview_png};

use tag_cli::config::AppConfig;
use tag_cli::session::Session;

use crate::cli::{CatalogArgs, GenerateArgs, PreviewArgs, SampleArgs};

/// The only export failure text users see; details go to the log.
const EXPORT_FAILED: &str = "Failed to download Tag.";

pub struct GenerateOutcome {
    pub output_path: PathBuf,
    pub pages: usize,
    pub unmatched: usize,
    pub preview_dir: Option<PathBuf>,
}

pub fn run_generate(args: &GenerateArgs, config: &AppConfig) -> Result<GenerateOutcome> {
    let span = info_span!("generate", csv = %args.csv.display());
    let _guard = span.enter();

    let session = open_session(&args.csv, args.catalog.catalog.as_deref(), config)?;
    if session.rows().is_empty() {
        bail!("{} has no rows to print", args.csv.display());
    }
    let unmatched = session
        .labels()
        .iter()
        .filter(|label| !label.is_matched())
        .count();

    let rasterizer =
        SvgRasterizer::new(config.label.clone()).context("prepare label renderer")?;
    let bar = progress_bar(args.no_progress);
    let mut sink = |percent: u8| bar.set_position(u64::from(percent));
    let result = match &args.preview_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("create preview directory {}", dir.display()))?;
            let previewing = PreviewingRasterizer::new(&rasterizer, dir);
            session.export(&previewing, &mut sink)
        }
        None => session.export(&rasterizer, &mut sink),
    };
    bar.finish_and_clear();

    let output = result.map_err(|err| {
        error!(error = %err, "export failed");
        anyhow!(EXPORT_FAILED)
    })?;

    let output_path = config.output_path(args.output.as_deref());
    fs::write(&output_path, &output.bytes)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        path = %output_path.display(),
        pages = output.pages,
        "tag labels written"
    );

    Ok(GenerateOutcome {
        output_path,
        pages: output.pages,
        unmatched,
        preview_dir: args.preview_dir.clone(),
    })
}

pub fn run_preview(args: &PreviewArgs, config: &AppConfig) -> Result<Vec<LabelView>> {
    let session = open_session(&args.csv, args.catalog.catalog.as_deref(), config)?;
    Ok(session.labels())
}

pub fn run_catalog(args: &CatalogArgs, config: &AppConfig) -> Result<Vec<CatalogEntry>> {
    let source = config.catalog_source(args.catalog.catalog.as_deref());
    load_catalog(&source).with_context(|| format!("Failed to load product catalog from {source}"))
}

pub fn run_sample(args: &SampleArgs) -> Result<PathBuf> {
    fs::write(&args.output, SAMPLE_CSV)
        .with_context(|| format!("write {}", args.output.display()))?;
    Ok(args.output.clone())
}

/// Start the catalog fetch, load the CSV while it runs, then wait for it.
fn open_session(csv: &Path, catalog_flag: Option<&str>, config: &AppConfig) -> Result<Session> {
    let source = config.catalog_source(catalog_flag);
    debug!(catalog = %source, "starting catalog fetch");
    let mut session = Session::start(CatalogCache::start(source))
        .with_placeholder_name(config.label.placeholder_name.clone());
    session.ingest(csv).context("Error parsing CSV")?;
    report_catalog_status(&session.catalog_status());
    Ok(session)
}

fn report_catalog_status(status: &CatalogStatus) {
    if let CatalogStatus::Failed(reason) = status {
        eprintln!("warning: product catalog unavailable ({reason})");
        eprintln!("warning: labels use placeholder names and NA prices");
    }
}

fn progress_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(100);
    if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos:>3}%") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message("Rendering labels");
    bar
}

/// Saves every bitmap as a PNG on its way into the PDF.
struct PreviewingRasterizer<'a> {
    inner: &'a dyn Rasterizer,
    dir: &'a Path,
    next_index: Cell<usize>,
}

impl<'a> PreviewingRasterizer<'a> {
    fn new(inner: &'a dyn Rasterizer, dir: &'a Path) -> Self {
        Self {
            inner,
            dir,
            next_index: Cell::new(0),
        }
    }
}

impl Rasterizer for PreviewingRasterizer<'_> {
    fn rasterize(&self, label: &LabelView) -> tag_render::Result<RgbImage> {
        let bitmap = self.inner.rasterize(label)?;
        let index = self.next_index.get();
        let path = write_preview_png(&bitmap, self.dir, index)?;
        debug!(path = %path.display(), "preview written");
        self.next_index.set(index + 1);
        Ok(bitmap)
    }
}
