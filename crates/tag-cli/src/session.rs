//! Session state: loaded rows, the catalog, and the export guard.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use thiserror::Error;
use tracing::{info, info_span, trace, warn};

use tag_catalog::{CatalogCache, CatalogStatus};
use tag_ingest::{IngestError, ingest_path, ingest_reader};
use tag_model::{DEFAULT_PLACEHOLDER_NAME, ExportState, LabelView, RowRecord};
use tag_render::{Rasterizer, RenderError};
use tag_report::{PdfOutput, ProgressSink, export_labels};

use crate::logging::redact_value;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("an export is already in progress")]
    ExportInProgress,
}

#[derive(Debug, Default)]
struct TrackerState {
    in_progress: AtomicBool,
    percent: AtomicU8,
}

/// Shared view of the export state. Clones observe the same run.
#[derive(Debug, Clone, Default)]
pub struct ExportTracker {
    inner: Arc<TrackerState>,
}

impl ExportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExportState {
        ExportState {
            in_progress: self.inner.in_progress.load(Ordering::Acquire),
            percent_complete: self.inner.percent.load(Ordering::Acquire),
        }
    }

    /// Claim the tracker for one export run. `None` if a run is in flight.
    pub fn try_begin(&self) -> Option<ExportGuard> {
        self.inner
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.inner.percent.store(0, Ordering::Release);
        Some(ExportGuard {
            inner: Arc::clone(&self.inner),
        })
    }
}

/// Held for the duration of one export. Dropping it returns the tracker to idle.
#[derive(Debug)]
pub struct ExportGuard {
    inner: Arc<TrackerState>,
}

impl ExportGuard {
    /// Record progress; never moves backwards.
    pub fn publish(&self, percent: u8) {
        self.inner.percent.fetch_max(percent.min(100), Ordering::AcqRel);
    }
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.inner.percent.store(0, Ordering::Release);
        self.inner.in_progress.store(false, Ordering::Release);
    }
}

/// Forwards progress to the guard and then to the caller's sink.
struct TrackedProgress<'a, 'b> {
    guard: &'a ExportGuard,
    inner: &'a mut (dyn ProgressSink + 'b),
}

impl ProgressSink for TrackedProgress<'_, '_> {
    fn publish(&mut self, percent: u8) {
        self.guard.publish(percent);
        self.inner.publish(percent);
    }
}

/// One working session over a cutting list.
#[derive(Debug)]
pub struct Session {
    catalog: CatalogCache,
    rows: Vec<RowRecord>,
    placeholder_name: String,
    tracker: ExportTracker,
}

impl Session {
    /// Begin a session around an already started catalog load.
    pub fn start(catalog: CatalogCache) -> Self {
        Self {
            catalog,
            rows: Vec::new(),
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            tracker: ExportTracker::new(),
        }
    }

    #[must_use]
    pub fn with_placeholder_name(mut self, name: impl Into<String>) -> Self {
        self.placeholder_name = name.into();
        self
    }

    /// Load the cutting list at `path`. On error the current rows are kept.
    pub fn ingest(&mut self, path: &Path) -> Result<usize, SessionError> {
        let span = info_span!("ingest", path = %path.display());
        let _guard = span.enter();
        let rows = ingest_path(path)?;
        Ok(self.replace_rows(rows))
    }

    /// Like [`Session::ingest`] for an in-memory or streamed source.
    pub fn ingest_reader<R: Read>(&mut self, input: R) -> Result<usize, SessionError> {
        let rows = ingest_reader(input)?;
        Ok(self.replace_rows(rows))
    }

    fn replace_rows(&mut self, rows: Vec<RowRecord>) -> usize {
        for (index, row) in rows.iter().enumerate() {
            trace!(
                index,
                style_number = redact_value(&row.style_number),
                order_id = redact_value(&row.order_id),
                "row loaded"
            );
        }
        info!(row_count = rows.len(), "rows replaced");
        self.rows = rows;
        self.rows.len()
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    /// Wait for the catalog fetch and report how it ended.
    pub fn catalog_status(&self) -> CatalogStatus {
        self.catalog.wait_status()
    }

    /// Labels for the current rows against the settled catalog.
    pub fn labels(&self) -> Vec<LabelView> {
        let catalog = self.catalog.wait();
        LabelView::join_all(&self.rows, &catalog, &self.placeholder_name)
    }

    pub fn tracker(&self) -> ExportTracker {
        self.tracker.clone()
    }

    pub fn export_state(&self) -> ExportState {
        self.tracker.state()
    }

    /// Render every label into one PDF.
    ///
    /// Rejected without side effects while another export is running. The
    /// export state is back to idle when this returns, whatever the outcome.
    pub fn export(
        &self,
        rasterizer: &dyn Rasterizer,
        progress: &mut dyn ProgressSink,
    ) -> Result<PdfOutput, SessionError> {
        let Some(guard) = self.tracker.try_begin() else {
            warn!("export requested while another export is running");
            return Err(SessionError::ExportInProgress);
        };
        let labels = self.labels();
        let mut tracked = TrackedProgress {
            guard: &guard,
            inner: progress,
        };
        let output = export_labels(&labels, rasterizer, &mut tracked)?;
        Ok(output)
    }
}
