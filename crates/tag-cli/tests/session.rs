//! Session state, the export guard, and the end-to-end label flow.

use std::sync::Barrier;
use std::thread;

use image::RgbImage;
use tag_catalog::{CatalogCache, CatalogSource, CatalogStatus};
use tag_cli::session::{Session, SessionError};
use tag_ingest::{IngestError, SAMPLE_CSV};
use tag_model::{CatalogEntry, ExportState, LabelView};
use tag_render::{LabelStyle, Rasterizer, RenderError, SvgRasterizer};
use tag_report::NoProgress;

struct FlatRasterizer;

impl Rasterizer for FlatRasterizer {
    fn rasterize(&self, _label: &LabelView) -> tag_render::Result<RgbImage> {
        Ok(RgbImage::new(40, 20))
    }
}

struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _label: &LabelView) -> tag_render::Result<RgbImage> {
        Err(RenderError::Raster("out of memory".to_string()))
    }
}

/// Blocks inside the first rasterization until the test releases it.
struct GatedRasterizer<'a> {
    entered: &'a Barrier,
    release: &'a Barrier,
}

impl Rasterizer for GatedRasterizer<'_> {
    fn rasterize(&self, _label: &LabelView) -> tag_render::Result<RgbImage> {
        self.entered.wait();
        self.release.wait();
        Ok(RgbImage::new(40, 20))
    }
}

fn loaded_session(csv: &str) -> Session {
    let catalog = vec![CatalogEntry::new(1, "Kurta", 999.0)];
    let mut session = Session::start(CatalogCache::ready(catalog));
    session.ingest_reader(csv.as_bytes()).unwrap();
    session
}

#[test]
fn second_export_is_rejected_while_first_runs() {
    let session = loaded_session(SAMPLE_CSV);
    let entered = Barrier::new(2);
    let release = Barrier::new(2);

    thread::scope(|scope| {
        let first = scope.spawn(|| {
            let gated = GatedRasterizer {
                entered: &entered,
                release: &release,
            };
            session.export(&gated, &mut NoProgress)
        });

        entered.wait();
        assert!(session.export_state().in_progress);
        let second = session.export(&FlatRasterizer, &mut NoProgress);
        assert!(matches!(second, Err(SessionError::ExportInProgress)));
        // The rejected call left the running export alone.
        assert!(session.export_state().in_progress);
        release.wait();

        let output = first.join().unwrap().unwrap();
        assert_eq!(output.pages, 1);
    });

    assert_eq!(session.export_state(), ExportState::IDLE);
}

#[test]
fn state_resets_after_success_and_failure() {
    let session =
        loaded_session("Style Number,Size,Color,(Do not touch) Order Id\n1,M,Red,A\n2,L,Blue,B\n");

    let tracker = session.tracker();
    let mut observed = Vec::new();
    let mut sink = |_percent: u8| observed.push(tracker.state());
    session.export(&FlatRasterizer, &mut sink).unwrap();
    assert_eq!(
        observed,
        [
            ExportState {
                in_progress: true,
                percent_complete: 50
            },
            ExportState {
                in_progress: true,
                percent_complete: 100
            },
        ]
    );
    assert!(session.export_state().is_idle());

    let err = session.export(&FailingRasterizer, &mut NoProgress).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Render(RenderError::Label { index: 0, .. })
    ));
    assert!(session.export_state().is_idle());

    // A new export may start after a failure.
    assert_eq!(session.export(&FlatRasterizer, &mut NoProgress).unwrap().pages, 2);
}

#[test]
fn failed_ingest_keeps_previous_rows() {
    let mut session = loaded_session(SAMPLE_CSV);
    let dir = tempfile::tempdir().unwrap();

    let err = session.ingest(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, SessionError::Ingest(IngestError::FileNotFound { .. })));
    let err = session
        .ingest_reader(&b"Style Number,Size\nQRV1,\xff\n"[..])
        .unwrap_err();
    assert!(matches!(err, SessionError::Ingest(IngestError::CsvParse { .. })));

    assert_eq!(session.rows().len(), 1);
    assert_eq!(session.rows()[0].order_id, "ORD1001");
}

#[test]
fn successful_ingest_replaces_rows() {
    let mut session = loaded_session(SAMPLE_CSV);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cutting.csv");
    let csv = "Style Number,Size,Color,(Do not touch) Order Id\n7,S,Green,X1\n8,S,Green,X2\n";
    std::fs::write(&path, csv).unwrap();

    assert_eq!(session.ingest(&path).unwrap(), 2);
    let order_ids: Vec<_> = session.rows().iter().map(|row| row.order_id.as_str()).collect();
    assert_eq!(order_ids, ["X1", "X2"]);
}

#[test]
fn unreachable_catalog_falls_back_to_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let cache = CatalogCache::start(CatalogSource::File(dir.path().join("catalog.json")));
    let mut session = Session::start(cache).with_placeholder_name("Unbranded");
    session
        .ingest_reader("Style Number,Size,Color,(Do not touch) Order Id\n1,M,Red,A\n".as_bytes())
        .unwrap();

    assert!(matches!(session.catalog_status(), CatalogStatus::Failed(_)));
    let labels = session.labels();
    assert_eq!(labels[0].product_name, "Unbranded");
    assert_eq!(labels[0].price, "NA");
}

#[test]
fn sample_row_produces_one_page_with_fallback_values() {
    let session = loaded_session(SAMPLE_CSV);

    let labels = session.labels();
    assert_eq!(labels.len(), 1);
    let label = &labels[0];
    assert_eq!(label.product_name, "Qurvii Product");
    assert_eq!(label.price, "NA");
    assert_eq!(label.sku, "QRV1-Red-M");
    assert_eq!(label.qr_payload(), "ORD1001");

    let rasterizer = SvgRasterizer::new(LabelStyle {
        raster_scale: 1.0,
        ..LabelStyle::default()
    })
    .unwrap();
    let mut progress = Vec::new();
    let mut sink = |percent: u8| progress.push(percent);
    let output = session.export(&rasterizer, &mut sink).unwrap();

    assert_eq!(progress, [100]);
    assert_eq!(output.pages, 1);
    let doc = lopdf::Document::load_mem(&output.bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    assert!(session.export_state().is_idle());
}
