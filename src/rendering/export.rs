use gtk4::DrawingArea;
use gtk4::prelude::*;
use plotters::prelude::*;
use plotters_cairo::CairoBackend;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::{ExportFormat, PlotStyle};
use crate::error::{QvError, Result};
use crate::physics::PlotPoint;
use crate::state::AppState;
use super::plot::draw_quantum_plot;

// --- Screen Rendering Entry Point ---
pub fn setup_drawing(drawing_area: &DrawingArea, state: Rc<RefCell<AppState>>) {
    drawing_area.set_draw_func(move |_, cr: &cairo::Context, width, height| {
        let st = state.borrow();
        let (title, points) = st.plot_data();

        let backend = match CairoBackend::new(cr, (width as u32, height as u32)) {
            Ok(b) => b,
            Err(e) => {
                log::error!("Cannot create plot backend: {:?}", e);
                return;
            }
        };
        let root = backend.into_drawing_area();

        if let Err(e) = draw_quantum_plot(&root, &title, &points, &st.config.plot_style) {
            log::error!("Plot drawing failed: {}", e);
        }
    });
}

/// Output path and format for an export request.
///
/// `.pdf` and `.png` pick their format; any other extension keeps the path and
/// uses `fallback`; a missing extension gets the fallback's extension appended.
pub fn export_target(path: &Path, fallback: ExportFormat) -> (PathBuf, ExportFormat) {
    let ext = path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => (path.to_path_buf(), ExportFormat::Pdf),
        Some("png") => (path.to_path_buf(), ExportFormat::Png),
        Some(_) => (path.to_path_buf(), fallback),
        None => {
            let ext = match fallback {
                ExportFormat::Pdf => "pdf",
                ExportFormat::Png => "png",
            };
            (path.with_extension(ext), fallback)
        }
    }
}

// --- File Export Entry Point ---
pub fn export_plot(
    path: &Path,
    title: &str,
    points: &[PlotPoint],
    style: &PlotStyle,
    size: (u32, u32),
    format: ExportFormat,
) -> Result<()> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(QvError::InvalidInput(format!("export size {}x{} is empty", width, height)));
    }
    let render_err = |e: Box<dyn std::error::Error>| QvError::Render(e.to_string());

    match format {
        ExportFormat::Pdf => {
            let surface = cairo::PdfSurface::new(width as f64, height as f64, path)
                .map_err(|e| QvError::Render(e.to_string()))?;
            let cr = cairo::Context::new(&surface).map_err(|e| QvError::Render(e.to_string()))?;

            {
                let backend = CairoBackend::new(&cr, (width, height)).map_err(|e| QvError::Render(format!("{:?}", e)))?;
                let root = backend.into_drawing_area();
                draw_quantum_plot(&root, title, points, style).map_err(render_err)?;
            }

            surface.finish();
        }
        ExportFormat::Png => {
            let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
                .map_err(|e| QvError::Render(e.to_string()))?;

            {
                let cr = cairo::Context::new(&surface).map_err(|e| QvError::Render(e.to_string()))?;
                let backend = CairoBackend::new(&cr, (width, height)).map_err(|e| QvError::Render(format!("{:?}", e)))?;
                let root = backend.into_drawing_area();
                draw_quantum_plot(&root, title, points, style).map_err(render_err)?;
            }

            let mut file = std::fs::File::create(path)?;
            surface
                .write_to_png(&mut file)
                .map_err(|e| QvError::Render(e.to_string()))?;
        }
    }

    log::info!("Plot exported to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Analysis;

    #[test]
    fn test_export_target() {
        let (p, f) = export_target(Path::new("plot.PDF"), ExportFormat::Png);
        assert_eq!((p, f), (PathBuf::from("plot.PDF"), ExportFormat::Pdf));

        let (p, f) = export_target(Path::new("plot.png"), ExportFormat::Pdf);
        assert_eq!((p, f), (PathBuf::from("plot.png"), ExportFormat::Png));

        let (p, f) = export_target(Path::new("plot"), ExportFormat::Pdf);
        assert_eq!((p, f), (PathBuf::from("plot.pdf"), ExportFormat::Pdf));

        let (p, f) = export_target(Path::new("plot.img"), ExportFormat::Png);
        assert_eq!((p, f), (PathBuf::from("plot.img"), ExportFormat::Png));
    }

    #[test]
    fn test_export_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carbon.png");
        let points = Analysis::for_electron_count(6).unwrap().points();

        export_plot(&path, "C", &points, &PlotStyle::default(), (400, 300), ExportFormat::Png).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > 8);
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_export_rejects_empty_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let result = export_plot(&path, "C", &[], &PlotStyle::default(), (0, 300), ExportFormat::Png);
        assert!(matches!(result, Err(QvError::InvalidInput(_))));
        assert!(!path.exists());
    }
}
