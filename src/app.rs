use eframe::egui;

use crate::error::{PrepError, Result};
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BoxPlotViewer {
    pub state: ViewerState,
}

impl BoxPlotViewer {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }
}

impl eframe::App for BoxPlotViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: counts and image path ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: statistics ----
        egui::SidePanel::left("stats_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: box plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::box_plot(ui, &self.state);
        });
    }
}

/// Open the viewer window and block until it is closed.
pub fn show(state: ViewerState) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        crate::render::TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(BoxPlotViewer::new(state)))),
    )
    .map_err(|e| PrepError::Viewer(e.to_string()))
}
