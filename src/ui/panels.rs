use eframe::egui::{self, RichText, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – statistics
// ---------------------------------------------------------------------------

/// Render the statistics panel.
pub fn side_panel(ui: &mut Ui, state: &ViewerState) {
    ui.heading("Statistics");
    ui.separator();

    if state.summary.is_none() {
        ui.label("No numeric values in the dataset.");
    }

    egui::Grid::new("stats_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for (label, value) in state.stat_rows() {
                ui.strong(label);
                ui.label(value);
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} rows, {} after outlier removal",
            state.original_count,
            state.filtered_count()
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_points, "Show points")
            .clicked()
        {
            state.show_points = !state.show_points;
        }

        ui.separator();

        ui.label(RichText::new(format!("Saved: {}", state.image_path.display())).weak());
    });
}
