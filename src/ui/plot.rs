use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Plot, Points};

use crate::render::X_LABEL;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Box plot (central panel)
// ---------------------------------------------------------------------------

const BOX_FILL: Color32 = Color32::from_rgb(76, 114, 176);

/// Render the horizontal box plot in the central panel.
pub fn box_plot(ui: &mut Ui, state: &ViewerState) {
    let Some(b) = state.box_stats else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No dex_size values left to plot");
        });
        return;
    };

    let elem = BoxElem::new(
        0.0,
        BoxSpread::new(b.lower_whisker, b.q1, b.median, b.q3, b.upper_whisker),
    )
    .name("dex_size (MB)")
    .box_width(0.4)
    .whisker_width(0.2)
    .fill(BOX_FILL.gamma_multiply(0.6))
    .stroke(Stroke::new(1.5, Color32::BLACK));

    let show_points = state.show_points;

    Plot::new("box_plot")
        .x_axis_label(X_LABEL)
        .show_axes([true, false])
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]).name("dex_size").horizontal());

            if show_points {
                // Spread points vertically so dense regions stay readable.
                let points: Vec<[f64; 2]> = state
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [v, ((i % 7) as f64 - 3.0) * 0.02])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name("values")
                        .radius(1.5)
                        .color(Color32::DARK_GRAY),
                );
            }
        });
}
