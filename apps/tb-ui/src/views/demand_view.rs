use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Plot, Points};
use tb_app::{build_demand_page, Dataset, DemandPage, RunKind, RunWorker};
use tb_core::{entropy_rng, ParamSet};
use tb_series::DAY_LABELS;

use super::widgets;

#[derive(Default)]
pub struct DemandView {
    params: ParamSet,
    cached: Option<(ParamSet, DemandPage)>,
    worker: Option<RunWorker>,
    status: Option<String>,
    active_tab: DemandTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DemandTab {
    #[default]
    Heatmap,
    Trends,
    Table,
}

impl DemandView {
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Passenger Demand Prediction");

        ui.horizontal(|ui| {
            ui.label("Route:");
            widgets::route_filter_combo(ui, "demand_route", &mut self.params.route);
            ui.label("Bus type:");
            widgets::bus_type_combo(ui, "demand_bus_type", &mut self.params.bus_type);
            ui.label("Horizon:");
            widgets::horizon_combo(ui, "demand_horizon", &mut self.params.horizon);
            ui.label("Dates:");
            widgets::window_combo(ui, "demand_window", &mut self.params.window);
        });

        ui.horizontal(|ui| {
            if widgets::run_button(ui, RunKind::Prediction, &mut self.worker, &mut self.status) {
                self.params.ran = true;
            }
            widgets::export_button(ui, Dataset::DemandPrediction, &self.params, &mut self.status);
            if let Some(status) = &self.status {
                ui.label(status);
            }
        });
        ui.separator();

        if self.cached.as_ref().map(|(p, _)| p) != Some(&self.params) {
            let page = build_demand_page(&self.params, &mut entropy_rng());
            self.cached = Some((self.params, page));
        }
        let page = match &self.cached {
            Some((_, page)) => page.clone(),
            None => return,
        };

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active_tab, DemandTab::Heatmap, "Heatmap");
            ui.selectable_value(&mut self.active_tab, DemandTab::Trends, "Trends");
            ui.selectable_value(&mut self.active_tab, DemandTab::Table, "Detailed Data");
        });
        ui.separator();

        match self.active_tab {
            DemandTab::Heatmap => Self::show_heatmap(ui, &page),
            DemandTab::Trends => Self::show_trends(ui, &page),
            DemandTab::Table => Self::show_table(ui, &page),
        }
    }

    fn show_heatmap(ui: &mut egui::Ui, page: &DemandPage) {
        Plot::new("demand_heatmap")
            .x_axis_label("Hour of Day")
            .y_axis_label("Day of Week")
            .height(420.0)
            .y_axis_formatter(|mark, _range| {
                let day = mark.value.round() as usize;
                DAY_LABELS.get(day).map(|d| d.to_string()).unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for cell in &page.heatmap {
                    let alpha = ((cell.value / 100.0).clamp(0.1, 1.0) * 255.0) as u8;
                    let color = egui::Color32::from_rgba_unmultiplied(30, 110, 220, alpha);
                    plot_ui.points(
                        Points::new(vec![[f64::from(cell.hour), f64::from(cell.day)]])
                            .radius(cell.size as f32 / 2.0)
                            .color(color),
                    );
                }
            });
    }

    fn show_trends(ui: &mut egui::Ui, page: &DemandPage) {
        Plot::new("demand_trends")
            .legend(Legend::default())
            .x_axis_label("Day")
            .y_axis_label("Passengers")
            .height(420.0)
            .show(ui, |plot_ui| {
                plot_ui.line(widgets::line_from_series("Actual Passengers", &page.trends.actual));
                plot_ui.line(widgets::line_from_series(
                    "Predicted Passengers",
                    &page.trends.predicted,
                ));
                plot_ui.line(widgets::line_from_optional(
                    "Future Forecast",
                    &page.trends.future,
                ));
            });
    }

    fn show_table(ui: &mut egui::Ui, page: &DemandPage) {
        if page.rows.is_empty() {
            widgets::empty_table_notice(ui);
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::initial(100.0).at_least(80.0)) // Date
            .column(Column::initial(150.0).at_least(120.0)) // Route
            .column(Column::initial(100.0).at_least(80.0)) // Bus type
            .column(Column::initial(80.0).at_least(60.0)) // Current
            .column(Column::initial(80.0).at_least(60.0)) // Predicted
            .column(Column::initial(80.0).at_least(60.0)) // Change
            .column(Column::initial(90.0).at_least(70.0)) // Confidence
            .header(22.0, |mut header| {
                for title in [
                    "Date",
                    "Route",
                    "Bus Type",
                    "Current",
                    "Predicted",
                    "Change",
                    "Confidence",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for row in &page.rows {
                    body.row(20.0, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(&row.date);
                        });
                        table_row.col(|ui| {
                            ui.label(&row.route);
                        });
                        table_row.col(|ui| {
                            ui.label(&row.bus_type);
                        });
                        table_row.col(|ui| {
                            ui.label(row.current_demand.to_string());
                        });
                        table_row.col(|ui| {
                            ui.label(row.predicted_demand.to_string());
                        });
                        table_row.col(|ui| {
                            let color = if row.change >= 0.0 {
                                egui::Color32::from_rgb(16, 160, 100)
                            } else {
                                egui::Color32::from_rgb(220, 60, 90)
                            };
                            ui.colored_label(color, format!("{:.1}%", row.change.abs()));
                        });
                        table_row.col(|ui| {
                            ui.label(row.confidence.label());
                        });
                    });
                }
            });
    }
}
