use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot};
use tb_app::{build_routes_page, Dataset, RoutesPage, RunKind, RunWorker};
use tb_core::ParamSet;

use super::widgets;

#[derive(Default)]
pub struct RoutesView {
    params: ParamSet,
    cached: Option<(ParamSet, RoutesPage)>,
    worker: Option<RunWorker>,
    status: Option<String>,
}

impl RoutesView {
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Route Optimization");

        ui.horizontal(|ui| {
            ui.label("Route:");
            widgets::route_filter_combo(ui, "routes_route", &mut self.params.route);
            ui.label("Goal:");
            widgets::goal_combo(ui, "routes_goal", &mut self.params.goal);
            ui.label("Traffic:");
            widgets::traffic_combo(ui, "routes_traffic", &mut self.params.traffic);
        });

        ui.horizontal(|ui| {
            if widgets::run_button(ui, RunKind::Optimization, &mut self.worker, &mut self.status) {
                self.params.ran = true;
            }
            widgets::export_button(ui, Dataset::RouteOptimization, &self.params, &mut self.status);
            if let Some(status) = &self.status {
                ui.label(status);
            }
        });
        ui.separator();

        if self.cached.as_ref().map(|(p, _)| p) != Some(&self.params) {
            let page = build_routes_page(&self.params);
            self.cached = Some((self.params, page));
        }
        let page = match &self.cached {
            Some((_, page)) => page.clone(),
            None => return,
        };

        Self::show_efficiency(ui, &page);
        ui.separator();
        Self::show_table(ui, &page);
    }

    fn show_efficiency(ui: &mut egui::Ui, page: &RoutesPage) {
        let bars: Vec<Bar> = page
            .efficiency
            .scores
            .iter()
            .enumerate()
            .map(|(i, v)| Bar::new(i as f64, *v))
            .collect();
        let target = vec![page.efficiency.target; page.efficiency.scores.len()];

        Plot::new("routes_efficiency")
            .legend(Legend::default())
            .x_axis_label("Route")
            .y_axis_label("Efficiency (%)")
            .height(240.0)
            .x_axis_formatter({
                let labels: Vec<String> =
                    page.efficiency.labels.iter().map(|l| l.to_string()).collect();
                move |mark, _range| {
                    let route = mark.value.round() as usize;
                    labels.get(route).cloned().unwrap_or_default()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Efficiency Score"));
                plot_ui.line(widgets::line_from_series("Target Score", &target));
            });
    }

    fn show_table(ui: &mut egui::Ui, page: &RoutesPage) {
        if page.rows.is_empty() {
            widgets::empty_table_notice(ui);
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::initial(150.0).at_least(120.0)) // Route
            .column(Column::initial(130.0).at_least(100.0)) // Current time
            .column(Column::initial(130.0).at_least(100.0)) // Optimized time
            .column(Column::initial(120.0).at_least(90.0)) // Saving
            .column(Column::initial(200.0).at_least(150.0)) // Recommendation
            .column(Column::initial(80.0).at_least(60.0)) // Impact
            .header(22.0, |mut header| {
                for title in [
                    "Route",
                    "Current Time (mins)",
                    "Optimized Time (mins)",
                    "Time Saving (mins)",
                    "Recommendation",
                    "Impact",
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
                            ui.label(&row.route);
                        });
                        table_row.col(|ui| {
                            ui.label(row.current_time.to_string());
                        });
                        table_row.col(|ui| {
                            ui.label(row.optimized_time.to_string());
                        });
                        table_row.col(|ui| {
                            ui.colored_label(
                                egui::Color32::from_rgb(16, 160, 100),
                                row.time_saving.to_string(),
                            );
                        });
                        table_row.col(|ui| {
                            ui.label(&row.recommendation);
                        });
                        table_row.col(|ui| {
                            ui.label(row.impact.label());
                        });
                    });
                }
            });
    }
}
