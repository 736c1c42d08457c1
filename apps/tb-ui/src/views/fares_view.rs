use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot};
use tb_app::{build_fares_page, Dataset, FaresPage, RunKind, RunWorker};
use tb_core::ParamSet;
use tb_series::fares::MONTH_LABELS;

use super::widgets;

#[derive(Default)]
pub struct FaresView {
    params: ParamSet,
    cached: Option<(ParamSet, FaresPage)>,
    worker: Option<RunWorker>,
    status: Option<String>,
    show_trends: bool,
}

impl FaresView {
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Dynamic Fare Price Estimator");

        ui.horizontal(|ui| {
            ui.label("Route:");
            widgets::route_filter_combo(ui, "fares_route", &mut self.params.route);
            ui.label("Bus type:");
            widgets::bus_type_combo(ui, "fares_bus_type", &mut self.params.bus_type);
        });

        ui.horizontal(|ui| {
            if widgets::run_button(
                ui,
                RunKind::FareCalculation,
                &mut self.worker,
                &mut self.status,
            ) {
                self.params.ran = true;
            }
            widgets::export_button(ui, Dataset::FareEstimation, &self.params, &mut self.status);
            if let Some(status) = &self.status {
                ui.label(status);
            }
        });
        ui.separator();

        if self.cached.as_ref().map(|(p, _)| p) != Some(&self.params) {
            let page = build_fares_page(&self.params);
            self.cached = Some((self.params, page));
        }
        let page = match &self.cached {
            Some((_, page)) => page.clone(),
            None => return,
        };

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.show_trends, false, "By Route");
            ui.selectable_value(&mut self.show_trends, true, "Yearly Trends");
        });
        ui.separator();

        if self.show_trends {
            Self::show_trend_lines(ui, &page);
        } else {
            Self::show_comparison_bars(ui, &page);
        }

        ui.separator();
        Self::show_table(ui, &page);
    }

    fn show_trend_lines(ui: &mut egui::Ui, page: &FaresPage) {
        Plot::new("fare_trends")
            .legend(Legend::default())
            .x_axis_label("Month")
            .y_axis_label("Fare (₹)")
            .height(280.0)
            .x_axis_formatter(|mark, _range| {
                let month = mark.value.round() as usize;
                MONTH_LABELS.get(month).map(|m| m.to_string()).unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.line(widgets::line_from_series("Current Fare", &page.trends.current));
                plot_ui.line(widgets::line_from_series(
                    "AI-Suggested Fare",
                    &page.trends.suggested,
                ));
                plot_ui.line(widgets::line_from_series(
                    "Competitor Avg. Fare",
                    &page.trends.competitor,
                ));
            });
    }

    fn show_comparison_bars(ui: &mut egui::Ui, page: &FaresPage) {
        // Offset the two bar groups so they sit side by side per route.
        let current: Vec<Bar> = page
            .comparison
            .current
            .iter()
            .enumerate()
            .map(|(i, v)| Bar::new(i as f64 - 0.2, *v).width(0.35))
            .collect();
        let suggested: Vec<Bar> = page
            .comparison
            .suggested
            .iter()
            .enumerate()
            .map(|(i, v)| Bar::new(i as f64 + 0.2, *v).width(0.35))
            .collect();

        Plot::new("fare_comparison")
            .legend(Legend::default())
            .x_axis_label("Route")
            .y_axis_label("Fare (₹)")
            .height(280.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(current).name("Current Fare"));
                plot_ui.bar_chart(BarChart::new(suggested).name("AI-Suggested Fare"));
            });
    }

    fn show_table(ui: &mut egui::Ui, page: &FaresPage) {
        if page.rows.is_empty() {
            widgets::empty_table_notice(ui);
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::initial(150.0).at_least(120.0)) // Route
            .column(Column::initial(100.0).at_least(80.0)) // Bus type
            .column(Column::initial(90.0).at_least(70.0)) // Current
            .column(Column::initial(90.0).at_least(70.0)) // Suggested
            .column(Column::initial(80.0).at_least(60.0)) // Change
            .column(Column::initial(90.0).at_least(70.0)) // Competitor
            .column(Column::initial(110.0).at_least(90.0)) // Recommendation
            .header(22.0, |mut header| {
                for title in [
                    "Route",
                    "Bus Type",
                    "Current Fare",
                    "Suggested",
                    "Change",
                    "Competitor",
                    "Recommendation",
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
                            ui.label(&row.bus_type);
                        });
                        table_row.col(|ui| {
                            ui.label(format!("₹{}", row.current_fare));
                        });
                        table_row.col(|ui| {
                            ui.label(format!("₹{}", row.suggested_fare));
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
                            ui.label(format!("₹{}", row.competitor_fare));
                        });
                        table_row.col(|ui| {
                            ui.label(row.recommendation.label());
                        });
                    });
                }
            });
    }
}
