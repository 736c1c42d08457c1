use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Plot};
use tb_app::{build_tickets_page, Dataset, RunKind, RunWorker, TicketsPage};
use tb_core::ParamSet;

use super::widgets;

#[derive(Default)]
pub struct TicketsView {
    params: ParamSet,
    cached: Option<(ParamSet, TicketsPage)>,
    worker: Option<RunWorker>,
    status: Option<String>,
}

impl TicketsView {
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Ticket Sales Forecasting");

        ui.horizontal(|ui| {
            ui.label("Route:");
            widgets::route_filter_combo(ui, "tickets_route", &mut self.params.route);
            ui.label("Bus type:");
            widgets::bus_type_combo(ui, "tickets_bus_type", &mut self.params.bus_type);
            ui.label("Forecast period:");
            widgets::horizon_combo(ui, "tickets_horizon", &mut self.params.horizon);
            ui.label("Model:");
            widgets::model_combo(ui, "tickets_model", &mut self.params.model);
        });

        ui.horizontal(|ui| {
            if widgets::run_button(ui, RunKind::Forecast, &mut self.worker, &mut self.status) {
                self.params.ran = true;
            }
            widgets::export_button(ui, Dataset::TicketForecast, &self.params, &mut self.status);
            if let Some(status) = &self.status {
                ui.label(status);
            }
        });
        ui.separator();

        if self.cached.as_ref().map(|(p, _)| p) != Some(&self.params) {
            let page = build_tickets_page(&self.params);
            self.cached = Some((self.params, page));
        }
        let page = match &self.cached {
            Some((_, page)) => page.clone(),
            None => return,
        };

        Self::show_forecast(ui, &page);
        ui.separator();
        Self::show_table(ui, &page);
    }

    fn show_forecast(ui: &mut egui::Ui, page: &TicketsPage) {
        let f = &page.forecast;
        Plot::new("ticket_forecast")
            .legend(Legend::default())
            .x_axis_label("Week")
            .y_axis_label("Tickets Sold")
            .height(280.0)
            .x_axis_formatter({
                let labels: Vec<String> = f.labels.iter().map(|l| l.to_string()).collect();
                move |mark, _range| {
                    let week = mark.value.round() as usize;
                    labels.get(week).cloned().unwrap_or_default()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(widgets::line_from_optional("Historical Sales", &f.historical));
                plot_ui.line(widgets::line_from_optional("Forecasted Sales", &f.forecast));
                plot_ui.line(widgets::line_from_optional("Upper Confidence", &f.upper));
                plot_ui.line(widgets::line_from_optional("Lower Confidence", &f.lower));
            });
    }

    fn show_table(ui: &mut egui::Ui, page: &TicketsPage) {
        if page.rows.is_empty() {
            widgets::empty_table_notice(ui);
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::initial(100.0).at_least(80.0)) // Date
            .column(Column::initial(150.0).at_least(120.0)) // Route
            .column(Column::initial(110.0).at_least(90.0)) // Predicted demand
            .column(Column::initial(110.0).at_least(90.0)) // Capacity
            .column(Column::initial(90.0).at_least(70.0)) // Gap
            .column(Column::initial(120.0).at_least(100.0)) // Recommendation
            .column(Column::initial(80.0).at_least(60.0)) // Priority
            .header(22.0, |mut header| {
                for title in [
                    "Date",
                    "Route",
                    "Predicted Demand",
                    "Current Capacity",
                    "Capacity Gap",
                    "Recommendation",
                    "Priority",
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
                            ui.label(row.predicted_demand.to_string());
                        });
                        table_row.col(|ui| {
                            ui.label(row.current_capacity.to_string());
                        });
                        table_row.col(|ui| {
                            let color = if row.capacity_gap > 0 {
                                egui::Color32::from_rgb(220, 60, 90)
                            } else {
                                egui::Color32::from_rgb(16, 160, 100)
                            };
                            ui.colored_label(color, row.capacity_gap.to_string());
                        });
                        table_row.col(|ui| {
                            ui.label(&row.recommendation);
                        });
                        table_row.col(|ui| {
                            ui.label(row.priority.label());
                        });
                    });
                }
            });
    }
}
