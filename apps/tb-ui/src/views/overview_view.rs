use egui_plot::{Bar, BarChart, Legend, Plot, Points};
use tb_app::{build_overview_page, Dataset, OverviewPage};
use tb_core::{entropy_rng, ParamSet};
use tb_series::DAY_LABELS;

use super::widgets;

#[derive(Default)]
pub struct OverviewView {
    params: ParamSet,
    cached: Option<(ParamSet, OverviewPage)>,
    status: Option<String>,
}

impl OverviewView {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Date window:");
            widgets::window_combo(ui, "overview_window", &mut self.params.window);
            widgets::export_button(ui, Dataset::DashboardOverview, &self.params, &mut self.status);
            if let Some(status) = &self.status {
                ui.label(status);
            }
        });
        ui.separator();

        if self.cached.as_ref().map(|(p, _)| p) != Some(&self.params) {
            let page = build_overview_page(&self.params, &mut entropy_rng());
            self.cached = Some((self.params, page));
        }
        let page = match &self.cached {
            Some((_, page)) => page.clone(),
            None => return,
        };

        self.show_metrics(ui, &page);
        ui.separator();

        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.label("Passenger Trends");
                Self::show_trends(ui, &page);
            });
            columns[1].group(|ui| {
                ui.label("Revenue Analysis (₹ crore)");
                Self::show_revenue(ui, &page);
            });
        });

        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.label("Route Performance");
                Self::show_efficiency(ui, &page);
            });
            columns[1].group(|ui| {
                ui.label("Passenger Demand Heatmap");
                Self::show_heatmap(ui, &page);
            });
        });
    }

    fn show_metrics(&self, ui: &mut egui::Ui, page: &OverviewPage) {
        let m = &page.metrics;
        ui.columns(4, |columns| {
            columns[0].group(|ui| {
                ui.label("Total Passengers");
                ui.heading(format!("{}", m.passengers));
                ui.small(format!("{:+}% from last month", m.passenger_change));
            });
            columns[1].group(|ui| {
                ui.label("Active Routes");
                ui.heading(format!("{}", m.active_routes));
                ui.small(format!("{:+}% from last month", m.route_change));
            });
            columns[2].group(|ui| {
                ui.label("Operational Buses");
                ui.heading(format!("{}", m.operational_buses));
                ui.small(format!("{:+}% from last month", m.bus_change));
            });
            columns[3].group(|ui| {
                ui.label("Revenue");
                ui.heading(format!("₹{}M", m.revenue));
                ui.small(format!("{:+}% from last month", m.revenue_change));
            });
        });
    }

    fn show_trends(ui: &mut egui::Ui, page: &OverviewPage) {
        Plot::new("overview_trends")
            .legend(Legend::default())
            .x_axis_label("Day")
            .y_axis_label("Passengers")
            .height(240.0)
            .show(ui, |plot_ui| {
                plot_ui.line(widgets::line_from_series("Actual", &page.trends.actual));
                plot_ui.line(widgets::line_from_series("Predicted", &page.trends.predicted));
                plot_ui.line(widgets::line_from_optional("Forecast", &page.trends.future));
            });
    }

    fn show_revenue(ui: &mut egui::Ui, page: &OverviewPage) {
        let r = &page.revenue;

        let ac_chart = BarChart::new(
            r.ac.iter()
                .enumerate()
                .map(|(i, v)| Bar::new(i as f64, *v))
                .collect(),
        )
        .name("AC Bus");
        let non_ac_chart = BarChart::new(
            r.non_ac
                .iter()
                .enumerate()
                .map(|(i, v)| Bar::new(i as f64, *v))
                .collect(),
        )
        .name("Non-AC Bus")
        .stack_on(&[&ac_chart]);
        let sleeper_chart = BarChart::new(
            r.sleeper
                .iter()
                .enumerate()
                .map(|(i, v)| Bar::new(i as f64, *v))
                .collect(),
        )
        .name("Sleeper")
        .stack_on(&[&ac_chart, &non_ac_chart]);

        Plot::new("overview_revenue")
            .legend(Legend::default())
            .x_axis_label("Month")
            .height(240.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(ac_chart);
                plot_ui.bar_chart(non_ac_chart);
                plot_ui.bar_chart(sleeper_chart);
                plot_ui.line(widgets::line_from_series("Target", &r.target));
            });
    }

    fn show_efficiency(ui: &mut egui::Ui, page: &OverviewPage) {
        let bars: Vec<Bar> = page
            .efficiency
            .scores
            .iter()
            .enumerate()
            .map(|(i, v)| Bar::new(i as f64, *v))
            .collect();
        let target = vec![page.efficiency.target; page.efficiency.scores.len()];

        Plot::new("overview_efficiency")
            .legend(Legend::default())
            .x_axis_label("Route")
            .y_axis_label("Efficiency (%)")
            .height(240.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Efficiency Score"));
                plot_ui.line(widgets::line_from_series("Target Score", &target));
            });
    }

    fn show_heatmap(ui: &mut egui::Ui, page: &OverviewPage) {
        Plot::new("overview_heatmap")
            .x_axis_label("Hour of Day")
            .y_axis_label("Day of Week")
            .height(240.0)
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
}
