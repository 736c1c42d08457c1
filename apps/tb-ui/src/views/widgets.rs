//! Shared selection controls and chart helpers.

use chrono::NaiveDate;
use egui_plot::{Line, PlotPoints};
use tb_core::{
    BusType, BusTypeFilter, DateWindow, ForecastModel, Horizon, OptimizationGoal, Route,
    RouteFilter, TrafficCondition,
};
use tb_app::{RunKind, RunWorker, WorkerMessage};

pub fn route_filter_combo(ui: &mut egui::Ui, id: &str, filter: &mut RouteFilter) {
    let selected = match filter {
        RouteFilter::All => "All Routes".to_string(),
        RouteFilter::Only(route) => route.label().to_string(),
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(filter, RouteFilter::All, "All Routes");
            for route in Route::ALL {
                ui.selectable_value(filter, RouteFilter::Only(route), route.label());
            }
        });
}

pub fn bus_type_combo(ui: &mut egui::Ui, id: &str, filter: &mut BusTypeFilter) {
    let selected = match filter {
        BusTypeFilter::All => "All Types".to_string(),
        BusTypeFilter::Only(bus_type) => bus_type.label().to_string(),
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(filter, BusTypeFilter::All, "All Types");
            for bus_type in BusType::ALL {
                ui.selectable_value(filter, BusTypeFilter::Only(bus_type), bus_type.label());
            }
        });
}

pub fn goal_combo(ui: &mut egui::Ui, id: &str, goal: &mut OptimizationGoal) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(goal.label())
        .show_ui(ui, |ui| {
            for option in OptimizationGoal::ALL {
                ui.selectable_value(goal, option, option.label());
            }
        });
}

pub fn traffic_combo(ui: &mut egui::Ui, id: &str, traffic: &mut TrafficCondition) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(traffic.label())
        .show_ui(ui, |ui| {
            for option in TrafficCondition::ALL {
                ui.selectable_value(traffic, option, option.label());
            }
        });
}

pub fn model_combo(ui: &mut egui::Ui, id: &str, model: &mut ForecastModel) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(model.label())
        .show_ui(ui, |ui| {
            for option in ForecastModel::ALL {
                ui.selectable_value(model, option, option.label());
            }
        });
}

pub fn horizon_combo(ui: &mut egui::Ui, id: &str, horizon: &mut Horizon) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(format!("{} Days", horizon.days))
        .show_ui(ui, |ui| {
            for preset in Horizon::PRESETS {
                ui.selectable_value(horizon, preset, format!("{} Days", preset.days));
            }
        });
}

/// Month windows the date picker offers. The real data only varies by
/// month, so whole-month windows cover every distinct view.
const MONTH_WINDOWS: [(u32, u32, &str); 4] = [
    (2, 29, "February 2024"),
    (3, 31, "March 2024"),
    (4, 30, "April 2024"),
    (5, 31, "May 2024"),
];

pub fn window_combo(ui: &mut egui::Ui, id: &str, window: &mut Option<DateWindow>) {
    let selected = match window {
        None => "No window".to_string(),
        Some(w) => {
            let label = MONTH_WINDOWS
                .iter()
                .find(|(month, ..)| *month == w.start_month())
                .map(|(.., label)| *label);
            match label {
                Some(label) => label.to_string(),
                None => format!("{} - {}", w.from, w.to),
            }
        }
    };

    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(window, None, "No window");
            for (month, last_day, label) in MONTH_WINDOWS {
                let choice = month_window(month, last_day);
                ui.selectable_value(window, Some(choice), label);
            }
        });
}

fn month_window(month: u32, last_day: u32) -> DateWindow {
    let from = NaiveDate::from_ymd_opt(2024, month, 1).expect("valid preset date");
    let to = NaiveDate::from_ymd_opt(2024, month, last_day).expect("valid preset date");
    DateWindow { from, to }
}

/// Run button plus worker polling. Returns `true` when a run finished
/// this frame, so the caller can flip its `ran` flag.
pub fn run_button(
    ui: &mut egui::Ui,
    kind: RunKind,
    worker: &mut Option<RunWorker>,
    status: &mut Option<String>,
) -> bool {
    let running = worker.is_some();

    if running {
        ui.add_enabled(false, egui::Button::new(kind.running_label()));
        ui.spinner();
    } else if ui.button(kind.label()).clicked() {
        *worker = Some(RunWorker::start(kind, tb_app::DEFAULT_RUN_DELAY));
    }

    if let Some(active) = worker {
        match active.try_message() {
            Some(WorkerMessage::Complete { .. }) => {
                *worker = None;
                *status = Some("Updated with latest run".to_string());
                return true;
            }
            Some(WorkerMessage::Error { message }) => {
                *worker = None;
                *status = Some(format!("Run failed: {message}"));
            }
            None => {}
        }
    }

    false
}

/// Line through the `Some` points of an optional series.
pub fn line_from_optional(name: &str, values: &[Option<f64>]) -> Line {
    let points: PlotPoints = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|y| [i as f64, y]))
        .collect();
    Line::new(points).name(name)
}

/// Line through a dense series.
pub fn line_from_series(name: &str, values: &[f64]) -> Line {
    let points: PlotPoints = values
        .iter()
        .enumerate()
        .map(|(i, v)| [i as f64, *v])
        .collect();
    Line::new(points).name(name)
}

/// Placeholder shown when a filter combination matches nothing.
pub fn empty_table_notice(ui: &mut egui::Ui) {
    ui.label("No data available for the selected filters");
}

/// Export button writing into the working directory.
pub fn export_button(
    ui: &mut egui::Ui,
    dataset: tb_app::Dataset,
    params: &tb_core::ParamSet,
    status: &mut Option<String>,
) {
    if ui.button("Export CSV").clicked() {
        let dir = std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir());
        match tb_app::export_service::export_dataset(dataset, params, &dir) {
            Ok(path) => *status = Some(format!("Exported {}", path.display())),
            Err(e) => *status = Some(format!("Export failed: {e}")),
        }
    }
}
