use crate::views::{DemandView, FaresView, OverviewView, RoutesView, TicketsView};

pub struct TransitboardApp {
    active_view: ViewTab,
    overview_view: OverviewView,
    demand_view: DemandView,
    fares_view: FaresView,
    tickets_view: TicketsView,
    routes_view: RoutesView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Overview,
    Demand,
    Fares,
    Tickets,
    Routes,
}

impl TransitboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            active_view: ViewTab::Overview,
            overview_view: OverviewView::default(),
            demand_view: DemandView::default(),
            fares_view: FaresView::default(),
            tickets_view: TicketsView::default(),
            routes_view: RoutesView::default(),
        }
    }
}

impl eframe::App for TransitboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Transitboard");
                ui.separator();
                ui.selectable_value(&mut self.active_view, ViewTab::Overview, "Overview");
                ui.selectable_value(&mut self.active_view, ViewTab::Demand, "Demand Prediction");
                ui.selectable_value(&mut self.active_view, ViewTab::Fares, "Fare Estimator");
                ui.selectable_value(&mut self.active_view, ViewTab::Tickets, "Ticket Forecast");
                ui.selectable_value(&mut self.active_view, ViewTab::Routes, "Route Optimization");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.active_view {
            ViewTab::Overview => self.overview_view.show(ui),
            ViewTab::Demand => self.demand_view.show(ui),
            ViewTab::Fares => self.fares_view.show(ui),
            ViewTab::Tickets => self.tickets_view.show(ui),
            ViewTab::Routes => self.routes_view.show(ui),
        });

        // Keep polling while any run worker is in flight.
        if self.demand_view.is_running()
            || self.fares_view.is_running()
            || self.tickets_view.is_running()
            || self.routes_view.is_running()
        {
            ctx.request_repaint();
        }
    }
}
