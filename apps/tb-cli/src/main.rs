use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use tb_app::{
    build_demand_page, build_fares_page, build_overview_page, build_routes_page,
    build_tickets_page, export_service, AppError, AppResult, Dataset, RunKind, RunWorker,
    WorkerMessage, DEFAULT_RUN_DELAY,
};
use tb_core::{
    entropy_rng, BusType, BusTypeFilter, DateWindow, ForecastModel, Horizon, OptimizationGoal,
    ParamSet, Route, RouteFilter,
};

#[derive(Parser)]
#[command(name = "tb-cli")]
#[command(about = "Transitboard CLI - bus transit analytics dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a dashboard page as text
    Show {
        /// Page name: overview, demand, fares, tickets or routes
        page: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Run a simulated analysis, then print the refreshed page
    Run {
        /// Run kind: prediction, fare, forecast or optimization
        kind: String,
        /// Simulated compute delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Export a dataset to a CSV file
    Export {
        /// Dataset stem, e.g. demand-prediction or route-performance
        dataset: String,
        /// Output directory (defaults to the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// List the exportable datasets
    Datasets,
}

#[derive(Args)]
struct SelectionArgs {
    /// Route code, e.g. ahmedabad-surat (default: all routes)
    #[arg(long)]
    route: Option<String>,
    /// Bus type: ac, non-ac or sleeper (default: all types)
    #[arg(long)]
    bus_type: Option<String>,
    /// Optimization goal: time, cost, revenue or passengers
    #[arg(long)]
    goal: Option<String>,
    /// Forecast model: arima, prophet, lstm or ensemble
    #[arg(long)]
    model: Option<String>,
    /// Forecast horizon in days
    #[arg(long)]
    horizon: Option<u32>,
    /// Window start date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Window end date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Treat the datasets as already refreshed by a run
    #[arg(long)]
    ran: bool,
}

impl SelectionArgs {
    fn to_params(&self) -> AppResult<ParamSet> {
        let mut params = ParamSet::default();

        if let Some(route) = &self.route {
            params.route = RouteFilter::Only(route.parse::<Route>()?);
        }
        if let Some(bus_type) = &self.bus_type {
            params.bus_type = BusTypeFilter::Only(bus_type.parse::<BusType>()?);
        }
        if let Some(goal) = &self.goal {
            params.goal = goal.parse::<OptimizationGoal>()?;
        }
        if let Some(model) = &self.model {
            params.model = model.parse::<ForecastModel>()?;
        }
        if let Some(days) = self.horizon {
            params.horizon = Horizon::new(days);
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => params.window = Some(DateWindow::new(from, to)?),
            (None, None) => {}
            _ => {
                return Err(AppError::Params(
                    "both --from and --to are required for a date window".to_string(),
                ))
            }
        }
        params.ran = self.ran;

        Ok(params)
    }
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { page, selection } => cmd_show(&page, &selection.to_params()?),
        Commands::Run {
            kind,
            delay_ms,
            selection,
        } => cmd_run(&kind, delay_ms, &selection.to_params()?),
        Commands::Export {
            dataset,
            output,
            selection,
        } => cmd_export(&dataset, output, &selection.to_params()?),
        Commands::Datasets => cmd_datasets(),
    }
}

fn cmd_show(page: &str, params: &ParamSet) -> AppResult<()> {
    match page {
        "overview" => show_overview(params),
        "demand" => show_demand(params),
        "fares" => show_fares(params),
        "tickets" => show_tickets(params),
        "routes" => show_routes(params),
        other => {
            return Err(AppError::Params(format!(
                "unknown page: {other} (expected overview, demand, fares, tickets or routes)"
            )))
        }
    }
    Ok(())
}

fn cmd_run(kind: &str, delay_ms: Option<u64>, params: &ParamSet) -> AppResult<()> {
    let (run_kind, page) = match kind {
        "prediction" => (RunKind::Prediction, "demand"),
        "fare" => (RunKind::FareCalculation, "fares"),
        "forecast" => (RunKind::Forecast, "tickets"),
        "optimization" => (RunKind::Optimization, "routes"),
        other => {
            return Err(AppError::Params(format!(
                "unknown run kind: {other} (expected prediction, fare, forecast or optimization)"
            )))
        }
    };

    let delay = delay_ms.map_or(DEFAULT_RUN_DELAY, Duration::from_millis);
    println!("{}...", run_kind.label());

    let worker = RunWorker::start(run_kind, delay);
    match worker.wait() {
        WorkerMessage::Complete { .. } => println!("✓ Run complete"),
        WorkerMessage::Error { message } => return Err(AppError::Worker(message)),
    }

    let refreshed = ParamSet {
        ran: true,
        ..*params
    };
    cmd_show(page, &refreshed)
}

fn cmd_export(dataset: &str, output: Option<PathBuf>, params: &ParamSet) -> AppResult<()> {
    let dataset = dataset.parse::<Dataset>()?;
    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;
    let path = export_service::export_dataset(dataset, params, &dir)?;
    println!("✓ Exported {}", path.display());
    Ok(())
}

fn cmd_datasets() -> AppResult<()> {
    println!("Exportable datasets:");
    for dataset in Dataset::ALL {
        println!("  {}", dataset.stem());
    }
    Ok(())
}

fn show_overview(params: &ParamSet) {
    let page = build_overview_page(params, &mut entropy_rng());

    println!("Overview");
    println!(
        "  Total Passengers:  {:>8}  ({:+}% from last month)",
        page.metrics.passengers, page.metrics.passenger_change
    );
    println!(
        "  Active Routes:     {:>8}  ({:+}% from last month)",
        page.metrics.active_routes, page.metrics.route_change
    );
    println!(
        "  Operational Buses: {:>8}  ({:+}% from last month)",
        page.metrics.operational_buses, page.metrics.bus_change
    );
    println!(
        "  Revenue:           ₹{:>6}M  ({:+}% from last month)",
        page.metrics.revenue, page.metrics.revenue_change
    );

    println!();
    println!("Revenue by bus type (₹ crore):");
    println!("  {:<6} {:>6} {:>8} {:>8} {:>8}", "Month", "AC", "Non-AC", "Sleeper", "Target");
    for i in 0..page.revenue.labels.len() {
        println!(
            "  {:<6} {:>6} {:>8} {:>8} {:>8}",
            page.revenue.labels[i],
            page.revenue.ac[i],
            page.revenue.non_ac[i],
            page.revenue.sleeper[i],
            page.revenue.target[i]
        );
    }
}

fn show_demand(params: &ParamSet) {
    let page = build_demand_page(params, &mut entropy_rng());

    if page.rows.is_empty() {
        println!("No data available for the selected filters");
        return;
    }
    println!(
        "{:<14} {:<18} {:<12} {:>8} {:>10} {:>8}  Confidence",
        "Date", "Route", "Bus Type", "Current", "Predicted", "Change"
    );
    for row in &page.rows {
        println!(
            "{:<14} {:<18} {:<12} {:>8} {:>10} {:>7.1}%  {}",
            row.date,
            row.route,
            row.bus_type,
            row.current_demand,
            row.predicted_demand,
            row.change,
            row.confidence
        );
    }
}

fn show_fares(params: &ParamSet) {
    let page = build_fares_page(params);

    if page.rows.is_empty() {
        println!("No data available for the selected filters");
        return;
    }
    println!(
        "{:<18} {:<12} {:>8} {:>10} {:>8} {:>11}  Recommendation",
        "Route", "Bus Type", "Current", "Suggested", "Change", "Competitor"
    );
    for row in &page.rows {
        println!(
            "{:<18} {:<12} {:>7}₹ {:>9}₹ {:>7.1}% {:>10}₹  {}",
            row.route,
            row.bus_type,
            row.current_fare,
            row.suggested_fare,
            row.change,
            row.competitor_fare,
            row.recommendation
        );
    }
}

fn show_tickets(params: &ParamSet) {
    let page = build_tickets_page(params);

    if page.rows.is_empty() {
        println!("No data available for the selected filters");
        return;
    }
    println!(
        "{:<14} {:<18} {:>8} {:>9} {:>5}  {:<16} Priority",
        "Date", "Route", "Demand", "Capacity", "Gap", "Recommendation"
    );
    for row in &page.rows {
        println!(
            "{:<14} {:<18} {:>8} {:>9} {:>5}  {:<16} {}",
            row.date,
            row.route,
            row.predicted_demand,
            row.current_capacity,
            row.capacity_gap,
            row.recommendation,
            row.priority
        );
    }
}

fn show_routes(params: &ParamSet) {
    let page = build_routes_page(params);

    println!("Route efficiency (target {}%):", page.efficiency.target);
    for (label, score) in page.efficiency.labels.iter().zip(&page.efficiency.scores) {
        println!("  {label:<18} {score:>5}%");
    }

    println!();
    if page.rows.is_empty() {
        println!("No data available for the selected filters");
        return;
    }
    println!(
        "{:<18} {:>8} {:>10} {:>7}  {:<28} Impact",
        "Route", "Current", "Optimized", "Saving", "Recommendation"
    );
    for row in &page.rows {
        println!(
            "{:<18} {:>7}m {:>9}m {:>6}m  {:<28} {}",
            row.route,
            row.current_time,
            row.optimized_time,
            row.time_saving,
            row.recommendation,
            row.impact
        );
    }
}
