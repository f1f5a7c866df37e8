use crate::infra::{parse_date, parse_timestamp};
use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::Args;
use leasing_engine::config::AppConfig;
use leasing_engine::error::AppError;
use leasing_engine::ingest::{applications_from_csv, rooms_from_csv, Dataset, IngestError};
use leasing_engine::ranking::{
    format_priority_score, get_status_display_text, Application, DashboardSnapshot, PriorityBand,
    RankingEngine,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DatasetArgs {
    /// JSON dataset with applications, rooms, properties and optional average_rent
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// CSV export of applications (replaces the dataset's applications)
    #[arg(long)]
    pub(crate) applications_csv: Option<PathBuf>,
    /// CSV export of rooms (replaces the dataset's rooms)
    #[arg(long)]
    pub(crate) rooms_csv: Option<PathBuf>,
    /// Market rent used for budget scoring; defaults to the dataset's value or mean room rent
    #[arg(long)]
    pub(crate) average_rent: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    #[command(flatten)]
    pub(crate) source: DatasetArgs,
    /// Reference date for move-in urgency (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Only print the first N applications of the queue
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print the ranked queue as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    #[command(flatten)]
    pub(crate) source: DatasetArgs,
    /// Reference instant for weekly windows, RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Score applications first so the priority histogram is populated
    #[arg(long)]
    pub(crate) enrich: bool,
}

pub(crate) fn load_dataset(args: DatasetArgs) -> Result<Dataset, AppError> {
    let DatasetArgs {
        dataset,
        applications_csv,
        rooms_csv,
        average_rent,
    } = args;

    let mut loaded = match dataset {
        Some(path) => Dataset::from_path(&path)?,
        None => Dataset::default(),
    };

    if let Some(path) = applications_csv {
        let file = File::open(path).map_err(IngestError::from)?;
        loaded.applications = applications_from_csv(BufReader::new(file))?;
    }
    if let Some(path) = rooms_csv {
        let file = File::open(path).map_err(IngestError::from)?;
        loaded.rooms = rooms_from_csv(BufReader::new(file))?;
    }
    if average_rent.is_some() {
        loaded.average_rent = average_rent;
    }

    Ok(loaded)
}

pub(crate) fn run_rank_report(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        source,
        today,
        limit,
        json,
    } = args;

    let config = AppConfig::load()?;
    let dataset = load_dataset(source)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let average_rent = dataset.average_rent();

    let engine = RankingEngine::new(config.ranking);
    let mut ranked = engine.rank(&dataset.applications, &dataset.rooms, average_rent, today);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    if json {
        match serde_json::to_string_pretty(&ranked) {
            Ok(body) => println!("{body}"),
            Err(err) => println!("Ranked queue unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    render_rank_report(&ranked, today, average_rent);
    Ok(())
}

fn render_rank_report(ranked: &[Application], today: NaiveDate, average_rent: f64) {
    println!("Application review queue as of {today}");
    println!("- Market rent baseline: {average_rent:.2}");
    println!("- {} application(s) ranked", ranked.len());

    for (position, application) in ranked.iter().enumerate() {
        let score = application.priority_score.unwrap_or(0);
        println!(
            "{:>3}. {} @ {} | {} | {}",
            position + 1,
            application.id,
            application.property_ref,
            format_priority_score(score),
            get_status_display_text(&application.status)
        );

        let budget_fit = match application.is_budget_compatible {
            Some(true) => "budget fits",
            _ => "budget short",
        };
        let rooms = application
            .recommended_rooms
            .as_deref()
            .filter(|rooms| !rooms.is_empty())
            .map(|rooms| {
                rooms
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| "none".to_string());
        println!(
            "     {budget_fit} | match {} | rooms: {rooms}",
            application.match_score.unwrap_or(0)
        );

        if let Some(rivals) = application
            .conflicting_applications
            .as_deref()
            .filter(|rivals| !rivals.is_empty())
        {
            let rivals: Vec<String> = rivals.iter().map(ToString::to_string).collect();
            println!("     competes with {}", rivals.join(", "));
        }
    }
}

pub(crate) fn run_dashboard_report(args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs {
        source,
        now,
        enrich,
    } = args;

    let config = AppConfig::load()?;
    let dataset = load_dataset(source)?;
    let now = now.unwrap_or_else(Utc::now);

    let applications = if enrich {
        RankingEngine::new(config.ranking).rank(
            &dataset.applications,
            &dataset.rooms,
            dataset.average_rent(),
            now.date_naive(),
        )
    } else {
        dataset.applications
    };

    let snapshot = DashboardSnapshot::build(&applications, &dataset.properties, now);
    render_dashboard(&snapshot);
    Ok(())
}

fn render_dashboard(snapshot: &DashboardSnapshot) {
    println!("Leasing dashboard generated {}", snapshot.generated_at);

    let pipeline = &snapshot.pipeline;
    println!("\nPipeline ({} applications)", pipeline.total);
    println!(
        "- {:.1}% converted | {:.1}% rejected | {:.1}% still in review",
        pipeline.conversion_rate, pipeline.rejection_rate, pipeline.active_rate
    );
    let counts = &pipeline.status_counts;
    println!(
        "- pending {} | processing {} | approved {} | rejected {} | lease created {} | moved in {} | active {} | withdrawn {}",
        counts.pending,
        counts.processing,
        counts.approved,
        counts.rejected,
        counts.lease_created,
        counts.moved_in,
        counts.active,
        counts.withdrawn
    );

    let processing = &snapshot.processing_time;
    println!("\nProcessing time ({} processed)", processing.total_processed);
    println!(
        "- avg {:.1} days | median {} | fastest {} | slowest {}",
        processing.average_processing_time,
        processing.median_processing_time,
        processing.fastest_processing_time,
        processing.slowest_processing_time
    );

    let efficiency = &snapshot.efficiency;
    println!("\nWeekly efficiency");
    println!(
        "- submissions {} vs {} last week ({:+})",
        efficiency.this_week_applications,
        efficiency.last_week_applications,
        efficiency.application_trend
    );
    println!(
        "- decisions {} vs {} last week ({:+}) | {:.1} per day",
        efficiency.this_week_processed,
        efficiency.last_week_processed,
        efficiency.processing_trend,
        efficiency.daily_throughput
    );
    println!(
        "- backlog: {} application(s) open longer than a week",
        efficiency.backlog_count
    );

    println!("\nPriority distribution");
    for band in PriorityBand::ordered() {
        println!(
            "- {}: {}",
            band.label(),
            snapshot.priority_distribution.count(band)
        );
    }

    if !snapshot.property_performance.is_empty() {
        println!("\nProperty performance");
        for property in &snapshot.property_performance {
            println!(
                "- {} ({}): {} application(s) | {} pending | {:.1}% approved | {:.1} days avg | {} vacant room(s)",
                property.property_name,
                property.property_id,
                property.total_applications,
                property.pending_applications,
                property.approval_rate,
                property.avg_processing_time,
                property.vacant_rooms
            );
        }
    }
}
