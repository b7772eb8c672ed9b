use crate::cli::{budget_mode, AlgorithmArg, SortArg};
use crate::infra::{load_catalog, read_profile, sample_profile};
use clap::Args;
use std::path::PathBuf;
use unichance::catalog::{Catalog, CatalogError};
use unichance::chances::{
    Algorithm, ChanceEngine, ChanceRequest, ChanceResponse, RawNumber, ScoringConfig,
    ScoringResult, SortOrder, UserProfile,
};
use unichance::config::ScoringSettings;
use unichance::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Questionnaire answers as a JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Catalog file (.json or .csv). Defaults to UNICHANCE_CATALOG, then the bundled dataset.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Simple)]
    pub(crate) algorithm: AlgorithmArg,
    #[arg(long, value_enum, default_value_t = SortArg::Chance)]
    pub(crate) sort: SortArg,
    /// Fold the budget into the pro percentage instead of reporting it separately
    #[arg(long)]
    pub(crate) coupled_budget: bool,
    /// Show only the first N programs
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print the raw JSON response instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Catalog file (.json or .csv). Defaults to UNICHANCE_CATALOG, then the bundled dataset.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Fold the budget into the pro percentage instead of reporting it separately
    #[arg(long)]
    pub(crate) coupled_budget: bool,
    /// Programs listed per algorithm
    #[arg(long, default_value_t = 5)]
    pub(crate) top: usize,
}

/// Catalog and engine for the CLI commands. Flags win over `UNICHANCE_CATALOG` and
/// `UNICHANCE_PRO_BUDGET`.
fn prepare(
    catalog_flag: Option<PathBuf>,
    coupled_budget: bool,
    settings: &ScoringSettings,
) -> Result<(Catalog, ChanceEngine), CatalogError> {
    let catalog_path = catalog_flag.or_else(|| settings.catalog_path.clone());
    let catalog = load_catalog(catalog_path.as_deref())?;
    let engine = ChanceEngine::new(ScoringConfig {
        pro_budget_mode: budget_mode(coupled_budget, settings.pro_budget_mode),
    });
    Ok((catalog, engine))
}

pub(crate) fn run_score(args: ScoreArgs, settings: &ScoringSettings) -> Result<(), AppError> {
    let (catalog, engine) = prepare(args.catalog, args.coupled_budget, settings)?;
    let profile = read_profile(&args.profile)?;

    let response = evaluate(
        &engine,
        &catalog,
        profile,
        args.algorithm.into(),
        args.sort.into(),
        args.limit,
    );

    if args.json {
        let rendered = serde_json::to_string_pretty(&response).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_response(&response);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, settings: &ScoringSettings) -> Result<(), AppError> {
    let DemoArgs {
        catalog,
        coupled_budget,
        top,
    } = args;

    let (catalog, engine) = prepare(catalog, coupled_budget, settings)?;
    let profile = sample_profile();

    println!("Admission chance demo");
    println!(
        "Applicant: {} | GPA {} ({:?}) | budget {:?} | disciplines: {}",
        profile.level.label(),
        raw_label(profile.gpa.as_ref()),
        profile.grading_scheme,
        profile.budget,
        profile.disciplines.join(", ")
    );
    println!(
        "Catalog: {} programs across {} countries | pro budget {:?}",
        catalog.len(),
        catalog.countries().len(),
        engine.config().pro_budget_mode
    );

    for algorithm in [Algorithm::Simple, Algorithm::Pro] {
        let response = evaluate(
            &engine,
            &catalog,
            profile.clone(),
            algorithm,
            SortOrder::Chance,
            Some(top),
        );
        println!();
        render_response(&response);
    }

    Ok(())
}

fn evaluate(
    engine: &ChanceEngine,
    catalog: &Catalog,
    profile: UserProfile,
    algorithm: Algorithm,
    sort: SortOrder,
    limit: Option<usize>,
) -> ChanceResponse {
    ChanceRequest {
        profile,
        algorithm,
        sort,
        limit,
    }
    .evaluate(engine, catalog)
}

fn render_response(response: &ChanceResponse) {
    println!(
        "{} algorithm | {} programs ({} scored), sorted by {:?}",
        response.algorithm.label(),
        response.total,
        response.scored,
        response.sort
    );
    if response.results.is_empty() {
        println!("  No programs match the preferred country.");
        return;
    }

    for (index, result) in response.results.iter().enumerate() {
        println!("{}", format_row(index + 1, result));
        println!("     {}", result.explanation);
    }
}

fn format_row(rank: usize, result: &ScoringResult) -> String {
    let percentage = result
        .percentage
        .map(|percentage| format!("{percentage}%"))
        .unwrap_or_else(|| "--".to_string());
    let mut row = format!(
        "{rank:>3}. {percentage:>4} {:<12} {} ({}, {}) | tuition {}",
        result.tier.label(),
        result.university_name,
        result.city,
        result.country,
        result.tuition
    );
    if let Some(status) = result.financial_status {
        row.push_str(&format!(" | {}", status.label()));
    }
    row
}

fn raw_label(raw: Option<&RawNumber>) -> String {
    match raw {
        Some(RawNumber::Number(value)) => value.to_string(),
        Some(RawNumber::Text(text)) => text.clone(),
        Some(RawNumber::Malformed(_)) | None => "n/a".to_string(),
    }
}
