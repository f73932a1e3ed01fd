use anyhow::Context;
use binocular_eval::utils::logging::{
    log_evaluation_complete, log_evaluation_start, print_range_summary, print_report_summary,
};
use binocular_eval::{
    EngineConfig, EvaluationOptions, MeasurementRecord, RuleProfile, evaluate_batch,
    evaluate_with_config, summarize_ranges,
};
use chrono::NaiveDate;
use clap::Parser;
use log::info;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

/// Evaluate binocular vision measurements against clinical reference ranges
#[derive(Parser, Debug)]
#[command(name = "binocular-eval", version)]
struct Cli {
    /// JSON record (object) or batch of records (array); `-` reads stdin
    input: String,

    /// Patient age in years
    #[arg(long, allow_negative_numbers = true, conflicts_with = "birth_date")]
    age: Option<f64>,

    /// Patient birth date (YYYY-MM-DD)
    #[arg(long)]
    birth_date: Option<NaiveDate>,

    /// Examination date (YYYY-MM-DD), defaults to today
    #[arg(long, requires = "birth_date")]
    exam_date: Option<NaiveDate>,

    /// Rule profile overriding the config file
    #[arg(long)]
    profile: Option<RuleProfile>,

    /// Engine configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a human-readable summary instead of JSON
    #[arg(long)]
    summary: bool,
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let input = args.input.as_str();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(profile) = args.profile {
        config = config.with_profile(profile);
    }
    info!("Using {} rule profile", config.profile);

    let options = match (args.age, args.birth_date) {
        (Some(age), _) => EvaluationOptions::new().with_age(age),
        (None, Some(birth_date)) => {
            let exam_date = args
                .exam_date
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            EvaluationOptions::from_birth_date(birth_date, exam_date)
        }
        (None, None) => EvaluationOptions::new(),
    };

    let text = read_input(input)?;
    let json: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("{input} is not valid JSON"))?;

    if json.is_array() {
        let records: Vec<MeasurementRecord> =
            serde_json::from_value(json).context("invalid measurement records")?;
        info!("Evaluating {} records from {input}", records.len());

        let start = Instant::now();
        let reports = evaluate_batch(&records, &options, &config);
        info!("Evaluated {} records in {:?}", reports.len(), start.elapsed());

        if args.summary {
            for (index, report) in reports.iter().enumerate() {
                println!("== Record {index}");
                print_report_summary(report);
            }
        } else {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    } else {
        let record: MeasurementRecord =
            serde_json::from_value(json).context("invalid measurement record")?;
        log_evaluation_start(input, record.len());

        let start = Instant::now();
        let report = evaluate_with_config(&record, &options, &config);
        log_evaluation_complete(input, &report, Some(start.elapsed()));

        if args.summary {
            print_range_summary(&summarize_ranges(&record, &options, &config));
            print_report_summary(&report);
        } else {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
