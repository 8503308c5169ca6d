use crate::assessment::questionnaire::{reference_questions, uniform_answers};
use crate::assessment::{
    AssessmentRubric, JitterSource, NoJitter, RandomJitter, ReadinessReport, ReportAssembler,
    MAX_ANSWER_VALUE,
};
use crate::config::{AppConfig, JitterMode, ScoringConfig};
use crate::error::AppError;
use crate::import::AnswerImporter;
use crate::render;
use crate::telemetry;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "readiness",
    about = "Score 3D design career readiness questionnaires from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an exported answer sheet (CSV or JSON)
    Assess(AssessArgs),
    /// Score a synthetic sheet that answers every reference question alike
    Demo(DemoArgs),
    /// Print the standard scoring rubric as JSON
    Rubric,
    /// List the reference question bank
    Questions,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Path to the answer export; `.json` files are read as JSON, others as CSV
    #[arg(long)]
    answers: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Option index chosen for every question
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(i32).range(0..=i64::from(MAX_ANSWER_VALUE)))]
    level: i32,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Seed the confidence jitter so the report is reproducible
    #[arg(long, conflicts_with = "no_jitter")]
    seed: Option<u64>,
    /// Report confidence without random perturbation
    #[arg(long)]
    no_jitter: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Assess(args) => {
            let sheet = AnswerImporter::from_path(&args.answers)?;
            info!(path = %args.answers.display(), answers = sheet.len(), "answer sheet imported");
            let mut jitter = jitter_source(&args.output, &config.scoring);
            let report = ReportAssembler::standard().assemble_sheet(&sheet, &mut jitter)?;
            emit(&report, args.output.format)
        }
        Command::Demo(args) => {
            let answers = uniform_answers(args.level);
            let mut jitter = jitter_source(&args.output, &config.scoring);
            let report = ReportAssembler::standard().assemble(&answers, &mut jitter)?;
            emit(&report, args.output.format)
        }
        Command::Rubric => {
            let rubric = AssessmentRubric::standard();
            println!("{}", serde_json::to_string_pretty(&rubric)?);
            Ok(())
        }
        Command::Questions => {
            render::render_questions(reference_questions());
            Ok(())
        }
    }
}

/// Flags win over configuration: `--no-jitter`, then `--seed`, then the
/// configured mode and seed.
fn jitter_source(output: &OutputArgs, scoring: &ScoringConfig) -> Box<dyn JitterSource> {
    if output.no_jitter {
        return Box::new(NoJitter);
    }
    if let Some(seed) = output.seed {
        return Box::new(RandomJitter::seeded(seed));
    }

    match (scoring.jitter, scoring.seed) {
        (JitterMode::None, _) => Box::new(NoJitter),
        (JitterMode::Random, Some(seed)) => Box::new(RandomJitter::seeded(seed)),
        (JitterMode::Random, None) => Box::new(RandomJitter::from_entropy()),
    }
}

fn emit(report: &ReadinessReport, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => render::render_report(report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
