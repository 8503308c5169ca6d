use readiness_assessment::assessment::questionnaire::uniform_answers;
use readiness_assessment::assessment::{
    AssessmentRubric, Decision, FixedJitter, GapStatus, NoJitter, RandomJitter, ReportAssembler,
};
use readiness_assessment::error::AppError;
use readiness_assessment::import::AnswerImporter;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn csv_export_scores_into_maybe_report() {
    let sheet = AnswerImporter::from_path(fixture("answers.csv")).expect("fixture imports");
    assert_eq!(sheet.len(), 18);

    let report = ReportAssembler::standard()
        .assemble_sheet(&sheet, &mut NoJitter)
        .expect("report builds");

    assert_eq!(report.psychometric.overall, 63);
    assert_eq!(report.technical.overall, 40);
    assert_eq!(report.wiscar.overall, 78);
    assert_eq!(report.overall, 58);
    assert_eq!(report.recommendation.decision, Decision::Maybe);
    assert_eq!(report.recommendation.confidence, 58);
    assert_eq!(
        report.headline(),
        "You Have Potential - With Some Development"
    );
}

#[test]
fn json_export_applies_overrides_and_last_answer() {
    let sheet = AnswerImporter::from_path(fixture("answers.json")).expect("fixture imports");
    assert_eq!(sheet.len(), 5);

    let report = ReportAssembler::standard()
        .assemble_sheet(&sheet, &mut NoJitter)
        .expect("report builds");

    // psych_4 was re-tagged as motivation, tech_1 as aptitude
    assert_eq!(report.psychometric.motivation, 80);
    assert_eq!(report.psychometric.cognitive_style, 0);
    assert_eq!(report.technical.aptitude, 0);
    assert_eq!(report.technical.prerequisite, 20);
    assert_eq!(report.wiscar.will, 40);

    assert_eq!(report.psychometric.overall, 40);
    assert_eq!(report.technical.overall, 7);
    assert_eq!(report.wiscar.overall, 20);
    // 12 + 2.8 + 6 = 20.8
    assert_eq!(report.overall, 21);
    assert_eq!(report.recommendation.decision, Decision::No);
}

#[test]
fn skill_gaps_summarise_every_area() {
    let report = ReportAssembler::standard()
        .assemble(&uniform_answers(4), &mut FixedJitter::new(0.5))
        .expect("report builds");

    let gaps = &report.skill_gaps;
    assert_eq!(gaps.areas.len(), 5);
    assert_eq!(gaps.at_target + gaps.developing + gaps.needs_focus, 5);

    let fundamentals = &gaps.areas[0];
    assert_eq!(fundamentals.name, "3D Fundamentals");
    assert_eq!(fundamentals.current, 80);
    assert_eq!(fundamentals.gap, 5);
    assert_eq!(fundamentals.status, GapStatus::Developing);

    let creative = &gaps.areas[4];
    assert_eq!(creative.gap, -10);
    assert_eq!(creative.status, GapStatus::AtTarget);
    assert_eq!(creative.timeframe, "Maintain");
}

#[test]
fn json_report_uses_snake_case_fields() {
    let report = ReportAssembler::standard()
        .assemble(&uniform_answers(2), &mut RandomJitter::seeded(5))
        .expect("report builds");

    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["overall"], 40);
    assert_eq!(value["recommendation"]["decision"], "No");
    assert!(value["career_paths"][0]["match"].is_u64());
    assert!(value["psychometric"]["interest_score"].is_u64());
}

#[test]
fn custom_rubric_thresholds_change_the_tier() {
    let mut rubric = AssessmentRubric::standard();
    rubric.decision.yes_threshold = 60;

    let report = ReportAssembler::new(rubric)
        .assemble(&uniform_answers(3), &mut NoJitter)
        .expect("report builds");

    assert_eq!(report.overall, 60);
    assert_eq!(report.recommendation.decision, Decision::Yes);
}

#[test]
fn app_error_wraps_import_failures() {
    let error: AppError = AnswerImporter::from_path(fixture("missing.csv"))
        .expect_err("fixture is absent")
        .into();

    assert!(matches!(error, AppError::Import(_)));
    assert!(error.to_string().starts_with("import error: failed to read answer export"));
}
