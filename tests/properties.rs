use proptest::prelude::*;
use readiness_assessment::assessment::questionnaire::reference_questions;
use readiness_assessment::assessment::{
    Answer, Category, CategoryScores, Decision, DecisionConfig, DecisionEngine, FixedJitter,
    RandomJitter, ReadinessReport, ReportAssembler,
};

fn answer_strategy() -> impl Strategy<Value = Vec<Answer>> {
    let bank = reference_questions().len();
    prop::collection::vec((0..bank, 0..=4i32), 0..40).prop_map(|picks| {
        picks
            .into_iter()
            .map(|(index, value)| reference_questions()[index].answer(value))
            .collect()
    })
}

fn all_scores(report: &ReadinessReport) -> Vec<u8> {
    let p = &report.psychometric;
    let t = &report.technical;
    let w = &report.wiscar;
    let mut scores = vec![
        p.interest_score,
        p.personality_fit,
        p.cognitive_style,
        p.motivation,
        p.overall,
        t.aptitude,
        t.prerequisite,
        t.domain_knowledge,
        t.overall,
        w.will,
        w.interest,
        w.skill,
        w.cognitive,
        w.ability,
        w.real_world,
        w.overall,
        report.overall,
        report.recommendation.confidence,
    ];
    scores.extend(report.career_paths.iter().map(|career| career.match_score));
    scores
}

proptest! {
    #[test]
    fn every_reported_score_stays_within_percent_range(
        answers in answer_strategy(),
        fraction in 0.0f64..=1.0,
    ) {
        let report = ReportAssembler::standard()
            .assemble(&answers, &mut FixedJitter::new(fraction))
            .expect("generated answers are in range");

        for score in all_scores(&report) {
            prop_assert!(score <= 100);
        }
    }

    #[test]
    fn category_scores_never_exceed_top_option(answers in answer_strategy()) {
        let categories = CategoryScores::from_answers(&answers);
        for category in Category::ordered() {
            prop_assert!(categories.get(category) <= 80);
        }
    }

    #[test]
    fn career_paths_are_sorted_and_within_profile_bounds(answers in answer_strategy()) {
        let assembler = ReportAssembler::standard();
        let report = assembler
            .assemble(&answers, &mut FixedJitter::new(0.0))
            .expect("generated answers are in range");

        prop_assert_eq!(report.career_paths.len(), 5);
        for pair in report.career_paths.windows(2) {
            prop_assert!(pair[0].match_score >= pair[1].match_score);
        }
        for career in &report.career_paths {
            let profile = assembler
                .rubric()
                .careers
                .profiles()
                .iter()
                .find(|profile| profile.title == career.title)
                .expect("matched career comes from the catalog");
            prop_assert!(career.match_score >= profile.min_match);
            prop_assert!(career.match_score <= profile.max_match);
        }
    }

    #[test]
    fn decision_follows_thresholds_and_confidence_respects_caps(
        overall in 0u8..=100,
        seed in any::<u64>(),
    ) {
        let config = DecisionConfig::standard();
        let engine = DecisionEngine::new(config.clone());
        let outcome = engine.decide(overall, &mut RandomJitter::seeded(seed));

        let (expected, cap) = if overall >= config.yes_threshold {
            (Decision::Yes, config.yes.confidence_cap)
        } else if overall >= config.maybe_threshold {
            (Decision::Maybe, config.maybe.confidence_cap)
        } else {
            (Decision::No, config.no.confidence_cap)
        };

        prop_assert_eq!(outcome.decision, expected);
        prop_assert!(outcome.confidence <= cap);
        prop_assert!(outcome.confidence >= overall.min(cap));
    }

    #[test]
    fn seeded_reports_are_identical(answers in answer_strategy(), seed in any::<u64>()) {
        let assembler = ReportAssembler::standard();
        let first = assembler
            .assemble(&answers, &mut RandomJitter::seeded(seed))
            .expect("generated answers are in range");
        let second = assembler
            .assemble(&answers, &mut RandomJitter::seeded(seed))
            .expect("generated answers are in range");

        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_categories_leave_reports_untouched(
        answers in answer_strategy(),
        value in 0..=4i32,
    ) {
        let assembler = ReportAssembler::standard();
        let baseline = assembler
            .assemble(&answers, &mut FixedJitter::new(0.5))
            .expect("generated answers are in range");

        let mut padded = answers.clone();
        padded.push(Answer::new("extra_1", value, "Interest"));
        padded.push(Answer::new("extra_2", value, "teamwork"));
        let report = assembler
            .assemble(&padded, &mut FixedJitter::new(0.5))
            .expect("extra answers are in range");

        prop_assert_eq!(report, baseline);
    }

    #[test]
    fn values_outside_option_range_are_rejected(
        answers in answer_strategy(),
        value in prop_oneof![i32::MIN..0, 5..i32::MAX],
    ) {
        let mut answers = answers;
        answers.push(Answer::new("psych_1", value, "interest"));

        let result = ReportAssembler::standard().assemble(&answers, &mut FixedJitter::new(0.0));
        prop_assert!(result.is_err());
    }
}
