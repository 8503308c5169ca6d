use crate::assessment::questionnaire::QuestionSpec;
use crate::assessment::ReadinessReport;

pub(crate) fn render_report(report: &ReadinessReport) {
    let recommendation = &report.recommendation;

    println!("3D design readiness assessment");
    println!("{}", report.headline());
    println!(
        "Overall readiness: {}% | recommendation {} ({}% confidence)",
        report.overall,
        recommendation.decision.label(),
        recommendation.confidence
    );

    println!("\nDimension scores");
    for card in report.dimension_cards() {
        println!("- {}: {}", card.label, card.score);
    }

    println!("\nWISCAR profile");
    for point in report.wiscar.radar_series() {
        println!("- {}: {}", point.label, point.score);
    }

    print_list("Strengths", &recommendation.strengths);
    print_list("Areas to develop", &recommendation.weaknesses);
    print_list("Next steps", &recommendation.next_steps);

    println!("\nCareer matches");
    for career in &report.career_paths {
        println!(
            "- {} ({}% match): {} | {} | demand {}",
            career.title, career.match_score, career.description, career.salary, career.demand
        );
    }

    let gaps = &report.skill_gaps;
    println!(
        "\nSkill gaps: {} at target, {} developing, {} need focus",
        gaps.at_target, gaps.developing, gaps.needs_focus
    );
    for area in &gaps.areas {
        println!(
            "- [{}] {}: {} of {} ({}), {}",
            area.priority.label(),
            area.name,
            area.current,
            area.target,
            area.status.label(),
            area.timeframe
        );
    }
}

pub(crate) fn render_questions(questions: &[QuestionSpec]) {
    println!("Reference question bank");
    for question in questions {
        println!(
            "- {} | {} | {} | {}",
            question.id,
            question.section.label(),
            question.category.tag(),
            question.construct
        );
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        println!("\n{title}: none");
        return;
    }

    println!("\n{title}");
    for item in items {
        println!("- {item}");
    }
}
