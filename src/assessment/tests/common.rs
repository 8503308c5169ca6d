use crate::assessment::decision::NoJitter;
use crate::assessment::domain::Answer;
use crate::assessment::questionnaire::{reference_questions, QuestionSection};
use crate::assessment::report::{ReadinessReport, ReportAssembler};

/// Answers the reference bank with one option index per section.
pub(super) fn section_answers(psychometric: i32, technical: i32, wiscar: i32) -> Vec<Answer> {
    reference_questions()
        .iter()
        .map(|question| {
            let value = match question.section {
                QuestionSection::Psychometric => psychometric,
                QuestionSection::Technical => technical,
                QuestionSection::Wiscar => wiscar,
            };
            question.answer(value)
        })
        .collect()
}

pub(super) fn assembler() -> ReportAssembler {
    ReportAssembler::standard()
}

pub(super) fn report_without_jitter(answers: &[Answer]) -> ReadinessReport {
    assembler()
        .assemble(answers, &mut NoJitter)
        .expect("answers are well formed")
}
