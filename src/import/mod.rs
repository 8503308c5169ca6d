//! Loads answer sheets exported by the questionnaire front end.

mod parser;

use crate::assessment::questionnaire::find_question;
use crate::assessment::{Answer, AnswerSheet};
use parser::AnswerRow;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownQuestion(String),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer export: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            AnswerImportError::Json(err) => write!(f, "invalid answer JSON data: {}", err),
            AnswerImportError::UnknownQuestion(id) => write!(
                f,
                "answer to '{}' has no category and is not in the question bank",
                id
            ),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Json(err) => Some(err),
            AnswerImportError::UnknownQuestion(_) => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for AnswerImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Csv,
    Json,
}

impl AnswerFormat {
    /// `.json` files are read as JSON; anything else as CSV.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

pub struct AnswerImporter;

impl AnswerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSheet, AnswerImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, AnswerFormat::for_path(path))
    }

    /// Rows are recorded in order, so a repeated question keeps its last answer.
    /// A row without a category takes it from the reference question bank.
    pub fn from_reader<R: Read>(
        reader: R,
        format: AnswerFormat,
    ) -> Result<AnswerSheet, AnswerImportError> {
        let rows = match format {
            AnswerFormat::Csv => parser::parse_csv(reader)?,
            AnswerFormat::Json => parser::parse_json(reader)?,
        };

        let mut sheet = AnswerSheet::new();
        for row in rows {
            sheet.record(resolve_row(row)?);
        }

        Ok(sheet)
    }
}

fn resolve_row(row: AnswerRow) -> Result<Answer, AnswerImportError> {
    let category = match row.category {
        Some(category) => category,
        None => find_question(&row.question_id)
            .map(|question| question.category.tag().to_string())
            .ok_or_else(|| AnswerImportError::UnknownQuestion(row.question_id.clone()))?,
    };

    Ok(Answer::new(row.question_id, row.value, category))
}
