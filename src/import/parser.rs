use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One answer row as it appears in an export, before its category is resolved.
#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRow {
    #[serde(alias = "questionId")]
    pub(crate) question_id: String,
    pub(crate) value: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) category: Option<String>,
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<AnswerRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<AnswerRow>().collect()
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<AnswerRow>, serde_json::Error> {
    serde_json::from_reader(reader)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}
