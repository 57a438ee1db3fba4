use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One page of census rows as served by `/census_income`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CensusPage {
    pub records: Vec<RawRecord>,
    pub page: u32,
    pub pages: u32,
}

/// A server record, keyed the way the census service names its columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "display_text")]
    pub age: String,
    #[serde(default, deserialize_with = "display_text")]
    pub workclass: String,
    #[serde(default, deserialize_with = "display_text")]
    pub fnlwgt: String,
    #[serde(default, deserialize_with = "display_text")]
    pub education: String,
    #[serde(rename = "marital-status", default, deserialize_with = "display_text")]
    pub marital_status: String,
    #[serde(default, deserialize_with = "display_text")]
    pub occupation: String,
    #[serde(default, deserialize_with = "display_text")]
    pub relationship: String,
    #[serde(default, deserialize_with = "display_text")]
    pub race: String,
    #[serde(default, deserialize_with = "display_text")]
    pub sex: String,
    #[serde(rename = "hours-per-week", default, deserialize_with = "display_text")]
    pub hours_per_week: String,
    #[serde(rename = "native-country", default, deserialize_with = "display_text")]
    pub native_country: String,
    #[serde(default, deserialize_with = "display_text")]
    pub capital: String,
    #[serde(default, deserialize_with = "display_text")]
    pub income: String,
}

// The service mixes numeric and string columns; everything is shown as text.
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Display-ready projection of a [`RawRecord`] with a client-side id.
/// The table shows id, age, education, occupation, country, capital and
/// income; the other columns are carried but not rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusRecord {
    pub id: u32,
    pub age: String,
    #[allow(dead_code)]
    pub workclass: String,
    #[allow(dead_code)]
    pub fnlwgt: String,
    pub education: String,
    #[allow(dead_code)]
    pub marital_status: String,
    pub occupation: String,
    #[allow(dead_code)]
    pub relationship: String,
    #[allow(dead_code)]
    pub race: String,
    #[allow(dead_code)]
    pub sex: String,
    #[allow(dead_code)]
    pub hours_per_week: String,
    pub native_country: String,
    pub capital: String,
    pub income: String,
}

impl CensusRecord {
    pub fn project(raw: &RawRecord, id: u32) -> Self {
        Self {
            id,
            age: raw.age.clone(),
            workclass: raw.workclass.clone(),
            fnlwgt: raw.fnlwgt.clone(),
            education: raw.education.clone(),
            marital_status: raw.marital_status.clone(),
            occupation: raw.occupation.clone(),
            relationship: raw.relationship.clone(),
            race: raw.race.clone(),
            sex: raw.sex.clone(),
            hours_per_week: raw.hours_per_week.clone(),
            native_country: raw.native_country.clone(),
            capital: raw.capital.clone(),
            income: raw.income.clone(),
        }
    }
}

/// Projects a page of raw rows, numbering them from `rank + 1`.
pub fn project_records(rank: u32, raw: &[RawRecord]) -> Vec<CensusRecord> {
    raw.iter()
        .zip(rank + 1..)
        .map(|(record, id)| CensusRecord::project(record, id))
        .collect()
}
