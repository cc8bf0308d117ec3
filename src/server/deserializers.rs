use serde::{Deserialize, Deserializer};

pub const FIRST_PAGE: i64 = 1;

pub fn first_page() -> i64 {
    FIRST_PAGE
}

// browsers send whatever is in the address bar, anything that is not an integer means page 1
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(FIRST_PAGE))
}

#[derive(Deserialize, Debug)]
pub struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    pub page: i64,
}
