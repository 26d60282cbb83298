use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use crate::{ColorScale, ColorValue, SCALE_LEN};

pub fn de_color_scale<'de, D>(deserializer: D) -> Result<[ColorValue; SCALE_LEN], D::Error>
where
    D: Deserializer<'de>,
{
    let shades = Vec::<ColorValue>::deserialize(deserializer)?;
    let len = shades.len();

    shades.try_into().map_err(|_| {
        D::Error::custom(format!(
            "a color scale needs exactly {SCALE_LEN} shades, got {len}."
        ))
    })
}

pub fn de_palette<'de, D>(deserializer: D) -> Result<IndexMap<String, ColorScale>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = IndexMap::<String, ColorScale>::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom(
            "at least one color scale needs to be provided.",
        ));
    }

    if let Some(name) = value.keys().find(|name| name.trim().is_empty()) {
        return Err(D::Error::custom(format!(
            "color scale names can't be blank, got {name:?}."
        )));
    }

    Ok(value)
}

pub fn de_non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    if value.trim().is_empty() {
        return Err(D::Error::custom("string can't be empty."));
    }

    Ok(value)
}
