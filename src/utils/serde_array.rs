//! Serde helpers that write `Array1<f64>` values as plain JSON arrays.

use ndarray::Array1;
use serde::{Deserialize, Deserializer, Serializer};

/// Use with `#[serde(with = "crate::utils::serde_array")]`.
pub fn serialize<S>(values: &Array1<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter())
}

/// Use with `#[serde(with = "crate::utils::serde_array")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Array1<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<f64>::deserialize(deserializer).map(Array1::from_vec)
}
