//! Configuration module for quiz input data
//!
//! Handles deserialization of the passage pool and quiz settings from
//! Python dicts/objects or JSON.

mod passage;
mod settings;

pub use passage::*;
pub use settings::*;

use crate::error::QuizError;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods};
use pyo3::Bound;

/// Helper to get attribute from either dict or object
fn get_attr<'py>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
) -> pyo3::PyResult<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> Option<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

/// Deserialize a passage list from Python
///
/// Each entry may be a dict or an object carrying `text` and `page`;
/// `number_in_surah`, `number` and `surah` are optional.
pub fn deserialize_passages(list: &Bound<'_, PyList>) -> pyo3::PyResult<Vec<Passage>> {
    let mut passages = Vec::with_capacity(list.len());
    for item in list.iter() {
        passages.push(extract_passage(&item)?);
    }
    Ok(passages)
}

fn extract_passage(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<Passage> {
    let text: String = get_attr(obj, "text")?.extract()?;
    let page: i32 = get_attr(obj, "page")?.extract()?;
    let number_in_surah: i32 = get_attr_opt(obj, "number_in_surah")
        .and_then(|v| v.extract().ok())
        .unwrap_or(0);
    let number: i32 = get_attr_opt(obj, "number")
        .and_then(|v| v.extract().ok())
        .unwrap_or(0);
    let surah: String = get_attr_opt(obj, "surah")
        .and_then(|v| v.extract().ok())
        .unwrap_or_default();

    Ok(Passage {
        text,
        page,
        number_in_surah,
        number,
        surah,
    })
}

/// Deserialize a passage list from a JSON array string
pub fn passages_from_json(json: &str) -> crate::error::Result<Vec<Passage>> {
    serde_json::from_str(json).map_err(|e| QuizError::Deserialization(e.to_string()))
}
