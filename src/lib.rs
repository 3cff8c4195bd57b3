//! Hifz Quiz Core - Quran memorization quiz engine
//!
//! This crate provides the question generation and answer checking engine
//! of a Quran memorization practice app, with Python bindings via PyO3.
//! The host installs a passage pool once, starts quiz sessions against it,
//! and persists the per-page statistics and rewards the engine reports.

use pyo3::prelude::*;

pub mod config;
pub mod error;
pub mod generator;
pub mod normalize;
pub mod question;
pub mod session;
pub mod stats;

use crate::config::{deserialize_passages, parse_kinds, Passage, QuizSettings};
use crate::session::Session;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::types::PyList;
use std::sync::Arc;

// ============================================================================
// Cached Passage Pool
// ============================================================================

/// Cached passage pool shared by all quiz sessions
struct CachedPool {
    passages: Arc<Vec<Passage>>,
}

/// Global cached pool
static CACHED_POOL: OnceCell<Arc<RwLock<CachedPool>>> = OnceCell::new();

fn cached_passages() -> PyResult<Arc<Vec<Passage>>> {
    let pool = CACHED_POOL.get().ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "Passage pool not initialized. Call init_passages() first.",
        )
    })?;
    Ok(pool.read().passages.clone())
}

fn install_pool(passages: Vec<Passage>) {
    let cached = CachedPool {
        passages: Arc::new(passages),
    };
    if let Some(existing) = CACHED_POOL.get() {
        let mut guard = existing.write();
        *guard = cached;
    } else {
        let _ = CACHED_POOL.set(Arc::new(RwLock::new(cached)));
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Install the passage pool (call once after fetching the page range)
///
/// The host fetches all pages of the chosen range, flattens them into one
/// list, and installs it here; every subsequent quiz draws from this pool
/// until it is replaced by another call.
///
/// # Arguments
/// * `passages` - list of dicts/objects with `text` and `page` (optionally
///   `number_in_surah`, `number`, `surah`)
#[pyfunction]
fn init_passages(passages: &Bound<'_, PyList>) -> PyResult<()> {
    let passages = deserialize_passages(passages)?;
    install_pool(passages);
    Ok(())
}

/// Install the passage pool from a JSON array string
#[pyfunction]
fn init_passages_json(json: &str) -> PyResult<()> {
    let passages = config::passages_from_json(json)?;
    install_pool(passages);
    Ok(())
}

/// Check if the passage pool is initialized
#[pyfunction]
fn is_pool_initialized() -> bool {
    CACHED_POOL.get().is_some()
}

/// Number of passages in the installed pool (0 if uninitialized)
#[pyfunction]
fn pool_size() -> usize {
    CACHED_POOL
        .get()
        .map(|pool| pool.read().passages.len())
        .unwrap_or(0)
}

/// Generate a quiz from the cached pool and return a live session
///
/// Generation may return fewer questions than requested (small or
/// repetitive pools); the host decides whether to warn the user. A pool
/// with fewer than 3 passages yields a session that is finished from the
/// start.
///
/// # Arguments
/// * `kinds` - question kind names, e.g. `["complete_ayah", "order_words"]`
/// * `question_count` - number of questions to aim for
///
/// # Raises
/// RuntimeError if `init_passages` was not called first, ValueError for an
/// unknown kind name or an empty kind list
#[pyfunction]
fn start_quiz(kinds: Vec<String>, question_count: usize) -> PyResult<Session> {
    let passages = cached_passages()?;
    let settings = QuizSettings::new(parse_kinds(&kinds)?, question_count)?;
    let questions = generator::generate(&passages, &settings.kinds, settings.question_count);
    Ok(Session::start(questions))
}

/// Generate a quiz asynchronously
///
/// Runs generation in a background thread via Tokio's spawn_blocking so the
/// host's asyncio event loop stays responsive while a large pool is
/// sampled.
///
/// # Returns
/// A Python awaitable resolving to a QuizSession
#[pyfunction]
fn start_quiz_async<'py>(
    py: Python<'py>,
    kinds: Vec<String>,
    question_count: usize,
) -> PyResult<Bound<'py, PyAny>> {
    // Resolve the pool and settings before entering the async context
    let passages = cached_passages()?;
    let settings = QuizSettings::new(parse_kinds(&kinds)?, question_count)
        .map_err(PyErr::from)?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let session = tokio::task::spawn_blocking(move || {
            let questions =
                generator::generate(&passages, &settings.kinds, settings.question_count);
            Session::start(questions)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Quiz generation task panicked: {}",
                e
            ))
        })?;

        Ok(session)
    })
}

/// Strip whitespace and Arabic diacritics the way answer checking does
#[pyfunction]
fn normalize_text(text: &str) -> String {
    normalize::normalize(text)
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn hifz_quiz_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_passages, m)?)?;
    m.add_function(wrap_pyfunction!(init_passages_json, m)?)?;
    m.add_function(wrap_pyfunction!(is_pool_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(pool_size, m)?)?;
    m.add_function(wrap_pyfunction!(start_quiz, m)?)?;
    m.add_function(wrap_pyfunction!(start_quiz_async, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_text, m)?)?;
    m.add_class::<Session>()?;
    Ok(())
}
