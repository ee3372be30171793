//! End-to-end tests for the speech handler live under `tests/`
