//! Workspace-level integration tests for numpar live under `tests/`.
