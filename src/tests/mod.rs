//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the viewer through the acceptance harness, which needs
//! crate-private hooks on `TuiApp`.
