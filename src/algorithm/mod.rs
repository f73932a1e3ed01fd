//! Algorithm implementations for clinical measurement evaluation
//!
//! This module contains the evaluation algorithms that turn raw examination
//! measurements into findings, diagnoses and chart-ready series.

pub mod binocular;
