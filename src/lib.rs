//! AI Sense Check - workplace AI thinking-profile quiz
//!
//! Generates scenario questions through a language model, scores answers into
//! one of six AI thinking profiles and issues shareable certificates.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
