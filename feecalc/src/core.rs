// src/core.rs
pub mod animation;
pub mod calculator;
pub mod error;
pub mod form;
pub mod prefill;
