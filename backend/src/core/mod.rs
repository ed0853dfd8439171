//! Core course definitions shared by every generator

pub mod course;
