#![allow(unused_assignments)] // thiserror/miette proc macros trigger false positives

pub mod assignment;
pub mod cli;
pub mod config;
pub mod error;
pub mod mac;
pub mod pool;
pub mod render;
pub mod util;
