// src/lib.rs

//! Feed Crawler Library
//!
//! Watches a periodical's web page for newly published PDF issues and keeps
//! an RSS feed of them up to date.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
