pub mod args;
pub mod config;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod model;
pub mod scoring;
pub mod stats;
pub mod storage;
pub mod view;
