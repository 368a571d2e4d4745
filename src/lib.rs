#![forbid(unsafe_code)]

pub mod cli;
pub mod convert;
pub mod fetch;
pub mod logging;
pub mod pages;
pub mod run;
pub mod store;
