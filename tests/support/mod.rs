#![allow(dead_code)]

pub mod fetcher;
pub mod market;
pub mod notifier;
