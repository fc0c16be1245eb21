//! Storm-aware route planner.
//!
//! Answers: "Leaving at this time, what are the fastest ways to reach my
//! destination through a network with scheduled hazards, and how much risk
//! does each carry?"

pub mod domain;
pub mod hazards;
pub mod input;
pub mod network;
pub mod planner;
pub mod report;
pub mod web;
