//! Usecase layer: the relation-chain pipeline + events.

pub mod chain;
pub mod components;
pub mod condense;
pub mod event;
pub mod stats;
