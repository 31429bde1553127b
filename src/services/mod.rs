// Service module exports

pub mod countdown;
pub mod panel;
pub mod settings;
pub mod sponsors;
