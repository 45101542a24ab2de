//! architech CLI - scaffold full-stack web applications

pub mod cli;
pub mod commands;
pub mod display;
