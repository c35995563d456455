//! Taskwell library - file-backed task tracking with web and CLI front ends

pub mod cli;
pub mod serve;
pub mod task;
