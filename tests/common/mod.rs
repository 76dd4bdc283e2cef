#![allow(dead_code)]

pub mod file;
