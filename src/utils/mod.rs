//! Small helpers shared by the reporting code

pub mod string;
