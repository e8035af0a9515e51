mod school;

pub use school::{NewSchool, School};
