pub mod maven_runner;

pub use maven_runner::MavenRunner;
