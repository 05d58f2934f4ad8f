//! Timing-analysis harness for constant-time checks

pub mod tester;

pub use config::TestConfig;
pub use tester::{TimingAnalysis, TimingTester};
