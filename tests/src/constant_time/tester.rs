// src/constant_time/tester.rs
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Results of comparing two timing distributions
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub is_constant_time: bool,
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    /// Average nanoseconds per call of `f`, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            let avg = start.elapsed().as_nanos() / self.num_iterations as u128;
            times.push(avg);
        }
        times
    }

    /// Interleave the two workloads sample by sample so that drift in
    /// machine load hits both distributions alike
    pub fn measure_pair<F, G>(&self, mut f: F, mut g: G) -> (Vec<u128>, Vec<u128>)
    where
        F: FnMut(),
        G: FnMut(),
    {
        let single = TimingTester::new(1, self.num_iterations);
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            times_a.extend(single.measure(&mut f));
            times_b.extend(single.measure(&mut g));
        }
        (times_a, times_b)
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    // Remove outliers using IQR method
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();

        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;

        let iqr = q3 - q1;
        let lower_bound = q1 - 1.5 * iqr;
        let upper_bound = q3 + 1.5 * iqr;

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower_bound && (t as f64) <= upper_bound)
            .copied()
            .collect()
    }

    // Welch's t-test
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        let se = (var_a / n_a + var_b / n_b).sqrt();
        if se == 0.0 {
            return 0.0;
        }
        (mean_a - mean_b).abs() / se
    }

    // Welch-Satterthwaite equation
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        let term_a = var_a / n_a;
        let term_b = var_b / n_b;

        (term_a + term_b).powi(2) / (term_a.powi(2) / (n_a - 1.0) + term_b.powi(2) / (n_b - 1.0))
    }

    // Two-tailed p-value from the t-distribution
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return if t_stat == 0.0 { 1.0 } else { 0.0 };
        }

        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.0,
        }
    }

    /// Compare two timing samples
    ///
    /// The pair passes if either the means are statistically
    /// indistinguishable or the ratio between them stays under
    /// `mean_ratio_max`.
    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        mean_ratio_max: f64,
        t_stat_threshold: f64,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);

        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("After outlier removal, not enough data points remain".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let std_dev_a = Self::variance(&clean_a, mean_a).sqrt();
        let std_dev_b = Self::variance(&clean_b, mean_b).sqrt();

        let mean_ratio = if mean_a > mean_b {
            mean_a / mean_b
        } else {
            mean_b / mean_a
        };

        let t_stat = Self::t_statistic(&clean_a, &clean_b);
        let df = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_stat, df);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic: t_stat,
            degrees_of_freedom: df,
            p_value,
            is_constant_time: t_stat <= t_stat_threshold || mean_ratio <= mean_ratio_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics() {
        let a = [10u128, 12, 11, 13, 9];
        assert_eq!(TimingTester::mean(&a), 11.0);
        assert_eq!(TimingTester::variance(&a, 11.0), 2.5);
        assert_eq!(TimingTester::t_statistic(&a, &a), 0.0);
    }

    #[test]
    fn test_remove_outliers() {
        let times = [100u128, 101, 99, 100, 102, 98, 100, 5000];
        let clean = TimingTester::remove_outliers(&times);
        assert!(!clean.contains(&5000));
        assert_eq!(clean.len(), 7);
    }

    #[test]
    fn test_analysis_flags_obvious_difference() {
        let tester = TimingTester::new(8, 1);
        let fast = [100u128, 101, 99, 100, 102, 98, 100, 101];
        let slow = [300u128, 301, 299, 300, 302, 298, 300, 301];

        let same = tester.analyze_constant_time(&fast, &fast, 1.1, 4.5).unwrap();
        assert!(same.is_constant_time);

        let diff = tester.analyze_constant_time(&fast, &slow, 1.1, 4.5).unwrap();
        assert!(!diff.is_constant_time);
        assert!(diff.mean_ratio > 2.9);
        assert!(diff.p_value < 0.001);
    }
}
