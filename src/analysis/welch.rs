//! Welch's t-test for comparing mean sentiment between genders.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::analysis::aggregate::scores_for;
use crate::analysis::types::WelchTest;
use crate::analysis::utility::{mean, sample_variance};
use crate::records::{Gender, TaggedRecord};

/// Two-sided Welch's t-test of `a` against `b`.
///
/// Returns `None` when either sample has fewer than two values or both
/// samples have zero variance.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Option<WelchTest> {
    if a.len() < 2 || b.len() < 2 {
        return None;
    }

    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (mean_a, mean_b) = (mean(a), mean(b));
    let se_a = sample_variance(a, mean_a) / na;
    let se_b = sample_variance(b, mean_b) / nb;
    let se = se_a + se_b;
    if se == 0.0 {
        return None;
    }

    let t_statistic = (mean_a - mean_b) / se.sqrt();
    let degrees_of_freedom =
        se.powi(2) / (se_a.powi(2) / (na - 1.0) + se_b.powi(2) / (nb - 1.0));

    let dist = StudentsT::new(0.0, 1.0, degrees_of_freedom).ok()?;
    let p_value = (2.0 * (1.0 - dist.cdf(t_statistic.abs()))).clamp(0.0, 1.0);

    Some(WelchTest {
        t_statistic,
        degrees_of_freedom,
        p_value,
    })
}

/// Welch's t-test of men's sentiment scores against women's.
pub fn sentiment_gap(records: &[TaggedRecord]) -> Option<WelchTest> {
    welch_t_test(
        &scores_for(records, Gender::Men),
        &scores_for(records, Gender::Women),
    )
}
