//! Population / sample selection for STDDEV and VARIANCE

use super::base::Aggregate;
use crate::expression::StatisticalMode;

/// The last call wins; without one the dialect default applies.
pub trait Statistical: Aggregate {
    fn population(mut self) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().statistical_mode = StatisticalMode::Population;
        self
    }

    fn sample(mut self) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().statistical_mode = StatisticalMode::Sample;
        self
    }
}
