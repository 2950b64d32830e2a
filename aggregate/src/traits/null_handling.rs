//! NULL handling capability

use super::base::Aggregate;
use crate::expression::NullsMode;

/// Builders that can skip NULL inputs. The last call wins.
pub trait NullHandling: Aggregate {
    /// Exclude NULL inputs from the result
    fn ignore_nulls(mut self) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().nulls_mode = NullsMode::Ignore;
        self
    }

    /// Keep the function's own NULL behaviour
    fn respect_nulls(mut self) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().nulls_mode = NullsMode::Respect;
        self
    }
}
