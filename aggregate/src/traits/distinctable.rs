use super::base::Aggregate;

/// Builders whose function accepts `DISTINCT`
pub trait Distinctable: Aggregate {
    fn distinct(mut self) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().distinct = true;
        self
    }
}
