/// Generator of stepped values series.
use crate::field::FieldValueType;

/// Generator (iterator) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SeriesWithStep {
    max: FieldValueType,
    step: FieldValueType,
    next: Option<FieldValueType>,
}

impl SeriesWithStep {
    /// Produces `start, start + step, ...` while values don't exceed `max`.
    ///
    /// Zero `step` is treated as `1`, so the series always terminates.
    #[inline]
    pub(crate) fn new(start: FieldValueType, max: FieldValueType, step: FieldValueType) -> Self {
        Self {
            max,
            step: step.max(1),
            next: Some(start),
        }
    }

    /// Series with the single `value`.
    #[inline]
    pub(crate) fn single(value: FieldValueType) -> Self {
        Self::new(value, value, 1)
    }
}

impl Iterator for SeriesWithStep {
    type Item = FieldValueType;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|v| *v <= self.max)?;
        self.next = current.checked_add(self.step);
        Some(current)
    }
}
