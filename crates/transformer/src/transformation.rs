//! The seam between the pipeline and the editing operators.

use castedit_cast_model::{validate, Recording};
use castedit_editor::EditResult;

/// An in-place edit of a single recording.
///
/// Implementations get exclusive access to the recording for the duration
/// of the call and must leave it untouched when they return an error.
pub trait Transformation {
    /// Apply the edit.
    fn transform(&mut self, recording: &mut Recording) -> EditResult<()>;

    /// Short name used in logs and error messages.
    fn name(&self) -> &str;
}

impl<T: Transformation + ?Sized> Transformation for Box<T> {
    fn transform(&mut self, recording: &mut Recording) -> EditResult<()> {
        (**self).transform(recording)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Runs [`validate`] before the wrapped transformation.
///
/// A recording that fails validation is rejected without being modified.
#[derive(Debug, Clone)]
pub struct Validated<T> {
    inner: T,
}

impl<T: Transformation> Validated<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transformation> Transformation for Validated<T> {
    fn transform(&mut self, recording: &mut Recording) -> EditResult<()> {
        validate(recording)?;
        self.inner.transform(recording)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castedit_cast_model::{Event, Header, ValidationError};
    use castedit_editor::EditError;

    /// Counts calls and shifts every event by one second.
    struct Shift {
        calls: usize,
    }

    impl Transformation for Shift {
        fn transform(&mut self, recording: &mut Recording) -> EditResult<()> {
            self.calls += 1;
            for event in &mut recording.events {
                event.time += 1.0;
            }
            Ok(())
        }

        fn name(&self) -> &str {
            "shift"
        }
    }

    #[test]
    fn test_validated_passes_valid_recordings_through() {
        let mut rec = Recording::new(Header::new(80, 24), vec![Event::output(0.5, "a")]);
        let mut t = Validated::new(Shift { calls: 0 });

        t.transform(&mut rec).unwrap();
        assert_eq!(rec.events[0].time, 1.5);
        assert_eq!(t.name(), "shift");
        assert_eq!(t.into_inner().calls, 1);
    }

    #[test]
    fn test_validated_rejects_before_transforming() {
        let mut rec = Recording::new(
            Header::new(80, 24),
            vec![Event::output(2.0, "a"), Event::output(1.0, "b")],
        );
        let original = rec.clone();
        let mut t = Validated::new(Shift { calls: 0 });

        let err = t.transform(&mut rec).unwrap_err();
        assert!(matches!(
            err,
            EditError::Validation(ValidationError::UnorderedStream { index: 1, .. })
        ));
        assert_eq!(rec, original);
        assert_eq!(t.into_inner().calls, 0);
    }

    #[test]
    fn test_boxed_transformation_delegates() {
        let mut boxed: Box<dyn Transformation> = Box::new(Shift { calls: 0 });
        let mut rec = Recording::new(Header::new(80, 24), vec![Event::output(0.0, "a")]);
        boxed.transform(&mut rec).unwrap();
        assert_eq!(boxed.name(), "shift");
        assert_eq!(rec.events[0].time, 1.0);
    }
}
