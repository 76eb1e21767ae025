use tracing::info;

use crate::error::{HostError, Result};
use crate::operations::factor::SlideFactor;

/// The host's native edge slide operator.
///
/// Implementations perform the actual vertex displacement for the
/// current selection. Nothing in this crate mutates geometry.
pub trait SlideHost {
    /// Slides the selected loop by `factor`.
    ///
    /// # Errors
    ///
    /// Returns the host's own failure, e.g. when the geometry changed
    /// since it was measured.
    fn edge_slide(&mut self, factor: &SlideFactor) -> std::result::Result<(), HostError>;
}

/// Hands a computed factor to the host. Failures are returned as-is
/// and never retried.
///
/// # Errors
///
/// Returns [`HostError`] if the host rejects the slide.
pub fn invoke<H: SlideHost + ?Sized>(host: &mut H, factor: &SlideFactor) -> Result<()> {
    info!(
        factor = factor.factor,
        even = factor.even,
        clamp = factor.clamp,
        flipped = factor.flipped,
        "invoking edge slide"
    );
    host.edge_slide(factor)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EdgeSlideError;

    struct Recorder(Vec<SlideFactor>);

    impl SlideHost for Recorder {
        fn edge_slide(&mut self, factor: &SlideFactor) -> std::result::Result<(), HostError> {
            self.0.push(*factor);
            Ok(())
        }
    }

    struct Broken;

    impl SlideHost for Broken {
        fn edge_slide(&mut self, _factor: &SlideFactor) -> std::result::Result<(), HostError> {
            Err(HostError::new("degenerate geometry"))
        }
    }

    fn factor() -> SlideFactor {
        SlideFactor {
            factor: 0.4,
            even: true,
            clamp: false,
            flipped: true,
        }
    }

    #[test]
    fn passes_factor_through() {
        let mut host = Recorder(Vec::new());
        invoke(&mut host, &factor()).unwrap();
        assert_eq!(host.0, vec![factor()]);
    }

    #[test]
    fn host_error_is_surfaced_verbatim() {
        let err = invoke(&mut Broken, &factor()).unwrap_err();
        match err {
            EdgeSlideError::Host(host) => assert_eq!(host.message, "degenerate geometry"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
