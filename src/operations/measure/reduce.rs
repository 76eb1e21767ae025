use crate::error::{Result, SelectionError, TopologyError};

use super::extent::TravelExtent;

/// How per-edge travel extents are collapsed into one loop-level extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasurementMethod {
    /// Arithmetic mean per side. Edges without a rail pull it towards 0.
    #[default]
    Average,
    /// Smallest extent per side: the bottleneck edge.
    Minimum,
    /// Largest extent per side.
    Maximum,
    /// Extent of the edge the user selected first.
    FirstSelected,
}

/// Reduces per-edge extents to a single `(forward, backward)` extent.
///
/// `first_selected` is the index into `extents` of the edge the user
/// selected first, or `None` if the host does not record selection order.
///
/// # Errors
///
/// Returns [`SelectionError::NoSelection`] for an empty slice, and
/// [`SelectionError::SelectionOrderUnavailable`] when `FirstSelected` is
/// requested without a known first edge.
pub fn reduce(
    extents: &[TravelExtent],
    method: MeasurementMethod,
    first_selected: Option<usize>,
) -> Result<TravelExtent> {
    if extents.is_empty() {
        return Err(SelectionError::NoSelection.into());
    }

    let reduced = match method {
        MeasurementMethod::Average => {
            #[allow(clippy::cast_precision_loss)]
            let n = extents.len() as f64;
            let (forward, backward) = extents
                .iter()
                .fold((0.0, 0.0), |(f, b), e| (f + e.forward, b + e.backward));
            TravelExtent::new(forward / n, backward / n)
        }
        MeasurementMethod::Minimum => extents.iter().fold(
            TravelExtent::new(f64::INFINITY, f64::INFINITY),
            |acc, e| TravelExtent::new(acc.forward.min(e.forward), acc.backward.min(e.backward)),
        ),
        MeasurementMethod::Maximum => extents.iter().fold(TravelExtent::default(), |acc, e| {
            TravelExtent::new(acc.forward.max(e.forward), acc.backward.max(e.backward))
        }),
        MeasurementMethod::FirstSelected => {
            let index = first_selected.ok_or(SelectionError::SelectionOrderUnavailable)?;
            *extents.get(index).ok_or_else(|| {
                TopologyError::InvalidTopology(format!(
                    "first selected edge {index} is outside the loop"
                ))
            })?
        }
    };

    Ok(reduced)
}
