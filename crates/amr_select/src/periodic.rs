//! Wraparound-aware displacement along a single axis.

/// Signed shortest displacement `x1 - x2` along one axis.
///
/// On a periodic axis of width `dw` the raw difference is folded back by one
/// domain width when it exceeds half the domain in either direction, so the
/// result always lies in `[-dw/2, dw/2]`.
#[inline]
pub fn difference(x1: f64, x2: f64, dw: f64, periodic: bool) -> f64 {
  let rel = x1 - x2;
  if !periodic {
    return rel;
  }
  if rel > dw * 0.5 {
    rel - dw
  } else if rel < -dw * 0.5 {
    rel + dw
  } else {
    rel
  }
}

#[cfg(test)]
#[path = "periodic_test.rs"]
mod periodic_test;
