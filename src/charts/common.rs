//! State shared by every chart kind.
//!
//! All eight chart states carry the same quadruple — the loaded data,
//! a loading flag, an error message, and an animation flag — with the
//! same transition rules. `ChartFrame` implements that quadruple once;
//! each chart state embeds it next to its kind-specific fields.

use serde::{Deserialize, Serialize};

/// The data/loading/error/animating quadruple embedded in every chart
/// state. `data` is owned exclusively by the state: transitions replace
/// it wholesale, never mutate it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame<D> {
    pub data: Option<D>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_animating: bool,
}

impl<D> Default for ChartFrame<D> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
            is_animating: false,
        }
    }
}

impl<D> ChartFrame<D> {
    /// `LoadData(d)`: replace the data, clear loading and error, start
    /// the entry animation. Always succeeds — no validation.
    pub fn loaded(self, data: D) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
            error: None,
            is_animating: true,
        }
    }

    /// `UpdateData(d)`: replace the data and restart the animation;
    /// loading and error flags are left untouched.
    pub fn updated(self, data: D) -> Self {
        Self {
            data: Some(data),
            is_animating: true,
            ..self
        }
    }

    /// `BeginLoading`: the data supplier is about to fetch.
    pub fn loading(self) -> Self {
        Self {
            is_loading: true,
            ..self
        }
    }

    /// `LoadFailed`: record the message; existing data is kept so the
    /// render layer can keep showing the stale chart behind the error.
    pub fn failed(self, message: String) -> Self {
        Self {
            is_loading: false,
            error: Some(message),
            ..self
        }
    }

    /// `AnimationCompleted`: the render layer finished the entry
    /// animation.
    pub fn settled(self) -> Self {
        Self {
            is_animating: false,
            ..self
        }
    }

    /// Restart the animation without touching anything else
    /// (`Refresh`, gauge value changes).
    pub fn animating(self) -> Self {
        Self {
            is_animating: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> ChartFrame<Vec<f64>> {
        ChartFrame::default()
    }

    #[test]
    fn default_is_empty_and_idle() {
        let frame = ChartFrame::<Vec<f64>>::default();
        assert_eq!(frame.data, None);
        assert!(!frame.is_loading);
        assert_eq!(frame.error, None);
        assert!(!frame.is_animating);
    }

    #[test]
    fn loaded_clears_error_and_loading() {
        let frame = frame().loading().failed("boom".into());
        let frame = frame.loaded(vec![1.0]);
        assert_eq!(frame.data, Some(vec![1.0]));
        assert!(!frame.is_loading);
        assert_eq!(frame.error, None);
        assert!(frame.is_animating);
    }

    #[test]
    fn updated_preserves_error_and_loading() {
        let frame = frame().loading().failed("boom".into());
        let frame = frame.updated(vec![2.0]);
        assert_eq!(frame.data, Some(vec![2.0]));
        assert_eq!(frame.error, Some("boom".to_string()));
        assert!(!frame.is_loading, "failed() already cleared loading");
        assert!(frame.is_animating);
    }

    #[test]
    fn failed_keeps_stale_data() {
        let frame = frame().loaded(vec![3.0]).failed("offline".into());
        assert_eq!(frame.data, Some(vec![3.0]));
        assert_eq!(frame.error, Some("offline".to_string()));
    }

    #[test]
    fn settled_stops_animation_only() {
        let frame = frame().loaded(vec![4.0]).settled();
        assert!(!frame.is_animating);
        assert_eq!(frame.data, Some(vec![4.0]));
    }
}
