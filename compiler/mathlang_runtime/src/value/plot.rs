//! Plot records produced by the visualization operations.
//!
//! Pure data. Rendering is up to the host.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Sampled 2-D curve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlotData2D {
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl PlotData2D {
    pub fn new(x_values: Vec<f64>, y_values: Vec<f64>) -> Self {
        PlotData2D {
            x_values,
            y_values,
            title: String::new(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Surface sampled on an `x` × `y` grid; `z_values[j][i]` is `f(x[i], y[j])`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlotData3D {
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    pub z_values: Vec<Vec<f64>>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
}

impl PlotData3D {
    pub fn new(x_values: Vec<f64>, y_values: Vec<f64>, z_values: Vec<Vec<f64>>) -> Self {
        PlotData3D {
            x_values,
            y_values,
            z_values,
            title: String::new(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            z_label: "z".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HistogramData {
    pub values: Vec<f64>,
    pub bins: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl HistogramData {
    pub fn new(values: Vec<f64>, bins: usize) -> Self {
        HistogramData {
            values,
            bins,
            title: String::new(),
            x_label: "Value".to_string(),
            y_label: "Frequency".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScatterData {
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ScatterData {
    pub fn new(x_values: Vec<f64>, y_values: Vec<f64>) -> Self {
        ScatterData {
            x_values,
            y_values,
            title: String::new(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
        }
    }
}
