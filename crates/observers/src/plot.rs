//! Plotting observer for visualizing integration results.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rheo_core::Observer;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Start-up shear").x_bounds(0.0, 20.0).y_min(0.0))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
    x_bounds: Option<(f64, f64)>,
    y_min: Option<f64>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig`: no title, no legend, automatic bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Labels the x and y axes.
    #[must_use]
    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Clamps the x axis to `[min, max]`.
    #[must_use]
    pub fn x_bounds(mut self, min: f64, max: f64) -> Self {
        self.x_bounds = Some((min, max));
        self
    }

    /// Starts the y axis at `min`; the upper bound follows the data.
    #[must_use]
    pub fn y_min(mut self, min: f64) -> Self {
        self.y_min = Some(min);
        self
    }
}

/// Extracts plottable data from an event.
///
/// Implement this on your event type to pass [`PlotObserver`] directly as an
/// observer. Return `None` from [`x`][Plottable::x] to skip the event entirely;
/// return `None` in a trace slot to skip only that trace.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Record data either by
/// implementing [`Plottable<N>`][Plottable] on the event type, or by calling
/// [`record`][PlotObserver::record] from a closure observer.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["Stress"]);
/// simulation.run_observed(|event: &StepEvent| -> Option<Infallible> {
///     obs.record(event.sample.strain, [Some(event.sample.stress_norm)]);
///     None
/// })?;
/// obs.show(ShowConfig::new().title("Stress vs strain"))?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Upper y bound for a plot whose lower bound is pinned.
fn y_upper(traces: &[(String, Vec<[f64; 2]>)], y_min: f64) -> f64 {
    let max = traces
        .iter()
        .flat_map(|(_, points)| points.iter().map(|p| p[1]))
        .fold(y_min, f64::max);
    if max > y_min {
        max + 0.05 * (max - y_min)
    } else {
        y_min + 1.0
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.config.y_label {
                plot = plot.y_axis_label(label.clone());
            }

            let x_bounds = self.config.x_bounds;
            let y_bounds = self
                .config
                .y_min
                .map(|min| (min, y_upper(&self.traces, min)));

            plot.show(ui, |plot_ui| {
                if x_bounds.is_some() || y_bounds.is_some() {
                    let current = plot_ui.plot_bounds();
                    let (x_min, x_max) =
                        x_bounds.unwrap_or((current.min()[0], current.max()[0]));
                    let (y_min, y_max) =
                        y_bounds.unwrap_or((current.min()[1], current.max()[1]));
                    plot_ui.set_plot_bounds(egui_plot::PlotBounds::from_min_max(
                        [x_min, y_min],
                        [x_max, y_max],
                    ));
                }
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Sample {
        strain: Option<f64>,
        stress: Option<f64>,
    }

    impl Plottable<1> for Sample {
        fn x(&self) -> Option<f64> {
            self.strain
        }

        fn traces(&self) -> [Option<f64>; 1] {
            [self.stress]
        }
    }

    fn feed(obs: &mut PlotObserver<1>, sample: Sample) {
        let _: Option<()> = obs.observe(&sample);
    }

    #[test]
    fn records_samples_in_order() {
        let mut obs = PlotObserver::new(["stress"]);
        for (strain, stress) in [(0.1, 0.5), (0.2, 0.8), (0.3, 0.9)] {
            feed(
                &mut obs,
                Sample {
                    strain: Some(strain),
                    stress: Some(stress),
                },
            );
        }
        assert_eq!(obs.data[0], [[0.1, 0.5], [0.2, 0.8], [0.3, 0.9]]);
    }

    #[test]
    fn skips_sample_without_x_or_trace() {
        let mut obs = PlotObserver::new(["stress"]);
        feed(
            &mut obs,
            Sample {
                strain: None,
                stress: Some(1.0),
            },
        );
        feed(
            &mut obs,
            Sample {
                strain: Some(1.0),
                stress: None,
            },
        );
        assert!(obs.data[0].is_empty());
    }

    #[test]
    fn record_splits_traces() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        obs.record(1.0, [Some(10.0), None]);
        obs.record(2.0, [None, Some(20.0)]);
        assert_eq!(obs.data[0], [[1.0, 10.0]]);
        assert_eq!(obs.data[1], [[2.0, 20.0]]);
    }

    #[test]
    fn y_upper_pads_data_maximum() {
        let traces = vec![("s".to_owned(), vec![[0.0, 0.0], [1.0, 2.0]])];
        assert!((y_upper(&traces, 0.0) - 2.1).abs() < 1e-12);
        assert!((y_upper(&[], 0.0) - 1.0).abs() < 1e-12);
    }
}
