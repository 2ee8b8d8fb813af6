//! Command implementations.

use std::{convert::Infallible, error::Error, fs::File, io::BufWriter, path::Path};

use rheo_core::Observer;
use rheo_observers::ProgressObserver;
use rheo_viscoelastic::{Config, StepEvent, TimeSeries};
use tracing::info;

use crate::Cli;

/// Strain range shown on the stress-strain plot.
#[cfg(feature = "plot")]
const PLOT_STRAIN_RANGE: (f64, f64) = (0.0, 20.0);

/// Load the input, run the simulation, then report and export the results.
pub(crate) fn simulate(cli: &Cli) -> Result<(), Box<dyn Error>> {
    #[cfg(not(feature = "plot"))]
    if cli.plot {
        return Err("plotting requires rheo to be built with the `plot` feature".into());
    }

    let config = Config::from_path(&cli.config)?;
    let sim = config.build()?;

    info!("deforming a viscoelastic material, calculating stress and deformation");
    info!("created {}", sim.model());
    info!("velocity gradient:\n{}", sim.velocity_gradient());
    info!(dt = %sim.dt(), steps = sim.steps(), "starting time integration");

    let mut progress = ProgressObserver::new();
    #[cfg(feature = "plot")]
    let mut plot = rheo_observers::PlotObserver::<1>::new(["Stress"]);

    let series = sim.run_observed(|event: &StepEvent| -> Option<Infallible> {
        let _: Option<Infallible> = progress.observe(event);
        #[cfg(feature = "plot")]
        let _: Option<Infallible> = plot.observe(event);
        None
    })?;

    summarize(&series);

    if let Some(path) = &cli.output {
        write_series(&series, path)?;
        info!(path = %path.display(), "wrote time series");
    }

    #[cfg(feature = "plot")]
    if cli.plot {
        let (min, max) = PLOT_STRAIN_RANGE;
        plot.show(
            rheo_observers::ShowConfig::new()
                .title(format!("{} stress start-up", sim.model().name()))
                .axis_labels("Strain", "Stress")
                .x_bounds(min, max)
                .y_min(0.0),
        )?;
    }

    Ok(())
}

fn summarize(series: &TimeSeries) {
    if let Some(last) = series.last() {
        info!(
            "completed {} steps: strain {:.3}, stress {:.3}",
            series.len(),
            last.strain,
            last.stress_norm
        );
    }
}

fn write_series(series: &TimeSeries, path: &Path) -> Result<(), Box<dyn Error>> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, series)?;
    Ok(())
}
