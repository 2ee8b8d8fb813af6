use approx::assert_relative_eq;
use rheo_core::TimeIncrement;
use rheo_viscoelastic::{
    Config, ConstitutiveModel, Error, Flow, Simulation, analytic::MaxwellShear,
};
use uom::si::{
    f64::{Frequency, Pressure, Time},
    frequency::hertz,
    pressure::pascal,
    time::second,
};

fn maxwell_shear_config(deltat: f64, nsteps: i64) -> Config {
    Config {
        modelnr: 1,
        lamb: 1.0,
        gmod: 1.0,
        alpha: None,
        flownr: 1,
        rate: 1.0,
        deltat,
        nsteps,
    }
}

#[test]
fn maxwell_start_up_in_shear() {
    let config = maxwell_shear_config(0.01, 100);
    let series = rheo_viscoelastic::run(&config).unwrap();

    assert_eq!(series.len(), 100);
    assert_relative_eq!(series.last().unwrap().strain, 1.0, epsilon = 1e-12);

    // Stress grows monotonically from rest.
    let norms: Vec<f64> = series.stress_norms().collect();
    assert!(norms[0] > 0.0);
    assert!(norms.windows(2).all(|w| w[1] > w[0]));

    // And matches the closed-form solution at t = 1.
    let sim = config.build().unwrap();
    let reference = MaxwellShear::from_model(sim.model(), sim.flow()).unwrap();
    assert_relative_eq!(
        norms[99],
        reference.stress_norm(Time::new::<second>(1.0)),
        epsilon = 1e-3
    );
}

#[test]
fn maxwell_converges_to_steady_shear_stress() {
    let config = maxwell_shear_config(0.01, 2000);
    let series = rheo_viscoelastic::run(&config).unwrap();

    let sim = config.build().unwrap();
    let reference = MaxwellShear::from_model(sim.model(), sim.flow()).unwrap();
    let last = series.last().unwrap();

    assert_relative_eq!(last.strain, 20.0, epsilon = 1e-9);
    assert_relative_eq!(last.stress_norm, reference.steady_state_norm(), epsilon = 1e-3);
    assert!(series.stress_norms().all(|s| s <= reference.steady_state_norm() + 1e-3));
}

#[test]
fn heun_error_is_second_order() {
    // The shear component follows a linear scalar ODE, so halving the step
    // should cut the error at t = 1 by about four.
    let model =
        ConstitutiveModel::maxwell(Time::new::<second>(1.0), Pressure::new::<pascal>(1.0))
            .unwrap();
    let flow = Flow::shear(Frequency::new::<hertz>(1.0));
    let reference = MaxwellShear::from_model(&model, &flow).unwrap();
    let exact = reference.stress(Time::new::<second>(1.0))[[0, 1]];

    let error = |steps: usize| {
        let dt = TimeIncrement::new::<second>(1.0 / steps as f64).unwrap();
        let outcome = Simulation::new(model, flow, dt, steps)
            .unwrap()
            .solve(())
            .unwrap();
        (outcome.final_stress[[0, 1]] - exact).abs()
    };

    let coarse = error(50);
    let fine = error(100);
    assert!(fine < coarse);
    let ratio = coarse / fine;
    assert!((3.5..4.5).contains(&ratio), "ratio was {ratio}");
}

#[test]
fn giesekus_extension_stays_bounded() {
    let config = Config {
        modelnr: 2,
        alpha: Some(0.5),
        flownr: 2,
        ..maxwell_shear_config(0.01, 1000)
    };

    let series = rheo_viscoelastic::run(&config).unwrap();

    assert_eq!(series.len(), 1000);
    assert!(series.stress_norms().all(|s| s.is_finite() && s < 50.0));
    assert_relative_eq!(series.last().unwrap().strain, 10.0, epsilon = 1e-9);
}

#[test]
fn giesekus_shear_thins_relative_to_maxwell() {
    let maxwell = rheo_viscoelastic::run(&maxwell_shear_config(0.01, 1000)).unwrap();
    let giesekus = rheo_viscoelastic::run(&Config {
        modelnr: 2,
        alpha: Some(0.3),
        ..maxwell_shear_config(0.01, 1000)
    })
    .unwrap();

    let last = |series: &rheo_viscoelastic::TimeSeries| series.last().unwrap().stress_norm;
    assert!(last(&giesekus) < last(&maxwell));
}

#[test]
fn invalid_configuration_produces_no_series() {
    let result = rheo_viscoelastic::run(&maxwell_shear_config(0.0, 100));
    assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));

    let result = rheo_viscoelastic::run(&maxwell_shear_config(0.01, 0));
    assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
}
