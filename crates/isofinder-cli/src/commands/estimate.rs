use crate::cli::EstimateArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::format;
use isofinder::core::physics::binding::BindingEnergySource;
use isofinder::workflows::estimate;
use tracing::info;

pub fn run(args: EstimateArgs, config: &PartialConfig) -> Result<()> {
    let profile = config.calibration_profile()?;
    let (z, n) = (args.protons, args.neutrons);

    info!("Estimating properties for Z={}, N={}", z, n);
    let result = estimate::evaluate(z, n, &profile)?;
    let detailed = estimate::explain_binding_energy(z, n, &profile)?;

    // Pinned light nuclides bypass the enhancement layer entirely.
    let enhancement_percent = match detailed.source {
        BindingEnergySource::Override => None,
        BindingEnergySource::Formula {
            terms,
            heavy_factor,
            ..
        } => Some(estimate::enhancement_percent(
            z,
            n,
            terms.total() * heavy_factor,
            &profile,
        )?),
    };

    print!("{}", format::estimation(&result, enhancement_percent));
    Ok(())
}
