use crate::cli::CrosscheckArgs;
use crate::config::PartialConfig;
use crate::data::{DataManager, ReferenceSource};
use crate::error::Result;
use crate::utils::{format, progress::CliProgressHandler};
use isofinder::engine::progress::ProgressReporter;
use isofinder::workflows::{crosscheck, search};
use tracing::info;

pub fn run(args: CrosscheckArgs, config: &PartialConfig) -> Result<()> {
    let profile = config.calibration_profile()?;
    let search_config = config.search_config(None)?;

    let data_manager = DataManager::new()?;
    let (dataset, source) = data_manager.load_reference(args.reference.as_deref())?;
    match &source {
        ReferenceSource::Bundled => info!("Using the bundled reference dataset."),
        ReferenceSource::DataDirectory(path) | ReferenceSource::Explicit(path) => {
            info!("Using reference dataset {:?}", path)
        }
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let result = search::run(&profile, &search_config, &reporter)?;

    let report = crosscheck::cross_check(&result.candidates, &dataset, &profile);
    let agreement = crosscheck::stability_agreement(&dataset, &profile);

    println!("Reference dataset: {} isotope(s)", dataset.len());
    print!("{}", format::cross_check(&report, &agreement));
    Ok(())
}
