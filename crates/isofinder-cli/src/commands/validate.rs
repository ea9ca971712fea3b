use crate::cli::ValidateArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::{export, format};
use isofinder::workflows::validate;
use tracing::info;

pub fn run(args: ValidateArgs, config: &PartialConfig) -> Result<()> {
    let profile = config.calibration_profile()?;

    let report = match &args.reference {
        Some(path) => {
            info!("Validating against reference dataset {:?}", path);
            validate::run_from_reference(path, &profile)?
        }
        None => {
            info!("Validating against the built-in reference set.");
            validate::validate_accuracy(&profile)
        }
    };

    print!("{}", format::validation(&report));

    if let Some(path) = &args.output {
        export::validation_to_file(path, &report.records)?;
        println!("✓ Validation records written to: {}", path.display());
    }
    Ok(())
}
