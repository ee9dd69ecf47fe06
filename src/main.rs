use log::{info, warn};
use nasa_power::{get_configuration, load_districts, NasaPower, NasaPowerError, RunOutcome};

#[tokio::main]
async fn main() -> Result<(), NasaPowerError> {
    env_logger::init();

    let settings = get_configuration()?;
    let districts = load_districts(&settings.districts_path)?;
    info!(
        "Loaded {} districts from {}",
        districts.len(),
        settings.districts_path.display()
    );

    let collector = NasaPower::new(settings)?;
    match collector.run(&districts).await? {
        RunOutcome::Written { path, rows } => {
            println!("Saved: {}", path.display());
            println!("Total rows: {rows}");
        }
        RunOutcome::NoData => {
            warn!("No data collected from any district; no output file written");
        }
    }

    Ok(())
}
