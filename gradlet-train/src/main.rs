use gradlet_data::Dataset;
use gradlet_train::{TrainConfig, Trainer};
use log::{error, info};

fn run() -> Result<(), gradlet_core::GradletError> {
    let config = TrainConfig::default();
    info!("Training with {:?}", config);
    let mut trainer = Trainer::new(config)?;
    let report = trainer.fit()?;
    if let Some(loss) = report.final_loss() {
        info!("Final loss: {}", loss);
    }

    info!("Final predictions on training data:");
    for sample in trainer.dataset().as_slice() {
        let prediction = trainer.predict(&sample.features)?;
        info!(
            "Input: ({}, {})  Prediction: {} (tanh output: {})",
            sample.features[0], sample.features[1], prediction.label, prediction.output
        );
    }
    info!(
        "Training accuracy: {:.1}% over {} examples",
        trainer.accuracy()? * 100.0,
        trainer.dataset().len()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        error!("Training failed: {}", e);
        std::process::exit(1);
    }
}
