use log::{error, info};
use rusty_classifiers::data::dataset::Dataset;
use rusty_classifiers::data::reader::read_tsv;
use rusty_classifiers::metrics::confusion::ClassificationMetrics;
use rusty_classifiers::neighbors::classifier::KNeighborsClassifier;
use rusty_classifiers::trees::classifier::DecisionTreeClassifier;
use std::error::Error;

fn truth<T>(dataset: &Dataset<T>) -> Vec<String> {
    dataset.labels().into_iter().map(str::to_string).collect()
}

fn test_tree_classifier(dataset: &Dataset<String>) -> Result<String, Box<dyn Error>> {
    let mut classifier = DecisionTreeClassifier::new();
    info!("{}", classifier.fit(dataset)?);

    let predictions = classifier
        .predict_all(dataset.instances())?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<_>>();
    let accuracy = classifier.accuracy(&truth(dataset), &predictions)?;
    Ok(format!("Training accuracy: {}%", accuracy * 100.0))
}

fn test_knn_classifier(
    train_dataset: &Dataset<f64>,
    test_dataset: &Dataset<f64>,
    k: usize,
) -> Result<String, Box<dyn Error>> {
    let classifier = KNeighborsClassifier::new(train_dataset.instances())?;
    let predictions = classifier.classify_all(test_dataset.instances(), k)?;
    let accuracy = classifier.accuracy(&truth(test_dataset), &predictions)?;
    Ok(format!("Accuracy (k = {}): {}%", k, accuracy * 100.0))
}

fn run() -> Result<(), Box<dyn Error>> {
    let lenses = read_tsv::<String, _>("datasets/lenses.txt")?;
    info!("Loaded {} lenses records", lenses.nrows());
    info!("{}", test_tree_classifier(&lenses)?);

    let clusters = read_tsv::<f64, _>("datasets/clusters.txt")?;
    let (train_dataset, test_dataset) = clusters.train_test_split(0.75, None)?;
    info!("{}", test_knn_classifier(&train_dataset, &test_dataset, 3)?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
