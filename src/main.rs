// Runs the classifier on two small clusters; set RUST_LOG=debug to see the
// per-class diagrams.
use log::info;
use ndarray::array;
use phclass::{LabeledDataset, PersistentHomologyClassifier, PhcConfig, PhcError};

fn main() -> Result<(), PhcError> {
    env_logger::init();
    println!("phclass example");

    let training = LabeledDataset::new(
        array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [10.0, 10.0],
            [11.0, 10.0],
            [10.0, 11.0]
        ],
        vec![1, 1, 1, 2, 2, 2],
    )?;

    let classifier = PersistentHomologyClassifier::new(PhcConfig::new(5.0));
    let model = classifier.fit(&training)?;
    for (label, diagram) in model.iter() {
        println!(
            "class {}: {} pairs, death sum {}",
            label,
            diagram.len(),
            diagram.death_sum()
        );
    }

    for query in [array![0.5, 0.5], array![10.5, 10.4]] {
        let scores = classifier.scores(&model, query.view())?;
        for (label, score) in scores.iter() {
            info!("query {:?}: class {} scored {}", query, label, score);
        }
        let label = classifier.predict(&model, query.view())?;
        println!("query {:?} -> class {}", query, label);
    }
    Ok(())
}
