//! Example demonstrating error handling with the persistent homology classifier.
//!
//! Every precondition violation surfaces as `PhcError::InvalidInput` before
//! any topology is computed; failures of the filtration itself surface as
//! `PhcError::Computation`.

use ndarray::{ArrayView2, array};
use phc::{InputError, PersistentHomologyClassifier, PhcConfig, PhcError};
use phc_helpers::LabeledDataset;
use rips_persistence::{Filtration, PersistenceDiagram, PersistenceError};

#[derive(Debug, Clone)]
struct BrokenFiltration;

impl Filtration<f64> for BrokenFiltration {
    fn diagram(
        &self,
        cloud: ArrayView2<f64>,
        _threshold: f64,
    ) -> Result<PersistenceDiagram<f64>, PersistenceError> {
        Err(PersistenceError::NonFiniteDistance {
            i: 0,
            j: cloud.nrows().saturating_sub(1),
        })
    }
}

fn main() {
    println!("Persistent Homology Classifier Error Handling Examples");
    println!("======================================================");

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
    )
    .expect("one label per row");

    // Example 1: non-positive max scale
    println!("\n1. Handling a non-positive max scale:");
    match PersistentHomologyClassifier::new(PhcConfig::new(0.0)).fit(&training) {
        Ok(_) => println!("   Model fitted"),
        Err(PhcError::InvalidInput(InputError::InvalidScale(s))) => {
            println!("   ✓ Caught expected error: max scale {} rejected", s)
        }
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 2: a declared class without points
    println!("\n2. Handling an empty class:");
    let with_missing = training.clone().with_classes([1, 2, 3]);
    match PersistentHomologyClassifier::new(PhcConfig::new(5.0)).fit(&with_missing) {
        Ok(_) => println!("   Model fitted"),
        Err(e @ PhcError::InvalidInput(InputError::EmptyClass(_))) => {
            println!("   ✓ Caught expected error: {}", e)
        }
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 3: successful prediction, then a query of the wrong dimension
    println!("\n3. Prediction with error handling:");
    let classifier = PersistentHomologyClassifier::new(PhcConfig::new(5.0));
    match classifier.fit(&training) {
        Ok(model) => {
            println!("   ✓ Model fitted on {} classes", model.n_classes());
            let queries = vec![
                (array![0.5, 0.5], "should be class 1"),
                (array![10.5, 10.2], "should be class 2"),
                (array![0.5, 0.5, 0.5], "wrong dimension"),
            ];
            for (query, expected) in queries {
                match classifier.predict(&model, query.view()) {
                    Ok(label) => println!("   ✓ Predicted class {} ({})", label, expected),
                    Err(e) => println!("   ✓ Prediction refused: {} ({})", e, expected),
                }
            }
        }
        Err(e) => println!("   ✗ Failed to fit: {}", e),
    }

    // Example 4: a failing filtration aborts the whole fit
    println!("\n4. Filtration failures:");
    let broken =
        PersistentHomologyClassifier::with_filtration(PhcConfig::new(5.0), BrokenFiltration);
    match broken.fit(&training) {
        Ok(_) => println!("   Model fitted"),
        Err(e) if e.is_computation() => println!("   ✓ Caught computation error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 5: error propagation in a function
    println!("\n5. Error propagation in functions:");

    fn classify_with_error_handling() -> Result<u32, PhcError> {
        let data = LabeledDataset::new(array![[-1.0], [-2.0], [1.0], [2.0]], vec![0, 0, 1, 1])?;
        let model = phc::fit(&data, 3.0)?;
        phc::predict(&model, array![1.4].view())
    }

    match classify_with_error_handling() {
        Ok(label) => println!("   ✓ Classification result: {}", label),
        Err(e) => println!("   ✗ Classification failed: {}", e),
    }

    println!("\nAll examples completed successfully!");
}
