#![allow(clippy::unwrap_used, clippy::expect_used)]

use aasenv::model::Environment;
use aasenv::walk::collect_semantic_ids;

use crate::helpers::environment_fixtures::{documentation_submodel, plant_environment};

#[test]
fn test_plant_semantic_ids() {
    let mut ids: Vec<String> = collect_semantic_ids(&plant_environment())
        .into_iter()
        .collect();
    ids.sort();

    // The submodel's own semanticId is not part of its element tree.
    assert_eq!(ids, ["urn:plant:cd:city", "urn:sem:manufacturer"]);
}

#[test]
fn test_semantic_ids_across_submodels() {
    let environment = plant_environment().with_submodel(documentation_submodel());
    let ids = collect_semantic_ids(&environment);

    assert_eq!(ids.len(), 3);
    assert!(ids.contains("urn:cd:drawing"));
}

#[test]
fn test_environment_without_references() {
    let environment = Environment::new().with_submodel(
        aasenv::model::Submodel::new("urn:sm:bare")
            .with_element(aasenv::model::Element::property("Plain")),
    );
    assert!(collect_semantic_ids(&environment).is_empty());
}
