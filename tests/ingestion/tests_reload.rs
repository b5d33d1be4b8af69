#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use aasenv::ingest::{
    EnvironmentIngestor, InMemoryConceptDescriptionStore, InMemoryShellStore,
    InMemorySubmodelStore,
};
use aasenv::model::{Element, Environment};

use crate::helpers::environment_fixtures::{plant_environment, versioned_submodel};
use crate::helpers::store_helpers::{counting_ingestor, stored_submodel};

#[test]
fn test_idempotent_reload() {
    let ingestor = counting_ingestor();
    let environment = plant_environment();

    ingestor.ingest(&environment).unwrap();
    assert_eq!(ingestor.shells().creates(), 2);
    assert_eq!(ingestor.submodels().creates(), 2);
    assert_eq!(ingestor.concept_descriptions().creates(), 2);

    let summary = ingestor.ingest(&environment).unwrap();
    assert_eq!(summary.written(), 0);

    assert_eq!(ingestor.shells().creates(), 2);
    assert_eq!(ingestor.submodels().creates(), 2);
    assert_eq!(ingestor.concept_descriptions().creates(), 2);
    assert_eq!(ingestor.shells().updates(), 0);
    assert_eq!(ingestor.submodels().updates(), 0);
    assert_eq!(ingestor.concept_descriptions().updates(), 0);

    assert_eq!(ingestor.shells().inner.len(), 2);
    assert_eq!(ingestor.submodels().inner.len(), 2);
    assert_eq!(ingestor.concept_descriptions().inner.len(), 2);
}

#[test]
fn test_revision_triggers_exactly_one_update() {
    let ingestor = counting_ingestor();
    let bundle_a = Environment::new().with_submodel(
        versioned_submodel("urn:sm:motor", Some("v1"), None).with_element(Element::property("A")),
    );
    let bundle_b = Environment::new().with_submodel(
        versioned_submodel("urn:sm:motor", Some("v1"), Some("r2"))
            .with_element(Element::property("B")),
    );

    ingestor.ingest(&bundle_a).unwrap();
    assert_eq!(ingestor.submodels().creates(), 1);

    ingestor.ingest(&bundle_b).unwrap();
    assert_eq!(ingestor.submodels().creates(), 1);
    assert_eq!(ingestor.submodels().updates(), 1);

    let stored = stored_submodel(&ingestor, "urn:sm:motor");
    assert_eq!(stored, bundle_b.submodels[0]);
}

#[test]
fn test_removed_version_also_replaces() {
    let ingestor = counting_ingestor();
    ingestor
        .ingest(&Environment::new().with_submodel(versioned_submodel("urn:sm:x", Some("1"), Some("0"))))
        .unwrap();
    ingestor
        .ingest(&Environment::new().with_submodel(versioned_submodel("urn:sm:x", None, None)))
        .unwrap();

    assert_eq!(ingestor.submodels().updates(), 1);
    assert_eq!(
        stored_submodel(&ingestor, "urn:sm:x").administration,
        Some(Default::default())
    );
}

#[test]
fn test_shared_stores_across_ingestors() {
    let shells = Arc::new(InMemoryShellStore::new());
    let submodels = Arc::new(InMemorySubmodelStore::new());
    let concept_descriptions = Arc::new(InMemoryConceptDescriptionStore::new());

    let first = EnvironmentIngestor::new(
        Arc::clone(&shells),
        Arc::clone(&submodels),
        Arc::clone(&concept_descriptions),
    );
    first.ingest(&plant_environment()).unwrap();

    let second = EnvironmentIngestor::new(&*shells, &*submodels, &*concept_descriptions);
    let summary = second.ingest(&plant_environment()).unwrap();

    assert_eq!(summary.written(), 0);
    assert_eq!(shells.len(), 2);
    assert_eq!(submodels.ids(), ["urn:plant:sm:nameplate", "urn:plant:sm:operation"]);
}
