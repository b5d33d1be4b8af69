#![allow(clippy::unwrap_used, clippy::expect_used)]

use aasenv::IngestError;
use aasenv::model::{EntityKind, Environment, Shell};

use crate::helpers::environment_fixtures::{
    duplicate_shell_environment, duplicate_submodel_environment, plant_environment,
};
use crate::helpers::store_helpers::counting_ingestor;

#[test]
fn test_duplicate_shell_ids() {
    let ingestor = counting_ingestor();
    let err = ingestor.ingest(&duplicate_shell_environment()).unwrap_err();

    assert_eq!(err, IngestError::colliding(EntityKind::Shell, "urn:dup:shell"));
    assert_eq!(ingestor.shells().creates(), 1);
}

#[test]
fn test_duplicate_submodel_ids() {
    let ingestor = counting_ingestor();
    let err = ingestor.ingest(&duplicate_submodel_environment()).unwrap_err();

    assert_eq!(err.colliding_id(), Some("urn:dup:sm"));
    assert!(matches!(
        err,
        IngestError::CollidingIdentifier {
            kind: EntityKind::Submodel,
            ..
        }
    ));
    assert_eq!(ingestor.submodels().creates(), 1);
}

#[test]
fn test_collision_with_stored_entity_is_not_an_error() {
    let ingestor = counting_ingestor();
    ingestor.ingest(&plant_environment()).unwrap();

    let again = Environment::new().with_shell(Shell::new("urn:plant:shell:pump"));
    let summary = ingestor.ingest(&again).unwrap();
    assert_eq!(summary.shells.skipped, 1);
}

#[test]
fn test_shells_committed_before_submodel_collision() {
    let ingestor = counting_ingestor();
    let mut environment = duplicate_submodel_environment();
    environment
        .asset_administration_shells
        .push(Shell::new("urn:committed"));

    assert!(ingestor.ingest(&environment).is_err());
    assert_eq!(ingestor.shells().inner.ids(), ["urn:committed"]);
}
