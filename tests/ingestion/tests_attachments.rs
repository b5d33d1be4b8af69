#![allow(clippy::unwrap_used, clippy::expect_used)]

use aasenv::ingest::SubmodelStore;
use aasenv::model::CompleteEnvironment;

use crate::helpers::environment_fixtures::{documentation_package, documentation_submodel};
use crate::helpers::store_helpers::counting_ingestor;

#[test]
fn test_package_files_bound_to_file_elements() {
    let ingestor = counting_ingestor();
    let summary = ingestor.ingest_complete(&documentation_package()).unwrap();

    assert_eq!(summary.submodels.created, 1);
    assert_eq!(summary.attachments, 2);

    let store = &ingestor.submodels().inner;
    let manual = store
        .attachment("urn:plant:sm:docs", "Documentation.Manuals[0].Pdf")
        .unwrap();
    assert_eq!(manual.file_name, "manual.pdf");
    assert_eq!(manual.content, b"%PDF-1.7");

    let sheet = store
        .attachment("urn:plant:sm:docs", "Documentation.Drawings[0][0]")
        .unwrap();
    assert_eq!(sheet.file_name, "sheet.svg");

    // Not carried by the package: left as is.
    assert_eq!(store.attachment("urn:plant:sm:docs", "Documentation.Nameplate"), None);
    let nameplate = store
        .submodel_element("urn:plant:sm:docs", "Documentation.Nameplate")
        .unwrap();
    assert_eq!(nameplate.file_value(), Some("/aasx/docs/nameplate.png"));
}

#[test]
fn test_bound_file_value_is_the_file_name() {
    let ingestor = counting_ingestor();
    ingestor.ingest_complete(&documentation_package()).unwrap();

    let pdf = ingestor
        .submodels()
        .submodel_element("urn:plant:sm:docs", "Documentation.Manuals[0].Pdf")
        .unwrap();
    assert_eq!(pdf.file_value(), Some("manual.pdf"));
}

#[test]
fn test_plain_environment_binds_nothing() {
    let ingestor = counting_ingestor();
    let plain = CompleteEnvironment::from(
        aasenv::Environment::new().with_submodel(documentation_submodel()),
    );
    let summary = ingestor.ingest_complete(&plain).unwrap();

    assert_eq!(summary.attachments, 0);
    assert_eq!(ingestor.submodels().inner.attachment_count(), 0);
}
