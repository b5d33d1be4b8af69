//! Environment fixtures shared by the integration tests.

use aasenv::model::{
    AdministrativeInformation, CompleteEnvironment, Element, Environment, InMemoryFile, KeyType,
    Reference, Submodel,
};

/// Two shells, two submodels and two concept descriptions, no versions.
pub const PLANT_ENVIRONMENT_JSON: &str = r#"{
  "assetAdministrationShells": [
    { "modelType": "AssetAdministrationShell", "id": "urn:plant:shell:pump", "idShort": "Pump",
      "submodels": [ { "type": "ModelReference",
                       "keys": [ { "type": "Submodel", "value": "urn:plant:sm:nameplate" } ] } ] },
    { "modelType": "AssetAdministrationShell", "id": "urn:plant:shell:valve", "idShort": "Valve" }
  ],
  "submodels": [
    { "modelType": "Submodel", "id": "urn:plant:sm:nameplate", "idShort": "Nameplate",
      "semanticId": { "type": "ExternalReference",
                      "keys": [ { "type": "GlobalReference", "value": "urn:sem:nameplate" } ] },
      "submodelElements": [
        { "modelType": "Property", "idShort": "ManufacturerName", "valueType": "xs:string",
          "value": "ACME",
          "semanticId": { "type": "ExternalReference",
                          "keys": [ { "type": "GlobalReference", "value": "urn:sem:manufacturer" } ] } },
        { "modelType": "SubmodelElementCollection", "idShort": "Address",
          "value": [
            { "modelType": "Property", "idShort": "City", "value": "Berlin",
              "semanticId": { "type": "ModelReference",
                              "keys": [ { "type": "ConceptDescription", "value": "urn:plant:cd:city" } ] } }
          ] }
      ] },
    { "modelType": "Submodel", "id": "urn:plant:sm:operation", "idShort": "Operation",
      "submodelElements": [
        { "modelType": "Range", "idShort": "Temperature", "valueType": "xs:double",
          "min": "-20", "max": "80",
          "semanticId": { "type": "ExternalReference",
                          "keys": [ { "type": "GlobalReference", "value": "urn:sem:manufacturer" } ] } },
        { "modelType": "Capability", "idShort": "Pumping" }
      ] }
  ],
  "conceptDescriptions": [
    { "modelType": "ConceptDescription", "id": "urn:plant:cd:city", "idShort": "City" },
    { "modelType": "ConceptDescription", "id": "urn:plant:cd:name", "idShort": "Name" }
  ]
}"#;

/// Parse an environment from JSON or fail the test.
pub fn parse_environment(json: &str) -> Environment {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("invalid fixture: {e}"))
}

pub fn plant_environment() -> Environment {
    parse_environment(PLANT_ENVIRONMENT_JSON)
}

pub fn versioned_submodel(id: &str, version: Option<&str>, revision: Option<&str>) -> Submodel {
    Submodel::new(id).with_administration(AdministrativeInformation::new(version, revision))
}

/// Environment with two shells sharing one id.
pub fn duplicate_shell_environment() -> Environment {
    parse_environment(
        r#"{ "assetAdministrationShells": [
              { "id": "urn:dup:shell", "idShort": "First" },
              { "id": "urn:dup:shell", "idShort": "Second" } ] }"#,
    )
}

/// Environment with two submodels sharing one id.
pub fn duplicate_submodel_environment() -> Environment {
    parse_environment(
        r#"{ "submodels": [
              { "id": "urn:dup:sm", "idShort": "First" },
              { "id": "urn:dup:sm", "idShort": "Second" } ] }"#,
    )
}

/// A submodel with files at three depths, in keyed and ordered containers.
///
/// ```text
/// Documentation (Collection)
/// ├── Nameplate (File)                      Documentation.Nameplate
/// ├── Manuals (List)
/// │   ├── [0] (Collection)
/// │   │   └── Pdf (File)                    Documentation.Manuals[0].Pdf
/// │   └── [1] Count (Property)
/// └── Drawings (List)
///     └── [0] (List)
///         └── [0] (File)                    Documentation.Drawings[0][0]
/// ```
pub fn documentation_submodel() -> Submodel {
    let manual = Element::collection(
        "Manual",
        vec![Element::file_with_value(
            "Pdf",
            "application/pdf",
            "/aasx/docs/manual.pdf",
        )],
    );
    let drawing = Element::list(
        "Sheets",
        vec![Element::file_with_value(
            "Sheet",
            "image/svg+xml",
            "/aasx/docs/sheet.svg",
        )
        .with_semantic_id(Reference::model(KeyType::ConceptDescription, "urn:cd:drawing"))],
    );

    Submodel::new("urn:plant:sm:docs").with_element(Element::collection(
        "Documentation",
        vec![
            Element::file_with_value("Nameplate", "image/png", "/aasx/docs/nameplate.png"),
            Element::list("Manuals", vec![manual, Element::property("Count")]),
            Element::list("Drawings", vec![drawing]),
        ],
    ))
}

/// [`documentation_submodel`] packaged with two of its three files.
pub fn documentation_package() -> CompleteEnvironment {
    CompleteEnvironment::new(Environment::new().with_submodel(documentation_submodel()))
        .with_related_file(InMemoryFile::new("/aasx/docs/manual.pdf", b"%PDF-1.7".to_vec()))
        .with_related_file(InMemoryFile::new("/aasx/docs/sheet.svg", b"<svg/>".to_vec()))
}
