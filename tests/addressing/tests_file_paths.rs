#![allow(clippy::unwrap_used, clippy::expect_used)]

use aasenv::path::{build_id_short_path, resolve_id_short_path};
use aasenv::walk::collect_file_element_paths;

use crate::helpers::environment_fixtures::documentation_submodel;

#[test]
fn test_every_file_gets_a_resolvable_path() {
    let submodel = documentation_submodel();
    let roots = &submodel.submodel_elements;

    let chains = collect_file_element_paths(roots);
    assert_eq!(chains.len(), 3);

    let mut paths: Vec<String> = chains
        .iter()
        .map(|chain| build_id_short_path(chain).unwrap())
        .collect();
    paths.sort();
    assert_eq!(
        paths,
        [
            "Documentation.Drawings[0][0]",
            "Documentation.Manuals[0].Pdf",
            "Documentation.Nameplate",
        ]
    );

    for chain in &chains {
        let path = build_id_short_path(chain).unwrap();
        let resolved = resolve_id_short_path(roots, &path).unwrap().unwrap();
        assert!(
            std::ptr::eq(resolved, *chain.last().unwrap()),
            "'{path}' resolved to a different element"
        );
    }
}

#[test]
fn test_file_values_follow_their_chains() {
    let submodel = documentation_submodel();
    let mut values: Vec<&str> = collect_file_element_paths(&submodel.submodel_elements)
        .iter()
        .filter_map(|chain| chain.last().and_then(|e| e.file_value()))
        .collect();
    values.sort_unstable();

    assert_eq!(
        values,
        [
            "/aasx/docs/manual.pdf",
            "/aasx/docs/nameplate.png",
            "/aasx/docs/sheet.svg",
        ]
    );
}
