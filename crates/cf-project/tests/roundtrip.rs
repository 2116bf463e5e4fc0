use cf_project::*;
use cf_tables::FlowRegime;
use std::path::PathBuf;

#[test]
fn roundtrip_yaml_default_project() {
    let project = TableProject::default();

    let path = std::env::temp_dir().join("cf_project_roundtrip_default.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_custom_project() {
    let project = TableProject {
        version: LATEST_VERSION,
        name: "Shock study".to_string(),
        tables: vec![TableSetDef {
            regime: FlowRegime::NormalShock,
            mach_start: 1.0,
            mach_stop: 2.0,
            mach_step: 0.05,
            gamma_values: vec![1.4, 1.67],
            output: PathBuf::from("shock.tex"),
        }],
    };

    let path = std::env::temp_dir().join("cf_project_roundtrip_custom.json");
    save_json(&path, &project).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn save_rejects_invalid_project() {
    let mut project = TableProject::default();
    project.tables[0].mach_step = 0.0;

    let path = std::env::temp_dir().join("cf_project_invalid.yaml");
    let result = save_yaml(&path, &project);
    assert!(matches!(result, Err(ProjectError::Validation(_))));
}

#[test]
fn load_rejects_unknown_regime() {
    let path = std::env::temp_dir().join("cf_project_unknown_regime.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: bad\ntables:\n  - regime: prandtl_meyer\n    mach_start: 1.0\n    mach_stop: 2.0\n    output: pm.tex\n",
    )
    .unwrap();
    assert!(matches!(load_yaml(&path), Err(ProjectError::Yaml(_))));
}

#[test]
fn shipped_config_matches_defaults() {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root");

    let loaded = load_yaml(&root.join("configs/compflow.yaml")).unwrap();
    assert_eq!(loaded, TableProject::default());
}
