use approx::assert_relative_eq;
use portal_frame2d::frame::reference::{
    PERIOD_TOLERANCE, SAP2000_PERIODS, SAP2000_STATIC, STATIC_TOLERANCES,
};
use portal_frame2d::frame::{run_modal, run_static};
use portal_frame2d::prelude::*;

fn reference_frame() -> (FrameModel, FrameLayout, FrameConfig) {
    let config = FrameConfig::default();
    let (model, layout) = build_frame(&config).unwrap();
    (model, layout, config)
}

#[test]
fn reference_frame_periods_match_published_values() {
    let (mut model, _, config) = reference_frame();
    let periods = run_modal(&mut model, config.num_modes).unwrap();

    assert_eq!(periods.len(), 7);
    for (i, (computed, expected)) in periods.iter().zip(SAP2000_PERIODS).enumerate() {
        assert!(
            (computed - expected).abs() <= PERIOD_TOLERANCE,
            "mode {}: computed {computed}, expected {expected}",
            i + 1
        );
    }
    assert!(periods.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn reference_frame_static_response_matches_published_values() {
    let (mut model, layout, config) = reference_frame();
    let response = run_static(&mut model, &layout, &config).unwrap();

    for (i, value) in response.as_array().iter().enumerate() {
        assert!(
            (value - SAP2000_STATIC[i]).abs() <= STATIC_TOLERANCES[i],
            "quantity {i}: computed {value}, expected {}",
            SAP2000_STATIC[i]
        );
    }
    assert!(response.base_moment > 0.0);
}

#[test]
fn reference_verification_passes() {
    let report = run_verification(&FrameConfig::default()).unwrap();
    assert!(report.passed());

    let text = report.to_string();
    assert!(text.contains("Period Comparison:"));
    assert!(text.contains("Static Analysis Result Comparison:"));
    assert!(text.contains("PASSED Verification Test PortalFrame2d"));
    assert!(!text.contains("Failed->"));
}

#[test]
fn altered_frame_fails_verification() {
    let config = FrameConfig {
        e: 29000.0,
        ..FrameConfig::default()
    };
    let report = run_verification(&config).unwrap();

    assert!(!report.passed());
    assert!(!report.periods.passed());
    // Forces of a uniformly scaled modulus are unchanged, the drift is not
    assert_eq!(report.statics.failures(), vec![0]);

    let text = report.to_string();
    assert!(text.contains("FAILED Verification Test PortalFrame2d"));
    assert!(text.contains("Failed-> 0"));
}

#[test]
fn rigid_floor_ties_every_node_on_a_floor() {
    let (mut model, layout, config) = reference_frame();
    run_static(&mut model, &layout, &config).unwrap();

    for floor in 1..=config.num_floors {
        let reference = model.node_disp(layout.reference_node(floor), Dof::Ux).unwrap();
        for line in 0..layout.nodes_per_floor() {
            let ux = model.node_disp(layout.node_tag(floor, line), Dof::Ux).unwrap();
            assert_eq!(ux, reference, "floor {floor}, line {line}");
        }
    }

    // Vertical displacements are independent across the floor
    let left = model.node_disp(layout.top_node(0), Dof::Uy).unwrap();
    let right = model.node_disp(layout.top_node(2), Dof::Uy).unwrap();
    assert!(left > 0.0 && right < 0.0);
}

#[test]
fn base_reactions_balance_lateral_loads() {
    let (mut model, layout, config) = reference_frame();
    run_static(&mut model, &layout, &config).unwrap();

    let (mut fx, mut fy) = (0.0, 0.0);
    for line in 0..layout.nodes_per_floor() {
        let r = model.node_reaction(layout.node_tag(0, line)).unwrap();
        fx += r.fx;
        fy += r.fy;
    }
    assert_relative_eq!(fx, -72.5, max_relative = 1e-9);
    assert_relative_eq!(fy, 0.0, epsilon = 1e-8);

    // Base reaction of the left column is its element end force
    let rxn = model.node_reaction(1).unwrap();
    let force = model.element_force(1).unwrap();
    assert_relative_eq!(rxn.mz, force.mz_i, max_relative = 1e-12);
}

#[test]
fn profile_and_dense_systems_agree() {
    let (mut skyline, layout, config) = reference_frame();
    let a = run_static(&mut skyline, &layout, &config).unwrap();

    let dense_config = FrameConfig {
        system: SystemKind::FullGeneral,
        ..FrameConfig::default()
    };
    let (mut dense, layout) = build_frame(&dense_config).unwrap();
    let b = run_static(&mut dense, &layout, &dense_config).unwrap();

    assert_relative_eq!(a.top_displacement, b.top_displacement, max_relative = 1e-10);
    assert_relative_eq!(a.base_axial, b.base_axial, max_relative = 1e-10);
    assert_relative_eq!(a.base_moment, b.base_moment, max_relative = 1e-10);
}

#[test]
fn first_mode_is_mass_normalized() {
    let (mut model, layout, config) = reference_frame();
    model.eigen(config.num_modes).unwrap();

    let generalized_mass: f64 = (1..=config.num_floors)
        .map(|floor| {
            let phi = model.node_eigenvector(layout.reference_node(floor), 1, Dof::Ux).unwrap();
            config.floor_mass * phi * phi
        })
        .sum();
    assert_relative_eq!(generalized_mass, 1.0, max_relative = 1e-6);

    // First mode sways every floor the same way, growing with height
    let top = model.node_eigenvector(layout.top_node(0), 1, Dof::Ux).unwrap();
    let first = model.node_eigenvector(layout.node_tag(1, 0), 1, Dof::Ux).unwrap();
    assert!(top > first && first > 0.0);
}

#[test]
fn pdelta_increases_drift() {
    let linear = FrameConfig::default();
    let (mut model, layout) = build_frame(&linear).unwrap();
    let base = run_static(&mut model, &layout, &linear).unwrap();

    // Gravity on every node, then lateral loads in two steps
    let pdelta = FrameConfig {
        transf: CoordTransf::PDelta,
        ..FrameConfig::default()
    };
    let (mut model, layout) = build_frame(&pdelta).unwrap();
    model.add_time_series(2, TimeSeries::linear()).unwrap();
    let gravity = (1..=pdelta.num_floors)
        .flat_map(|floor| (0..layout.nodes_per_floor()).map(move |line| (floor, line)))
        .fold(LoadPattern::plain(2, 2), |pattern, (floor, line)| {
            pattern.with_load(layout.node_tag(floor, line), NodeLoad::fy(-100.0))
        });
    model.add_load_pattern(gravity).unwrap();
    portal_frame2d::frame::verify::apply_lateral_loads(&mut model, &layout, &pdelta).unwrap();
    model
        .analyze_static(&AnalysisOptions::load_control(0.5).with_steps(2))
        .unwrap();

    let drift = model.node_disp(layout.top_node(0), Dof::Ux).unwrap();
    assert!(drift > base.top_displacement, "{drift} <= {}", base.top_displacement);
}

#[test]
fn config_file_drives_the_run() {
    let path = std::env::temp_dir().join(format!("portal_frame_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "system": "FullGeneral", "transf": "Linear" }"#).unwrap();

    let config = FrameConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.num_modes, 7);
    assert_eq!(config.system, SystemKind::FullGeneral);

    let report = run_verification(&config).unwrap();
    assert_eq!(report.periods.rows().len(), 7);
    assert!(report.passed());

    assert!(matches!(
        FrameConfig::from_json_file(std::env::temp_dir().join("does_not_exist_portal.json")),
        Err(FEAError::IoError(_))
    ));
}

#[test]
fn too_few_modes_fail_verification() {
    let config = FrameConfig::from_json_str(r#"{ "num_modes": 1 }"#).unwrap();
    let report = run_verification(&config).unwrap();

    // The single compared period matches, the six missing ones do not pass
    assert_eq!(report.periods.rows().len(), 1);
    assert!(report.periods.failures().is_empty());
    assert_eq!(report.periods.missing_rows(), 6);
    assert!(!report.periods.passed());
    assert!(report.statics.passed());
    assert!(!report.passed());

    let text = report.to_string();
    assert!(text.contains("Failed-> compared 1 of 7 periods"));
    assert!(text.contains("FAILED Verification Test PortalFrame2d"));
}
