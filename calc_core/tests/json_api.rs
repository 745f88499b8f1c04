use calc_core::calculations::mechanical_stress::MechanicalStressRequest;
use calc_core::spans::{span_length_between, LatLon};
use calc_core::{run, run_json, CalcError, CalculationOutput, CalculationRequest};
use serde_json::Value;

#[test]
fn voltage_drop_request_round_trips_through_json() {
    let json = r#"{
        "type": "VoltageDrop",
        "current": 100.0,
        "length": 500.0,
        "conductor_type": "ca",
        "cross_section": 50.0,
        "power_factor": 0.92,
        "phases": 3,
        "nominal_voltage": 220.0,
        "voltage_level": "BT"
    }"#;

    let out: Value = serde_json::from_str(&run_json(json).unwrap()).unwrap();
    assert_eq!(out["type"], "VoltageDrop");
    assert_eq!(out["voltage_drop_v"], 61.2536);
    assert_eq!(out["limit_pct"], 7.0);
    assert_eq!(out["compliant"], false);
    assert_eq!(out["resistance"], 0.641);
    assert_eq!(out["standard"], "ABNT NBR 5410");
}

#[test]
fn mechanical_stress_fields_match_service_layout() {
    let json = r#"{
        "type": "MechanicalStress",
        "wind_speed": 25.0,
        "conductor_diameter": 14.4,
        "span_length": 60.0,
        "conductor_weight": 407.0,
        "conductor_tension": 5000.0
    }"#;

    let out: Value = serde_json::from_str(&run_json(json).unwrap()).unwrap();
    for field in [
        "wind_load_per_conductor_n",
        "weight_load_per_conductor_n",
        "tension_load_n",
        "total_resultant_n",
        "moment_nm",
    ] {
        assert!(out[field].as_f64().unwrap() > 0.0, "{}", field);
    }
    assert_eq!(out["safety_factor_required"], 2.5);
    assert_eq!(out["standard"], "ABNT NBR 8458/8798");
}

#[test]
fn engine_errors_serialize_with_type_tag() {
    let err = run_json(
        r#"{ "type": "VoltageDrop", "current": 1.0, "length": 1.0, "cross_section": 1000.0 }"#,
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::CrossSectionOutOfRange { .. }));

    let json: Value = serde_json::to_value(&err).unwrap();
    assert_eq!(json["type"], "CrossSectionOutOfRange");
    assert_eq!(json["details"]["max_mm2"], 240.0);
}

#[test]
fn span_from_coordinates_feeds_mechanical_stress() {
    let a = LatLon::new(-22.15018, -42.92185);
    let b = LatLon::new(-22.15068, -42.92185);
    let span = span_length_between(a, b).unwrap();

    let request = CalculationRequest::MechanicalStress(MechanicalStressRequest::new(
        25.0, 14.4, span.0, 407.0, 5000.0,
    ));
    match run(&request).unwrap() {
        CalculationOutput::MechanicalStress(result) => {
            assert!(result.wind_load_per_conductor_n > 0.0);
        }
        other => panic!("unexpected output: {:?}", other),
    }
}

#[test]
fn calculators_are_safe_to_share_across_threads() {
    let request = CalculationRequest::MechanicalStress(MechanicalStressRequest::new(
        25.0, 14.4, 60.0, 407.0, 5000.0,
    ));
    let expected = serde_json::to_string(&run(&request).unwrap()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let request = request.clone();
            std::thread::spawn(move || serde_json::to_string(&run(&request).unwrap()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn material_list_answers_with_portuguese_keys() {
    let json = r#"{
        "type": "MaterialList",
        "projeto": "P",
        "items": [
            { "codigo": "A", "descricao": "Poste", "unidade": "un", "quantidade": 1 }
        ]
    }"#;

    let out: Value = serde_json::from_str(&run_json(json).unwrap()).unwrap();
    assert_eq!(out["type"], "MaterialList");
    assert_eq!(out["projeto"], "P");
    assert_eq!(out["items"][0]["codigo"], "A");
    assert_eq!(out["items"][0]["descricao"], "Poste");
    assert_eq!(out["items"][0]["unidade"], "un");
    assert_eq!(out["items"][0]["quantidade"], 1.0);
    assert!(out.get("project").is_none());
}

#[test]
fn padded_voltage_level_falls_back_to_seven_pct() {
    let json = r#"{
        "type": "VoltageDrop",
        "current": 10.0,
        "length": 100.0,
        "cross_section": 50.0,
        "voltage_level": " MT "
    }"#;

    let out: Value = serde_json::from_str(&run_json(json).unwrap()).unwrap();
    assert_eq!(out["limit_pct"], 7.0);
}

#[test]
fn padded_conductor_family_is_rejected() {
    let json = r#"{
        "type": "VoltageDrop",
        "current": 1.0,
        "length": 1.0,
        "conductor_type": " CA",
        "cross_section": 50.0
    }"#;

    let err = run_json(json).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_CONDUCTOR_FAMILY");
}
