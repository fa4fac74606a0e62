use broadsword::server::routes::route_request;

fn json_body(method: &str, path: &str, body: &str) -> serde_json::Value {
    let response = route_request(method, path, body);
    assert_eq!(
        response.status_code, 200,
        "{method} {path} failed: {}",
        response.body
    );
    serde_json::from_str(&response.body).expect("response should be valid json")
}

#[test]
fn health_endpoint_returns_ok_json() {
    let response = route_request("GET", "/api/health", "");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert!(response.body.contains("\"status\": \"ok\""));
}

#[test]
fn unknown_route_is_404() {
    let response = route_request("GET", "/api/nope", "");
    assert_eq!(response.status_code, 404);
    assert!(response.body.contains("Route not found"));
}

#[test]
fn attack_endpoint_resolves_with_consistent_arithmetic() {
    let body = r#"{"gunner_skill":2,"range":-2,"evasive":1,"seed":42}"#;
    let payload = json_body("POST", "/api/attack", body);

    assert_eq!(payload["dm"], -1);
    let outcome = &payload["outcome"];
    let natural = outcome["natural"].as_i64().expect("natural");
    assert!((2..=12).contains(&natural));
    assert_eq!(outcome["total"], natural - 1);
    assert_eq!(outcome["target"], 8);
    assert_eq!(
        outcome["effect"].as_i64().expect("effect"),
        outcome["total"].as_i64().expect("total") - 8
    );
}

#[test]
fn seeded_requests_are_reproducible() {
    let body = r#"{"dice":4,"multiplier":3,"armor":4,"ap":1,"seed":9}"#;
    let first = route_request("POST", "/api/damage", body);
    let second = route_request("POST", "/api/damage", body);
    assert_eq!(first.body, second.body);
}

#[test]
fn damage_endpoint_reports_armor_flow() {
    let payload = json_body(
        "POST",
        "/api/damage",
        r#"{"dice":2,"multiplier":1,"armor":4,"ap":1,"hull_start":80,"seed":5}"#,
    );
    assert_eq!(payload["effective_armor"], 3);
    let raw = payload["raw_damage"].as_i64().expect("raw");
    let final_damage = payload["final_damage"].as_i64().expect("final");
    assert_eq!(final_damage, (raw - 3).max(0));
}

#[test]
fn malformed_body_is_a_400() {
    let response = route_request("POST", "/api/attack", "{not json");
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("invalid request body"));
}

#[test]
fn crit_roll_endpoint_returns_a_table_location() {
    let payload = json_body("POST", "/api/critical/roll", r#"{"effect":8,"seed":3}"#);
    let total = payload["total"].as_u64().expect("total");
    assert!((2..=12).contains(&total));
    assert_eq!(payload["severity"], 3);
    assert!(payload["effect_text"].as_str().is_some());
}

#[test]
fn check_endpoint_defaults_to_average_difficulty() {
    let payload = json_body("POST", "/api/check", r#"{"seed":6}"#);
    assert_eq!(payload["target"], 8);
    assert_eq!(payload["dm"], 0);
}

#[test]
fn rules_endpoints_serve_reference_tables() {
    let phases = json_body("GET", "/api/rules/phases", "");
    assert_eq!(phases.as_array().map(Vec::len), Some(4));

    let critical = json_body("GET", "/api/rules/critical", "");
    assert_eq!(critical["locations"].as_array().map(Vec::len), Some(11));
    assert_eq!(critical["locations"][5]["roll"], 7);
    assert_eq!(critical["locations"][5]["location"], "Hull");

    let weapons = json_body("GET", "/api/rules/weapons", "");
    assert_eq!(weapons["turret"]["damage_multiplier"], 1);
    assert_eq!(weapons["barbette"]["damage_multiplier"], 3);
    assert_eq!(weapons["small_bay"]["damage_multiplier"], 10);

    let defenses = json_body("GET", "/api/rules/defenses", "");
    assert!(defenses["screens"].as_array().is_some());

    let tables = json_body("GET", "/api/rules/tables", "");
    assert_eq!(tables["difficulties"].as_array().map(Vec::len), Some(8));
    assert_eq!(tables["crew_action_limit"], 6);
}

#[test]
fn gforce_lookup_rates_total_hexes_moved() {
    let table = json_body("GET", "/api/rules/gforce", "");
    assert!(table.as_array().is_some());

    let rated = json_body("GET", "/api/rules/gforce?hexes=7", "");
    assert_eq!(rated["hexes"], 7);
    assert!(rated["row"].is_object());

    let idle = json_body("GET", "/api/rules/gforce?hexes=0", "");
    assert!(idle["row"].is_null());
}

#[test]
fn unknown_power_system_is_a_400() {
    // Route resolves the system name before looking up the ship.
    let response = route_request("POST", "/api/ships/any/power", r#"{"system":"warp"}"#);
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("unknown power system"));
}

/// Whole ship lifecycle against a scratch data dir. Single test because the
/// data-dir env var is process-wide.
#[test]
fn ship_crud_and_turn_flow_persists() {
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("broadsword-api-{stamp}"));
    std::env::set_var("BROADSWORD_DATA_DIR", &dir);

    let ship = json_body("POST", "/api/ships", r#"{"name":"Corsair","hull":100,"armor":4}"#);
    let id = ship["id"].as_str().expect("id").to_string();

    let listed = json_body("GET", "/api/ships", "");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let detail = json_body("GET", &format!("/api/ships/{id}"), "");
    assert_eq!(detail["ship"]["name"], "Corsair");
    assert_eq!(detail["hull_percent"], 100.0);
    assert_eq!(detail["health"], "healthy");
    assert_eq!(detail["power_panel"].as_array().map(Vec::len), Some(7));
    assert_eq!(detail["power"]["budget"], 60);

    let updated = json_body("PUT", &format!("/api/ships/{id}"), r#"{"armor":"6"}"#);
    assert_eq!(updated["armor"], 6);

    let report = json_body(
        "POST",
        &format!("/api/ships/{id}/damage"),
        r#"{"raw":20,"ap":2}"#,
    );
    assert_eq!(report["effective_armor"], 4);
    assert_eq!(report["final_damage"], 16);
    assert_eq!(report["remaining_hull"], 84);

    let crit = json_body(
        "POST",
        &format!("/api/ships/{id}/critical/apply"),
        r#"{"location":"Sensors","effect":8,"seed":1}"#,
    );
    assert_eq!(crit["severity"], 3);

    let turn = json_body("GET", "/api/turn", "");
    assert_eq!(turn["turn"], 1);
    let advanced = json_body("POST", "/api/turn/advance", "");
    assert_eq!(advanced["advanced"], "step");
    assert_eq!(advanced["step_index"], 1);

    let turn_reset = json_body("POST", "/api/turn/reset", "");
    assert_eq!(turn_reset["turn"], 1);
    assert_eq!(turn_reset["phase_index"], 0);
    assert_eq!(turn_reset["step_index"], 0);

    let missing = route_request("GET", "/api/ships/not-a-real-id", "");
    assert_eq!(missing.status_code, 404);

    json_body("POST", "/api/reset", "");
    let cleared = json_body("GET", "/api/ships", "");
    assert_eq!(cleared.as_array().map(Vec::len), Some(0));
    let reset_turn = json_body("GET", "/api/turn", "");
    assert_eq!(reset_turn["turn"], 1);
    assert_eq!(reset_turn["step_index"], 0);

    std::fs::remove_dir_all(&dir).ok();
}
