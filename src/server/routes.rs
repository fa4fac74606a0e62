use crate::server::api;
use crate::server::api::ApiError;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => respond(api::health_payload()),

        ("GET", "/api/ships") => respond(api::ships_payload()),
        ("POST", "/api/ships") => respond(api::ship_add_payload(body)),

        ("POST", "/api/attack") => respond(api::attack_payload(body)),
        ("POST", "/api/damage") => respond(api::damage_payload(body)),
        ("POST", "/api/critical/roll") => respond(api::crit_roll_payload(body)),
        ("POST", "/api/check") => respond(api::check_payload(body)),

        ("GET", "/api/turn") => respond(api::turn_payload()),
        ("POST", "/api/turn/advance") => respond(api::turn_advance_payload()),
        ("POST", "/api/turn/new") => respond(api::turn_new_payload()),
        ("POST", "/api/turn/reset") => respond(api::turn_reset_payload()),
        ("POST", "/api/reset") => respond(api::reset_payload()),

        ("GET", "/api/rules/phases") => respond(api::rules_phases_payload()),
        ("GET", "/api/rules/critical") => respond(api::rules_critical_payload()),
        ("GET", "/api/rules/weapons") => respond(api::rules_weapons_payload()),
        ("GET", "/api/rules/defenses") => respond(api::rules_defenses_payload()),
        ("GET", "/api/rules/tables") => respond(api::rules_tables_payload()),
        (method, path) if method == "GET" && path.starts_with("/api/rules/gforce") => {
            respond(api::gforce_payload(path))
        }

        (method, path) if path.starts_with("/api/ships/") => route_ship(method, path, body),

        _ => error_response(404, "Not Found", "Route not found"),
    }
}

/// `/api/ships/{id}` and `/api/ships/{id}/{action...}`.
fn route_ship(method: &str, path: &str, body: &str) -> HttpResponse {
    let rest = path.trim_start_matches("/api/ships/");
    let (id, action) = match rest.split_once('/') {
        Some((id, action)) => (id, action),
        None => (rest, ""),
    };
    if id.is_empty() {
        return error_response(404, "Not Found", "Route not found");
    }
    match (method, action) {
        ("GET", "") => respond(api::ship_get_payload(id)),
        ("PUT", "") => respond(api::ship_update_payload(id, body)),
        ("DELETE", "") => respond(api::ship_remove_payload(id)),
        ("POST", "damage") => respond(api::ship_damage_payload(id, body)),
        ("POST", "heal") => respond(api::ship_heal_payload(id, body)),
        ("POST", "velocity") => respond(api::ship_velocity_payload(id, body)),
        ("POST", "power") => respond(api::ship_power_payload(id, body)),
        ("POST", "critical") => respond(api::ship_critical_payload(id, body)),
        ("POST", "critical/apply") => respond(api::ship_crit_apply_payload(id, body)),
        ("POST", "critical/adjust") => respond(api::ship_crit_adjust_payload(id, body)),
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn respond(result: Result<String, ApiError>) -> HttpResponse {
    match result {
        Ok(payload) => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "application/json",
            body: payload,
        },
        Err(err @ ApiError::Parse(_)) => error_response(400, "Bad Request", &err.to_string()),
        Err(err @ ApiError::BadRequest(_)) => error_response(400, "Bad Request", &err.to_string()),
        Err(err @ ApiError::NotFound(_)) => error_response(404, "Not Found", &err.to_string()),
        Err(err @ ApiError::Serialize(_)) => {
            error_response(500, "Internal Server Error", &err.to_string())
        }
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Broadsword API Console</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    label { display:block; margin: 8px 0 4px; font-weight: 600; }
    input { width: 100%; padding: 8px; box-sizing: border-box; }
    button { margin-top: 12px; padding: 8px 14px; }
    pre { background: #111; color: #aef2ae; padding: 12px; overflow: auto; border-radius: 6px; min-height: 180px; }
  </style>
</head>
<body>
  <h1>Broadsword Local API</h1>
  <p>Browser console for the combat resolution endpoints.</p>

  <div class="card">
    <strong>Health</strong>
    <div><button id="health-btn">GET /api/health</button></div>
  </div>

  <div class="card">
    <strong>Attack roll</strong>
    <label for="gunner">Gunner skill</label>
    <input id="gunner" type="number" value="2" />
    <label for="range">Range DM</label>
    <input id="range" type="number" value="0" />
    <div><button id="attack-btn">POST /api/attack</button></div>
  </div>

  <div class="card">
    <strong>Turn</strong>
    <div>
      <button id="turn-btn">GET /api/turn</button>
      <button id="advance-btn">POST /api/turn/advance</button>
    </div>
  </div>

  <pre id="output">Ready.</pre>

  <script>
    const output = document.getElementById('output');

    async function request(path, options) {
      output.textContent = 'Loading…';
      const response = await fetch(path, options);
      const text = await response.text();
      output.textContent = 'HTTP ' + response.status + '\n' + text;
    }

    document.getElementById('health-btn').addEventListener('click', () => {
      request('/api/health', { method: 'GET' });
    });

    document.getElementById('attack-btn').addEventListener('click', () => {
      const payload = {
        gunner_skill: Number(document.getElementById('gunner').value) || 0,
        range: Number(document.getElementById('range').value) || 0,
      };
      request('/api/attack', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload),
      });
    });

    document.getElementById('turn-btn').addEventListener('click', () => {
      request('/api/turn', { method: 'GET' });
    });
    document.getElementById('advance-btn').addEventListener('click', () => {
      request('/api/turn/advance', { method: 'POST' });
    });
  </script>
</body>
</html>
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_route_is_404_json() {
        let response = route_request("GET", "/api/nope", "");
        assert_eq!(response.status_code, 404);
        assert_eq!(response.content_type, "application/json");
        assert!(response.body.contains("Route not found"));
    }

    #[test]
    fn http_string_carries_content_length() {
        let response = error_response(400, "Bad Request", "nope");
        let raw = response.to_http_string();
        assert!(raw.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(raw.contains(&format!("Content-Length: {}", response.body.len())));
    }

    #[test]
    fn bad_attack_body_is_400() {
        let response = route_request("POST", "/api/attack", "{not json");
        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn index_page_is_html() {
        let response = route_request("GET", "/", "");
        assert_eq!(response.status_code, 200);
        assert!(response.content_type.starts_with("text/html"));
    }
}
