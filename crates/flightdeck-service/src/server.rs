use std::io::{self, BufRead, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};

use serde::Deserialize;
use serde_json::{json, Value};

use flightdeck_catalog::{tech_score, ASSESSMENT_QUESTIONS, DIMENSION_MAPPING, TECH_CATEGORIES};
use flightdeck_core::{
    average_score, combined_score, generate_insights, score_responses, to_flight_miles,
    LiveStatusBoard, LiveUpdate, PlaneLevel, Responses,
};
use flightdeck_recommend::{live_suggestions, recommend, tech_gap, RecommendInput};
use flightdeck_scenario::{
    build_estimator, EstimatorConfig, RemoteEstimatorConfig, ScenarioDelta, ScenarioEstimator,
    ScenarioRequest, ScenarioSession,
};
use flightdeck_storage::{AssessmentRecord, AssessmentStore, NewAssessment, StorageError};

use crate::protocol::{
    JsonRpcRequest, JsonRpcResponse, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND,
    PARSE_ERROR, SERVER_ERROR,
};

const DEFAULT_SUGGESTION_COUNT: usize = 3;

pub struct FlightDeckServer {
    store: Mutex<AssessmentStore>,
    live: Mutex<LiveStatusBoard>,
    scenario_session: Mutex<ScenarioSession>,
    estimator: Arc<dyn ScenarioEstimator>,
}

impl FlightDeckServer {
    pub fn new() -> Self {
        let db_path = std::env::var("FLIGHTDECK_DB")
            .unwrap_or_else(|_| "./data/flightdeck-db.json".to_string());
        Self::with_db_path(db_path).expect("initialize storage for flightdeck server")
    }

    pub fn with_db_path(db_path: impl Into<String>) -> Result<Self, String> {
        let db_path = db_path.into();
        let store = AssessmentStore::open(db_path).map_err(|e| e.to_string())?;
        let estimator = build_estimator(estimator_config_from_env()).map_err(|e| e.to_string())?;
        Ok(Self {
            store: Mutex::new(store),
            live: Mutex::new(LiveStatusBoard::new()),
            scenario_session: Mutex::new(ScenarioSession::new()),
            estimator,
        })
    }

    pub fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        if request.jsonrpc != "2.0" {
            return JsonRpcResponse::error(
                request.id.unwrap_or(Value::Null),
                INVALID_REQUEST,
                "invalid jsonrpc version",
            );
        }

        let id = request.id.unwrap_or(Value::Null);
        match request.method.as_str() {
            "ping" => JsonRpcResponse::success(id, json!({})),
            "assessment/questions" => {
                JsonRpcResponse::success(id, json!({ "questions": ASSESSMENT_QUESTIONS }))
            }
            "tech/catalog" => {
                JsonRpcResponse::success(id, json!({ "categories": TECH_CATEGORIES }))
            }
            "assessment/submit" => self.exec_submit(id, request.params),
            "assessment/result" => self.exec_result(id, request.params),
            "assessment/history" => self.exec_history(id, request.params),
            "assessment/delete" => self.exec_delete(id, request.params),
            "live/update" => self.exec_live_update(id, request.params),
            "live/status" => self.exec_live_status(id),
            "live/clear" => self.exec_live_clear(id),
            "journeys/suggest" => self.exec_journeys_suggest(id, request.params),
            "scenarios/estimate" => self.exec_scenario_estimate(id, request.params),
            _ => JsonRpcResponse::error(id, METHOD_NOT_FOUND, "method not found"),
        }
    }

    fn exec_submit(&self, id: Value, params: Value) -> JsonRpcResponse {
        let args: SubmitParams = match parse_args(params) {
            Ok(v) => v,
            Err(resp) => return with_id(resp, id),
        };

        let new = score_submission(args.responses, args.tech_tools);
        let mut store = match self.store.lock() {
            Ok(v) => v,
            Err(_) => return JsonRpcResponse::error(id, SERVER_ERROR, "storage lock poisoned"),
        };
        let record = match store.insert(new) {
            Ok(v) => v,
            Err(StorageError::InvalidInput(msg)) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, msg)
            }
            Err(err) => return JsonRpcResponse::error(id, SERVER_ERROR, err.to_string()),
        };

        drop(store);

        // A completed submission ends the in-progress session.
        if let Ok(mut live) = self.live.lock() {
            live.clear();
        }

        tracing::info!(
            assessment_id = %record.id,
            combined_score = record.combined_score,
            plane_level = record.plane_level.name,
            "assessment scored"
        );

        let recommendations = recommendations_for(&record);
        JsonRpcResponse::success(
            id,
            json!({
                "assessment": record,
                "recommendations": recommendations,
            }),
        )
    }

    fn exec_result(&self, id: Value, params: Value) -> JsonRpcResponse {
        let args: IdParams = match parse_args(params) {
            Ok(v) => v,
            Err(resp) => return with_id(resp, id),
        };

        let store = match self.store.lock() {
            Ok(v) => v,
            Err(_) => return JsonRpcResponse::error(id, SERVER_ERROR, "storage lock poisoned"),
        };
        match store.get(&args.id) {
            Some(record) => {
                let recommendations = recommendations_for(record);
                JsonRpcResponse::success(
                    id,
                    json!({
                        "assessment": record,
                        "recommendations": recommendations,
                    }),
                )
            }
            None => JsonRpcResponse::error(
                id,
                SERVER_ERROR,
                format!("assessment not found: {}", args.id),
            ),
        }
    }

    fn exec_history(&self, id: Value, params: Value) -> JsonRpcResponse {
        let args: HistoryParams = match parse_args_optional(params) {
            Ok(v) => v,
            Err(resp) => return with_id(resp, id),
        };
        let limit = args.limit.unwrap_or(10).clamp(1, 50);

        let store = match self.store.lock() {
            Ok(v) => v,
            Err(_) => return JsonRpcResponse::error(id, SERVER_ERROR, "storage lock poisoned"),
        };
        let history = store.history(limit);
        let summaries: Vec<Value> = history
            .iter()
            .map(|r| {
                json!({
                    "id": r.id,
                    "combined_score": r.combined_score,
                    "flight_miles": r.flight_miles,
                    "plane_level": r.plane_level,
                    "timestamp_ms": r.timestamp_ms,
                })
            })
            .collect();
        JsonRpcResponse::success(
            id,
            json!({ "count": summaries.len(), "assessments": summaries }),
        )
    }

    fn exec_delete(&self, id: Value, params: Value) -> JsonRpcResponse {
        let args: IdParams = match parse_args(params) {
            Ok(v) => v,
            Err(resp) => return with_id(resp, id),
        };

        let mut store = match self.store.lock() {
            Ok(v) => v,
            Err(_) => return JsonRpcResponse::error(id, SERVER_ERROR, "storage lock poisoned"),
        };
        match store.delete(&args.id) {
            Ok(deleted) => {
                if deleted {
                    tracing::info!(assessment_id = %args.id, "assessment deleted");
                }
                JsonRpcResponse::success(id, json!({ "deleted": deleted }))
            }
            Err(err) => JsonRpcResponse::error(id, SERVER_ERROR, err.to_string()),
        }
    }

    fn exec_live_update(&self, id: Value, params: Value) -> JsonRpcResponse {
        let update: LiveUpdate = match parse_args_optional(params) {
            Ok(v) => v,
            Err(resp) => return with_id(resp, id),
        };

        let mut live = match self.live.lock() {
            Ok(v) => v,
            Err(_) => return JsonRpcResponse::error(id, SERVER_ERROR, "live status lock poisoned"),
        };
        let status = live.update(update).clone();
        drop(live);

        let miles = to_flight_miles(status.combined_score);
        let plane_level = PlaneLevel::classify(status.combined_score);
        let suggestions = live_suggestions(miles, DEFAULT_SUGGESTION_COUNT);
        JsonRpcResponse::success(
            id,
            json!({
                "status": status,
                "flight_miles": miles,
                "plane_level": plane_level,
                "suggestions": suggestions,
            }),
        )
    }

    fn exec_live_status(&self, id: Value) -> JsonRpcResponse {
        let live = match self.live.lock() {
            Ok(v) => v,
            Err(_) => return JsonRpcResponse::error(id, SERVER_ERROR, "live status lock poisoned"),
        };
        JsonRpcResponse::success(id, json!({ "status": live.status() }))
    }

    fn exec_live_clear(&self, id: Value) -> JsonRpcResponse {
        let mut live = match self.live.lock() {
            Ok(v) => v,
            Err(_) => return JsonRpcResponse::error(id, SERVER_ERROR, "live status lock poisoned"),
        };
        let status = live.clear().clone();
        JsonRpcResponse::success(id, json!({ "status": status }))
    }

    fn exec_journeys_suggest(&self, id: Value, params: Value) -> JsonRpcResponse {
        let args: SuggestParams = match parse_args(params) {
            Ok(v) => v,
            Err(resp) => return with_id(resp, id),
        };
        let max_count = args.max_count.unwrap_or(DEFAULT_SUGGESTION_COUNT).clamp(1, 8);
        let suggestions = live_suggestions(args.points, max_count);
        JsonRpcResponse::success(
            id,
            json!({ "points": args.points, "suggestions": suggestions }),
        )
    }

    fn exec_scenario_estimate(&self, id: Value, params: Value) -> JsonRpcResponse {
        let args: ScenarioParams = match parse_args(params) {
            Ok(v) => v,
            Err(resp) => return with_id(resp, id),
        };

        let request = {
            let store = match self.store.lock() {
                Ok(v) => v,
                Err(_) => return JsonRpcResponse::error(id, SERVER_ERROR, "storage lock poisoned"),
            };
            let Some(record) = store.get(&args.assessment_id) else {
                return JsonRpcResponse::error(
                    id,
                    SERVER_ERROR,
                    format!("assessment not found: {}", args.assessment_id),
                );
            };
            ScenarioRequest {
                assessment_id: record.id.clone(),
                base: record.reao_scores,
                tech_score: record.tech_score,
                delta: args.scenario,
            }
        };

        let ticket = {
            let mut session = match self.scenario_session.lock() {
                Ok(v) => v,
                Err(_) => {
                    return JsonRpcResponse::error(id, SERVER_ERROR, "scenario lock poisoned")
                }
            };
            session.begin()
        };

        let estimator = Arc::clone(&self.estimator);
        let rt = match tokio::runtime::Runtime::new() {
            Ok(v) => v,
            Err(err) => {
                return JsonRpcResponse::error(
                    id,
                    SERVER_ERROR,
                    format!("estimator runtime initialization failed: {err}"),
                )
            }
        };
        let projection = match rt.block_on(async { estimator.estimate(request).await }) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(estimator = estimator.name(), error = %err, "scenario estimate failed");
                return JsonRpcResponse::error(id, SERVER_ERROR, err.to_string());
            }
        };

        let applied = {
            let mut session = match self.scenario_session.lock() {
                Ok(v) => v,
                Err(_) => {
                    return JsonRpcResponse::error(id, SERVER_ERROR, "scenario lock poisoned")
                }
            };
            session.complete(ticket, projection.clone())
        };

        let projected_miles = to_flight_miles(projection.new_combined_score);
        JsonRpcResponse::success(
            id,
            json!({
                "applied": applied,
                "projection": projection,
                "projected_flight_miles": projected_miles,
            }),
        )
    }

    pub fn serve_stdio(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut reader = io::BufReader::new(stdin.lock());
        let mut stdout = io::stdout();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(trimmed) {
                Ok(request) => self.handle_request(request),
                Err(err) => JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("parse error: {err}"),
                ),
            };

            let serialized = serde_json::to_string(&response)?;
            writeln!(stdout, "{serialized}")?;
            stdout.flush()?;
        }

        Ok(())
    }

    pub fn serve_http(&self, addr: &str) -> io::Result<()> {
        let listener = TcpListener::bind(addr)?;
        tracing::info!(addr = %listener.local_addr()?, "flightdeck http listening");
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(err) = self.handle_http_connection(stream) {
                        tracing::warn!(error = %err, "http request error");
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "http accept error");
                }
            }
        }
        Ok(())
    }

    fn handle_http_connection(&self, mut stream: TcpStream) -> io::Result<()> {
        let Some(req) = read_http_request(&stream)? else {
            return Ok(());
        };
        let response = self.dispatch_http_request(&req);
        write_http_response(&mut stream, &response)
    }

    fn dispatch_http_request(&self, req: &HttpRequest) -> HttpResponse {
        if req.method == "GET" && req.path == "/health" {
            return HttpResponse::json(200, &json!({"status":"ok"}));
        }

        if req.method != "POST" {
            return HttpResponse::json(
                405,
                &json!({"error":"method_not_allowed","message":"supported endpoints: GET /health, POST /rpc"}),
            );
        }

        if req.path != "/rpc" && req.path != "/" {
            return HttpResponse::json(
                404,
                &json!({"error":"not_found","message":"use POST /rpc"}),
            );
        }

        let rpc: JsonRpcRequest = match serde_json::from_slice(&req.body) {
            Ok(v) => v,
            Err(err) => {
                return HttpResponse::json(
                    400,
                    &json!({"jsonrpc":"2.0","id": Value::Null, "error":{"code": PARSE_ERROR, "message": format!("parse error: {err}")}}),
                )
            }
        };
        match serde_json::to_value(self.handle_request(rpc)) {
            Ok(payload) => HttpResponse::json(200, &payload),
            Err(_) => HttpResponse::json(
                500,
                &json!({"error":"internal_error","message":"failed to serialize rpc response"}),
            ),
        }
    }
}

impl Default for FlightDeckServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the full scoring pipeline over one submission.
fn score_submission(responses: Responses, tech_tools: Vec<String>) -> NewAssessment {
    let assessment_score = average_score(&responses);
    let tech = tech_score(&tech_tools);
    let combined = combined_score(&responses, tech);
    let reao = score_responses(&responses, &DIMENSION_MAPPING, tech_tools.len());
    let plane_level = PlaneLevel::classify(combined);
    let flight_miles = to_flight_miles(combined);
    let insights = generate_insights(&reao);

    NewAssessment {
        responses,
        tech_tools,
        assessment_score,
        tech_score: tech,
        combined_score: combined,
        reao_scores: reao,
        plane_level,
        flight_miles,
        insights,
    }
}

fn recommendations_for(record: &AssessmentRecord) -> Vec<Value> {
    let input = RecommendInput {
        assessment_score: record.assessment_score,
        tech_score: record.tech_score,
        tech_tools: record.tech_tools.clone(),
        reao: record.reao_scores,
    };
    recommend(&input)
        .into_iter()
        .map(|journey| {
            let gap = tech_gap(journey, &record.tech_tools);
            json!({ "journey": journey, "tech_gap": gap })
        })
        .collect()
}

fn estimator_config_from_env() -> EstimatorConfig {
    let provider = std::env::var("FLIGHTDECK_SCENARIO_PROVIDER")
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_else(|_| "local".to_string());
    if provider == "remote" {
        if let Ok(url) = std::env::var("FLIGHTDECK_SCENARIO_URL") {
            if !url.trim().is_empty() {
                return EstimatorConfig::Remote(RemoteEstimatorConfig::new(url.trim()));
            }
        }
        tracing::warn!("FLIGHTDECK_SCENARIO_URL missing, falling back to local estimator");
    }
    EstimatorConfig::Local
}

fn with_id(mut response: JsonRpcResponse, id: Value) -> JsonRpcResponse {
    response.id = id;
    response
}

fn parse_args<T: for<'de> Deserialize<'de>>(params: Value) -> Result<T, JsonRpcResponse> {
    if params.is_null() {
        return Err(JsonRpcResponse::error(
            Value::Null,
            INVALID_PARAMS,
            "missing params",
        ));
    }
    serde_json::from_value(params).map_err(|err| {
        JsonRpcResponse::error(Value::Null, INVALID_PARAMS, format!("invalid params: {err}"))
    })
}

fn parse_args_optional<T: for<'de> Deserialize<'de> + Default>(
    params: Value,
) -> Result<T, JsonRpcResponse> {
    if params.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(params).map_err(|err| {
        JsonRpcResponse::error(Value::Null, INVALID_PARAMS, format!("invalid params: {err}"))
    })
}

#[derive(Debug, Deserialize)]
struct SubmitParams {
    #[serde(default)]
    responses: Responses,
    #[serde(default)]
    tech_tools: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IdParams {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
struct HistoryParams {
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    points: i64,
    max_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ScenarioParams {
    assessment_id: String,
    #[serde(default)]
    scenario: ScenarioDelta,
}

#[derive(Debug)]
struct HttpRequest {
    method: String,
    path: String,
    body: Vec<u8>,
}

struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

impl HttpResponse {
    fn json(status: u16, value: &Value) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec());
        Self { status, body }
    }
}

fn read_http_request(stream: &TcpStream) -> io::Result<Option<HttpRequest>> {
    let mut reader = io::BufReader::new(stream.try_clone()?);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let first = line.trim_end_matches(['\r', '\n']);
    if first.is_empty() {
        return Ok(None);
    }

    let mut parts = first.split_whitespace();
    let Some(method) = parts.next() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "invalid http request line (missing method)",
        ));
    };
    let Some(path_with_query) = parts.next() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "invalid http request line (missing path)",
        ));
    };
    let path = path_with_query
        .split_once('?')
        .map_or(path_with_query, |(p, _)| p)
        .to_string();

    let mut content_length = 0_usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            break;
        }
        let header = header.trim_end_matches(['\r', '\n']);
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse::<usize>().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0_u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body)?;
    }
    Ok(Some(HttpRequest {
        method: method.to_string(),
        path,
        body,
    }))
}

fn write_http_response(stream: &mut TcpStream, response: &HttpResponse) -> io::Result<()> {
    let reason = http_reason_phrase(response.status);
    let headers = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason,
        response.body.len()
    );
    stream.write_all(headers.as_bytes())?;
    stream.write_all(&response.body)?;
    stream.flush()
}

fn http_reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "OK",
    }
}
