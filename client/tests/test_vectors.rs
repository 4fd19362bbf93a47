//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request, a simulated
//! response and either the expected parse result or the expected error.
//! Request bodies are compared as parsed JSON, not raw strings.

use serde_json::Value;
use todo_client::{ClientError, HttpMethod, HttpRequest, HttpResponse, TodoClient};
use todo_core::{CreateTodoItemDto, TodoId, TodoItemDto, UpdateTodoItemDto};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn input_id(case: &Value) -> TodoId {
    case["input_id"].as_i64().unwrap()
}

fn assert_request(name: &str, req: &HttpRequest, case: &Value) {
    let expected = &case["expected_request"];
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    match expected.get("body") {
        Some(body) => {
            let actual: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&actual, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    let headers = sim
        .get("headers")
        .and_then(Value::as_array)
        .map(|headers| {
            headers
                .iter()
                .map(|h| {
                    let pair = h.as_array().unwrap();
                    (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
                })
                .collect()
        })
        .unwrap_or_default();

    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn assert_error(name: &str, err: ClientError, expected: &Value) {
    let message = expected["message"].as_str().unwrap_or_default();
    match expected["kind"].as_str().unwrap() {
        "NotFound" => {
            assert!(matches!(err, ClientError::NotFound(ref m) if m == message), "{name}: {err:?}")
        }
        "BadRequest" => {
            assert!(matches!(err, ClientError::BadRequest(ref m) if m == message), "{name}: {err:?}")
        }
        "HttpError" => assert!(matches!(err, ClientError::HttpError { .. }), "{name}: {err:?}"),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

fn expected_item(case: &Value) -> TodoItemDto {
    serde_json::from_value(case["expected_result"].clone()).unwrap()
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodoItemDto = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_todo(&input).unwrap();
        assert_request(name, &req, &case);
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())],
            "{name}: headers"
        );

        let result = c.parse_create_todo(simulated_response(&case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected),
            None => {
                let created = result.unwrap();
                assert_eq!(created.item, expected_item(&case), "{name}: parsed result");
                assert_eq!(
                    created.location.as_deref(),
                    case["expected_location"].as_str(),
                    "{name}: location"
                );
            }
        }
    }
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_todos();
        assert_request(name, &req, &case);

        let todos = c.parse_list_todos(simulated_response(&case)).unwrap();
        let expected: Vec<TodoItemDto> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(todos, expected, "{name}: parsed result");
    }
}

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_get_todo(input_id(&case));
        assert_request(name, &req, &case);

        let result = c.parse_get_todo(simulated_response(&case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected),
            None => assert_eq!(result.unwrap(), expected_item(&case), "{name}: parsed result"),
        }
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: UpdateTodoItemDto = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_todo(input_id(&case), &input).unwrap();
        assert_request(name, &req, &case);

        let result = c.parse_update_todo(simulated_response(&case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected),
            None => assert_eq!(result.unwrap(), expected_item(&case), "{name}: parsed result"),
        }
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_delete_todo(input_id(&case));
        assert_request(name, &req, &case);

        let result = c.parse_delete_todo(simulated_response(&case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}
