//! Verify build/parse/map behavior against JSON vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected mapped results. Comparing parsed JSON (not raw strings)
//! avoids false negatives from field-ordering differences.

use houzat_core::{
    Designer, DesignerPage, DesignerQuery, HouzatClient, HttpMethod, HttpResponse, Project,
};

const BASE_URL: &str = "http://localhost:8000/api";

fn client() -> HouzatClient {
    HouzatClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

/// Build an `HttpResponse` from a vector's `simulated_response` object.
/// The body is stored as JSON (`body`) or as a raw string (`raw_body`) for
/// the not-actually-JSON error cases.
fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    let body = match sim.get("body") {
        Some(json) => serde_json::to_string(json).unwrap(),
        None => sim["raw_body"].as_str().unwrap().to_string(),
    };
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        status_text: sim["status_text"].as_str().unwrap().to_string(),
        headers: Vec::new(),
        body,
    }
}

fn assert_request(case: &serde_json::Value, req: &houzat_core::HttpRequest, name: &str) {
    let expected = &case["expected_request"];
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );
}

#[test]
fn designers_list_vectors() {
    let raw = include_str!("../../test-vectors/designers_list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query = DesignerQuery {
            category: case["query"]["category"].as_str().map(String::from),
            search: case["query"]["search"].as_str().map(String::from),
            ordering: case["query"]["ordering"].as_str().map(String::from),
            page: case["query"]["page"].as_u64().map(|p| p as u32),
            page_size: case["query"]["page_size"].as_u64().map(|p| p as u32),
        };

        let req = c.build_designers(&query);
        assert_request(case, &req, name);

        let parsed = c.parse_designers(simulated(case)).unwrap();
        let page = DesignerPage::from(&parsed);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            case["expected_page"],
            "{name}: mapped page"
        );
    }
}

#[test]
fn designer_detail_vectors() {
    let raw = include_str!("../../test-vectors/designer_detail.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["id"].as_str().unwrap();

        let req = c.build_designer_detail(id);
        assert_request(case, &req, name);

        let parsed = c.parse_designer_detail(simulated(case)).unwrap();
        let designer = Designer::from(&parsed.data);
        assert_eq!(
            serde_json::to_value(&designer).unwrap(),
            case["expected_designer"],
            "{name}: mapped designer"
        );
    }
}

#[test]
fn project_detail_vectors() {
    let raw = include_str!("../../test-vectors/project_detail.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["id"].as_str().unwrap();

        let req = c.build_project_detail(id);
        assert_request(case, &req, name);

        let parsed = c.parse_project_detail(simulated(case)).unwrap();
        let project = Project::from(&parsed.data);
        assert_eq!(
            serde_json::to_value(&project).unwrap(),
            case["expected_project"],
            "{name}: mapped project"
        );
    }
}

#[test]
fn error_vectors() {
    let raw = include_str!("../../test-vectors/errors.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_error"];

        // Error classification is shared by every parse method; exercising
        // one of them covers the contract.
        let err = c.parse_designers(simulated(case)).unwrap_err();
        assert_eq!(
            err.to_string(),
            expected["message"].as_str().unwrap(),
            "{name}: message"
        );
        assert_eq!(
            u64::from(err.status()),
            expected["status"].as_u64().unwrap(),
            "{name}: status"
        );
    }
}
