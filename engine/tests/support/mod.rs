//! Shared fixtures for the engine integration tests.
#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use common::course_record::CourseRecord;
use engine::view::{CatalogView, ResultSummary};
use serde_json::json;

pub fn catalog_json() -> serde_json::Value {
    json!([
        {"code": "CS 101", "title": "Introduction to Programming", "department": "Computer Science", "level": "100", "credits": 4},
        {"code": "CS 310", "title": "Algorithms", "department": "Computer Science", "level": "300", "credits": "3", "description": "Covers introductory concepts."},
        {"code": "CS 510", "title": "Advanced Algorithms", "department": "Computer Science", "level": "Graduate", "credits": 3},
        {"code": "MATH 210", "title": "Linear Algebra", "department": "Mathematics", "level": 200, "credits": "bad"},
        {"title": "Independent Study", "department": "Physics"}
    ])
}

pub fn catalog() -> Vec<CourseRecord> {
    serde_json::from_value(catalog_json()).unwrap()
}

async fn courses_json(headers: HeaderMap) -> Response {
    let cache_control = headers.get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok());
    if cache_control != Some("no-cache") {
        return (StatusCode::BAD_REQUEST, "expected no-cache").into_response();
    }
    Json(catalog_json()).into_response()
}

pub fn catalog_router() -> Router {
    Router::new()
        .route("/data/courses.json", get(courses_json))
        .route("/missing/courses.json", get(|| async { (StatusCode::NOT_FOUND, "not here") }))
        .route("/object/courses.json", get(|| async { Json(json!({"courses": []})) }))
        .route("/empty/courses.json", get(|| async { Json(json!([])) }))
        .route("/garbled/courses.json", get(|| async { "[{\"code\": " }))
}

/// Serves the fixture router on a random local port and returns its base URL.
pub async fn serve() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, catalog_router()).await.unwrap();
    });
    format!("http://{addr}/")
}

/// Base URL of a port nothing listens on.
pub async fn closed_port() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

/// Busy and render calls in the order the view received them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCall {
    Busy(bool),
    Render,
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub calls: Vec<ViewCall>,
    pub busy: Vec<bool>,
    pub statuses: Vec<String>,
    pub loaded: usize,
    pub renders: Vec<(Vec<String>, ResultSummary)>,
    pub errors: Vec<String>,
}

/// View that records every update so tests can inspect them afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingView(pub Rc<RefCell<Recorded>>);

impl RecordingView {
    pub fn last_render(&self) -> Option<(Vec<String>, ResultSummary)> {
        self.0.borrow().renders.last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.0.borrow().renders.len()
    }
}

impl CatalogView for RecordingView {
    fn set_busy(&mut self, busy: bool) {
        let mut recorded = self.0.borrow_mut();
        recorded.busy.push(busy);
        recorded.calls.push(ViewCall::Busy(busy));
    }

    fn set_status(&mut self, status: &str) {
        self.0.borrow_mut().statuses.push(status.to_string());
    }

    fn loaded(&mut self, courses: &[CourseRecord]) {
        self.0.borrow_mut().loaded = courses.len();
    }

    fn render(&mut self, courses: &[&CourseRecord], summary: ResultSummary) {
        let titles = courses.iter().map(|c| c.title.clone().unwrap_or_default()).collect();
        let mut recorded = self.0.borrow_mut();
        recorded.renders.push((titles, summary));
        recorded.calls.push(ViewCall::Render);
    }

    fn show_error(&mut self, message: &str) {
        self.0.borrow_mut().errors.push(message.to_string());
    }
}
