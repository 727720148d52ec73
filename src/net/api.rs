//! REST API helpers for the course-data service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since the service is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{Course, CourseSummary};

/// Fetch all course summaries from `GET /api/courses`.
/// Returns an empty list on failure or on the server.
pub async fn fetch_courses() -> Vec<CourseSummary> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get("/api/courses").send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<Vec<CourseSummary>>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch one course from `GET /api/courses/{id}`.
/// Returns `None` if the course does not exist or on the server.
pub async fn fetch_course(id: &str) -> Option<Course> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/courses/{id}");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Course>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Create a course via `POST /api/courses`.
pub async fn create_course(title: &str) -> Option<CourseSummary> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "title": title });
        let resp = gloo_net::http::Request::post("/api/courses")
            .json(&body)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CourseSummary>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
        None
    }
}

/// Persist a full course via `PUT /api/courses/{id}`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the service
/// rejects the update.
pub async fn update_course(course: &Course) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/courses/{}", course.id);
        let resp = gloo_net::http::Request::put(&url)
            .json(course)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("course update failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course;
        Err("not available on server".to_owned())
    }
}
