//! Rendered page handlers
//!
//! The dashboard and roster pages are embedded HTML templates with
//! `{{placeholder}}` substitution. The markup is a view concern; handlers
//! only supply the data.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::error::HandlerError;
use crate::http::html_response;
use crate::models::{sample_patients, DashboardSummary};

/// `GET /`: dashboard page with the summary counters.
pub fn dashboard(_state: &AppState) -> Result<Response<Full<Bytes>>, HandlerError> {
    let summary = DashboardSummary::current();
    let html = include_str!("dashboard.html")
        .replace("{{total_patients}}", &summary.total_patients.to_string())
        .replace(
            "{{appointments_today}}",
            &summary.appointments_today.to_string(),
        )
        .replace("{{critical_alerts}}", &summary.critical_alerts.to_string())
        .replace("{{recent_uploads}}", &summary.recent_uploads.to_string())
        .replace("{{system_status}}", summary.system_status);
    Ok(html_response(html))
}

/// `GET /patients`: roster page listing the five fixed records.
pub fn patients(_state: &AppState) -> Result<Response<Full<Bytes>>, HandlerError> {
    let mut rows = String::new();
    for patient in sample_patients() {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{age}</td><td>{condition}</td>\
             <td>{last_visit}</td><td class=\"status-{status_class}\">{status}</td></tr>\n",
            id = patient.id,
            name = patient.name,
            age = patient.age,
            condition = patient.condition,
            last_visit = patient.last_visit,
            status_class = patient.status.as_str().to_lowercase(),
            status = patient.status.as_str(),
        ));
    }

    let html = include_str!("patients.html").replace("{{rows}}", &rows);
    Ok(html_response(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_renders_counters() {
        let state = AppState::for_tests();
        let resp = dashboard(&state).unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_patients_page_renders_all_records() {
        let state = AppState::for_tests();
        let resp = patients(&state).unwrap();
        assert_eq!(resp.status(), 200);
    }
}
