//! Portal data model
//!
//! All records are demo data: constructed fresh inside a handler on every
//! request and dropped after serialization. Nothing here is persisted.

use serde::Serialize;

/// Clinical state shown on the patient roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatientStatus {
    Stable,
    Monitoring,
    Critical,
}

impl PatientStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Monitoring => "Monitoring",
            Self::Critical => "Critical",
        }
    }
}

/// One row of the patient roster page.
#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
    pub condition: &'static str,
    pub last_visit: &'static str,
    pub status: PatientStatus,
}

/// Counters shown on the main dashboard. Constant for the process lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_patients: u32,
    pub appointments_today: u32,
    pub critical_alerts: u32,
    pub recent_uploads: u32,
    pub system_status: &'static str,
}

impl DashboardSummary {
    pub const fn current() -> Self {
        Self {
            total_patients: 1247,
            appointments_today: 23,
            critical_alerts: 3,
            recent_uploads: 18,
            system_status: "Healthy",
        }
    }
}

/// Detail document returned by `GET /api/patient/{id}`.
#[derive(Debug, Serialize)]
pub struct PatientDetail {
    pub id: u32,
    pub name: String,
    pub medical_history: &'static str,
    pub current_medications: [&'static str; 2],
    pub last_updated: String,
    pub notes: &'static str,
}

impl PatientDetail {
    /// Build the synthetic detail record for a patient id.
    ///
    /// In production this data would come out of the secret store; the demo
    /// echoes the id back with placeholder strings.
    pub fn synthetic(id: u32, last_updated: String) -> Self {
        Self {
            id,
            name: format!("Patient {id}"),
            medical_history: "Encrypted medical history retrieved from Azure Key Vault",
            current_medications: [
                "Medication A (from secure Key Vault)",
                "Medication B (encrypted storage)",
            ],
            last_updated,
            notes: "All sensitive data encrypted and stored in Azure Key Vault for HIPAA compliance",
        }
    }
}

/// Acknowledgment returned by `POST /api/upload`.
#[derive(Debug, Serialize)]
pub struct UploadReceipt {
    pub message: &'static str,
    pub filename: String,
    pub storage_url: String,
    pub encryption_status: &'static str,
    pub access_control: &'static str,
}

/// The five fixed roster records. A fresh vector per call, no shared state.
pub fn sample_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: 1,
            name: "John Smith",
            age: 45,
            condition: "Hypertension",
            last_visit: "2024-01-15",
            status: PatientStatus::Stable,
        },
        Patient {
            id: 2,
            name: "Sarah Johnson",
            age: 32,
            condition: "Diabetes Type 2",
            last_visit: "2024-01-18",
            status: PatientStatus::Monitoring,
        },
        Patient {
            id: 3,
            name: "Michael Brown",
            age: 67,
            condition: "Heart Disease",
            last_visit: "2024-01-20",
            status: PatientStatus::Critical,
        },
        Patient {
            id: 4,
            name: "Emily Davis",
            age: 28,
            condition: "Asthma",
            last_visit: "2024-01-22",
            status: PatientStatus::Stable,
        },
        Patient {
            id: 5,
            name: "Robert Wilson",
            age: 54,
            condition: "Diabetes Type 1",
            last_visit: "2024-01-19",
            status: PatientStatus::Monitoring,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_has_five_records() {
        let patients = sample_patients();
        assert_eq!(patients.len(), 5);
        for p in &patients {
            assert!(matches!(
                p.status,
                PatientStatus::Stable | PatientStatus::Monitoring | PatientStatus::Critical
            ));
        }
    }

    #[test]
    fn test_status_serializes_as_capitalized_string() {
        let json = serde_json::to_string(&PatientStatus::Monitoring).unwrap();
        assert_eq!(json, "\"Monitoring\"");
    }

    #[test]
    fn test_detail_echoes_id() {
        let detail = PatientDetail::synthetic(42, "2024-01-01T00:00:00Z".to_string());
        assert_eq!(detail.id, 42);
        assert_eq!(detail.name, "Patient 42");
        assert_eq!(detail.current_medications.len(), 2);
    }

    #[test]
    fn test_dashboard_counters() {
        let summary = DashboardSummary::current();
        assert_eq!(summary.total_patients, 1247);
        assert_eq!(summary.critical_alerts, 3);
    }
}
