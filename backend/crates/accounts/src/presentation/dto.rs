//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{company::Company, employee::Employee};

// ============================================================================
// Registration
// ============================================================================

/// Company registration request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompanyRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub industry: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

/// Employee registration request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request, shared by both actor kinds
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Company login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLoginResponse {
    pub token: String,
    pub company: CompanyResponse,
}

/// Employee login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeLoginResponse {
    pub token: String,
    pub employee: EmployeeResponse,
    pub roles: Vec<&'static str>,
}

// ============================================================================
// Profiles
// ============================================================================

/// Company profile response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub company_id: Uuid,
    pub name: String,
    pub industry: String,
    pub email: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self {
            company_id: company.company_id.into_uuid(),
            name: company.name.clone(),
            industry: company.industry.clone(),
            email: company.email.as_str().to_string(),
            description: company.description.clone(),
            logo_url: company.logo_url.clone(),
            created_at: company.created_at,
        }
    }
}

/// Employee profile response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub employee_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.into_uuid(),
            full_name: employee.full_name.clone(),
            email: employee.email.as_str().to_string(),
            created_at: employee.created_at,
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// Employee search query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeSearchParams {
    #[serde(default)]
    pub name: String,
}
