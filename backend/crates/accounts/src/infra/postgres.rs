//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{company::Company, employee::Employee, identity::Identity};
use crate::domain::repository::{CompanyRepository, EmployeeRepository, IdentityRepository};
use crate::domain::value_object::{
    account_role::AccountRole,
    credentials::PasswordDigest,
    email::Email,
    ids::{CompanyId, EmployeeId, IdentityId},
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed accounts repository
#[derive(Clone)]
pub struct PgAccountsRepository {
    pool: PgPool,
}

impl PgAccountsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique violation to `DuplicateEmail`.
///
/// The unique index on `identities.email` is the authoritative duplicate
/// gate; any pre-check in a use case is only an optimization.
fn map_unique_violation(err: sqlx::Error) -> AccountError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AccountError::DuplicateEmail;
        }
    }
    AccountError::Database(err)
}

async fn insert_identity(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    identity: &Identity,
) -> AccountResult<()> {
    sqlx::query(
        r#"
        INSERT INTO identities (
            identity_id,
            email,
            password_hash,
            account_role,
            created_at
        ) VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(identity.identity_id.as_uuid())
    .bind(identity.email.as_str())
    .bind(identity.password.as_phc_string())
    .bind(identity.role.id())
    .bind(identity.created_at)
    .execute(&mut **tx)
    .await
    .map_err(map_unique_violation)?;

    Ok(())
}

// ============================================================================
// Identity Repository Implementation
// ============================================================================

impl IdentityRepository for PgAccountsRepository {
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT
                identity_id,
                email,
                password_hash,
                account_role,
                created_at
            FROM identities
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_identity()).transpose()
    }
}

// ============================================================================
// Company Repository Implementation
// ============================================================================

impl CompanyRepository for PgAccountsRepository {
    async fn create_with_identity(
        &self,
        identity: &Identity,
        company: &Company,
    ) -> AccountResult<()> {
        let mut tx = self.pool.begin().await?;

        insert_identity(&mut tx, identity).await?;

        sqlx::query(
            r#"
            INSERT INTO companies (
                company_id,
                name,
                industry,
                email,
                description,
                logo_url,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(company.company_id.as_uuid())
        .bind(&company.name)
        .bind(&company.industry)
        .bind(company.email.as_str())
        .bind(&company.description)
        .bind(&company.logo_url)
        .bind(company.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, company_id: &CompanyId) -> AccountResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT
                company_id,
                name,
                industry,
                email,
                description,
                logo_url,
                created_at
            FROM companies
            WHERE company_id = $1
            "#,
        )
        .bind(company_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_company()))
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT
                company_id,
                name,
                industry,
                email,
                description,
                logo_url,
                created_at
            FROM companies
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_company()))
    }

    async fn list(&self) -> AccountResult<Vec<Company>> {
        let rows = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT
                company_id,
                name,
                industry,
                email,
                description,
                logo_url,
                created_at
            FROM companies
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_company()).collect())
    }

    async fn list_by_industry(&self, industry: &str) -> AccountResult<Vec<Company>> {
        let rows = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT
                company_id,
                name,
                industry,
                email,
                description,
                logo_url,
                created_at
            FROM companies
            WHERE industry = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(industry)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_company()).collect())
    }

    async fn exists_by_id(&self, company_id: &CompanyId) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE company_id = $1)",
        )
        .bind(company_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Employee Repository Implementation
// ============================================================================

impl EmployeeRepository for PgAccountsRepository {
    async fn create_with_identity(
        &self,
        identity: &Identity,
        employee: &Employee,
    ) -> AccountResult<()> {
        let mut tx = self.pool.begin().await?;

        insert_identity(&mut tx, identity).await?;

        sqlx::query(
            r#"
            INSERT INTO employees (
                employee_id,
                full_name,
                email,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(employee.employee_id.as_uuid())
        .bind(&employee.full_name)
        .bind(employee.email.as_str())
        .bind(employee.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, employee_id: &EmployeeId) -> AccountResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT
                employee_id,
                full_name,
                email,
                created_at
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_employee()))
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT
                employee_id,
                full_name,
                email,
                created_at
            FROM employees
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_employee()))
    }

    async fn search_by_name(&self, name: &str) -> AccountResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT
                employee_id,
                full_name,
                email,
                created_at
            FROM employees
            WHERE full_name ILIKE '%' || $1 || '%'
            ORDER BY full_name
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_employee()).collect())
    }

    async fn exists_by_id(&self, employee_id: &EmployeeId) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = $1)",
        )
        .bind(employee_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct IdentityRow {
    identity_id: Uuid,
    email: String,
    password_hash: String,
    account_role: i16,
    created_at: DateTime<Utc>,
}

impl IdentityRow {
    fn into_identity(self) -> AccountResult<Identity> {
        let password = PasswordDigest::from_phc_string(self.password_hash)
            .map_err(|e| AccountError::Internal(format!("Invalid password hash: {}", e)))?;

        let role = AccountRole::from_id(self.account_role)
            .ok_or_else(|| AccountError::Internal(format!(
                "Invalid account_role: {}",
                self.account_role
            )))?;

        Ok(Identity {
            identity_id: IdentityId::from_uuid(self.identity_id),
            email: Email::from_db(self.email),
            password,
            role,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CompanyRow {
    company_id: Uuid,
    name: String,
    industry: String,
    email: String,
    description: Option<String>,
    logo_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl CompanyRow {
    fn into_company(self) -> Company {
        Company {
            company_id: CompanyId::from_uuid(self.company_id),
            name: self.name,
            industry: self.industry,
            email: Email::from_db(self.email),
            description: self.description,
            logo_url: self.logo_url,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    employee_id: Uuid,
    full_name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee {
            employee_id: EmployeeId::from_uuid(self.employee_id),
            full_name: self.full_name,
            email: Email::from_db(self.email),
            created_at: self.created_at,
        }
    }
}
