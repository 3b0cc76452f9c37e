//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use chrono::NaiveDate;
use fundtrack::core::models::{Alumni, FundingStatus, Project, ProjectStatus};

/// Parse a `YYYY-MM-DD` literal in tests
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Builder for creating test alumni
pub struct AlumniBuilder {
    id: String,
    name: String,
    company: String,
    graduation_year: i32,
    funding_status: FundingStatus,
    total_contributed: u64,
    last_contact_date: NaiveDate,
    location: String,
}

impl AlumniBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Alumni {id}"),
            company: "Acme".to_string(),
            graduation_year: 2015,
            funding_status: FundingStatus::Active,
            total_contributed: 1_000,
            last_contact_date: date("2026-01-15"),
            location: "Springfield".to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.company = company.to_string();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.graduation_year = year;
        self
    }

    pub fn status(mut self, status: FundingStatus) -> Self {
        self.funding_status = status;
        self
    }

    pub fn contributed(mut self, amount: u64) -> Self {
        self.total_contributed = amount;
        self
    }

    pub fn contacted(mut self, date_str: &str) -> Self {
        self.last_contact_date = date(date_str);
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn build(self) -> Alumni {
        Alumni {
            email: format!("{}@example.com", self.id),
            degree: "MBA".to_string(),
            role: "Director".to_string(),
            id: self.id,
            name: self.name,
            graduation_year: self.graduation_year,
            company: self.company,
            funding_status: self.funding_status,
            total_contributed: self.total_contributed,
            last_contact_date: self.last_contact_date,
            location: self.location,
        }
    }
}

/// Builder for creating test projects
pub struct ProjectBuilder {
    id: String,
    target_amount: u64,
    raised_amount: u64,
    status: ProjectStatus,
}

impl ProjectBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            target_amount: 1_000_000,
            raised_amount: 0,
            status: ProjectStatus::Active,
        }
    }

    pub fn target(mut self, amount: u64) -> Self {
        self.target_amount = amount;
        self
    }

    pub fn raised(mut self, amount: u64) -> Self {
        self.raised_amount = amount;
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Project {
        Project {
            name: format!("Project {}", self.id),
            description: "Test project".to_string(),
            alumni_count: 10,
            start_date: date("2025-06-01"),
            id: self.id,
            target_amount: self.target_amount,
            raised_amount: self.raised_amount,
            status: self.status,
        }
    }
}
