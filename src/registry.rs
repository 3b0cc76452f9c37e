//! In-memory record registry
//!
//! The registry is the sole owner of canonical alumni and project
//! records for a session. Records are seeded at startup, read through
//! slice accessors, and never mutated in place: the core services only
//! produce derived views (vectors of references) over them.
//!
//! There is no persistence. A session is one CLI invocation; anything
//! added lives until the process exits and is then discarded.

use chrono::NaiveDate;

use crate::core::models::{Alumni, FundingStatus, Project, ProjectStatus};

/// Canonical record store for a session
#[derive(Debug, Clone)]
pub struct Registry {
    alumni: Vec<Alumni>,
    projects: Vec<Project>,
}

impl Registry {
    /// Empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self { alumni: Vec::new(), projects: Vec::new() }
    }

    /// Registry seeded with the sample dataset
    #[must_use]
    pub fn seeded() -> Self {
        let registry = Self { alumni: seed_alumni(), projects: seed_projects() };
        log::debug!(
            "seeded registry with {} alumni and {} projects",
            registry.alumni.len(),
            registry.projects.len()
        );
        registry
    }

    /// All alumni, in registry order
    #[must_use]
    pub fn alumni(&self) -> &[Alumni] {
        &self.alumni
    }

    /// All projects, in registry order
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Next unused alumni id
    #[must_use]
    pub fn next_alumni_id(&self) -> String {
        next_id(self.alumni.iter().map(|a| a.id.as_str()))
    }

    /// Next unused project id
    #[must_use]
    pub fn next_project_id(&self) -> String {
        next_id(self.projects.iter().map(|p| p.id.as_str()))
    }

    /// Append a validated alumni record (session-local)
    pub fn add_alumni(&mut self, alumni: Alumni) {
        self.alumni.push(alumni);
    }

    /// Append a validated project record (session-local)
    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn alumni(
    id: &str,
    name: &str,
    email: &str,
    year: i32,
    degree: &str,
    company: &str,
    role: &str,
    status: FundingStatus,
    contributed: u64,
    contacted: NaiveDate,
    location: &str,
) -> Alumni {
    Alumni {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        graduation_year: year,
        degree: degree.to_string(),
        company: company.to_string(),
        role: role.to_string(),
        funding_status: status,
        total_contributed: contributed,
        last_contact_date: contacted,
        location: location.to_string(),
    }
}

fn seed_alumni() -> Vec<Alumni> {
    use FundingStatus::{Active, Committed, Contacted, Inactive, Potential};

    vec![
        alumni(
            "1",
            "Sarah Chen",
            "sarah.chen@techcorp.com",
            2015,
            "MBA",
            "TechCorp",
            "VP Engineering",
            Committed,
            250_000,
            date(2026, 1, 15),
            "San Francisco, CA",
        ),
        alumni(
            "2",
            "James Okafor",
            "j.okafor@finserv.io",
            2012,
            "MS Finance",
            "FinServ",
            "Managing Director",
            Active,
            500_000,
            date(2026, 2, 1),
            "New York, NY",
        ),
        alumni(
            "3",
            "Maria Rodriguez",
            "maria.r@biohealth.com",
            2018,
            "PhD Biotech",
            "BioHealth",
            "CTO",
            Contacted,
            75_000,
            date(2026, 1, 28),
            "Boston, MA",
        ),
        alumni(
            "4",
            "David Kim",
            "d.kim@venture.vc",
            2010,
            "MBA",
            "Venture Capital Partners",
            "General Partner",
            Committed,
            1_000_000,
            date(2026, 2, 10),
            "Palo Alto, CA",
        ),
        alumni(
            "5",
            "Aisha Patel",
            "aisha@startuplab.co",
            2019,
            "BS CS",
            "StartupLab",
            "Founder & CEO",
            Potential,
            0,
            date(2025, 12, 15),
            "Austin, TX",
        ),
        alumni(
            "6",
            "Robert Müller",
            "r.muller@eurotech.de",
            2008,
            "MS Engineering",
            "EuroTech",
            "SVP Product",
            Active,
            350_000,
            date(2026, 1, 20),
            "Berlin, Germany",
        ),
        alumni(
            "7",
            "Lisa Wang",
            "l.wang@quantfund.com",
            2014,
            "MS Mathematics",
            "QuantFund",
            "Portfolio Manager",
            Committed,
            750_000,
            date(2026, 2, 5),
            "Chicago, IL",
        ),
        alumni(
            "8",
            "Omar Hassan",
            "omar.h@globalaid.org",
            2016,
            "MA Int'l Relations",
            "GlobalAid",
            "Program Director",
            Contacted,
            25_000,
            date(2026, 1, 10),
            "Washington, DC",
        ),
        alumni(
            "9",
            "Emily Foster",
            "e.foster@lawpartners.com",
            2011,
            "JD",
            "Law Partners LLP",
            "Senior Partner",
            Inactive,
            150_000,
            date(2025, 8, 20),
            "Los Angeles, CA",
        ),
        alumni(
            "10",
            "Raj Krishnamurthy",
            "raj.k@cloudscale.io",
            2017,
            "MS CS",
            "CloudScale",
            "Co-Founder",
            Potential,
            0,
            date(2026, 1, 30),
            "Seattle, WA",
        ),
    ]
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "Innovation Lab Fund".to_string(),
            description: "Funding for the new campus innovation laboratory".to_string(),
            target_amount: 5_000_000,
            raised_amount: 3_250_000,
            status: ProjectStatus::Active,
            alumni_count: 47,
            start_date: date(2025, 6, 1),
        },
        Project {
            id: "2".to_string(),
            name: "Scholarship Endowment".to_string(),
            description: "Merit-based scholarships for underrepresented students".to_string(),
            target_amount: 2_000_000,
            raised_amount: 2_000_000,
            status: ProjectStatus::Completed,
            alumni_count: 82,
            start_date: date(2024, 1, 15),
        },
        Project {
            id: "3".to_string(),
            name: "Research Center Expansion".to_string(),
            description: "Expanding the biotech research facilities".to_string(),
            target_amount: 8_000_000,
            raised_amount: 1_500_000,
            status: ProjectStatus::Active,
            alumni_count: 23,
            start_date: date(2025, 9, 1),
        },
        Project {
            id: "4".to_string(),
            name: "Global Alumni Network".to_string(),
            description: "Building regional alumni chapters worldwide".to_string(),
            target_amount: 500_000,
            raised_amount: 125_000,
            status: ProjectStatus::Planning,
            alumni_count: 8,
            start_date: date(2026, 3, 1),
        },
    ]
}
