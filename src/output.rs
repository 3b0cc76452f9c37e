//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Commands build a
//! result struct and call `render(mode)`; nothing else prints.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Alumni, FundingStatus, Project, ProjectStatus};
use crate::core::services::FieldError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Dashboard metrics plus the two overview lists
#[derive(Debug, Serialize)]
pub struct DashboardResult {
    /// Sum of raised amounts across all projects
    pub total_raised: u64,
    /// Number of alumni in the registry
    pub alumni_count: usize,
    /// Alumni with funding status `committed`
    pub committed_donors: usize,
    /// Projects with status `active`
    pub active_projects: usize,
    /// Most recently contacted alumni, most recent first
    pub recent_activity: Vec<RecentActivityRow>,
    /// Per-project progress
    pub projects: Vec<ProjectProgressRow>,
}

/// One line of the recent-activity list
#[derive(Debug, Serialize)]
pub struct RecentActivityRow {
    /// Alumni name
    pub name: String,
    /// Company
    pub company: String,
    /// Role
    pub role: String,
    /// Funding status label
    pub status: String,
    /// Last contact date (YYYY-MM-DD)
    pub last_contact: String,
}

impl RecentActivityRow {
    /// Build a row from an alumni record
    #[must_use]
    pub fn from_alumni(alumni: &Alumni) -> Self {
        Self {
            name: alumni.name.clone(),
            company: alumni.company.clone(),
            role: alumni.role.clone(),
            status: alumni.funding_status.to_string(),
            last_contact: alumni.last_contact_date.to_string(),
        }
    }
}

/// One project with its display progress
#[derive(Debug, Serialize)]
pub struct ProjectProgressRow {
    /// Project id
    pub id: String,
    /// Project name
    pub name: String,
    /// Short description
    pub description: String,
    /// Status label
    pub status: String,
    /// Amount raised
    pub raised: u64,
    /// Fundraising goal
    pub target: u64,
    /// Progress percent, clamped to [0, 100]
    pub percent: f64,
    /// Number of alumni contributors
    pub contributors: u32,
    /// Start date (YYYY-MM-DD)
    pub start_date: String,
}

impl ProjectProgressRow {
    /// Build a row from a project record
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status.to_string(),
            raised: project.raised_amount,
            target: project.target_amount,
            percent: project.progress_percent(),
            contributors: project.alumni_count,
            start_date: project.start_date.to_string(),
        }
    }
}

/// One row of the alumni registry table
#[derive(Debug, Serialize)]
pub struct AlumniRow {
    /// Record id
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Company
    pub company: String,
    /// Role
    pub role: String,
    /// Graduation year
    pub year: i32,
    /// Funding status label
    pub status: String,
    /// Total contributed
    pub contributed: u64,
    /// Location
    pub location: String,
}

impl AlumniRow {
    /// Build a row from an alumni record
    #[must_use]
    pub fn from_alumni(alumni: &Alumni) -> Self {
        Self {
            id: alumni.id.clone(),
            name: alumni.name.clone(),
            email: alumni.email.clone(),
            company: alumni.company.clone(),
            role: alumni.role.clone(),
            year: alumni.graduation_year,
            status: alumni.funding_status.to_string(),
            contributed: alumni.total_contributed,
            location: alumni.location.clone(),
        }
    }
}

/// Result of an alumni list operation
#[derive(Debug, Serialize)]
pub struct AlumniListResult {
    /// Rows after filter and sort
    pub rows: Vec<AlumniRow>,
    /// Number of rows shown
    pub shown: usize,
    /// Total records in the registry
    pub total: usize,
}

/// Result of a project list operation
#[derive(Debug, Serialize)]
pub struct ProjectListResult {
    /// All projects with display progress
    pub projects: Vec<ProjectProgressRow>,
}

/// Result of an add operation (alumni or project)
#[derive(Debug, Serialize)]
pub struct AddResult {
    /// Whether the draft validated
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Field errors when validation failed
    pub errors: Vec<FieldError>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl DashboardResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Dashboard\n");
        println!("  Total Value Raised   {}", format_usd_compact(self.total_raised));
        println!("  Alumni Network       {}", self.alumni_count);
        println!("  Committed Donors     {}", self.committed_donors);
        println!("  Active Projects      {}", self.active_projects);

        println!("\nRecent Alumni Activity:\n");
        if self.recent_activity.is_empty() {
            println!("  No alumni on record.");
        }
        for row in &self.recent_activity {
            println!(
                "  {}  {:<22} {} · {}",
                funding_badge(&row.status),
                row.name,
                row.company,
                row.role
            );
        }

        println!("\nProject Progress:\n");
        for p in &self.projects {
            println!("  {} {}", p.name, project_badge(&p.status));
            println!(
                "    {} raised of {} goal · {} contributors",
                format_usd(p.raised),
                format_usd(p.target),
                p.contributors
            );
            println!("    {} {:.0}% funded", progress_bar(p.percent), p.percent);
        }
    }
}

impl AlumniListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.rows.is_empty() {
            println!("No alumni match the current filter.");
            println!("\nShowing 0 of {} alumni", self.total);
            return;
        }

        let name_w = column_width("Name", self.rows.iter().map(|r| r.name.len()));
        let company_w = column_width("Company", self.rows.iter().map(|r| r.company.len()));
        let contrib_w =
            column_width("Contributed", self.rows.iter().map(|r| format_usd(r.contributed).len()));

        println!(
            "{:<name_w$}  {:<company_w$}  {:<4}  {:<9}  {:>contrib_w$}  {}",
            "Name", "Company", "Year", "Status", "Contributed", "Location"
        );
        for row in &self.rows {
            println!(
                "{:<name_w$}  {:<company_w$}  {:<4}  {}  {:>contrib_w$}  {}",
                row.name,
                row.company,
                row.year,
                funding_badge(&row.status),
                format_usd(row.contributed),
                row.location
            );
        }
        println!("\nShowing {} of {} alumni", self.shown, self.total);
    }
}

impl ProjectListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.projects.is_empty() {
            println!("No projects on record.");
            return;
        }

        for p in &self.projects {
            println!("{} {}", p.name, project_badge(&p.status));
            println!("  {}", p.description);
            println!(
                "  {} of {} · {} {:.0}% funded",
                format_usd(p.raised),
                format_usd(p.target),
                progress_bar(p.percent),
                p.percent
            );
            println!("  {} contributors · started {}\n", p.contributors, p.start_date);
        }
    }
}

impl AddResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.success {
            println!("{}", self.message);
        } else {
            println!("{}", self.message);
            for err in &self.errors {
                println!("  {}: {}", err.field, err.message);
            }
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Whole currency units with thousands separators: `$1,234,567`
#[must_use]
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${out}")
}

/// Compact display for metric cards: `$5.3M`, `$125.0K`, `$950`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_usd_compact(amount: u64) -> String {
    if amount >= 1_000_000 {
        format!("${:.1}M", amount as f64 / 1_000_000.0)
    } else if amount >= 1_000 {
        format!("${:.1}K", amount as f64 / 1_000.0)
    } else {
        format!("${amount}")
    }
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.chain(std::iter::once(header.len())).max().unwrap_or(0)
}

fn progress_bar(percent: f64) -> String {
    const WIDTH: usize = 24;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((percent / 100.0) * WIDTH as f64).round() as usize;
    let filled = filled.min(WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

/// Colorize a funding-status label, padded for table alignment
fn funding_badge(status: &str) -> String {
    let padded = format!("{status:<9}");
    let colored = match status.parse::<FundingStatus>() {
        Ok(FundingStatus::Active) => padded.cyan(),
        Ok(FundingStatus::Potential) => padded.yellow(),
        Ok(FundingStatus::Contacted) => padded.blue(),
        Ok(FundingStatus::Committed) => padded.green(),
        Ok(FundingStatus::Inactive) => padded.dimmed(),
        Err(_) => padded.normal(),
    };
    colored.to_string()
}

/// Colorize a project-status label
fn project_badge(status: &str) -> String {
    let label = format!("[{status}]");
    let colored = match status.parse::<ProjectStatus>() {
        Ok(ProjectStatus::Active) => label.cyan(),
        Ok(ProjectStatus::Completed) => label.green(),
        Ok(ProjectStatus::Planning) => label.yellow(),
        Err(_) => label.normal(),
    };
    colored.to_string()
}
