//! Project domain logic: aggregate statistics.

use crate::models::project::{Project, ProjectStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStats {
    pub total: usize,
    pub planning: usize,
    pub in_progress: usize,
    pub delivered: usize,
    pub cancelled: usize,
    /// Past delivery date and neither delivered nor cancelled.
    pub overdue: usize,
}

impl ProjectStats {
    pub fn collect(projects: &[Project], today: NaiveDate) -> Self {
        let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();

        Self {
            total: projects.len(),
            planning: count(ProjectStatus::Planning),
            in_progress: count(ProjectStatus::InProgress),
            delivered: count(ProjectStatus::Delivered),
            cancelled: count(ProjectStatus::Cancelled),
            overdue: projects.iter().filter(|p| p.is_overdue(today)).count(),
        }
    }
}
