//! Project entity: an installation project with a client, a delivery date
//! and a lifecycle status.

use crate::store::entity::CatalogEntity;
use ansi_term::Colour;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "planning")]
    Planning,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "delivered")]
    Delivered,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl ProjectStatus {
    pub fn code(&self) -> &str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Delivered => "delivered",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "planning" => Some(ProjectStatus::Planning),
            "in-progress" | "in_progress" | "inprogress" => Some(ProjectStatus::InProgress),
            "delivered" => Some(ProjectStatus::Delivered),
            "cancelled" | "canceled" => Some(ProjectStatus::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Delivered => "Delivered",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }

    /// Colored label for list output.
    pub fn colored_label(&self) -> String {
        let colour = match self {
            ProjectStatus::Planning => Colour::Blue,
            ProjectStatus::InProgress => Colour::Yellow,
            ProjectStatus::Delivered => Colour::Green,
            ProjectStatus::Cancelled => Colour::Red,
        };
        colour.paint(self.label()).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client: String,
    pub delivery_date: NaiveDate,
    pub status: ProjectStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct ProjectPayload {
    pub name: String,
    pub client: String,
    pub delivery_date: NaiveDate,
    pub status: ProjectStatus,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub client: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub description: Option<String>,
}

impl Project {
    pub fn from_payload(p: ProjectPayload) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::nil(),
            name: p.name,
            client: p.client,
            delivery_date: p.delivery_date,
            status: p.status,
            description: p.description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            name: self.name.clone(),
            client: self.client.clone(),
            delivery_date: self.delivery_date,
            status: self.status,
            description: self.description.clone(),
        }
    }

    pub fn apply_patch(&mut self, patch: &ProjectPatch) {
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if let Some(v) = &patch.client {
            self.client = v.clone();
        }
        if let Some(v) = patch.delivery_date {
            self.delivery_date = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = &patch.description {
            self.description = Some(v.clone());
        }
    }

    /// A project is overdue when the delivery date has passed and the
    /// project was neither delivered nor cancelled.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.delivery_date < today
            && self.status != ProjectStatus::Delivered
            && self.status != ProjectStatus::Cancelled
    }
}

impl CatalogEntity for Project {
    const DOC_KEY: &'static str = "projects";
    const LABEL: &'static str = "project";

    fn id(&self) -> Uuid {
        self.id
    }

    fn stamp(&mut self, id: Uuid, now: DateTime<Local>) {
        self.id = id;
        self.created_at = now;
        self.updated_at = now;
    }

    fn touch(&mut self, now: DateTime<Local>) {
        self.updated_at = now;
    }
}
