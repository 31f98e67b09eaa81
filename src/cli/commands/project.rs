use crate::cli::parser::ProjectCmd;
use crate::config::Config;
use crate::core::project::ProjectStats;
use crate::core::query::{directed, matches_search};
use crate::core::validate::{self, FormMode};
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::models::project::{ProjectPatch, ProjectPayload, ProjectStatus};
use crate::store::{CatalogEntity, CatalogStore, open_port};
use crate::ui::messages::{store_banner, success};
use crate::utils::formatting::format_date;
use crate::utils::short_id;
use crate::utils::table::Table;
use chrono::{Local, NaiveDate};

pub fn handle(cmd: &ProjectCmd, cfg: &Config) -> AppResult<()> {
    let port = open_port(cfg)?;
    let mut store = CatalogStore::<Project>::open(port);
    if let Some(err) = store.last_error() {
        store_banner(err);
    }

    let today = Local::now().date_naive();

    match cmd {
        ProjectCmd::Add {
            name,
            client,
            delivery,
            status,
            description,
        } => {
            let payload = ProjectPayload {
                name: name.clone(),
                client: client.clone(),
                delivery_date: parse_date(delivery)?,
                status: parse_status(status)?,
                description: description.clone(),
            };

            validate::project::validate(&payload, FormMode::Create, today)
                .map_err(AppError::Validation)?;

            let created = store.create(Project::from_payload(payload))?;
            success(format!(
                "Project '{}' added (id {})",
                created.name,
                short_id(&created.id)
            ));
        }

        ProjectCmd::Edit {
            id,
            name,
            client,
            delivery,
            status,
            description,
        } => {
            let resolved = store.resolve_id(id)?;
            let existing = store.get(resolved).ok_or_else(|| AppError::NotFound {
                entity: Project::LABEL,
                id: id.clone(),
            })?;

            let patch = ProjectPatch {
                name: name.clone(),
                client: client.clone(),
                delivery_date: match delivery {
                    Some(d) => Some(parse_date(d)?),
                    None => None,
                },
                status: match status {
                    Some(s) => Some(parse_status(s)?),
                    None => None,
                },
                description: description.clone(),
            };

            let mut preview = existing.clone();
            preview.apply_patch(&patch);
            validate::project::validate(&preview.to_payload(), FormMode::Edit, today)
                .map_err(AppError::Validation)?;

            let updated = store.update(resolved, |p| p.apply_patch(&patch))?;
            success(format!(
                "Project '{}' updated (id {})",
                updated.name,
                short_id(&updated.id)
            ));
        }

        ProjectCmd::Del { id } => {
            let resolved = store.resolve_id(id)?;
            let removed = store.delete(resolved)?;
            success(format!("Project '{}' deleted", removed.name));
        }

        ProjectCmd::Show { id } => {
            let resolved = store.resolve_id(id)?;
            let project = store.get(resolved).ok_or_else(|| AppError::NotFound {
                entity: Project::LABEL,
                id: id.clone(),
            })?;
            print_project(project, cfg, today);
        }

        ProjectCmd::List {
            search,
            status,
            sort,
            desc,
            stats,
        } => {
            let status_filter = match status.as_deref() {
                None | Some("all") => None,
                Some(s) => Some(parse_status(s)?),
            };

            let mut projects: Vec<&Project> = store
                .items()
                .iter()
                .filter(|p| {
                    let term = search.as_deref().unwrap_or("");
                    matches_search(term, &[p.name.as_str(), p.client.as_str()])
                })
                .filter(|p| status_filter.is_none_or(|s| p.status == s))
                .collect();

            if let Some(key) = sort {
                sort_projects(&mut projects, key, *desc)?;
            }

            print_project_table(&projects, cfg, today);

            if *stats {
                print_stats(&ProjectStats::collect(store.items(), today));
            }
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

fn parse_status(s: &str) -> AppResult<ProjectStatus> {
    ProjectStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
}

fn sort_projects(projects: &mut [&Project], key: &str, desc: bool) -> AppResult<()> {
    match key {
        "name" => projects.sort_by(|a, b| directed(a.name.cmp(&b.name), desc)),
        "client" => projects.sort_by(|a, b| directed(a.client.cmp(&b.client), desc)),
        "delivery" => {
            projects.sort_by(|a, b| directed(a.delivery_date.cmp(&b.delivery_date), desc))
        }
        "created" => projects.sort_by(|a, b| directed(a.created_at.cmp(&b.created_at), desc)),
        other => return Err(AppError::InvalidSortKey(other.to_string())),
    }
    Ok(())
}

fn print_project_table(projects: &[&Project], cfg: &Config, today: NaiveDate) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }

    let mut table = Table::new(&["ID", "Name", "Client", "Delivery", "Status"]);
    for p in projects {
        let delivery = format_date(p.delivery_date, &cfg.date_format);
        let delivery = if p.is_overdue(today) {
            format!("{} (overdue)", delivery)
        } else {
            delivery
        };

        table.add_row(vec![
            short_id(&p.id),
            p.name.clone(),
            p.client.clone(),
            delivery,
            p.status.colored_label(),
        ]);
    }
    print!("{}", table.render());
    println!("\n{} project(s)", projects.len());
}

fn print_project(p: &Project, cfg: &Config, today: NaiveDate) {
    println!("=== {} ===", p.name);
    println!("ID:          {}", p.id);
    println!("Client:      {}", p.client);
    println!(
        "Delivery:    {}{}",
        format_date(p.delivery_date, &cfg.date_format),
        if p.is_overdue(today) { " (overdue)" } else { "" }
    );
    println!("Status:      {}", p.status.colored_label());
    if let Some(desc) = &p.description {
        println!("Description: {}", desc);
    }
}

fn print_stats(stats: &ProjectStats) {
    println!("\n--- Statistics ---");
    println!("Total projects: {}", stats.total);
    println!("Planning:       {}", stats.planning);
    println!("In progress:    {}", stats.in_progress);
    println!("Delivered:      {}", stats.delivered);
    println!("Cancelled:      {}", stats.cancelled);
    println!("Overdue:        {}", stats.overdue);
}
