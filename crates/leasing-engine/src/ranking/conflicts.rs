use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::domain::{Application, ApplicationId, PropertyId};

/// Open applications grouped by property, in first-seen property order.
fn open_groups(applications: &[Application]) -> Vec<(&PropertyId, Vec<&Application>)> {
    let mut index: HashMap<&PropertyId, usize> = HashMap::new();
    let mut groups: Vec<(&PropertyId, Vec<&Application>)> = Vec::new();

    for application in applications.iter().filter(|app| app.status.is_open()) {
        let slot = *index.entry(&application.property_ref).or_insert_with(|| {
            groups.push((&application.property_ref, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(application);
    }

    groups
}

fn rivals_of(application: &Application, group: &[&Application]) -> Vec<ApplicationId> {
    group
        .iter()
        .filter(|other| other.id != application.id)
        .map(|other| other.id.clone())
        .collect()
}

/// Competing open applications keyed by application id.
///
/// Only pending or processing applications take part; an entry exists for every
/// application sharing its property with at least one other open application.
pub fn conflict_overlay(applications: &[Application]) -> BTreeMap<ApplicationId, Vec<ApplicationId>> {
    let mut overlay = BTreeMap::new();
    for (_, group) in open_groups(applications) {
        if group.len() < 2 {
            continue;
        }
        for application in &group {
            overlay.insert(application.id.clone(), rivals_of(application, &group));
        }
    }
    overlay
}

/// Annotated copies of every open application that competes for its property.
///
/// Inputs are left untouched; applications without a competitor are omitted.
pub fn detect_conflicts(applications: &[Application]) -> Vec<Application> {
    let mut conflicting = Vec::new();

    for (property, group) in open_groups(applications) {
        if group.len() < 2 {
            continue;
        }

        debug!(%property, competing = group.len(), "conflicting applications detected");

        for application in &group {
            let mut annotated = (*application).clone();
            annotated.has_conflicts = Some(true);
            annotated.conflicting_applications = Some(rivals_of(application, &group));
            conflicting.push(annotated);
        }
    }

    conflicting
}
