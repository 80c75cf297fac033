// src/domain/matching.rs
//! Cross-references attorneys with the practice-area taxonomy.
//!
//! An attorney serves a practice area when its id is listed in the
//! attorney's service ids, or when one of the attorney's free-text
//! specializations and the area's name contain one another, ignoring case.
//! Both rules count equally; there is no precedence between them.
use crate::domain::attorney::Attorney;
use crate::domain::hierarchy::{TreeNode, build_forest};
use crate::domain::service::Service;
use crate::domain::shared::DocumentId;
use std::collections::{HashMap, HashSet};

/// Bidirectional, case-insensitive substring test. Blank input never matches.
pub fn specialization_matches(specialization: &str, service_name: &str) -> bool {
    let spec = specialization.trim().to_lowercase();
    let name = service_name.trim().to_lowercase();
    if spec.is_empty() || name.is_empty() {
        return false;
    }
    spec.contains(&name) || name.contains(&spec)
}

pub fn attorney_matches_service(attorney: &Attorney, service: &Service) -> bool {
    attorney.serves(&service.id)
        || attorney
            .specializations()
            .iter()
            .any(|s| specialization_matches(s, &service.name))
}

/// Attorneys relevant to `service`, in input order.
pub fn attorneys_for_service<'a>(service: &Service, attorneys: &'a [Attorney]) -> Vec<&'a Attorney> {
    attorneys
        .iter()
        .filter(|a| attorney_matches_service(a, service))
        .collect()
}

pub fn services_for_attorney<'a>(attorney: &Attorney, services: &'a [Service]) -> Vec<&'a Service> {
    services
        .iter()
        .filter(|s| attorney_matches_service(attorney, s))
        .collect()
}

/// Ids of the services `attorney` matches plus every ancestor of those
/// services that is present in `services`.
pub fn relevant_service_ids(attorney: &Attorney, services: &[Service]) -> HashSet<DocumentId> {
    let parents: HashMap<&DocumentId, Option<&DocumentId>> = services
        .iter()
        .map(|s| (&s.id, s.parent_id.as_ref()))
        .collect();

    let mut relevant = HashSet::new();
    for service in services_for_attorney(attorney, services) {
        let mut current = Some(&service.id);
        while let Some(id) = current {
            if !relevant.insert(id.clone()) {
                break;
            }
            current = parents.get(id).copied().flatten().filter(|p| parents.contains_key(p));
        }
    }
    relevant
}

/// Practice-area tree for an attorney profile: only matched services and
/// their ancestors, re-linked parent to children.
pub fn build_attorney_service_tree(
    attorney: &Attorney,
    services: &[Service],
) -> Vec<TreeNode<Service>> {
    let relevant = relevant_service_ids(attorney, services);
    let kept: Vec<Service> = services
        .iter()
        .filter(|s| relevant.contains(&s.id))
        .cloned()
        .collect();
    build_forest(kept)
}

/// Full public practice-area tree.
pub fn build_service_tree(services: Vec<Service>) -> Vec<TreeNode<Service>> {
    build_forest(services)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attorney::AttorneyProfile;
    use crate::domain::service::NewService;
    use crate::domain::shared::Slug;
    use chrono::Utc;

    fn id(n: u8) -> DocumentId {
        DocumentId::new(format!("{:024x}", n)).unwrap()
    }

    fn service(n: u8, name: &str, parent: Option<u8>, order: i32) -> Service {
        Service::create(
            id(n),
            NewService {
                name: name.into(),
                slug: Slug::new(format!("servicio-{n}")).unwrap(),
                description: String::new(),
                short_description: String::new(),
                icon_url: None,
                parent_id: parent.map(id),
                order,
                is_active: true,
            },
            Utc::now(),
        )
        .unwrap()
    }

    fn attorney(specializations: &[&str], service_ids: &[u8]) -> Attorney {
        let now = Utc::now();
        Attorney::new(
            id(200),
            AttorneyProfile {
                name: "María Vásquez".into(),
                position: "Socia".into(),
                specializations: specializations.iter().map(|s| s.to_string()).collect(),
                service_ids: service_ids.iter().map(|n| id(*n).to_string()).collect(),
                email: "maria@altumlegal.mx".into(),
                is_active: true,
                ..AttorneyProfile::default()
            },
            None,
            now,
            now,
        )
        .unwrap()
    }

    #[test]
    fn substring_match_is_bidirectional_and_case_insensitive() {
        assert!(specialization_matches("Fiscal", "Derecho Fiscal"));
        assert!(specialization_matches("derecho fiscal internacional", "DERECHO FISCAL"));
        assert!(!specialization_matches("Laboral", "Derecho Fiscal"));
        assert!(!specialization_matches("  ", "Derecho Fiscal"));
        assert!(!specialization_matches("Fiscal", ""));
    }

    #[test]
    fn tree_keeps_only_matched_child() {
        let services = vec![
            service(1, "Corporativo", None, 0),
            service(2, "Fusiones", Some(1), 0),
            service(3, "Gobierno", Some(1), 1),
        ];
        let lawyer = attorney(&[], &[2]);

        let tree = build_attorney_service_tree(&lawyer, &services);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].item.id, id(1));
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].item.id, id(2));
    }

    #[test]
    fn relevant_ids_walk_all_ancestors() {
        let services = vec![
            service(1, "Corporativo", None, 0),
            service(2, "Societario", Some(1), 0),
            service(3, "Fusiones y adquisiciones", Some(2), 0),
            service(4, "Penal", None, 1),
        ];
        let lawyer = attorney(&["fusiones"], &[]);
        let ids = relevant_service_ids(&lawyer, &services);
        assert_eq!(ids, HashSet::from([id(1), id(2), id(3)]));
    }

    #[test]
    fn attorneys_for_service_keeps_input_order() {
        let fiscal = service(1, "Derecho Fiscal", None, 0);
        let by_text = attorney(&["fiscal"], &[]);
        let by_id = attorney(&[], &[1]);
        let neither = attorney(&["Laboral"], &[]);
        let list = vec![by_text.clone(), neither, by_id.clone()];

        let matched = attorneys_for_service(&fiscal, &list);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0], &by_text);
        assert_eq!(matched[1], &by_id);
    }

    #[test]
    fn full_tree_nests_every_service() {
        let tree = build_service_tree(vec![
            service(2, "Fusiones", Some(1), 0),
            service(1, "Corporativo", None, 0),
            service(4, "Penal", None, 1),
        ]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].item.name, "Corporativo");
        assert_eq!(tree[0].children[0].item.name, "Fusiones");
    }
}
