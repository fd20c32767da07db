//! Generic status workflow for service-request lists.
//!
//! One parameterized configuration replaces the per-entity list logic:
//! each request kind declares which statuses a pending request may move
//! to, and every list page applies the same pure search/sort/paginate
//! pipeline over the fetched rows.

use std::cmp::Ordering;

use super::aggregate::{RequestKind, RequestStatus, ServiceRequest};

/// Per-kind workflow configuration.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowConfig {
    pub kind: RequestKind,
    targets: &'static [RequestStatus],
}

impl WorkflowConfig {
    pub fn for_kind(kind: RequestKind) -> Self {
        let targets: &'static [RequestStatus] = match kind {
            // Maintenance work is done or it is not.
            RequestKind::MaintenanceContract | RequestKind::ExtinguisherMaintenance => {
                &[RequestStatus::Completed, RequestStatus::Rejected]
            }
            // Plans go through a review decision.
            RequestKind::SafetyPlan | RequestKind::EngineeringPlan => {
                &[RequestStatus::Approved, RequestStatus::Rejected]
            }
        };
        Self { kind, targets }
    }

    /// Statuses the given request may transition to. Only pending
    /// requests transition; everything else is terminal.
    pub fn allowed_targets(&self, from: RequestStatus) -> &'static [RequestStatus] {
        match from {
            RequestStatus::Pending => self.targets,
            _ => &[],
        }
    }

    pub fn can_transition(&self, from: RequestStatus, to: RequestStatus) -> bool {
        self.allowed_targets(from).contains(&to)
    }
}

/// Sortable columns of the request lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Reference,
    Customer,
    City,
    Status,
    #[default]
    RequestedAt,
}

/// Pure list-query state: search filter, sort, slice pagination.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub search: String,
    pub sort_field: SortField,
    pub sort_ascending: bool,
    /// 0-indexed.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: SortField::RequestedAt,
            sort_ascending: false,
            page: 0,
            page_size: 50,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone)]
pub struct Page {
    pub rows: Vec<ServiceRequest>,
    pub total_count: usize,
    pub total_pages: usize,
    /// Page actually served (requests past the end clamp to the last page).
    pub page: usize,
}

impl ListQuery {
    /// Apply filter, sort and pagination to the fetched rows. Pure: the
    /// input is untouched, the query itself is untouched.
    pub fn apply(&self, items: &[ServiceRequest]) -> Page {
        let filter = self.search.trim().to_lowercase();
        let mut filtered: Vec<ServiceRequest> = items
            .iter()
            // same convention as the search input: short queries match all
            .filter(|r| filter.len() < 3 || matches_filter(r, &filter))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| {
            let cmp = compare_by_field(a, b, self.sort_field);
            if self.sort_ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        let total_count = filtered.len();
        let page_size = self.page_size.max(1);
        let total_pages = (total_count.max(1) + page_size - 1) / page_size;
        let page = self.page.min(total_pages - 1);
        let start = page * page_size;
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect();

        Page {
            rows,
            total_count,
            total_pages,
            page,
        }
    }
}

fn matches_filter(request: &ServiceRequest, filter: &str) -> bool {
    request.reference.to_lowercase().contains(filter)
        || request.customer_name.to_lowercase().contains(filter)
        || request.city.to_lowercase().contains(filter)
}

fn compare_by_field(a: &ServiceRequest, b: &ServiceRequest, field: SortField) -> Ordering {
    match field {
        SortField::Reference => a.reference.cmp(&b.reference),
        SortField::Customer => a.customer_name.cmp(&b.customer_name),
        SortField::City => a.city.cmp(&b.city),
        SortField::Status => a.status.label().cmp(b.status.label()),
        SortField::RequestedAt => a.requested_at.cmp(&b.requested_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn request(id: &str, customer: &str, status: RequestStatus, day: u32) -> ServiceRequest {
        ServiceRequest {
            id: id.to_string(),
            reference: format!("REQ-{id}"),
            customer_name: customer.to_string(),
            city: "Jeddah".to_string(),
            status,
            requested_at: Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn only_pending_requests_transition() {
        let config = WorkflowConfig::for_kind(RequestKind::MaintenanceContract);
        assert!(config.can_transition(RequestStatus::Pending, RequestStatus::Completed));
        assert!(config.can_transition(RequestStatus::Pending, RequestStatus::Rejected));
        assert!(!config.can_transition(RequestStatus::Pending, RequestStatus::Approved));
        assert!(!config.can_transition(RequestStatus::Completed, RequestStatus::Rejected));
        assert!(config.allowed_targets(RequestStatus::Rejected).is_empty());
    }

    #[test]
    fn plans_use_review_decisions() {
        for kind in [RequestKind::SafetyPlan, RequestKind::EngineeringPlan] {
            let config = WorkflowConfig::for_kind(kind);
            assert!(config.can_transition(RequestStatus::Pending, RequestStatus::Approved));
            assert!(!config.can_transition(RequestStatus::Pending, RequestStatus::Completed));
        }
    }

    #[test]
    fn search_filters_case_insensitively_after_three_chars() {
        let items = vec![
            request("1", "Alfa Trading", RequestStatus::Pending, 1),
            request("2", "Beta Mills", RequestStatus::Pending, 2),
        ];
        let mut query = ListQuery::default();
        query.search = "al".to_string();
        assert_eq!(query.apply(&items).total_count, 2, "short query matches all");
        query.search = "ALFA".to_string();
        let page = query.apply(&items);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].customer_name, "Alfa Trading");
    }

    #[test]
    fn default_sort_is_newest_first() {
        let items = vec![
            request("1", "Alfa", RequestStatus::Pending, 1),
            request("2", "Beta", RequestStatus::Pending, 9),
            request("3", "Gamma", RequestStatus::Pending, 4),
        ];
        let page = ListQuery::default().apply(&items);
        let refs: Vec<&str> = page.rows.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(refs, vec!["REQ-2", "REQ-3", "REQ-1"]);
    }

    #[test]
    fn sort_by_customer_ascending() {
        let items = vec![
            request("1", "Gamma", RequestStatus::Pending, 1),
            request("2", "Alfa", RequestStatus::Pending, 2),
        ];
        let query = ListQuery {
            sort_field: SortField::Customer,
            sort_ascending: true,
            ..Default::default()
        };
        let page = query.apply(&items);
        assert_eq!(page.rows[0].customer_name, "Alfa");
    }

    #[test]
    fn pagination_slices_and_clamps() {
        let items: Vec<ServiceRequest> = (1..=7)
            .map(|i| request(&i.to_string(), "Customer", RequestStatus::Pending, i as u32))
            .collect();
        let query = ListQuery {
            page: 2,
            page_size: 3,
            sort_field: SortField::Reference,
            sort_ascending: true,
            ..Default::default()
        };
        let page = query.apply(&items);
        assert_eq!(page.total_count, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 1);

        let beyond = ListQuery {
            page: 99,
            page_size: 3,
            ..Default::default()
        };
        let page = beyond.apply(&items);
        assert_eq!(page.page, 2, "page past the end clamps to the last page");
        assert!(!page.rows.is_empty());
    }

    #[test]
    fn empty_input_yields_one_empty_page() {
        let page = ListQuery::default().apply(&[]);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.rows.is_empty());
    }
}
