use serde::{Deserialize, Serialize};

/// Closed set of access levels. Unknown or absent role strings fall back to
/// `Guest` through an explicit default arm rather than a conditional
/// fall-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    JobSeeker,
    JobFinder,
    Assistant,
    Administrator,
}

impl Role {
    /// Parse the stored role string ("Job Seeker", "Administrator", ...).
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("Job Seeker") => Self::JobSeeker,
            Some("Job Finder") => Self::JobFinder,
            Some("Assistant") => Self::Assistant,
            Some("Administrator") => Self::Administrator,
            _ => Self::Guest,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::JobSeeker => "Job Seeker",
            Self::JobFinder => "Job Finder",
            Self::Assistant => "Assistant",
            Self::Administrator => "Administrator",
        }
    }
}

/// Navigation destinations exposed by the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    Course,
    AboutUs,
    JobsApplied,
    Profile,
    JobManagement,
    CompanyManagement,
    CourseManagement,
    StatisticalAnalysis,
    AccountManagement,
}

impl PageId {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Course => "Course",
            Self::AboutUs => "About Us",
            Self::JobsApplied => "Jobs Applied",
            Self::Profile => "Profile",
            Self::JobManagement => "Job Management",
            Self::CompanyManagement => "Company Management",
            Self::CourseManagement => "Course Management",
            Self::StatisticalAnalysis => "Statistical Analysis",
            Self::AccountManagement => "Account Management",
        }
    }

    /// URL slug, derived from the label the same way the navigation bar
    /// derives its hrefs.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::Course => "/course",
            Self::AboutUs => "/about-us",
            Self::JobsApplied => "/jobs-applied",
            Self::Profile => "/profile",
            Self::JobManagement => "/job-management",
            Self::CompanyManagement => "/company-management",
            Self::CourseManagement => "/course-management",
            Self::StatisticalAnalysis => "/statistical-analysis",
            Self::AccountManagement => "/account-management",
        }
    }
}

/// Fixed rejection text shown in place of a page the role may not open. A
/// terminal display state, not an error.
pub const ACCESS_DENIED_MESSAGE: &str = "You do not have permission to view this page!!!";

/// Ordered navigation list for a role. Total and static; the order is the
/// order the navigation bar renders.
pub const fn pages_for(role: Role) -> &'static [PageId] {
    match role {
        Role::Guest => &[PageId::Home, PageId::Course, PageId::AboutUs],
        Role::JobSeeker => &[
            PageId::Home,
            PageId::JobsApplied,
            PageId::Course,
            PageId::Profile,
            PageId::AboutUs,
        ],
        Role::JobFinder => &[
            PageId::Course,
            PageId::JobManagement,
            PageId::CompanyManagement,
            PageId::Profile,
            PageId::AboutUs,
        ],
        Role::Assistant => &[
            PageId::CourseManagement,
            PageId::StatisticalAnalysis,
            PageId::Profile,
            PageId::AboutUs,
        ],
        Role::Administrator => &[
            PageId::JobManagement,
            PageId::CompanyManagement,
            PageId::AccountManagement,
            PageId::StatisticalAnalysis,
            PageId::Profile,
            PageId::AboutUs,
        ],
    }
}

/// Page-level gate: membership in the role's page set.
pub fn can_access(role: Role, page: PageId) -> bool {
    pages_for(role).contains(&page)
}

/// Page-internal split used by the company and job management pages: the
/// administrator sees the read-only aggregate table, everyone else the
/// tabbed CRUD over their own data.
pub const fn is_administrator(role: Role) -> bool {
    matches!(role, Role::Administrator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_strings_fall_back_to_guest() {
        assert_eq!(Role::from_stored(None), Role::Guest);
        assert_eq!(Role::from_stored(Some("")), Role::Guest);
        assert_eq!(Role::from_stored(Some("Superuser")), Role::Guest);
        assert_eq!(Role::from_stored(Some("Job Seeker")), Role::JobSeeker);
    }

    #[test]
    fn navigation_lists_match_marketplace_order() {
        assert_eq!(
            pages_for(Role::Guest),
            &[PageId::Home, PageId::Course, PageId::AboutUs]
        );
        assert_eq!(pages_for(Role::JobSeeker).len(), 5);
        assert_eq!(pages_for(Role::Administrator).len(), 6);
        assert_eq!(pages_for(Role::Assistant)[0], PageId::CourseManagement);
    }

    #[test]
    fn access_is_page_set_membership() {
        assert!(can_access(Role::JobSeeker, PageId::JobsApplied));
        assert!(!can_access(Role::JobSeeker, PageId::JobManagement));
        assert!(can_access(Role::JobFinder, PageId::CompanyManagement));
        assert!(can_access(Role::Administrator, PageId::CompanyManagement));
        assert!(!can_access(Role::Guest, PageId::Profile));
    }

    #[test]
    fn only_the_administrator_gets_the_aggregate_view() {
        assert!(is_administrator(Role::Administrator));
        assert!(!is_administrator(Role::JobFinder));
        assert!(!is_administrator(Role::Guest));
    }

    #[test]
    fn slugs_follow_the_label_convention() {
        for role in [
            Role::Guest,
            Role::JobSeeker,
            Role::JobFinder,
            Role::Assistant,
            Role::Administrator,
        ] {
            for page in pages_for(role) {
                let derived = format!(
                    "/{}",
                    page.label().to_lowercase().replace(' ', "-")
                );
                assert_eq!(page.slug(), derived);
            }
        }
    }
}
