use super::*;

#[test]
fn tabs_link_under_asociation() {
    let hrefs: Vec<String> = DashboardTab::ALL.iter().map(|t| t.href("abc")).collect();
    assert_eq!(
        hrefs,
        [
            "/dashboard/abc/activities",
            "/dashboard/abc/members",
            "/dashboard/abc/membershipRequests",
        ]
    );
}

#[test]
fn labels_are_distinct() {
    assert_ne!(DashboardTab::Members.label(), DashboardTab::Requests.label());
}
