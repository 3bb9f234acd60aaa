//! Tab strip for the per-association dashboard.

#[cfg(test)]
#[path = "dashboard_nav_test.rs"]
mod dashboard_nav_test;

use leptos::prelude::*;

/// One tab of the per-association dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Activities,
    Members,
    Requests,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Activities, Self::Members, Self::Requests];

    /// Route segment under `/dashboard/{asociation}/`.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Activities => "activities",
            Self::Members => "members",
            Self::Requests => "membershipRequests",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Activities => "Actividades",
            Self::Members => "Miembros",
            Self::Requests => "Solicitudes",
        }
    }

    #[must_use]
    pub fn href(self, asociation: &str) -> String {
        format!("/dashboard/{asociation}/{}", self.segment())
    }
}

#[component]
pub fn DashboardNav(asociation: String, active: DashboardTab) -> impl IntoView {
    let tabs = DashboardTab::ALL
        .into_iter()
        .map(|tab| {
            let href = tab.href(&asociation);
            view! {
                <a class:active={tab == active} href=href>
                    <span>{tab.label()}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! { <div id="dashboard-nav">{tabs}</div> }
}
