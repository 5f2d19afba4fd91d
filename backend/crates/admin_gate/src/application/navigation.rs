//! Navigation Model
//!
//! Sidebar, header menu and header account area of the portal, derived from
//! the session gate. Admin-only surfaces never appear while logged out.

use serde::Serialize;

use crate::domain::session_gate::SessionGate;
use crate::domain::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    #[serde(rename = "path")]
    pub surface: Surface,
}

impl NavItem {
    const fn new(label: &'static str, surface: Surface) -> Self {
        Self { label, surface }
    }
}

/// Sidebar entries visible to everyone
pub const SIDEBAR_PUBLIC: &[NavItem] = &[
    NavItem::new("Home", Surface::Home),
    NavItem::new("Digital Services", Surface::DigitalServices),
    NavItem::new("Population Data", Surface::PopulationData),
    NavItem::new("Social Aid", Surface::SocialAid),
    NavItem::new("Village Finance", Surface::VillageFinance),
    NavItem::new("Village Profile", Surface::VillageProfile),
    NavItem::new("Attendance System", Surface::Attendance),
];

/// Sidebar entry appended for a logged-in admin
pub const SIDEBAR_ADMIN: NavItem = NavItem::new("Admin Settings", Surface::AdminSettings);

/// Header menu, independent of the session
pub const HEADER_MENU: &[NavItem] = &[
    NavItem::new("Beranda", Surface::Home),
    NavItem::new("Layanan Digital", Surface::DigitalServices),
    NavItem::new("Data Penduduk", Surface::PopulationData),
    NavItem::new("Bantuan Sosial", Surface::SocialAid),
    NavItem::new("Keuangan Desa", Surface::VillageFinance),
    NavItem::new("Profil Desa", Surface::VillageProfile),
];

/// Label of the header's log-out action
pub const LOGOUT_LABEL: &str = "Keluar";

/// Header account area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum AccountAffordance {
    /// Link to the admin login surface
    Anonymous { login: NavItem },
    /// Account dropdown plus the log-out action
    #[serde(rename_all = "camelCase")]
    Admin {
        menu: Vec<NavItem>,
        logout_label: &'static str,
    },
}

impl AccountAffordance {
    pub fn for_session(authenticated: bool) -> Self {
        if authenticated {
            AccountAffordance::Admin {
                menu: vec![
                    NavItem::new("Profil Admin", Surface::AdminProfile),
                    NavItem::new("Pengaturan", Surface::AdminSettings),
                ],
                logout_label: LOGOUT_LABEL,
            }
        } else {
            AccountAffordance::Anonymous {
                login: NavItem::new("Masuk Admin", Surface::AdminLogin),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub sidebar: Vec<NavItem>,
    pub header_menu: Vec<NavItem>,
    pub account: AccountAffordance,
}

impl Navigation {
    /// Every surface reachable from this navigation
    pub fn surfaces(&self) -> impl Iterator<Item = Surface> + '_ {
        let account: Vec<Surface> = match &self.account {
            AccountAffordance::Anonymous { login } => vec![login.surface],
            AccountAffordance::Admin { menu, .. } => menu.iter().map(|i| i.surface).collect(),
        };
        self.sidebar
            .iter()
            .chain(self.header_menu.iter())
            .map(|item| item.surface)
            .chain(account)
    }
}

/// Navigation for the gate's current state
pub fn navigation_for(gate: &SessionGate) -> Navigation {
    let authenticated = gate.is_authenticated();

    let mut sidebar = SIDEBAR_PUBLIC.to_vec();
    if authenticated {
        sidebar.push(SIDEBAR_ADMIN);
    }

    Navigation {
        sidebar,
        header_menu: HEADER_MENU.to_vec(),
        account: AccountAffordance::for_session(authenticated),
    }
}
