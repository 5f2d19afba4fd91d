//! Portal Surfaces
//!
//! Every navigable page of the village portal. Only the admin login surface
//! and the admin-only entries are governed by the session gate; the rest
//! render static content.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Home,
    DigitalServices,
    PopulationData,
    SocialAid,
    VillageFinance,
    VillageProfile,
    Attendance,
    AdminLogin,
    AdminSettings,
    AdminProfile,
}

impl Surface {
    #[inline]
    pub const fn path(&self) -> &'static str {
        use Surface::*;
        match self {
            Home => "/",
            DigitalServices => "/digital-services",
            PopulationData => "/population-data",
            SocialAid => "/social-aid",
            VillageFinance => "/village-finance",
            VillageProfile => "/village-profile",
            Attendance => "/attendance",
            AdminLogin => "/admin-login",
            AdminSettings => "/admin-settings",
            AdminProfile => "/admin-profile",
        }
    }

    /// Surfaces that must stay hidden while no admin is logged in
    #[inline]
    pub const fn is_admin_only(&self) -> bool {
        matches!(self, Surface::AdminSettings | Surface::AdminProfile)
    }
}

impl Serialize for Surface {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
