use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::FacetValue;

/// Declares a closed enum whose serde wire name and facet string share one table.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:tt,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl FacetValue for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }
    };
}

wire_enum! {
    /// Study track a member has chosen.
    pub enum Konsentrasi {
        SoftwareEngineer => "Software Engineer",
        ItGovernance => "IT Governance",
        DataAnalyst => "Data Analyst",
        BisnisDigital => "Bisnis Digital",
        BelumDipilih => "Belum Dipilih",
        CloudInfrastructure => "Cloud Infrastructure & DevOps",
        DataAnalystBisnisDigital => "Data Analyst Dan Bisnis Digital",
    }
}

impl Konsentrasi {
    /// Tracks offered as directory filter buttons, in display order.
    pub const FILTER_OPTIONS: [Self; 4] = [
        Self::SoftwareEngineer,
        Self::ItGovernance,
        Self::DataAnalystBisnisDigital,
        Self::CloudInfrastructure,
    ];
}

wire_enum! {
    pub enum Divisi {
        DigitalKreatif => "Digital & Kreatif",
        MinatBakat => "Minat & Bakat",
        Humas => "HUMAS",
        PengurusInti => "Pengurus Inti",
        BelumBergabung => "Belum Bergabung",
    }
}

impl Divisi {
    pub const FILTER_OPTIONS: [Self; 4] = [
        Self::DigitalKreatif,
        Self::MinatBakat,
        Self::Humas,
        Self::BelumBergabung,
    ];
}

wire_enum! {
    /// Organizational role inside the cohort.
    pub enum Role {
        KetuaAngkatan => "Ketua Angkatan",
        WakilKetua => "Wakil Ketua",
        WakilKetuaAngkatan => "Wakil Ketua Angkatan",
        SekretarisA => "Sekretaris A",
        SekretarisB => "Sekretaris B",
        BendaharaA => "Bendahara A",
        BendaharaB => "Bendahara B",
        KoordinatorDivisi => "Koordinator Divisi",
        AnggotaDivisi => "Anggota Divisi",
        Member => "Member",
        Anggota => "Anggota",
    }
}

wire_enum! {
    pub enum PhotoCategory {
        Events => "events",
        Portrait => "portrait",
        Activities => "activities",
        Dokumentasi => "dokumentasi",
        Animasi3d => "3d-animasi",
    }
}

impl PhotoCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::Portrait => "Portrait",
            Self::Activities => "Activities",
            Self::Dokumentasi => "Dokumentasi",
            Self::Animasi3d => "3D & Animasi",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Present handles as `(platform, handle, profile url)`, in a fixed platform order.
    pub fn entries(&self) -> Vec<(&'static str, &str, String)> {
        let mut out = Vec::new();
        if let Some(handle) = self.instagram.as_deref() {
            let user = handle.trim_start_matches('@');
            out.push(("instagram", handle, format!("https://instagram.com/{user}")));
        }
        if let Some(handle) = self.linkedin.as_deref() {
            out.push(("linkedin", handle, format!("https://linkedin.com/in/{handle}")));
        }
        if let Some(handle) = self.github.as_deref() {
            out.push(("github", handle, format!("https://github.com/{handle}")));
        }
        if let Some(handle) = self.twitter.as_deref() {
            let user = handle.trim_start_matches('@');
            out.push(("twitter", handle, format!("https://twitter.com/{user}")));
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.instagram.is_none()
            && self.linkedin.is_none()
            && self.github.is_none()
            && self.twitter.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub nim: String,
    pub konsentrasi: Konsentrasi,
    pub email: String,
    pub photo_url: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisi: Option<Divisi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub social: SocialLinks,
}

impl Member {
    /// Up to two initials, used while the portrait is still loading.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPhoto {
    pub id: String,
    pub url: String,
    pub caption: String,
    pub category: PhotoCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub location: String,
    pub participants_count: u32,
    pub featured_image: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub divisi_involved: Vec<Divisi>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    /// Element id the anchor scrolls to (`"#gallery"` -> `"gallery"`).
    pub fn target_id(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}
