use std::fmt;

use serde::{Deserialize, Serialize};

use crate::site::{Divisi, GalleryPhoto, Konsentrasi, Member, PhotoCategory, Role};

/// Label of the "no restriction" choice on every facet.
pub const ALL_LABEL: &str = "All";

/// A closed enumeration that can be used as a facet dimension.
pub trait FacetValue: Copy + PartialEq + 'static {
    const VARIANTS: &'static [Self];

    fn as_str(self) -> &'static str;
}

/// One categorical filter dimension: either unrestricted or pinned to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: FacetValue> Facet<T> {
    /// Parse a wire string. Empty input and "all" (any case) mean no restriction.
    pub fn parse(raw: &str) -> Result<Self, FacetParseError> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(Self::All);
        }
        T::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(raw))
            .map(Self::Only)
            .ok_or_else(|| FacetParseError {
                value: raw.to_owned(),
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(value) => value.as_str(),
        }
    }

    /// Whether an item whose attribute is `value` passes this facet.
    /// Items without the attribute only pass the unrestricted facet.
    pub fn admits(self, value: Option<T>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => value == Some(wanted),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetParseError {
    pub value: String,
}

impl fmt::Display for FacetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown facet value {:?}", self.value)
    }
}

impl std::error::Error for FacetParseError {}

/// An entity that can be narrowed by free text and by its own facet set.
pub trait Filterable {
    type Facets;

    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn matches_facets(&self, facets: &Self::Facets) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState<F> {
    pub query: String,
    pub facets: F,
}

impl<F> FilterState<F> {
    pub fn new(query: impl Into<String>, facets: F) -> Self {
        Self {
            query: query.into(),
            facets,
        }
    }
}

/// Order-preserving subsequence of `items` passing the text query and every facet.
pub fn apply_filters<'a, T: Filterable>(items: &'a [T], state: &FilterState<T::Facets>) -> Vec<&'a T> {
    let needle = state.query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(*item, &needle) && item.matches_facets(&state.facets))
        .collect()
}

/// Case-insensitive substring test. `needle` must already be lowercase.
fn matches_query<T: Filterable>(item: &T, needle: &str) -> bool {
    needle.is_empty()
        || item
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberFacets {
    pub konsentrasi: Facet<Konsentrasi>,
    pub divisi: Facet<Divisi>,
    pub role: Facet<Role>,
}

impl Filterable for Member {
    type Facets = MemberFacets;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.nim.as_str(),
            self.konsentrasi.as_str(),
        ];
        if let Some(divisi) = self.divisi {
            fields.push(divisi.as_str());
        }
        if let Some(role) = self.role {
            fields.push(role.as_str());
        }
        fields
    }

    fn matches_facets(&self, facets: &MemberFacets) -> bool {
        facets.konsentrasi.admits(Some(self.konsentrasi))
            && facets.divisi.admits(self.divisi)
            && facets.role.admits(self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhotoFacets {
    pub category: Facet<PhotoCategory>,
}

impl Filterable for GalleryPhoto {
    type Facets = PhotoFacets;

    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.caption.as_str())
            .chain(self.tags.iter().map(String::as_str))
            .collect()
    }

    fn matches_facets(&self, facets: &PhotoFacets) -> bool {
        facets.category.admits(Some(self.category))
    }
}

/// JSON envelope for filtered listings: `count` of `total` items matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredPage<T> {
    pub total: usize,
    pub count: usize,
    pub items: Vec<T>,
}

impl<T: Clone> FilteredPage<T> {
    pub fn from_matches(total: usize, matches: &[&T]) -> Self {
        Self {
            total,
            count: matches.len(),
            items: matches.iter().map(|item| (*item).clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SocialLinks;

    fn member(id: &str, name: &str, divisi: Option<Divisi>, role: Option<Role>) -> Member {
        Member {
            id: id.to_owned(),
            name: name.to_owned(),
            nim: format!("H11012510{id:0>2}"),
            konsentrasi: Konsentrasi::SoftwareEngineer,
            email: format!("{id}@student.untan.ac.id"),
            photo_url: String::new(),
            bio: String::new(),
            divisi,
            role,
            social: SocialLinks::default(),
        }
    }

    fn six_members() -> Vec<Member> {
        vec![
            member("1", "Phasacola", Some(Divisi::PengurusInti), Some(Role::KetuaAngkatan)),
            member("2", "Ferdi", Some(Divisi::Humas), Some(Role::KoordinatorDivisi)),
            member("3", "Najwa", Some(Divisi::DigitalKreatif), None),
            member("4", "Vita", Some(Divisi::MinatBakat), None),
            member("5", "Aldan", Some(Divisi::Humas), Some(Role::AnggotaDivisi)),
            member("6", "Dimas", None, Some(Role::Anggota)),
        ]
    }

    fn photo(n: u32, category: PhotoCategory) -> GalleryPhoto {
        GalleryPhoto {
            id: format!("cloudsi-{n}"),
            url: format!("/gallery/foto{n}.jpg"),
            caption: format!("Foto Bersama CloudSI - Part {n}"),
            category,
            tags: vec!["angkatan".into(), "cloudsi".into()],
            alt_text: String::new(),
            width: Some(600),
            height: Some(400),
        }
    }

    fn ids<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
        items.into_iter().map(|id| id.as_ref().to_owned()).collect()
    }

    #[test]
    fn divisi_facet_keeps_matching_members_in_order() {
        let members = six_members();
        let state = FilterState::new(
            "",
            MemberFacets {
                divisi: Facet::Only(Divisi::Humas),
                ..MemberFacets::default()
            },
        );

        let result = apply_filters(&members, &state);
        assert_eq!(ids(result.iter().map(|m| &m.id)), ["2", "5"]);
    }

    #[test]
    fn caption_query_is_case_insensitive() {
        let photos: Vec<_> = (1..=6).map(|n| photo(n, PhotoCategory::Dokumentasi)).collect();
        let state = FilterState::new("part 3", PhotoFacets::default());

        let result = apply_filters(&photos, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].caption, "Foto Bersama CloudSI - Part 3");
    }

    #[test]
    fn tags_are_searchable() {
        let mut photos: Vec<_> = (1..=3).map(|n| photo(n, PhotoCategory::Events)).collect();
        photos[1].tags.push("Pelantikan".into());
        let state = FilterState::new("pelantikan", PhotoFacets::default());

        let result = apply_filters(&photos, &state);
        assert_eq!(ids(result.iter().map(|p| &p.id)), ["cloudsi-2"]);
    }

    #[test]
    fn member_query_matches_nim_divisi_and_role() {
        let members = six_members();

        let by_nim = apply_filters(&members, &FilterState::new("h1101251004", MemberFacets::default()));
        assert_eq!(ids(by_nim.iter().map(|m| &m.id)), ["4"]);

        let by_divisi = apply_filters(&members, &FilterState::new("humas", MemberFacets::default()));
        assert_eq!(ids(by_divisi.iter().map(|m| &m.id)), ["2", "5"]);

        let by_role = apply_filters(&members, &FilterState::new("ketua", MemberFacets::default()));
        assert_eq!(ids(by_role.iter().map(|m| &m.id)), ["1"]);

        let by_track = apply_filters(
            &members,
            &FilterState::new("software", MemberFacets::default()),
        );
        assert_eq!(by_track.len(), members.len());
    }

    #[test]
    fn unrestricted_state_returns_everything() {
        let members = six_members();
        let result = apply_filters(&members, &FilterState::default());
        let expected: Vec<&Member> = members.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn facets_and_query_combine_with_and() {
        let members = six_members();
        let state = FilterState::new(
            "aldan",
            MemberFacets {
                divisi: Facet::Only(Divisi::Humas),
                role: Facet::Only(Role::AnggotaDivisi),
                ..MemberFacets::default()
            },
        );
        assert_eq!(ids(apply_filters(&members, &state).iter().map(|m| &m.id)), ["5"]);

        let conflicting = FilterState::new(
            "ferdi",
            MemberFacets {
                divisi: Facet::Only(Divisi::MinatBakat),
                ..MemberFacets::default()
            },
        );
        assert!(apply_filters(&members, &conflicting).is_empty());
    }

    #[test]
    fn concrete_facet_excludes_members_without_attribute() {
        let members = six_members();
        let state = FilterState::new(
            "",
            MemberFacets {
                role: Facet::Only(Role::KoordinatorDivisi),
                ..MemberFacets::default()
            },
        );
        assert_eq!(ids(apply_filters(&members, &state).iter().map(|m| &m.id)), ["2"]);
    }

    #[test]
    fn filtering_is_an_idempotent_ordered_subsequence() {
        let members = six_members();
        let states = [
            FilterState::new("a", MemberFacets::default()),
            FilterState::new(
                "",
                MemberFacets {
                    divisi: Facet::Only(Divisi::Humas),
                    ..MemberFacets::default()
                },
            ),
            FilterState::new("zzz", MemberFacets::default()),
        ];

        for state in &states {
            let once: Vec<Member> = apply_filters(&members, state).into_iter().cloned().collect();

            let mut cursor = members.iter();
            for kept in &once {
                assert!(cursor.any(|m| m.id == kept.id), "result must follow dataset order");
            }

            let twice: Vec<Member> = apply_filters(&once, state).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn facet_parse_accepts_sentinel_and_wire_names() {
        assert_eq!(Facet::<Divisi>::parse("All"), Ok(Facet::All));
        assert_eq!(Facet::<Divisi>::parse("all"), Ok(Facet::All));
        assert_eq!(Facet::<Divisi>::parse(""), Ok(Facet::All));
        assert_eq!(Facet::<Divisi>::parse("HUMAS"), Ok(Facet::Only(Divisi::Humas)));
        assert_eq!(
            Facet::<PhotoCategory>::parse("3d-animasi"),
            Ok(Facet::Only(PhotoCategory::Animasi3d))
        );
        assert_eq!(
            Facet::<Konsentrasi>::parse("cloud infrastructure & devops"),
            Ok(Facet::Only(Konsentrasi::CloudInfrastructure))
        );
        assert!(Facet::<Role>::parse("Presiden").is_err());
    }

    #[test]
    fn facet_label_falls_back_to_all() {
        assert_eq!(Facet::<Divisi>::All.label(), "All");
        assert_eq!(Facet::Only(Divisi::MinatBakat).label(), "Minat & Bakat");
    }

    #[test]
    fn filtered_page_counts_matches() {
        let photos: Vec<_> = (1..=4).map(|n| photo(n, PhotoCategory::Dokumentasi)).collect();
        let matches = apply_filters(&photos, &FilterState::new("part 4", PhotoFacets::default()));
        let page = FilteredPage::from_matches(photos.len(), &matches);
        assert_eq!(page.total, 4);
        assert_eq!(page.count, 1);
        assert_eq!(page.items[0].id, "cloudsi-4");
    }
}
