use cloudsi_shared::{
    Divisi, Facet, FacetValue, FilterState, Konsentrasi, Member, MemberFacets, Role, Selection,
    apply_filters, site,
};
use leptos::prelude::*;

use crate::about::SectionHeader;
use crate::app::MemberSelection;
use crate::colors::{INK, OCEAN, SKY_LIGHT, SLATE, avatar_tint};
use crate::filter_controls::{facet_chips, search_box};
use crate::icons;
use crate::overlay::Overlay;

/// Badge background per role; leadership is darkest.
pub(crate) fn role_badge_color(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::KetuaAngkatan | Role::WakilKetua | Role::WakilKetuaAngkatan) => "#1e3a8a",
        Some(Role::SekretarisA | Role::SekretarisB) => "#1e40af",
        Some(Role::BendaharaA | Role::BendaharaB | Role::KoordinatorDivisi) => "#0284c7",
        Some(Role::AnggotaDivisi) => "#0d9488",
        Some(Role::Anggota | Role::Member) | None => "#94a3b8",
    }
}

pub(crate) fn results_label(shown: usize, total: usize) -> String {
    format!("Menampilkan {shown} dari {total} anggota")
}

#[component]
pub fn MembersDirectory() -> impl IntoView {
    let MemberSelection(selection) = expect_context();
    let query = RwSignal::new(String::new());
    let konsentrasi = RwSignal::new(Facet::<Konsentrasi>::All);
    let divisi = RwSignal::new(Facet::<Divisi>::All);
    let total = site().members.len();

    let filtered = Memo::new(move |_| {
        let facets = MemberFacets {
            konsentrasi: konsentrasi.get(),
            divisi: divisi.get(),
            role: Facet::All,
        };
        apply_filters(&site().members, &FilterState::new(query.get(), facets))
    });

    view! {
        <section id="members" style="position: relative; padding: 96px 0; background: linear-gradient(to bottom, #ffffff, #f8fbff);">
            <div style="max-width: 1280px; margin: 0 auto; padding: 0 16px;">
                <SectionHeader
                    badge="Members"
                    title="Anggota CloudSI"
                    lead="Kenali lebih dekat para mahasiswa Sistem Informasi UNTAN angkatan 2025 dan struktur organisasi CloudSI."
                />

                <div style="display: flex; flex-direction: column; gap: 24px; margin-bottom: 48px;">
                    {search_box(query, "Cari nama, NIM, atau bidang...")}
                    <FacetRow title="Bidang Penjurusan">
                        {facet_chips(&Konsentrasi::FILTER_OPTIONS, Konsentrasi::as_str, konsentrasi, "active")}
                    </FacetRow>
                    <FacetRow title="Divisi">
                        {facet_chips(&Divisi::FILTER_OPTIONS, Divisi::as_str, divisi, "active-dark")}
                    </FacetRow>
                </div>

                <Show
                    when=move || !filtered.with(Vec::is_empty)
                    fallback=|| view! {
                        <div style="text-align: center; padding: 64px 0;">
                            <p style=format!("font-size: 1.125rem; color: {SLATE};")>
                                "Tidak ada anggota yang ditemukan."
                            </p>
                        </div>
                    }
                >
                    <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 24px;">
                        <For
                            each=move || filtered.get()
                            key=|member| member.id.clone()
                            children=move |member| view! { <MemberCard member=member selection=selection /> }
                        />
                    </div>
                </Show>

                <p style=format!("margin-top: 32px; text-align: center; font-size: 0.875rem; color: {SLATE};")>
                    {move || results_label(filtered.with(Vec::len), total)}
                </p>
            </div>
            <Show when=move || selection.with(Selection::is_open)>
                <MemberModal selection=selection />
            </Show>
        </section>
    }
}

#[component]
fn FacetRow(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div style="text-align: center;">
            <p style=format!("margin: 0 0 12px; font-size: 0.875rem; font-weight: 600; color: {INK};")>{title}</p>
            <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 8px;">
                {children()}
            </div>
        </div>
    }
}

fn avatar(member: &'static Member, size_px: u32) -> impl IntoView {
    let initials_style = format!(
        "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #ffffff; font-weight: 700; font-size: {}px; background: {};",
        size_px / 3,
        avatar_tint(&member.id)
    );
    let photo = (!member.photo_url.is_empty()).then(|| {
        view! {
            <img
                src=member.photo_url.clone()
                alt=member.name.clone()
                loading="lazy"
                style="position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;"
            />
        }
    });
    view! {
        <div style=format!("position: relative; width: {size_px}px; height: {size_px}px; border-radius: 9999px; overflow: hidden; border: 4px solid #ffffff; box-shadow: 0 4px 12px rgba(0,0,0,0.1); flex-shrink: 0;")>
            <div style=initials_style>{member.initials()}</div>
            {photo}
        </div>
    }
}

fn tag(text: &'static str, background: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <span style=format!("display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; background: {background}; color: {color};")>
            {text}
        </span>
    }
}

fn social_links(member: &'static Member) -> impl IntoView {
    member
        .social
        .entries()
        .into_iter()
        .map(|(platform, handle, url)| {
            view! {
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    title=handle.to_owned()
                    on:click=|e| e.stop_propagation()
                    style=format!("display: inline-flex; align-items: center; justify-content: center; width: 36px; height: 36px; border-radius: 9999px; background: {SKY_LIGHT}; color: {OCEAN}; font-size: 0.75rem; font-weight: 700; text-decoration: none;")
                >
                    {icons::social_badge(platform)}
                </a>
            }
        })
        .collect_view()
}

#[component]
fn MemberCard(member: &'static Member, selection: RwSignal<Selection<String>>) -> impl IntoView {
    let id = member.id.clone();
    view! {
        <div
            class="card-hover"
            style=format!("background: #ffffff; border-radius: 16px; border: 1px solid {SKY_LIGHT}; padding: 24px; cursor: pointer; display: flex; flex-direction: column; align-items: center; text-align: center; gap: 8px;")
            on:click=move |_| selection.update(|s| s.open(id.clone()))
        >
            {avatar(member, 120)}
            <h4 style=format!("margin: 8px 0 0; font-size: 1.125rem; font-weight: 700; color: {INK};")>
                {member.name.clone()}
            </h4>
            {member.role.map(|role| tag(role.as_str(), role_badge_color(Some(role)), "#ffffff"))}
            <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 6px;">
                {tag(member.konsentrasi.as_str(), SKY_LIGHT, OCEAN)}
                {member.divisi.map(|d| tag(d.as_str(), "#f1f5f9", SLATE))}
            </div>
            <p style=format!("margin: 0; font-size: 0.875rem; line-height: 1.5; color: {SLATE}; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden;")>
                {member.bio.clone()}
            </p>
            <div style="display: flex; gap: 8px; margin-top: 4px;">{social_links(member)}</div>
        </div>
    }
}

#[component]
fn MemberModal(selection: RwSignal<Selection<String>>) -> impl IntoView {
    let member = move || {
        selection.with(|s| s.current().and_then(|id| site().member(id)))
    };

    view! {
        <Overlay on_close=move || selection.update(Selection::close) max_width="560px">
            {move || member().map(|member| view! {
                <div style="height: 112px; background: linear-gradient(135deg, #87ceeb, #0369a1);" />
                <div style="display: flex; flex-direction: column; align-items: center; margin-top: -64px; padding: 0 24px 32px; text-align: center; gap: 12px;">
                    {avatar(member, 128)}
                    <h3 style=format!("margin: 0; font-size: 1.5rem; font-weight: 700; color: {INK};")>
                        {member.name.clone()}
                    </h3>
                    <p style=format!("margin: 0; font-size: 0.875rem; color: {SLATE};")>{member.nim.clone()}</p>
                    {member.role.map(|role| tag(role.as_str(), role_badge_color(Some(role)), "#ffffff"))}
                    <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 6px;">
                        {tag(member.konsentrasi.as_str(), SKY_LIGHT, OCEAN)}
                        {member.divisi.map(|d| tag(d.as_str(), "#f1f5f9", SLATE))}
                    </div>
                    <p style=format!("margin: 0; line-height: 1.7; color: {SLATE};")>{member.bio.clone()}</p>
                    <a
                        href=format!("mailto:{}", member.email)
                        style=format!("display: inline-flex; align-items: center; gap: 8px; color: {OCEAN}; text-decoration: none; font-size: 0.875rem;")
                    >
                        {icons::glyph("mail")}
                        " "
                        {member.email.clone()}
                    </a>
                    <div style="display: flex; gap: 12px;">{social_links(member)}</div>
                </div>
            })}
        </Overlay>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leadership_badges_share_the_darkest_color() {
        let ketua = role_badge_color(Some(Role::KetuaAngkatan));
        assert_eq!(ketua, role_badge_color(Some(Role::WakilKetua)));
        assert_eq!(ketua, role_badge_color(Some(Role::WakilKetuaAngkatan)));
        assert_ne!(ketua, role_badge_color(Some(Role::SekretarisA)));
    }

    #[test]
    fn plain_members_and_missing_roles_look_the_same() {
        assert_eq!(role_badge_color(None), role_badge_color(Some(Role::Member)));
        assert_eq!(role_badge_color(None), role_badge_color(Some(Role::Anggota)));
    }

    #[test]
    fn results_label_reads_shown_of_total() {
        assert_eq!(results_label(3, 20), "Menampilkan 3 dari 20 anggota");
        assert_eq!(results_label(0, 20), "Menampilkan 0 dari 20 anggota");
    }

    #[test]
    fn divisi_facet_counts_match_embedded_dataset() {
        let facets = MemberFacets {
            divisi: Facet::Only(Divisi::Humas),
            ..MemberFacets::default()
        };
        let members = &site().members;
        let humas = apply_filters(members, &FilterState::new("", facets));
        assert_eq!(
            results_label(humas.len(), members.len()),
            "Menampilkan 3 dari 20 anggota"
        );
    }
}
