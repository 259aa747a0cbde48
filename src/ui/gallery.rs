/// Gallery rendering
///
/// Pure presentation over the carousel engine: these views consume the
/// render sequence, offset and view state as plain data and emit gallery
/// events. Card shape and colors live here; ordering and motion do not.
use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, mouse_area, row, scrollable, text, Row};
use iced::{border, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::carousel::{CardMetrics, Gallery};
use crate::materials;
use crate::state::data::{Category, FilterKey, Material, Project, ViewMode};
use crate::ui::theme::{BRASS, CARBON, LINEN, PAPER};
use crate::{GalleryEvent, Message};

/// Card geometry for the two gallery sections. The engine derives its wrap
/// distance from these, so they are the single source of truth for both
/// layout and animation.
pub const PORTFOLIO_METRICS: CardMetrics = CardMetrics::new(360.0, 32.0);
pub const MATERIAL_METRICS: CardMetrics = CardMetrics::new(280.0, 32.0);

const PORTFOLIO_IMAGE_HEIGHT: f32 = 260.0;
const SWATCH_HEIGHT: f32 = 340.0;

/// The complete portfolio section: heading, filter chips, mode toggle and
/// the strip or grid of project cards.
pub fn portfolio_section<'a>(
    gallery: &'a Gallery<Project>,
    categories: &'a [Category],
    thumbnails: &'a HashMap<String, Handle>,
    scroll_id: scrollable::Id,
) -> Element<'a, Message> {
    let heading = section_heading(
        "Nuestro Portafolio",
        "Descubre algunos de nuestros proyectos más destacados",
    );

    let mut chips = vec![filter_chip(
        "Todos",
        gallery.selected_filter() == &FilterKey::All,
        FilterKey::All,
        Message::PortfolioGallery,
    )];
    for category in categories {
        let key = FilterKey::Category(category.id.clone());
        chips.push(filter_chip(
            &category.name,
            gallery.selected_filter() == &key,
            key,
            Message::PortfolioGallery,
        ));
    }

    let controls = row![
        Row::with_children(chips).spacing(8),
        mode_toggle(gallery.view_mode(), Message::PortfolioGallery),
    ]
    .spacing(24);

    let cards: Vec<Element<'a, Message>> = gallery
        .cards()
        .iter()
        .map(|project| project_card(project, thumbnails.get(&project.id)))
        .collect();

    let body: Element<'a, Message> = if cards.is_empty() {
        empty_state("Esperando nuevas colecciones")
    } else {
        match gallery.view_mode() {
            ViewMode::Carousel => strip(
                cards,
                PORTFOLIO_METRICS,
                scroll_id,
                Message::PortfolioGallery,
            ),
            ViewMode::Grid => grid(cards),
        }
    };

    column![heading, controls, body]
        .spacing(24)
        .padding([40, 24])
        .into()
}

/// The material catalog section, fed by the compiled-in swatch list.
pub fn material_section<'a>(
    gallery: &'a Gallery<Material>,
    scroll_id: scrollable::Id,
) -> Element<'a, Message> {
    let heading = section_heading("Texturas & Acabados", "Jastel High Gloss");

    let mut chips = vec![filter_chip(
        "Todas las carpetas",
        gallery.selected_filter() == &FilterKey::All,
        FilterKey::All,
        Message::MaterialGallery,
    )];
    for folder in materials::folders() {
        let key = FilterKey::Category(folder.to_string());
        chips.push(filter_chip(
            folder,
            gallery.selected_filter() == &key,
            key,
            Message::MaterialGallery,
        ));
    }

    let controls = row![
        Row::with_children(chips).spacing(8),
        mode_toggle(gallery.view_mode(), Message::MaterialGallery),
    ]
    .spacing(24);

    let cards: Vec<Element<'a, Message>> = gallery.cards().iter().map(material_card).collect();

    let body: Element<'a, Message> = if cards.is_empty() {
        empty_state("Sin materiales en esta carpeta")
    } else {
        match gallery.view_mode() {
            ViewMode::Carousel => {
                strip(cards, MATERIAL_METRICS, scroll_id, Message::MaterialGallery)
            }
            ViewMode::Grid => grid(cards),
        }
    };

    column![heading, controls, body]
        .spacing(24)
        .padding([40, 24])
        .into()
}

/// Full-page detail for a clicked project card.
pub fn project_detail<'a>(project: &'a Project, thumbnail: Option<&'a Handle>) -> Element<'a, Message> {
    let photo: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(420.0))
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(420.0),
    };

    column![
        back_button(),
        photo,
        badge(project.category_label()),
        text(&project.title).size(34),
        text(&project.description).size(16),
    ]
    .spacing(16)
    .padding(32)
    .max_width(900)
    .into()
}

/// Full-page detail for a clicked material swatch, with the shared panel
/// data from the catalog.
pub fn material_detail<'a>(material: &'a Material) -> Element<'a, Message> {
    column![
        back_button(),
        swatch_face(material, 320.0),
        badge(material.folder),
        text(material.name).size(34),
        text(format!("Ref ID: {}", material.reference)).size(14),
        data_row("Formato Panel", materials::PANEL_FORMAT),
        data_row("Grosor Núcleo", materials::PANEL_CORE),
        data_row("Acabado Final", material.finish),
        data_row("Resistencia", materials::PANEL_RESISTANCE),
    ]
    .spacing(12)
    .padding(32)
    .max_width(700)
    .into()
}

// ── building blocks ──────────────────────────────────────────────

fn section_heading<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(42),
        text(subtitle).size(16).style(|_: &Theme| text::Style {
            color: Some(BRASS),
        }),
    ]
    .spacing(6)
    .into()
}

fn filter_chip<'a>(
    label: &'a str,
    active: bool,
    key: FilterKey,
    wrap: fn(GalleryEvent) -> Message,
) -> Element<'a, Message> {
    let style = if active {
        button::primary
    } else {
        button::secondary
    };
    button(text(label).size(13))
        .style(style)
        .on_press(wrap(GalleryEvent::FilterSelected(key)))
        .into()
}

fn mode_toggle<'a>(current: ViewMode, wrap: fn(GalleryEvent) -> Message) -> Element<'a, Message> {
    let chip = |label, mode: ViewMode| {
        let style = if current == mode {
            button::primary
        } else {
            button::text
        };
        button(text(label).size(13))
            .style(style)
            .on_press(wrap(GalleryEvent::ModeSelected(mode)))
    };
    row![chip("Carrusel", ViewMode::Carousel), chip("Ver Todo", ViewMode::Grid)]
        .spacing(4)
        .into()
}

/// The looping strip: a horizontal scrollable with hidden scrollbars whose
/// offset is driven by the animation driver, wrapped in a mouse area so
/// hovering pauses the loop.
fn strip<'a>(
    cards: Vec<Element<'a, Message>>,
    metrics: CardMetrics,
    scroll_id: scrollable::Id,
    wrap: fn(GalleryEvent) -> Message,
) -> Element<'a, Message> {
    let track = Row::with_children(cards).spacing(metrics.spacing);

    let viewport = scrollable(track)
        .id(scroll_id)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill);

    mouse_area(viewport)
        .on_enter(wrap(GalleryEvent::HoverEntered))
        .on_exit(wrap(GalleryEvent::HoverLeft))
        .into()
}

fn grid<'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Wrap::with_elements(cards)
        .spacing(24.0)
        .line_spacing(24.0)
        .into()
}

fn project_card<'a>(project: &'a Project, thumbnail: Option<&'a Handle>) -> Element<'a, Message> {
    let photo: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PORTFOLIO_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(PORTFOLIO_IMAGE_HEIGHT),
    };

    let body = column![
        photo,
        column![
            badge(project.category_label()),
            text(&project.title).size(20),
            text(&project.description).size(14),
        ]
        .spacing(6)
        .padding(16),
    ];

    let card = container(body)
        .width(Length::Fixed(PORTFOLIO_METRICS.card_width))
        .style(card_style);

    mouse_area(card)
        .on_press(Message::OpenProject(project.clone()))
        .into()
}

fn material_card(material: &Material) -> Element<'_, Message> {
    let body = column![
        swatch_face(material, SWATCH_HEIGHT - 120.0),
        column![
            badge(material.folder),
            text(material.name).size(20),
            text(format!("Ref {}", material.reference)).size(13),
        ]
        .spacing(6)
        .padding(16),
    ];

    let card = container(body)
        .width(Length::Fixed(MATERIAL_METRICS.card_width))
        .height(Length::Fixed(SWATCH_HEIGHT))
        .style(card_style);

    mouse_area(card)
        .on_press(Message::OpenMaterial(material.clone()))
        .into()
}

/// Stand-in face for a swatch; the physical sample book is the real
/// reference, so the card shows the finish block rather than a photo.
fn swatch_face(material: &Material, height: f32) -> Element<'_, Message> {
    container(
        text(material.finish)
            .size(13)
            .style(|_: &Theme| text::Style {
                color: Some(CARBON),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(height))
    .style(|_: &Theme| container::Style {
        background: Some(LINEN.into()),
        border: border::rounded(12.0),
        ..Default::default()
    })
    .into()
}

fn badge(label: &str) -> Element<'_, Message> {
    container(text(label).size(11).style(|_: &Theme| text::Style {
        color: Some(PAPER),
    }))
    .padding([3, 10])
    .style(|_: &Theme| container::Style {
        background: Some(BRASS.into()),
        border: border::rounded(8.0),
        ..Default::default()
    })
    .into()
}

fn placeholder(height: f32) -> Element<'static, Message> {
    container(text("Sin imagen").size(13))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(|_: &Theme| container::Style {
            background: Some(LINEN.into()),
            ..Default::default()
        })
        .into()
}

fn empty_state(message: &str) -> Element<'_, Message> {
    container(text(message).size(15))
        .width(Length::Fill)
        .padding(60)
        .center_x(Length::Fill)
        .into()
}

fn back_button<'a>() -> Element<'a, Message> {
    button(text("← Volver").size(14))
        .style(button::text)
        .on_press(Message::CloseDetail)
        .into()
}

fn data_row<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    row![
        text(label).size(12).width(Length::Fill),
        text(value).size(14),
    ]
    .into()
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Color::WHITE.into()),
        border: border::rounded(16.0),
        ..Default::default()
    }
}
