/// Static marketing sections
///
/// Presentational copy from the workshop's site: hero, services,
/// testimonials, about, location and contact. No state beyond the messages
/// the header emits for navigation.
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{border, Element, Length, Theme};

use crate::ui::theme::{BRASS, CARBON, LINEN, PAPER};
use crate::Message;

const SERVICES: &[(&str, &str)] = &[
    (
        "Diseño Personalizado",
        "Creamos diseños únicos adaptados a tus espacios y necesidades específicas.",
    ),
    (
        "Fabricación de Calidad",
        "Utilizamos melamina de primera calidad con acabados profesionales y duraderos.",
    ),
    (
        "Instalación Profesional",
        "Nuestro equipo realiza la instalación completa con garantía de satisfacción.",
    ),
    (
        "Consultoría de Medidas",
        "Visita técnica gratuita para tomar medidas exactas de tus espacios.",
    ),
    (
        "Variedad de Acabados",
        "Amplia gama de colores y texturas para combinar con tu decoración.",
    ),
    (
        "Garantía de Calidad",
        "Respaldamos nuestro trabajo con garantía en materiales y mano de obra.",
    ),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "María González",
        "Excelente trabajo en mi cocina. El equipo fue muy profesional y el resultado superó mis expectativas.",
    ),
    (
        "Carlos Ramírez",
        "Contraté el closet empotrado y quedé encantado. La atención personalizada y la puntualidad fueron impecables.",
    ),
    (
        "Ana Torres",
        "El mueble de sala que diseñaron es perfecto. Aprovecharon cada espacio y el acabado es impecable.",
    ),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("Calidad Superior", "Materiales de gama alta con certificaciones de durabilidad."),
    ("Equipo Experto", "Maestros carpinteros con pasión por el detalle."),
    ("Precisión Láser", "Medidas milimétricas para encajes perfectos en tu hogar."),
    ("Garantía Total", "Acompañamiento post-venta para tu tranquilidad."),
];

pub fn header(is_admin: bool) -> Element<'static, Message> {
    let nav = if is_admin {
        button(text("Inicio").size(14))
            .style(button::text)
            .on_press(Message::ShowHome)
    } else {
        button(text("Admin").size(14))
            .style(button::text)
            .on_press(Message::ShowAdmin)
    };

    container(
        row![
            text("Taller de Melamina").size(18),
            container(nav).align_right(Length::Fill),
        ]
        .spacing(16),
    )
    .padding([12, 24])
    .style(|_: &Theme| container::Style {
        background: Some(LINEN.into()),
        ..Default::default()
    })
    .into()
}

pub fn hero() -> Element<'static, Message> {
    container(
        column![
            text("Fabricación a medida").size(13).style(brass_text),
            text("Muebles de melamina a medida — calidad y diseño para tu hogar").size(40),
            text("Salas, cocinas y empotrados personalizados. Fabricación e instalación profesional.")
                .size(18),
        ]
        .spacing(16)
        .max_width(860),
    )
    .width(Length::Fill)
    .padding([90, 24])
    .center_x(Length::Fill)
    .style(|_: &Theme| container::Style {
        background: Some(CARBON.into()),
        text_color: Some(PAPER),
        ..Default::default()
    })
    .into()
}

pub fn services() -> Element<'static, Message> {
    let cards = SERVICES
        .iter()
        .map(|(title, description)| info_card(title, description, 360.0))
        .collect();

    section(
        "Nuestros Servicios",
        "Soluciones completas para tus muebles de melamina",
        wrap_rows(cards, 3),
    )
}

pub fn testimonials() -> Element<'static, Message> {
    let cards = TESTIMONIALS
        .iter()
        .map(|(name, quote)| {
            container(
                column![
                    text("★★★★★").size(14).style(brass_text),
                    text(format!("\u{201c}{quote}\u{201d}")).size(14),
                    text(*name).size(14),
                ]
                .spacing(10),
            )
            .width(Length::Fixed(360.0))
            .padding(20)
            .style(card_style)
            .into()
        })
        .collect();

    section(
        "Lo que dicen nuestros clientes",
        "La satisfacción de nuestros clientes es nuestra mejor carta de presentación",
        wrap_rows(cards, 3),
    )
}

pub fn about() -> Element<'static, Message> {
    let cards = HIGHLIGHTS
        .iter()
        .map(|(title, description)| info_card(title, description, 300.0))
        .collect();

    section(
        "Conócenos",
        "Un taller con años de oficio en melamina de alto brillo",
        wrap_rows(cards, 4),
    )
}

pub fn location() -> Element<'static, Message> {
    section(
        "Ubícanos",
        "Visítanos en nuestra tienda o agenda una visita técnica",
        container(
            column![
                text("Av. Principal 123, Distrito").size(18),
                text("Huancayo, Perú").size(14),
            ]
            .spacing(6),
        )
        .padding(24)
        .style(card_style)
        .into(),
    )
}

pub fn contact() -> Element<'static, Message> {
    let entry = |label: &'static str, value: &'static str| {
        column![text(label).size(12).style(brass_text), text(value).size(18)].spacing(4)
    };

    section(
        "¿Listo para elevar tu espacio?",
        "Comunicación directa para proyectos extraordinarios de melamina",
        container(
            column![
                entry("WhatsApp Concierge", "+51 979 923 148"),
                entry("Correo Oficial", "taller@melamina.pe"),
                entry("Horario", "Lun - Sáb, 9:00 - 19:00"),
            ]
            .spacing(18),
        )
        .padding(24)
        .style(card_style)
        .into(),
    )
}

pub fn footer() -> Element<'static, Message> {
    container(
        text("Taller de Melamina — fabricación e instalación a medida")
            .size(13)
            .style(|_: &Theme| text::Style { color: Some(PAPER) }),
    )
    .width(Length::Fill)
    .padding(28)
    .center_x(Length::Fill)
    .style(|_: &Theme| container::Style {
        background: Some(CARBON.into()),
        ..Default::default()
    })
    .into()
}

// ── helpers ──────────────────────────────────────────────────────

fn section(
    title: &'static str,
    subtitle: &'static str,
    body: Element<'static, Message>,
) -> Element<'static, Message> {
    column![
        text(title).size(34),
        text(subtitle).size(15).style(brass_text),
        body,
    ]
    .spacing(18)
    .padding([40, 24])
    .into()
}

fn info_card(title: &'static str, description: &'static str, width: f32) -> Element<'static, Message> {
    container(column![text(title).size(18), text(description).size(14)].spacing(8))
        .width(Length::Fixed(width))
        .padding(20)
        .style(card_style)
        .into()
}

/// Lay cards out in rows of `per_row`; plain rows are enough for these
/// fixed-size sections.
fn wrap_rows(cards: Vec<Element<'static, Message>>, per_row: usize) -> Element<'static, Message> {
    let mut rows: Vec<Element<'static, Message>> = Vec::new();
    let mut current: Vec<Element<'static, Message>> = Vec::new();

    for card in cards {
        current.push(card);
        if current.len() == per_row {
            rows.push(Row::with_children(std::mem::take(&mut current)).spacing(20).into());
        }
    }
    if !current.is_empty() {
        rows.push(Row::with_children(current).spacing(20).into());
    }

    Column::with_children(rows).spacing(20).into()
}

fn brass_text(_theme: &Theme) -> text::Style {
    text::Style { color: Some(BRASS) }
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Color::WHITE.into()),
        border: border::rounded(14.0),
        ..Default::default()
    }
}
