/// Admin surface
///
/// Login form plus the management panel for portfolio entries and
/// categories. All form state lives in `AdminState` on the application;
/// these views only render it and emit messages.
use iced::widget::{button, column, container, pick_list, row, text, text_input, Column};
use iced::{border, Element, Length, Theme};

use crate::state::data::{Category, Project};
use crate::ui::theme::BRASS;
use crate::Message;

/// An image picked from disk, read into memory and waiting to be uploaded
/// together with the project insert.
#[derive(Debug, Clone)]
pub struct PickedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Projects,
    Categories,
}

/// Form and session state for the whole admin surface.
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub login_user: String,
    pub login_pass: String,
    pub tab: AdminTab,

    // Project form
    pub title: String,
    pub description: String,
    pub category_choice: Option<String>,
    pub image: Option<PickedImage>,
    /// Id of the project being edited; `None` while creating
    pub editing: Option<String>,
    pub submitting: bool,

    // Category form
    pub category_name: String,
    pub category_description: String,
}

impl AdminState {
    pub fn clear_project_form(&mut self) {
        self.title.clear();
        self.description.clear();
        self.category_choice = None;
        self.image = None;
        self.editing = None;
        self.submitting = false;
    }

    pub fn clear_category_form(&mut self) {
        self.category_name.clear();
        self.category_description.clear();
        self.submitting = false;
    }
}

pub fn login_view(state: &AdminState) -> Element<'_, Message> {
    let form = column![
        text("Login Admin").size(26),
        labeled(
            "Usuario",
            text_input("", &state.login_user)
                .on_input(Message::LoginUserChanged)
                .into(),
        ),
        labeled(
            "Contraseña",
            text_input("", &state.login_pass)
                .secure(true)
                .on_input(Message::LoginPassChanged)
                .on_submit(Message::LoginSubmitted)
                .into(),
        ),
        button(text("Ingresar").size(14))
            .style(button::primary)
            .on_press(Message::LoginSubmitted),
    ]
    .spacing(14);

    container(container(form).padding(32).max_width(420).style(panel_style))
        .width(Length::Fill)
        .padding(80)
        .center_x(Length::Fill)
        .into()
}

pub fn panel<'a>(
    state: &'a AdminState,
    categories: &'a [Category],
    projects: &'a [Project],
) -> Element<'a, Message> {
    let tab_chip = |label, tab: AdminTab| {
        let style = if state.tab == tab {
            button::primary
        } else {
            button::secondary
        };
        button(text(label).size(13))
            .style(style)
            .on_press(Message::AdminTabSelected(tab))
    };

    let bar = row![
        tab_chip("Portafolio", AdminTab::Projects),
        tab_chip("Categorías", AdminTab::Categories),
        container(
            button(text("Cerrar sesión").size(13))
                .style(button::danger)
                .on_press(Message::LoggedOut),
        )
        .align_right(Length::Fill),
    ]
    .spacing(8);

    let body: Element<'a, Message> = match state.tab {
        AdminTab::Projects => project_tab(state, categories, projects),
        AdminTab::Categories => category_tab(state, categories),
    };

    column![bar, body].spacing(24).padding(24).into()
}

fn project_tab<'a>(
    state: &'a AdminState,
    categories: &'a [Category],
    projects: &'a [Project],
) -> Element<'a, Message> {
    let heading = if state.editing.is_some() {
        "Editar Portafolio"
    } else {
        "Agregar Portafolio"
    };

    let category_names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
    let category_field: Element<'a, Message> = if category_names.is_empty() {
        text("No hay categorías creadas").size(13).into()
    } else {
        pick_list(
            category_names,
            state.category_choice.clone(),
            Message::ProjectCategorySelected,
        )
        .placeholder("Selecciona una categoría")
        .into()
    };

    let image_label = match &state.image {
        Some(picked) => picked.file_name.as_str(),
        None => "Sin imagen seleccionada",
    };

    let submit_label = if state.submitting {
        "Guardando..."
    } else if state.editing.is_some() {
        "Guardar cambios"
    } else {
        "Agregar Portafolio"
    };
    let mut submit = button(text(submit_label).size(14)).style(button::primary);
    if !state.submitting {
        submit = submit.on_press(Message::SubmitProject);
    }

    let mut actions = row![submit].spacing(8);
    if state.editing.is_some() {
        actions = actions.push(
            button(text("Cancelar").size(14))
                .style(button::text)
                .on_press(Message::CancelProjectEdit),
        );
    }

    let form = column![
        text(heading).size(22),
        labeled(
            "Nombre del proyecto",
            text_input("", &state.title)
                .on_input(Message::ProjectTitleChanged)
                .into(),
        ),
        labeled("Categoría", category_field),
        labeled(
            "Descripción",
            text_input("", &state.description)
                .on_input(Message::ProjectDescriptionChanged)
                .into(),
        ),
        labeled(
            "Imagen",
            row![
                button(text("Seleccionar imagen").size(13))
                    .style(button::secondary)
                    .on_press(Message::PickProjectImage),
                text(image_label).size(13),
            ]
            .spacing(10)
            .into(),
        ),
        actions,
    ]
    .spacing(12);

    let list = project_list(projects);

    row![
        container(form).padding(24).width(Length::Fixed(480.0)).style(panel_style),
        container(list).padding(24).width(Length::Fill).style(panel_style),
    ]
    .spacing(24)
    .into()
}

fn project_list(projects: &[Project]) -> Element<'_, Message> {
    if projects.is_empty() {
        return text("No hay proyectos aún.").size(14).into();
    }

    let rows: Vec<Element<'_, Message>> = projects
        .iter()
        .map(|project| {
            row![
                column![
                    text(&project.title).size(15),
                    text(project.category_label()).size(12).style(|_: &Theme| {
                        text::Style { color: Some(BRASS) }
                    }),
                ]
                .spacing(2)
                .width(Length::Fill),
                button(text("Editar").size(12))
                    .style(button::secondary)
                    .on_press(Message::EditProject(project.clone())),
                button(text("Eliminar").size(12))
                    .style(button::danger)
                    .on_press(Message::DeleteProject(project.id.clone())),
            ]
            .spacing(8)
            .into()
        })
        .collect();

    column![
        text("Proyectos").size(18),
        Column::with_children(rows).spacing(10),
    ]
    .spacing(12)
    .into()
}

fn category_tab<'a>(state: &'a AdminState, categories: &'a [Category]) -> Element<'a, Message> {
    let mut submit = button(text("Crear Categoría").size(14)).style(button::primary);
    if !state.submitting {
        submit = submit.on_press(Message::SubmitCategory);
    }

    let form = column![
        text("Crear Categoría").size(22),
        labeled(
            "Nombre",
            text_input("", &state.category_name)
                .on_input(Message::CategoryNameChanged)
                .into(),
        ),
        labeled(
            "Descripción",
            text_input("", &state.category_description)
                .on_input(Message::CategoryDescriptionChanged)
                .into(),
        ),
        submit,
    ]
    .spacing(12);

    let list: Element<'a, Message> = if categories.is_empty() {
        text("No hay categorías aún.").size(14).into()
    } else {
        let rows: Vec<Element<'a, Message>> = categories
            .iter()
            .map(|category| {
                row![
                    column![
                        text(&category.name).size(15),
                        text(category.description.as_deref().unwrap_or("")).size(12),
                    ]
                    .spacing(2)
                    .width(Length::Fill),
                    button(text("Eliminar").size(12))
                        .style(button::danger)
                        .on_press(Message::DeleteCategory(category.id.clone())),
                ]
                .spacing(8)
                .into()
            })
            .collect();
        Column::with_children(rows).spacing(10).into()
    };

    row![
        container(form).padding(24).width(Length::Fixed(420.0)).style(panel_style),
        container(column![text("Categorías").size(18), list].spacing(12))
            .padding(24)
            .width(Length::Fill)
            .style(panel_style),
    ]
    .spacing(24)
    .into()
}

fn labeled<'a>(label: &'a str, field: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(13), field].spacing(4).into()
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Color::WHITE.into()),
        border: border::rounded(14.0),
        ..Default::default()
    }
}
