use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::widget::image::Handle;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{column, container, scrollable as scroll_view, text};
use iced::{Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use tracing_subscriber::EnvFilter;

mod backend;
mod carousel;
mod config;
mod materials;
mod state;
mod ui;

use backend::client::{CategoryPayload, ProjectPayload};
use backend::error::UploadError;
use backend::images::{self, CardImage};
use backend::{AdminGate, ImageHost, PortfolioApi};
use carousel::Gallery;
use config::AppConfig;
use state::data::{Category, FilterKey, Material, Project, ViewMode};
use ui::admin::{AdminState, AdminTab, PickedImage};
use ui::gallery::{MATERIAL_METRICS, PORTFOLIO_METRICS};

/// Which top-level surface is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Admin,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    // Catalog data
    CatalogLoaded(Result<(Vec<Category>, Vec<Project>), String>),
    ThumbnailLoaded(String, Result<CardImage, String>),

    // Navigation
    ShowHome,
    ShowAdmin,
    OpenProject(Project),
    OpenMaterial(Material),
    CloseDetail,

    // Gallery interactions
    PortfolioGallery(GalleryEvent),
    MaterialGallery(GalleryEvent),
    Tick(Instant),

    // Admin session
    LoginUserChanged(String),
    LoginPassChanged(String),
    LoginSubmitted,
    LoggedOut,
    AdminTabSelected(AdminTab),

    // Project form
    ProjectTitleChanged(String),
    ProjectDescriptionChanged(String),
    ProjectCategorySelected(String),
    PickProjectImage,
    ProjectImageRead(Result<PickedImage, String>),
    SubmitProject,
    ProjectSaved(Result<(), String>),
    EditProject(Project),
    CancelProjectEdit,
    DeleteProject(String),

    // Category form
    CategoryNameChanged(String),
    CategoryDescriptionChanged(String),
    SubmitCategory,
    CategorySaved(Result<(), String>),
    DeleteCategory(String),
    DeleteDone(Result<(), String>),
}

/// User interactions shared by both gallery sections
#[derive(Debug, Clone)]
pub enum GalleryEvent {
    FilterSelected(FilterKey),
    ModeSelected(ViewMode),
    HoverEntered,
    HoverLeft,
}

/// Main application state
struct TallerGallery {
    api: Option<PortfolioApi>,
    image_host: Option<ImageHost>,
    gate: AdminGate,
    http: reqwest::Client,

    page: Page,
    /// Status message shown in the bottom bar
    status: String,

    portfolio: Gallery<Project>,
    material_catalog: Gallery<Material>,
    categories: Vec<Category>,
    /// Card-sized images keyed by project id, fetched for the session
    thumbnails: HashMap<String, Handle>,

    portfolio_scroll: scrollable::Id,
    materials_scroll: scrollable::Id,

    selected_project: Option<Project>,
    selected_material: Option<Material>,

    admin: AdminState,
}

impl TallerGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();
        let api = PortfolioApi::from_config(&config);
        let image_host = ImageHost::from_config(&config);
        let gate = AdminGate::from_config(&config);

        let material_catalog =
            Gallery::with_items(MATERIAL_METRICS, materials::MATERIALS.to_vec());
        tracing::info!(swatches = materials::MATERIALS.len(), "material catalog ready");

        let (status, task) = match &api {
            Some(api) => (
                "Cargando portafolio...".to_string(),
                fetch_catalog_task(api.clone()),
            ),
            None => (
                "Modo sin conexión: backend no configurado".to_string(),
                Task::none(),
            ),
        };

        (
            TallerGallery {
                api,
                image_host,
                gate,
                http: reqwest::Client::new(),
                page: Page::default(),
                status,
                portfolio: Gallery::new(PORTFOLIO_METRICS),
                material_catalog,
                categories: Vec::new(),
                thumbnails: HashMap::new(),
                portfolio_scroll: scrollable::Id::unique(),
                materials_scroll: scrollable::Id::unique(),
                selected_project: None,
                selected_material: None,
                admin: AdminState::default(),
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok((categories, projects))) => {
                self.status = format!("{} proyectos en el portafolio", projects.len());
                self.categories = categories;

                let mut tasks = vec![self.snap_to_start(&self.portfolio_scroll)];
                for project in &projects {
                    let Some(url) = project.image_url.clone() else {
                        continue;
                    };
                    if self.thumbnails.contains_key(&project.id) {
                        continue;
                    }
                    let id = project.id.clone();
                    tasks.push(Task::perform(
                        images::fetch_card_image(self.http.clone(), url),
                        move |result| Message::ThumbnailLoaded(id.clone(), result),
                    ));
                }

                self.portfolio.set_items(projects);
                Task::batch(tasks)
            }
            Message::CatalogLoaded(Err(err)) => {
                // Degrade to the explicit empty state; the rest of the page
                // keeps rendering.
                tracing::error!(%err, "catalog fetch failed");
                self.portfolio.set_items(Vec::new());
                self.categories.clear();
                self.status = "No se pudo cargar el portafolio".to_string();
                Task::none()
            }
            Message::ThumbnailLoaded(id, Ok(card)) => {
                self.thumbnails
                    .insert(id, Handle::from_rgba(card.width, card.height, card.rgba));
                Task::none()
            }
            Message::ThumbnailLoaded(id, Err(err)) => {
                // The card keeps its placeholder
                tracing::warn!(project = %id, %err, "card image fetch failed");
                Task::none()
            }

            Message::ShowHome => {
                self.page = Page::Home;
                Task::none()
            }
            Message::ShowAdmin => {
                self.page = Page::Admin;
                self.selected_project = None;
                self.selected_material = None;
                Task::none()
            }
            Message::OpenProject(project) => {
                self.selected_project = Some(project);
                Task::none()
            }
            Message::OpenMaterial(material) => {
                self.selected_material = Some(material);
                Task::none()
            }
            Message::CloseDetail => {
                self.selected_project = None;
                self.selected_material = None;
                Task::none()
            }

            Message::PortfolioGallery(event) => {
                let scroll = self.portfolio_scroll.clone();
                Self::apply_gallery_event(&mut self.portfolio, event, scroll)
            }
            Message::MaterialGallery(event) => {
                let scroll = self.materials_scroll.clone();
                Self::apply_gallery_event(&mut self.material_catalog, event, scroll)
            }
            Message::Tick(now) => {
                let mut tasks = Vec::new();
                if self.portfolio.is_animating() {
                    self.portfolio.tick(now);
                    tasks.push(scrollable::scroll_to(
                        self.portfolio_scroll.clone(),
                        AbsoluteOffset {
                            x: self.portfolio.scroll_x(),
                            y: 0.0,
                        },
                    ));
                }
                if self.material_catalog.is_animating() {
                    self.material_catalog.tick(now);
                    tasks.push(scrollable::scroll_to(
                        self.materials_scroll.clone(),
                        AbsoluteOffset {
                            x: self.material_catalog.scroll_x(),
                            y: 0.0,
                        },
                    ));
                }
                Task::batch(tasks)
            }

            Message::LoginUserChanged(value) => {
                self.admin.login_user = value;
                Task::none()
            }
            Message::LoginPassChanged(value) => {
                self.admin.login_pass = value;
                Task::none()
            }
            Message::LoginSubmitted => {
                let user = self.admin.login_user.clone();
                let pass = self.admin.login_pass.clone();
                if self.gate.try_login(&user, &pass) {
                    self.status = "¡Bienvenido admin!".to_string();
                    self.admin.login_pass.clear();
                } else {
                    self.status = "Usuario o contraseña incorrectos".to_string();
                }
                Task::none()
            }
            Message::LoggedOut => {
                self.gate.logout();
                self.admin = AdminState::default();
                self.page = Page::Home;
                self.status = "Sesión cerrada".to_string();
                Task::none()
            }
            Message::AdminTabSelected(tab) => {
                self.admin.tab = tab;
                Task::none()
            }

            Message::ProjectTitleChanged(value) => {
                self.admin.title = value;
                Task::none()
            }
            Message::ProjectDescriptionChanged(value) => {
                self.admin.description = value;
                Task::none()
            }
            Message::ProjectCategorySelected(name) => {
                self.admin.category_choice = Some(name);
                Task::none()
            }
            Message::PickProjectImage => {
                // Native picker, synchronous like the folder import dialog
                let picked = FileDialog::new()
                    .set_title("Selecciona una imagen")
                    .add_filter("Imágenes", &["jpg", "jpeg", "png", "webp"])
                    .pick_file();

                match picked {
                    Some(path) => {
                        Task::perform(read_image_file(path), Message::ProjectImageRead)
                    }
                    None => Task::none(),
                }
            }
            Message::ProjectImageRead(Ok(picked)) => {
                self.status = format!("Imagen lista: {}", picked.file_name);
                self.admin.image = Some(picked);
                Task::none()
            }
            Message::ProjectImageRead(Err(err)) => {
                self.status = format!("❌ No se pudo leer la imagen: {err}");
                Task::none()
            }
            Message::SubmitProject => self.submit_project(),
            Message::ProjectSaved(Ok(())) => {
                self.status = if self.admin.editing.is_some() {
                    "✅ Cambios guardados".to_string()
                } else {
                    "✅ Portafolio agregado".to_string()
                };
                self.admin.clear_project_form();
                self.refetch()
            }
            Message::ProjectSaved(Err(err)) => {
                // Store untouched until a successful re-read
                self.admin.submitting = false;
                self.status = format!("❌ No se pudo guardar el proyecto: {err}");
                Task::none()
            }
            Message::EditProject(project) => {
                self.admin.tab = AdminTab::Projects;
                self.admin.title = project.title.clone();
                self.admin.description = project.description.clone();
                self.admin.category_choice = project.category_name.clone();
                self.admin.image = None;
                self.admin.editing = Some(project.id);
                Task::none()
            }
            Message::CancelProjectEdit => {
                self.admin.clear_project_form();
                Task::none()
            }
            Message::DeleteProject(id) => self.delete("portfolios", id),

            Message::CategoryNameChanged(value) => {
                self.admin.category_name = value;
                Task::none()
            }
            Message::CategoryDescriptionChanged(value) => {
                self.admin.category_description = value;
                Task::none()
            }
            Message::SubmitCategory => self.submit_category(),
            Message::CategorySaved(Ok(())) => {
                self.status = "Categoría creada".to_string();
                self.admin.clear_category_form();
                self.refetch()
            }
            Message::CategorySaved(Err(err)) => {
                self.admin.submitting = false;
                self.status = format!("Error al crear categoría: {err}");
                Task::none()
            }
            Message::DeleteCategory(id) => self.delete("categories", id),
            Message::DeleteDone(Ok(())) => {
                self.status = "Elemento eliminado".to_string();
                self.refetch()
            }
            Message::DeleteDone(Err(err)) => {
                self.status = format!("❌ No se pudo eliminar: {err}");
                Task::none()
            }
        }
    }

    /// Route a gallery interaction to its controller. Filter and mode
    /// changes rebuild the sequence and hard-reset the driver, so the strip
    /// is snapped back to its start before the next tick.
    fn apply_gallery_event<T>(
        gallery: &mut Gallery<T>,
        event: GalleryEvent,
        scroll_id: scrollable::Id,
    ) -> Task<Message>
    where
        T: state::store::Categorized + Clone,
    {
        match event {
            GalleryEvent::FilterSelected(key) => {
                gallery.select_filter(key);
                scrollable::scroll_to(scroll_id, AbsoluteOffset { x: 0.0, y: 0.0 })
            }
            GalleryEvent::ModeSelected(mode) => {
                gallery.select_view_mode(mode);
                scrollable::scroll_to(scroll_id, AbsoluteOffset { x: 0.0, y: 0.0 })
            }
            GalleryEvent::HoverEntered => {
                gallery.pause();
                Task::none()
            }
            GalleryEvent::HoverLeft => {
                gallery.resume();
                Task::none()
            }
        }
    }

    fn snap_to_start(&self, scroll_id: &scrollable::Id) -> Task<Message> {
        scrollable::scroll_to(scroll_id.clone(), AbsoluteOffset { x: 0.0, y: 0.0 })
    }

    /// Full re-read after any successful write; the small data volumes make
    /// this cheaper to reason about than local patching.
    fn refetch(&self) -> Task<Message> {
        match &self.api {
            Some(api) => fetch_catalog_task(api.clone()),
            None => Task::none(),
        }
    }

    fn submit_project(&mut self) -> Task<Message> {
        let Some(api) = self.api.clone() else {
            self.status = "⚠️ Backend no configurado".to_string();
            return Task::none();
        };

        let title = self.admin.title.trim().to_string();
        if title.is_empty() {
            self.status = "Nombre requerido".to_string();
            return Task::none();
        }

        let image = self.admin.image.clone();
        if image.is_some() && self.image_host.is_none() {
            // Distinct from a generic write failure: the insert is blocked,
            // nothing is sent to the backend.
            self.status = format!("❌ {}", UploadError::NotConfigured);
            return Task::none();
        }

        let category_id = self.admin.category_choice.as_ref().and_then(|name| {
            self.categories
                .iter()
                .find(|category| category.name == *name)
                .map(|category| category.id.clone())
        });

        self.admin.submitting = true;
        let host = self.image_host.clone();
        let editing = self.admin.editing.clone();
        let description = self.admin.description.trim().to_string();

        Task::perform(
            save_project(api, host, editing, title, description, category_id, image),
            Message::ProjectSaved,
        )
    }

    fn submit_category(&mut self) -> Task<Message> {
        let Some(api) = self.api.clone() else {
            self.status = "⚠️ Backend no configurado".to_string();
            return Task::none();
        };

        let name = self.admin.category_name.trim().to_string();
        if name.is_empty() {
            self.status = "Nombre requerido".to_string();
            return Task::none();
        }

        let description = self.admin.category_description.trim().to_string();
        let payload = CategoryPayload {
            name,
            description: (!description.is_empty()).then_some(description),
        };

        self.admin.submitting = true;
        Task::perform(
            async move {
                api.create_category(payload)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::CategorySaved,
        )
    }

    fn delete(&mut self, table: &'static str, id: String) -> Task<Message> {
        let Some(api) = self.api.clone() else {
            self.status = "⚠️ Backend no configurado".to_string();
            return Task::none();
        };

        Task::perform(
            async move {
                let result = match table {
                    "categories" => api.delete_category(&id).await,
                    _ => api.delete_project(&id).await,
                };
                result.map_err(|e| e.to_string())
            },
            Message::DeleteDone,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content: Element<Message> = if let Some(project) = &self.selected_project {
            scroll_view(ui::gallery::project_detail(
                project,
                self.thumbnails.get(&project.id),
            ))
            .height(Length::Fill)
            .into()
        } else if let Some(material) = &self.selected_material {
            scroll_view(ui::gallery::material_detail(material))
                .height(Length::Fill)
                .into()
        } else {
            match self.page {
                Page::Home => scroll_view(column![
                    ui::sections::hero(),
                    ui::gallery::portfolio_section(
                        &self.portfolio,
                        &self.categories,
                        &self.thumbnails,
                        self.portfolio_scroll.clone(),
                    ),
                    ui::sections::services(),
                    ui::sections::testimonials(),
                    ui::gallery::material_section(
                        &self.material_catalog,
                        self.materials_scroll.clone(),
                    ),
                    ui::sections::about(),
                    ui::sections::location(),
                    ui::sections::contact(),
                    ui::sections::footer(),
                ])
                .height(Length::Fill)
                .into(),
                Page::Admin => {
                    if self.gate.is_logged_in() {
                        scroll_view(ui::admin::panel(
                            &self.admin,
                            &self.categories,
                            self.portfolio.items(),
                        ))
                        .height(Length::Fill)
                        .into()
                    } else {
                        ui::admin::login_view(&self.admin)
                    }
                }
            }
        };

        let status_bar = container(text(&self.status).size(13)).padding([6, 24]);

        column![
            ui::sections::header(self.page == Page::Admin),
            container(content).height(Length::Fill),
            status_bar,
        ]
        .into()
    }

    /// Drive the carousel offsets while any strip is running
    fn subscription(&self) -> Subscription<Message> {
        if self.portfolio.is_animating() || self.material_catalog.is_animating() {
            iced::time::every(Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme::theme()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("starting taller-gallery");

    iced::application(
        "Taller de Melamina",
        TallerGallery::update,
        TallerGallery::view,
    )
    .subscription(TallerGallery::subscription)
    .theme(TallerGallery::theme)
    .centered()
    .run_with(TallerGallery::new)
}

fn fetch_catalog_task(api: PortfolioApi) -> Task<Message> {
    Task::perform(
        async move { api.fetch_catalog().await.map_err(|e| e.to_string()) },
        Message::CatalogLoaded,
    )
}

/// Read a picked image from disk in the background
async fn read_image_file(path: PathBuf) -> Result<PickedImage, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "imagen".to_string());
    Ok(PickedImage { file_name, bytes })
}

/// Upload the image (if any) and then create or update the entry.
///
/// The upload goes first on purpose: a project must never be saved
/// referencing an image that failed to publish. On edits without a new
/// image the payload omits `image_url`, keeping the stored one.
async fn save_project(
    api: PortfolioApi,
    host: Option<ImageHost>,
    editing: Option<String>,
    title: String,
    description: String,
    category_id: Option<String>,
    image: Option<PickedImage>,
) -> Result<(), String> {
    let image_url = match image {
        Some(picked) => {
            let host = host.ok_or_else(|| UploadError::NotConfigured.to_string())?;
            let url = host
                .upload(picked.file_name, picked.bytes)
                .await
                .map_err(|e| e.to_string())?;
            Some(url)
        }
        None => None,
    };

    let payload = ProjectPayload {
        title,
        description,
        image_url,
        category_id,
    };

    let result = match editing {
        Some(id) => api.update_project(&id, payload).await,
        None => api.create_project(payload).await,
    };
    result.map_err(|e| e.to_string())
}
