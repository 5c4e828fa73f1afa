use std::sync::Arc;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task, Theme};
use lucide_icons::iced::{
    icon_brain_circuit, icon_chart_column, icon_layout_dashboard, icon_panel_left_close,
    icon_panel_left_open, icon_plane,
};

use crate::config::ViewerConfig;
use crate::data::DatasetRegistry;
use crate::error::ViewerError;
use crate::message::Message;
use crate::reports::{RenderedPage, ReportRenderer};
use crate::router::{ReportView, ViewRouter};
use crate::theme::{
    accent_button_style, nav_button_style, ACCENT, DRAWER_BG, DRAWER_TEXT_ACTIVE,
    DRAWER_TEXT_INACTIVE,
};

/// The window shell: navigation sidebar plus the active report.
pub struct App {
    theme: Theme,
    registry: Arc<DatasetRegistry>,
    renderer: ReportRenderer,
    router: ViewRouter,
    page: Result<RenderedPage, ViewerError>,
    sidebar_collapsed: bool,
}

impl App {
    pub fn new(registry: Arc<DatasetRegistry>, config: ViewerConfig) -> (Self, Task<Message>) {
        let renderer = ReportRenderer::from_config(&config);
        let router = ViewRouter::new(config.initial_view);
        let page = render_page(&renderer, router.active(), &registry);
        (
            Self {
                theme: Theme::Dark,
                registry,
                renderer,
                router,
                page,
                sidebar_collapsed: config.sidebar_collapsed,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::Navigate(view) => {
                if self.router.select(view).is_some() {
                    self.page = render_page(&self.renderer, view, &self.registry);
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self) -> Element<'a, Message> {
        let sidebar = self.sidebar_view();
        let content = crate::screens::reports::view(&self.page);

        row![sidebar, content].height(Length::Fill).into()
    }

    pub fn title(&self) -> String {
        format!("Airline Intel - {}", self.router.active().label())
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn active_view(&self) -> ReportView {
        self.router.active()
    }

    pub fn page(&self) -> &Result<RenderedPage, ViewerError> {
        &self.page
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    fn sidebar_view<'a>(&'a self) -> Element<'a, Message> {
        let toggle_icon = if self.sidebar_collapsed {
            icon_panel_left_open()
        } else {
            icon_panel_left_close()
        };

        let toggle = button(toggle_icon.size(18))
            .on_press(Message::ToggleSidebar)
            .style(accent_button_style);

        let brand_icon = icon_plane().size(24).style(|_| text::Style {
            color: Some(ACCENT),
        });
        let brand: Element<'a, Message> = if self.sidebar_collapsed {
            brand_icon.into()
        } else {
            row![brand_icon, text("Airline Intel").size(20)]
                .spacing(8)
                .align_y(Alignment::Center)
                .into()
        };

        let pages = ReportView::ALL
            .into_iter()
            .map(|view| self.sidebar_button(view));

        let content = column![toggle, brand, Space::new().height(Length::Fixed(12.0))]
            .push(column(pages).spacing(6))
            .spacing(12)
            .padding(12)
            .width(if self.sidebar_collapsed {
                Length::Fixed(64.0)
            } else {
                Length::Fixed(240.0)
            })
            .height(Length::Fill);

        container(content)
            .style(|_| iced::widget::container::background(DRAWER_BG))
            .into()
    }

    fn sidebar_button<'a>(&'a self, view: ReportView) -> Element<'a, Message> {
        let selected = self.router.is_active(view);
        let foreground = if selected {
            DRAWER_TEXT_ACTIVE
        } else {
            DRAWER_TEXT_INACTIVE
        };
        let icon = match view {
            ReportView::Dashboard => icon_layout_dashboard(),
            ReportView::ExploratoryAnalysis => icon_chart_column(),
            ReportView::ModelAnalysis => icon_brain_circuit(),
        }
        .size(18)
        .style(move |_| text::Style {
            color: Some(foreground),
        });

        let row_content = if self.sidebar_collapsed {
            row![
                Space::new().width(Length::Fill),
                icon,
                Space::new().width(Length::Fill)
            ]
            .align_y(Alignment::Center)
        } else {
            let label = text(view.label()).style(move |_| text::Style {
                color: Some(foreground),
            });
            row![icon, label].spacing(12).align_y(Alignment::Center)
        };

        button(row_content)
            .on_press(Message::Navigate(view))
            .width(Length::Fill)
            .style(nav_button_style(selected))
            .padding(8)
            .into()
    }
}

fn render_page(
    renderer: &ReportRenderer,
    view: ReportView,
    registry: &DatasetRegistry,
) -> Result<RenderedPage, ViewerError> {
    let page = renderer.render(view, registry);
    if let Err(err) = &page {
        tracing::error!(view = view.label(), "report failed to render: {err}");
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::airline;

    fn launch(config: ViewerConfig) -> App {
        let registry = Arc::new(airline::registry().unwrap());
        App::new(registry, config).0
    }

    #[test]
    fn opens_on_configured_view() {
        let app = launch(ViewerConfig::default());
        assert_eq!(app.active_view(), ReportView::Dashboard);
        assert_eq!(app.page().as_ref().unwrap().view, ReportView::Dashboard);

        let app = launch(ViewerConfig::default().with_initial_view(ReportView::ModelAnalysis));
        assert_eq!(app.page().as_ref().unwrap().view, ReportView::ModelAnalysis);
    }

    #[test]
    fn navigation_rerenders_the_content_area() {
        let mut app = launch(ViewerConfig::default());
        let _ = app.update(Message::Navigate(ReportView::ExploratoryAnalysis));

        assert_eq!(app.active_view(), ReportView::ExploratoryAnalysis);
        let page = app.page().as_ref().unwrap();
        assert_eq!(page.view, ReportView::ExploratoryAnalysis);
        assert_eq!(app.title(), "Airline Intel - Exploratory Analysis");
    }

    #[test]
    fn reselecting_keeps_the_same_page() {
        let mut app = launch(ViewerConfig::default());
        let before = app.page().clone();
        let _ = app.update(Message::Navigate(ReportView::Dashboard));
        assert_eq!(app.page(), &before);
    }

    #[test]
    fn sidebar_toggle_does_not_touch_the_router() {
        let mut app = launch(ViewerConfig::default());
        let _ = app.update(Message::ToggleSidebar);
        assert!(app.sidebar_collapsed());
        assert_eq!(app.active_view(), ReportView::Dashboard);
        let _ = app.update(Message::ToggleSidebar);
        assert!(!app.sidebar_collapsed());
    }

    #[test]
    fn missing_bundles_surface_as_an_error_page() {
        let registry = Arc::new(DatasetRegistry::new());
        let (app, _) = App::new(registry, ViewerConfig::default());
        assert!(matches!(app.page(), Err(ViewerError::NotFound { .. })));
    }
}
