// SPDX-License-Identifier: MPL-2.0
//! Application root state and the iced update loop.
//!
//! The `App` struct owns the single viewing session ([`ImageNavigator`]), the
//! display state and the status line, and translates messages (menu clicks,
//! dialog results, wheel events) into navigator calls. Every navigator call
//! runs synchronously inside `update`; only the native file dialog is awaited
//! through a task.

mod message;
mod subscription;
mod view;

pub use message::Message;
pub use subscription::{is_open_shortcut, is_scroll_up};

use crate::config::{Config, DEFAULT_WINDOW_POSITION, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::directory_scanner::{DirectoryLister, FsDirectoryLister, IMAGE_EXTENSIONS};
use crate::image_navigation::{ImageNavigator, OpenOutcome};
use crate::ui::{menu_bar, theme, viewer};
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Window title.
pub const APP_TITLE: &str = "One Dark Image Viewer";

/// Root Iced application state.
pub struct App {
    navigator: ImageNavigator,
    lister: Box<dyn DirectoryLister>,
    viewer: viewer::State,
    /// Status line text; `None` until the first open attempt.
    status: Option<String>,
    menu_open: bool,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("navigator", &self.navigator)
            .field("status", &self.status)
            .field("viewer_has_image", &self.viewer.has_image())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_lister(Box::new(FsDirectoryLister))
    }
}

/// Builds the window settings from the configuration.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();
    let (x, y) = DEFAULT_WINDOW_POSITION;

    window::Settings {
        size: iced::Size::new(width, height),
        position: window::Position::Specific(Point::new(x, y)),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(config: Config) -> iced::Result {
    let settings = window_settings(&config);

    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates an empty session that lists directories through `lister`.
    pub fn with_lister(lister: Box<dyn DirectoryLister>) -> Self {
        Self {
            navigator: ImageNavigator::new(),
            lister,
            viewer: viewer::State::new(),
            status: None,
            menu_open: false,
            theme: theme::one_dark(),
        }
    }

    /// Starts with an empty session; no command-line arguments are read.
    fn boot() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MenuBar(menu_message) => {
                match menu_bar::update(menu_message, &mut self.menu_open) {
                    menu_bar::Event::OpenImage => self.open_file_dialog(),
                    menu_bar::Event::None => Task::none(),
                }
            }
            Message::OpenShortcut => {
                self.menu_open = false;
                self.open_file_dialog()
            }
            Message::OpenFileDialogResult(path) => {
                match path {
                    Some(path) => self.open_image(&path),
                    // User cancelled the dialog
                    None => debug!(event = "dialog.cancelled"),
                }
                Task::none()
            }
            Message::WheelScrolled(delta) => {
                if is_scroll_up(delta) {
                    self.navigate_previous();
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            viewer: &self.viewer,
            status: self.status.as_deref(),
            menu_open: self.menu_open,
        })
    }

    /// Opens `path` through the navigator and updates display and status.
    pub fn open_image(&mut self, path: &Path) {
        let outcome = self.navigator.open(path, self.lister.as_ref());
        self.apply_outcome(outcome);
    }

    /// Steps to the previous image; a no-op when nothing is loaded.
    pub fn navigate_previous(&mut self) {
        if let Some(outcome) = self.navigator.navigate_previous(self.lister.as_ref()) {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: OpenOutcome) {
        if let OpenOutcome::Opened { path, .. } = &outcome {
            self.viewer.show(path);
        }
        self.status = Some(outcome.status_text());
    }

    /// Shows the native file dialog, starting in the current image's directory.
    fn open_file_dialog(&self) -> Task<Message> {
        let start_directory = self.navigator.current_directory().map(Path::to_path_buf);

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title("Open Image")
                    .add_filter("Image Files", &IMAGE_EXTENSIONS);

                if let Some(dir) = start_directory {
                    if dir.exists() {
                        dialog = dialog.set_directory(&dir);
                    }
                }

                dialog
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::OpenFileDialogResult,
        )
    }

    pub fn navigator(&self) -> &ImageNavigator {
        &self.navigator
    }

    pub fn viewer(&self) -> &viewer::State {
        &self.viewer
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Path of the displayed image, if any.
    pub fn current_image_path(&self) -> Option<PathBuf> {
        self.navigator.current_image_path().map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_navigation::{NavigatorState, NOT_IN_LIST_MESSAGE};
    use crate::paths;
    use crate::ui::viewer::Display;
    use iced::mouse::ScrollDelta;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn create_png(dir: &Path, name: &str, width: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, 1, Rgba([200, 100, 50, 255]))
            .save_with_format(&path, image_rs::ImageFormat::Png)
            .expect("failed to write png");
        paths::absolutize(&path).expect("failed to absolutize")
    }

    fn displayed_width(app: &App) -> Option<u32> {
        match app.viewer().display() {
            Display::Image(data) => Some(data.width),
            _ => None,
        }
    }

    const WHEEL_UP: ScrollDelta = ScrollDelta::Lines { x: 0.0, y: 1.0 };
    const WHEEL_DOWN: ScrollDelta = ScrollDelta::Lines { x: 0.0, y: -1.0 };

    #[test]
    fn app_starts_blank() {
        let app = App::default();
        assert_eq!(app.status_text(), None);
        assert!(!app.viewer().has_image());
        assert_eq!(app.navigator().state(), NavigatorState::NoImageOpen);
        assert_eq!(app.title(), APP_TITLE);
    }

    #[test]
    fn dialog_result_opens_image_and_sets_status() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_png(temp_dir.path(), "img1.png", 1);
        let img2 = create_png(temp_dir.path(), "img2.png", 2);
        create_png(temp_dir.path(), "img10.png", 10);

        let mut app = App::default();
        let _ = app.update(Message::OpenFileDialogResult(Some(img2.clone())));

        assert_eq!(app.current_image_path(), Some(img2));
        assert_eq!(displayed_width(&app), Some(2));
        assert_eq!(
            app.status_text(),
            Some("Image 2 of 3 in directory (Sorted naturally)")
        );
    }

    #[test]
    fn cancelled_dialog_leaves_everything_untouched() {
        let mut app = App::default();
        let _ = app.update(Message::OpenFileDialogResult(None));

        assert_eq!(app.status_text(), None);
        assert!(matches!(app.viewer().display(), Display::Blank));
        assert_eq!(app.navigator().state(), NavigatorState::NoImageOpen);
    }

    #[test]
    fn cancelled_dialog_with_image_open_changes_nothing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_png(temp_dir.path(), "img1.png", 1);
        let img2 = create_png(temp_dir.path(), "img2.png", 2);

        let mut app = App::default();
        app.open_image(&img2);
        let navigator_before = app.navigator().clone();
        let status_before = app.status_text().map(str::to_owned);

        let _ = app.update(Message::OpenShortcut);
        let _ = app.update(Message::OpenFileDialogResult(None));

        assert_eq!(app.navigator(), &navigator_before);
        assert_eq!(app.status_text().map(str::to_owned), status_before);
        assert_eq!(app.current_image_path(), Some(img2));
        assert_eq!(displayed_width(&app), Some(2));
        assert!(!app.is_menu_open());
    }

    #[test]
    fn not_in_list_open_refreshes_list_but_keeps_current_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_png(temp_dir.path(), "img1.png", 1);
        let img2 = create_png(temp_dir.path(), "img2.png", 2);

        let mut app = App::default();
        app.open_image(&img1);
        assert_eq!(app.navigator().current_index(), Some(0));

        // Added after the last scan, sorts before the current image.
        let img0 = create_png(temp_dir.path(), "img0.png", 5);
        let notes = temp_dir.path().join("notes.txt");
        fs::write(&notes, "hello").expect("failed to write notes");

        let _ = app.update(Message::OpenFileDialogResult(Some(notes)));

        // Changed: the list reflects the directory, and the index follows the
        // current image to its new position.
        assert_eq!(
            app.navigator().image_files(),
            &[img0.clone(), img1.clone(), img2]
        );
        assert_eq!(app.navigator().current_index(), Some(1));
        assert_eq!(app.status_text(), Some(NOT_IN_LIST_MESSAGE));

        // Unchanged: the current image and what is displayed.
        assert_eq!(app.current_image_path(), Some(img1));
        assert_eq!(displayed_width(&app), Some(1));
        assert_eq!(app.navigator().state(), NavigatorState::ImageOpen);

        // The next wheel step lands on the newly added image.
        let _ = app.update(Message::WheelScrolled(WHEEL_UP));
        assert_eq!(app.current_image_path(), Some(img0));
        assert_eq!(displayed_width(&app), Some(5));
        assert_eq!(
            app.status_text(),
            Some("Image 1 of 3 in directory (Sorted naturally)")
        );
    }

    #[test]
    fn wheel_up_steps_to_previous_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_png(temp_dir.path(), "img1.png", 1);
        let img2 = create_png(temp_dir.path(), "img2.png", 2);

        let mut app = App::default();
        app.open_image(&img2);
        let _ = app.update(Message::WheelScrolled(WHEEL_UP));

        assert_eq!(app.current_image_path(), Some(img1));
        assert_eq!(displayed_width(&app), Some(1));
        assert_eq!(
            app.status_text(),
            Some("Image 1 of 2 in directory (Sorted naturally)")
        );
    }

    #[test]
    fn wheel_down_does_nothing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_png(temp_dir.path(), "img1.png", 1);
        let img2 = create_png(temp_dir.path(), "img2.png", 2);

        let mut app = App::default();
        app.open_image(&img2);
        let _ = app.update(Message::WheelScrolled(WHEEL_DOWN));

        assert_eq!(app.current_image_path(), Some(img2));
    }

    #[test]
    fn wheel_without_images_is_noop() {
        let mut app = App::default();
        let _ = app.update(Message::WheelScrolled(WHEEL_UP));

        assert_eq!(app.status_text(), None);
        assert_eq!(app.navigator().state(), NavigatorState::NoImageOpen);
    }

    #[test]
    fn opening_unrecognized_file_keeps_displayed_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img = create_png(temp_dir.path(), "photo.png", 3);
        let notes = temp_dir.path().join("notes.txt");
        fs::write(&notes, "hello").expect("failed to write notes");

        let mut app = App::default();
        app.open_image(&img);
        let _ = app.update(Message::OpenFileDialogResult(Some(notes)));

        assert_eq!(app.status_text(), Some(NOT_IN_LIST_MESSAGE));
        assert_eq!(app.current_image_path(), Some(img));
        assert_eq!(displayed_width(&app), Some(3));
    }

    #[test]
    fn undecodable_image_still_counts_in_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_png(temp_dir.path(), "a.png", 1);
        let broken = temp_dir.path().join("b.png");
        fs::write(&broken, b"not really a png").expect("failed to write broken file");

        let mut app = App::default();
        app.open_image(&broken);

        assert!(matches!(app.viewer().display(), Display::DecodeFailed));
        assert_eq!(
            app.status_text(),
            Some("Image 2 of 2 in directory (Sorted naturally)")
        );
    }

    #[test]
    fn menu_toggle_and_open_shortcut_close_menu() {
        let mut app = App::default();
        let _ = app.update(Message::MenuBar(menu_bar::Message::ToggleMenu));
        assert!(app.is_menu_open());

        let _ = app.update(Message::OpenShortcut);
        assert!(!app.is_menu_open());
    }

    #[test]
    fn window_settings_use_configured_size() {
        let mut config = Config::default();
        config.window.width = 1280;
        config.window.height = 720;

        let settings = window_settings(&config);
        assert_eq!(settings.size, iced::Size::new(1280.0, 720.0));
    }
}
