//! Editor Shell
//!
//! The iced application hosting the note: text area, file menu, file
//! dialog, error message and the hooks that pin and place the window.

use iced::widget::{button, column, container, row, text, text_editor, text_input};
use iced::{
    event, executor, keyboard, window, Application, Command, Element, Event, Font, Length,
    Settings, Size, Subscription, Theme,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::editor::{
    DialogKind, Document, FileCommand, FileDialog, FileError, Modifiers, SaveOutcome, TextFormat,
};
use crate::placement::{NativeWindow, PlacementProvider};

/// Start-up state handed to the application
pub struct Flags {
    pub config: Config,
    pub placement: Box<dyn PlacementProvider>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Native handle of the main window, fetched once at start-up
    WindowHandle(Option<NativeWindow>),
    /// The window gained focus
    EnteredForeground,
    Edit(text_editor::Action),
    File(FileCommand),
    DialogInput(String),
    DialogConfirm,
    DialogCancel,
    DismissError,
}

/// Application state, owned by the iced runtime
pub struct Stinote {
    config: Config,
    placement: Box<dyn PlacementProvider>,
    native: Option<NativeWindow>,
    document: Document,
    content: text_editor::Content,
    format: TextFormat,
    dialog: Option<FileDialog>,
    error: Option<String>,
    /// Focus arrived before the native handle
    pending_foreground: bool,
}

/// Run the editor until its window is closed
pub fn run(config: Config, placement: Box<dyn PlacementProvider>) -> iced::Result {
    let window = window::Settings {
        size: Size::new(config.window.width as f32, config.window.height as f32),
        decorations: false,
        ..window::Settings::default()
    };

    Stinote::run(Settings {
        window,
        ..Settings::with_flags(Flags { config, placement })
    })
}

impl Stinote {
    pub fn with_parts(config: Config, placement: Box<dyn PlacementProvider>) -> Self {
        Self {
            config,
            placement,
            native: None,
            document: Document::new(),
            content: text_editor::Content::new(),
            format: TextFormat::default(),
            dialog: None,
            error: None,
            pending_foreground: false,
        }
    }

    /// Pin the window above others, then park it in the top-right corner.
    ///
    /// Deferred until the native handle is known.
    fn enter_foreground(&mut self) {
        let Some(window) = self.native else {
            debug!("Native window handle not known yet, deferring placement");
            self.pending_foreground = true;
            return;
        };
        self.pending_foreground = false;

        if self.config.placement.always_on_top {
            if let Err(e) = self.placement.set_always_on_top(window) {
                warn!("Failed to set window always on top: {}", e);
            }
        }
        self.place(self.config.window.width);
    }

    fn place(&self, width: u32) {
        let Some(window) = self.native else {
            debug!("Native window handle not known yet, skipping placement");
            return;
        };

        if let Err(e) = self.placement.place_top_right(window, width) {
            warn!("Failed to move window to the top-right corner: {}", e);
        }
    }

    fn run_file_command(&mut self, command: FileCommand) -> Command<Message> {
        if self.dialog.is_some() || self.error.is_some() {
            debug!("Ignoring {:?} while a dialog is showing", command);
            return Command::none();
        }

        match command {
            FileCommand::Open => self.open_dialog(DialogKind::Open),
            FileCommand::SaveAs => self.open_dialog(DialogKind::SaveAs),
            FileCommand::Save => match self.document.save() {
                Ok(SaveOutcome::Saved(_)) => Command::none(),
                Ok(SaveOutcome::NeedsPath) => self.open_dialog(DialogKind::SaveAs),
                Err(e) => {
                    self.report(e);
                    Command::none()
                }
            },
        }
    }

    /// Grow the window to dialog size. It is moved with the dialog width
    /// first so the larger window does not spill past the monitor's right
    /// edge.
    fn open_dialog(&mut self, kind: DialogKind) -> Command<Message> {
        self.dialog = Some(FileDialog::new(kind, self.document.file_name()));

        let dialog = self.config.dialog;
        self.place(dialog.width);
        window::resize(
            window::Id::MAIN,
            Size::new(dialog.width as f32, dialog.height as f32),
        )
    }

    fn close_dialog(&mut self) -> Command<Message> {
        self.dialog = None;

        let note = self.config.window;
        self.place(note.width);
        window::resize(
            window::Id::MAIN,
            Size::new(note.width as f32, note.height as f32),
        )
    }

    fn confirm_dialog(&mut self) -> Command<Message> {
        let Some(dialog) = &self.dialog else {
            return Command::none();
        };
        let kind = dialog.kind;
        let Some(path) = dialog.selection() else {
            return Command::none();
        };

        let result = match kind {
            DialogKind::Open => self.document.open(&path),
            DialogKind::SaveAs => self.document.save_as(&path),
        };
        match result {
            Ok(()) if kind == DialogKind::Open => self.load_content(),
            Ok(()) => {}
            Err(e) => self.report(e),
        }

        self.close_dialog()
    }

    /// Show the document text in the editor widget
    fn load_content(&mut self) {
        let (mut format, loaded) = TextFormat::detect(self.document.text());
        self.content = text_editor::Content::with_text(&loaded);
        format.settle(&loaded, &widget_text(&self.content));
        debug!("Loaded text as {:?}", format);
        self.format = format;
    }

    fn report(&mut self, error: FileError) {
        warn!("{}", error);
        self.error = Some(error.to_string());
    }
}

impl Application for Stinote {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Flags;

    fn new(flags: Flags) -> (Self, Command<Message>) {
        let app = Self::with_parts(flags.config, flags.placement);
        let handle = window::run_with_handle(window::Id::MAIN, |handle| {
            Message::WindowHandle(NativeWindow::from_raw(handle.as_raw()))
        });
        (app, handle)
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::WindowHandle(native) => {
                match native {
                    Some(window) => info!("Native window id {:#x}", window.0),
                    None => info!("Window is not an X11 window, placement unavailable"),
                }
                self.native = native;
                if self.native.is_some() && self.pending_foreground {
                    self.enter_foreground();
                }
                Command::none()
            }
            Message::EnteredForeground => {
                self.enter_foreground();
                Command::none()
            }
            Message::Edit(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action);
                if is_edit {
                    let text = self.format.from_widget(&widget_text(&self.content));
                    self.document.set_text(text);
                }
                Command::none()
            }
            Message::File(command) => self.run_file_command(command),
            Message::DialogInput(path) => {
                if let Some(dialog) = &mut self.dialog {
                    dialog.path = path;
                }
                Command::none()
            }
            Message::DialogConfirm => self.confirm_dialog(),
            Message::DialogCancel => self.close_dialog(),
            Message::DismissError => {
                self.error = None;
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = if let Some(error) = &self.error {
            column![
                text(error),
                button(text("OK")).on_press(Message::DismissError),
            ]
            .spacing(8)
            .into()
        } else if let Some(dialog) = &self.dialog {
            column![
                text(dialog.kind.prompt()),
                text_input("/path/to/note.txt", &dialog.path)
                    .on_input(Message::DialogInput)
                    .on_submit(Message::DialogConfirm),
                row![
                    button(text("Cancel")).on_press(Message::DialogCancel),
                    button(text(dialog.kind.confirm_label())).on_press(Message::DialogConfirm),
                ]
                .spacing(8),
            ]
            .spacing(8)
            .into()
        } else {
            let font = if self.config.editor.monospace {
                Font::MONOSPACE
            } else {
                Font::DEFAULT
            };
            let menu = row![
                menu_button("Open", FileCommand::Open),
                menu_button("Save", FileCommand::Save),
                menu_button("Save As", FileCommand::SaveAs),
            ]
            .spacing(4);
            let editor = text_editor(&self.content)
                .on_action(Message::Edit)
                .font(font)
                .height(Length::Fill);

            column![menu, editor].spacing(4).into()
        };

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(4)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(handle_event)
    }
}

fn menu_button(label: &'static str, command: FileCommand) -> Element<'static, Message> {
    button(text(label).size(12))
        .padding([2, 8])
        .on_press(Message::File(command))
        .into()
}

/// The editor buffer as shown: its lines joined with `\n`
fn widget_text(content: &text_editor::Content) -> String {
    content
        .lines()
        .map(|line| (*line).to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

fn handle_event(event: Event, _status: event::Status) -> Option<Message> {
    match event {
        Event::Window(_, window::Event::Focused) => Some(Message::EnteredForeground),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            shortcut(&key, modifiers).map(Message::File)
        }
        _ => None,
    }
}

fn shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<FileCommand> {
    let keyboard::Key::Character(c) = key else {
        return None;
    };
    let modifiers = Modifiers {
        control: modifiers.control(),
        shift: modifiers.shift(),
        alt: modifiers.alt(),
        logo: modifiers.logo(),
    };
    FileCommand::from_key(c.as_str(), modifiers)
}
